//! Tracking API：storefront snippet 上报曝光/点击

use std::sync::Arc;

use actix_web::{Responder, Result as ActixResult, web};
use tracing::{error, trace};

use crate::services::TrackingService;

use super::helpers::{error_from_bannerd, success_response};
use super::types::{SuccessResponse, TrackRequest};

/// 记录一次曝光或点击
///
/// body 里的 `type` 使用请求词汇（复数）："views" 或 "clicks"。
pub async fn track_event(
    id: web::Path<String>,
    body: web::Json<TrackRequest>,
    service: web::Data<Arc<TrackingService>>,
) -> ActixResult<impl Responder> {
    let body = body.into_inner();
    trace!("Track API: {} for banner '{}'", body.kind, id);

    match service.record(&id, &body.kind, body.meta).await {
        Ok(()) => Ok(success_response(SuccessResponse { success: true })),
        Err(e) => {
            error!("Track API: failed to record event for '{}': {}", id, e);
            Ok(error_from_bannerd(&e))
        }
    }
}
