//! Banner API：storefront config 与 dashboard CRUD

use std::sync::Arc;

use actix_web::{Responder, Result as ActixResult, web};
use tracing::{error, info, trace};

use crate::services::BannerService;

use super::helpers::{error_from_bannerd, success_response};
use super::types::{
    BannerPayload, BannerResponse, GetConfigQuery, StatusChangeRequest, SuccessResponse,
    UpsertResponse,
};

/// 获取当前请求上下文下可展示的 banner（storefront snippet 调用）
pub async fn get_banner_config(
    query: web::Query<GetConfigQuery>,
    service: web::Data<Arc<BannerService>>,
) -> ActixResult<impl Responder> {
    let path = query.path.as_deref().unwrap_or("/");
    let now = chrono::Utc::now();
    trace!("Banner API: config request for path '{}'", path);

    match service.get_config(path, now).await {
        Ok(banners) => {
            let response: Vec<BannerResponse> =
                banners.into_iter().map(BannerResponse::from).collect();
            trace!(
                "Banner API: {} eligible banner(s) for '{}'",
                response.len(),
                path
            );
            Ok(success_response(response))
        }
        Err(e) => {
            error!("Banner API: config request failed - {}", e);
            Ok(error_from_bannerd(&e))
        }
    }
}

/// 获取所有 banner（dashboard 列表，从新到旧）
pub async fn get_all_banners(
    service: web::Data<Arc<BannerService>>,
) -> ActixResult<impl Responder> {
    trace!("Banner API: request to list all banners");

    match service.list().await {
        Ok(banners) => {
            let response: Vec<BannerResponse> =
                banners.into_iter().map(BannerResponse::from).collect();
            info!("Banner API: returning {} banner(s)", response.len());
            Ok(success_response(response))
        }
        Err(e) => {
            error!("Banner API: list failed - {}", e);
            Ok(error_from_bannerd(&e))
        }
    }
}

/// 创建或更新 banner（载荷中带 id 即为更新）
pub async fn post_banner(
    payload: web::Json<BannerPayload>,
    service: web::Data<Arc<BannerService>>,
) -> ActixResult<impl Responder> {
    let payload = payload.into_inner();
    info!(
        "Banner API: upsert request - name: '{}', type: {}, id: {:?}",
        payload.name, payload.banner_type, payload.id
    );

    match service.upsert(payload.into()).await {
        Ok(banner) => Ok(success_response(UpsertResponse {
            success: true,
            banner: BannerResponse::from(banner),
        })),
        Err(e) => {
            error!("Banner API: upsert failed - {}", e);
            Ok(error_from_bannerd(&e))
        }
    }
}

/// 暂停 / 恢复
pub async fn set_banner_status(
    id: web::Path<String>,
    body: web::Json<StatusChangeRequest>,
    service: web::Data<Arc<BannerService>>,
) -> ActixResult<impl Responder> {
    let status = body.status;
    info!("Banner API: status change request - {} -> {}", id, status);

    match service.set_status(&id, status).await {
        Ok(()) => Ok(success_response(SuccessResponse { success: true })),
        Err(e) => {
            error!("Banner API: status change failed - {}: {}", id, e);
            Ok(error_from_bannerd(&e))
        }
    }
}

/// 删除 banner（幂等：id 不存在也返回成功）
pub async fn delete_banner(
    id: web::Path<String>,
    service: web::Data<Arc<BannerService>>,
) -> ActixResult<impl Responder> {
    info!("Banner API: delete request - {}", id);

    match service.delete(&id).await {
        Ok(()) => Ok(success_response(SuccessResponse { success: true })),
        Err(e) => {
            error!("Banner API: delete failed - {}: {}", id, e);
            Ok(error_from_bannerd(&e))
        }
    }
}
