//! Health check endpoint

use std::sync::Arc;

use actix_web::{Responder, Result as ActixResult, web};
use serde::Serialize;

use crate::storage::SeaOrmStorage;

use super::helpers::success_response;

/// 应用启动时间（用于计算 uptime）
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: i64,
    pub storage_backend: String,
}

/// 存活探针：返回服务状态、运行时长与存储后端类型
pub async fn health_check(
    app_start_time: web::Data<AppStartTime>,
    storage: web::Data<Arc<SeaOrmStorage>>,
) -> ActixResult<impl Responder> {
    let now = chrono::Utc::now();
    let uptime = (now - app_start_time.start_datetime).num_seconds();

    Ok(success_response(HealthResponse {
        status: "ok".to_string(),
        timestamp: now.to_rfc3339(),
        uptime,
        storage_backend: storage.backend_name().to_string(),
    }))
}
