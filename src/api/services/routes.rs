//! API 路由配置

use actix_web::web;

use super::banners::{
    delete_banner, get_all_banners, get_banner_config, post_banner, set_banner_status,
};
use super::health::health_check;
use super::tracking::track_event;

/// Banner 管理与投放路由 `/api/banners`
///
/// 包含：
/// - GET /api/banners/config - storefront snippet 拉取可展示的 banner
/// - GET /api/banners - dashboard 列表
/// - POST /api/banners - 创建或更新
/// - POST /api/banners/{id}/status - 暂停/恢复
/// - DELETE /api/banners/{id} - 删除
pub fn banner_routes() -> actix_web::Scope {
    web::scope("/api/banners")
        // /config must be before /{id}
        .route("/config", web::get().to(get_banner_config))
        .route("", web::get().to(get_all_banners))
        .route("", web::post().to(post_banner))
        .route("/{id}/status", web::post().to(set_banner_status))
        .route("/{id}", web::delete().to(delete_banner))
}

/// 打点路由 `/api/track`
pub fn track_routes() -> actix_web::Scope {
    web::scope("/api/track").route("/{id}", web::post().to(track_event))
}

/// 健康检查路由 `/health`
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health").route("", web::get().to(health_check))
}
