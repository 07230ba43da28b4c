use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::services::{BannerService, TrackingService};
use crate::storage::{
    Banner, BannerContent, BannerPosition, BannerSchedule, BannerStats, BannerStatus, BannerType,
    CtaButton, SeaOrmStorage, StorageFactory,
};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub banner_service: Arc<BannerService>,
    pub tracking_service: Arc<TrackingService>,
}

/// 准备服务器启动的上下文
/// 包括存储连接、种子数据和服务实例
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    // 空库时填充默认 banner；失败不阻塞启动
    if let Err(e) = seed_default_banner(&storage).await {
        warn!("Seeding skipped or failed: {}", e);
    }

    let banner_service = Arc::new(BannerService::new(storage.clone()));
    let tracking_service = Arc::new(TrackingService::new(storage.clone()));

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        storage,
        banner_service,
        tracking_service,
    })
}

/// 首次启动（banners 表为空）时写入一条默认欢迎弹窗
async fn seed_default_banner(storage: &Arc<SeaOrmStorage>) -> crate::errors::Result<()> {
    if storage.count().await? > 0 {
        return Ok(());
    }

    let now = Utc::now();
    let banner = Banner {
        id: Uuid::new_v4().to_string(),
        name: "Welcome Popup (Default)".to_string(),
        banner_type: BannerType::Popup,
        status: BannerStatus::Active,
        pages: vec!["/".to_string()],
        content: BannerContent {
            text: Some("Get 10% off your first order!".to_string()),
            font: Some("Inter, sans-serif".to_string()),
            bg_color: Some("#ffffff".to_string()),
            text_color: Some("#1e293b".to_string()),
            position: Some(BannerPosition::BottomRight),
            button: Some(CtaButton {
                enabled: true,
                text: Some("Subscribe".to_string()),
                link: Some("#".to_string()),
                color: Some("#000000".to_string()),
                text_color: Some("#ffffff".to_string()),
            }),
        },
        schedule: BannerSchedule {
            start: Some(now),
            end: Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 0).single(),
            timezone: Some("GMT+0".to_string()),
        },
        stats: BannerStats::default(),
        created_at: now,
        updated_at: now,
    };

    storage.upsert(&banner).await?;
    info!("Database seeded with default banner");
    Ok(())
}
