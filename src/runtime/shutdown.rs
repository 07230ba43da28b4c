use sea_orm::DatabaseConnection;
use tokio::signal;
use tracing::{info, warn};

pub async fn listen_for_shutdown(db: &DatabaseConnection) {
    // 等待 Ctrl+C 信号
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, closing storage...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    // 关闭数据库连接池
    if let Err(e) = db.clone().close().await {
        warn!("Failed to close database connection: {}", e);
    }

    info!("Storage connection closed, shutting down...");
}
