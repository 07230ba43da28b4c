//! Tracking service
//!
//! Records one view or click occurrence: a fast atomic counter bump on the
//! banner row plus one append to the raw event log. The two writes are not
//! transactional; the counter is the fast path, the log is best-effort
//! deep-dive data.

use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::errors::{BannerdError, Result};
use crate::storage::{NewAnalyticEvent, SeaOrmStorage, TrackKind};

pub struct TrackingService {
    storage: Arc<SeaOrmStorage>,
}

impl TrackingService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Record a tracking occurrence for `banner_id`
    ///
    /// `kind` uses the request-facing plural vocabulary ("views"/"clicks");
    /// anything else is rejected without a write. An unknown banner id leaves
    /// the counter step a silent no-op but still logs the raw event.
    pub async fn record(
        &self,
        banner_id: &str,
        kind: &str,
        meta: Option<serde_json::Value>,
    ) -> Result<()> {
        let kind = TrackKind::from_str(kind).map_err(BannerdError::validation)?;

        // Step 1: 原子递增聚合计数，Dashboard 读统计不需要扫事件日志
        let rows = self.storage.increment_stat(banner_id, kind).await?;
        if rows == 0 {
            debug!(
                "Tracking: banner '{}' not found, counter untouched",
                banner_id
            );
        }

        // Step 2: 追加原始事件（与计数器无事务关联）
        // 事件日志用单数词汇：views -> view, clicks -> click
        let event = NewAnalyticEvent {
            banner_id: banner_id.to_string(),
            event_type: kind.event_type(),
            timestamp: Utc::now(),
            meta,
        };
        self.storage.append_event(&event).await?;

        info!(
            "Tracking: recorded {} for banner '{}'",
            kind.as_str(),
            banner_id
        );
        Ok(())
    }
}
