//! Banner registry service
//!
//! Provides unified business logic for banner operations: listing,
//! storefront config resolution, upsert, pause/resume and delete.
//! The non-overlap rule lives here: at most one active banner of a given
//! type per page.
//!
//! The collision check is read-then-write; two concurrent admin requests
//! can both pass it. Accepted gap, coordination is delegated to the store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{BannerdError, Result};
use crate::services::eligibility;
use crate::storage::{
    Banner, BannerContent, BannerSchedule, BannerStats, BannerStatus, BannerType, SeaOrmStorage,
};

// ============ Request DTOs ============

/// Input to `upsert`: a banner as the dashboard submits it.
/// An existing `id` means update-in-place; no `id` means create.
/// Counters are never taken from the caller.
#[derive(Debug, Clone)]
pub struct BannerDraft {
    pub id: Option<String>,
    pub name: String,
    pub banner_type: BannerType,
    pub status: BannerStatus,
    pub pages: Vec<String>,
    pub content: BannerContent,
    pub schedule: BannerSchedule,
}

// ============ BannerService Implementation ============

/// Service for banner management operations
pub struct BannerService {
    storage: Arc<SeaOrmStorage>,
}

impl BannerService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// All banners, newest first. No pagination.
    pub async fn list(&self) -> Result<Vec<Banner>> {
        self.storage.load_all().await
    }

    /// Banners the storefront snippet should render for `path` at `now`
    pub async fn get_config(&self, path: &str, now: DateTime<Utc>) -> Result<Vec<Banner>> {
        let active = self.storage.load_active().await?;
        Ok(eligibility::filter_eligible(active, path, now))
    }

    /// Create or update a banner
    ///
    /// An active draft is first checked against every other active banner of
    /// the same type; a shared page rejects the write with a conflict.
    pub async fn upsert(&self, draft: BannerDraft) -> Result<Banner> {
        if draft.status == BannerStatus::Active {
            if let Some(conflicting) = self
                .storage
                .find_collision(draft.banner_type, &draft.pages, draft.id.as_deref())
                .await?
            {
                warn!(
                    "BannerService: upsert rejected, overlaps with '{}'",
                    conflicting.id
                );
                return Err(BannerdError::conflict(format!(
                    "Active {} banner already exists on this page.",
                    draft.banner_type
                )));
            }
        }

        let (id, is_new) = match draft.id {
            Some(id) => (id, false),
            None => (Uuid::new_v4().to_string(), true),
        };

        let now = Utc::now();
        let record = Banner {
            id: id.clone(),
            name: draft.name,
            banner_type: draft.banner_type,
            status: draft.status,
            pages: draft.pages,
            content: draft.content,
            schedule: draft.schedule,
            // 新建时计数器从零开始；更新路径下存储层保持原值
            stats: BannerStats::default(),
            created_at: now,
            updated_at: now,
        };

        self.storage.upsert(&record).await?;

        // 返回存储后的完整记录（更新时带回原有 stats/created_at）
        let stored = self.storage.get(&id).await?.ok_or_else(|| {
            BannerdError::database_operation(format!("Banner '{}' missing after upsert", id))
        })?;

        let action = if is_new { "created" } else { "updated" };
        info!("BannerService: {} banner '{}' ({})", action, stored.name, id);
        Ok(stored)
    }

    /// Pause or resume a banner
    ///
    /// Resuming runs the same collision check as `upsert`, scoped to the
    /// stored banner's own type and pages; on conflict the status is left
    /// unchanged.
    pub async fn set_status(&self, id: &str, status: BannerStatus) -> Result<()> {
        let banner = self
            .storage
            .get(id)
            .await?
            .ok_or_else(|| BannerdError::not_found(format!("Banner not found: {}", id)))?;

        if status == BannerStatus::Active {
            if let Some(conflicting) = self
                .storage
                .find_collision(banner.banner_type, &banner.pages, Some(id))
                .await?
            {
                warn!(
                    "BannerService: resume of '{}' rejected, overlaps with '{}'",
                    id, conflicting.id
                );
                return Err(BannerdError::conflict(
                    "Cannot resume: an active banner overlaps with this one.".to_string(),
                ));
            }
        }

        self.storage
            .set_status(id, status.as_str(), Utc::now())
            .await?;

        info!("BannerService: banner '{}' set to {}", id, status);
        Ok(())
    }

    /// Hard delete. Succeeds even when the id does not exist; referencing
    /// analytic events are left orphaned.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.storage.remove(id).await?;
        info!("BannerService: deleted '{}'", id);
        Ok(())
    }
}
