//! Eligibility filter
//!
//! Pure selection over the active banner set: given a request path and the
//! current time, decide which banners the storefront snippet should render.
//! Deterministic; preserves input order.

use chrono::{DateTime, Utc};

use crate::storage::models::{ALL_PAGES, Banner, BannerStatus};

/// A banner is eligible when it is active, targets the requested path
/// (or carries the "ALL" sentinel), and `now` falls inside its schedule
/// window. An absent schedule bound is unbounded on that side.
pub fn is_eligible(banner: &Banner, path: &str, now: DateTime<Utc>) -> bool {
    if banner.status != BannerStatus::Active {
        return false;
    }

    if !banner.pages.iter().any(|p| p == path || p == ALL_PAGES) {
        return false;
    }

    if let Some(start) = banner.schedule.start
        && start > now
    {
        return false;
    }

    if let Some(end) = banner.schedule.end
        && end < now
    {
        return false;
    }

    true
}

pub fn filter_eligible(banners: Vec<Banner>, path: &str, now: DateTime<Utc>) -> Vec<Banner> {
    banners
        .into_iter()
        .filter(|b| is_eligible(b, path, now))
        .collect()
}
