//! API 类型定义

use serde::{Deserialize, Serialize};

use crate::services::BannerDraft;
use crate::storage::{
    Banner, BannerContent, BannerSchedule, BannerStats, BannerStatus, BannerType,
};

/// Banner as the dashboard submits it. An `id` makes this an update,
/// otherwise a create. Unknown fields (e.g. caller-supplied stats) are
/// ignored.
#[derive(Deserialize, Clone, Debug)]
pub struct BannerPayload {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub banner_type: BannerType,
    #[serde(default)]
    pub status: BannerStatus,
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default)]
    pub content: BannerContent,
    #[serde(default)]
    pub schedule: BannerSchedule,
}

impl From<BannerPayload> for BannerDraft {
    fn from(payload: BannerPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            banner_type: payload.banner_type,
            status: payload.status,
            pages: payload.pages,
            content: payload.content,
            schedule: payload.schedule,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct StatusChangeRequest {
    pub status: BannerStatus,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TrackRequest {
    /// Request-facing plural vocabulary: "views" or "clicks"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GetConfigQuery {
    pub path: Option<String>,
}

/// Banner as serialized to the dashboard and the storefront snippet
/// (camelCase timestamps for frontend compatibility)
#[derive(Serialize, Clone, Debug)]
pub struct BannerResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub banner_type: BannerType,
    pub status: BannerStatus,
    pub pages: Vec<String>,
    pub content: BannerContent,
    pub schedule: BannerSchedule,
    pub stats: BannerStats,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<Banner> for BannerResponse {
    fn from(banner: Banner) -> Self {
        Self {
            id: banner.id,
            name: banner.name,
            banner_type: banner.banner_type,
            status: banner.status,
            pages: banner.pages,
            content: banner.content,
            schedule: banner.schedule,
            stats: banner.stats,
            created_at: banner.created_at.to_rfc3339(),
            updated_at: banner.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Serialize, Clone, Debug)]
pub struct UpsertResponse {
    pub success: bool,
    pub banner: BannerResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_defaults() {
        // 仅必填字段：status 默认 active，其余结构默认空
        let payload: BannerPayload =
            serde_json::from_str(r#"{"name":"Promo","type":"popup"}"#).unwrap();

        assert!(payload.id.is_none());
        assert_eq!(payload.status, BannerStatus::Active);
        assert!(payload.pages.is_empty());
        assert!(payload.content.text.is_none());
        assert!(payload.schedule.start.is_none());
    }

    #[test]
    fn test_payload_ignores_caller_supplied_stats() {
        // 创建时计数器强制归零，载荷里的 stats 字段被直接丢弃
        let payload: BannerPayload = serde_json::from_str(
            r#"{"name":"Promo","type":"side","stats":{"views":999,"clicks":999}}"#,
        )
        .unwrap();

        let draft: BannerDraft = payload.into();
        assert_eq!(draft.banner_type, BannerType::Side);
    }

    #[test]
    fn test_payload_rejects_unknown_type() {
        let result = serde_json::from_str::<BannerPayload>(r#"{"name":"X","type":"carousel"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_uses_camel_case_timestamps() {
        let banner = Banner {
            id: "b1".to_string(),
            name: "Promo".to_string(),
            banner_type: BannerType::Popup,
            status: BannerStatus::Active,
            pages: vec!["/".to_string()],
            content: BannerContent::default(),
            schedule: BannerSchedule::default(),
            stats: BannerStats::default(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let json = serde_json::to_value(BannerResponse::from(banner)).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json.get("type").unwrap(), "popup");
    }
}
