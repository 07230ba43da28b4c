use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel entry in `pages` that matches every path during eligibility
/// checks. In collision checks it is compared literally, like any other page.
pub const ALL_PAGES: &str = "ALL";

/// Banner placement kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerType {
    Popup,
    Side,
}

impl BannerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popup => "popup",
            Self::Side => "side",
        }
    }
}

impl std::fmt::Display for BannerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BannerType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popup" => Ok(Self::Popup),
            "side" => Ok(Self::Side),
            _ => Err(format!("Invalid banner type: '{}'. Valid: popup, side", s)),
        }
    }
}

/// Banner visibility state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BannerStatus {
    #[default]
    Active,
    Paused,
}

impl BannerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
        }
    }
}

impl std::fmt::Display for BannerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BannerStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            _ => Err(format!(
                "Invalid banner status: '{}'. Valid: active, paused",
                s
            )),
        }
    }
}

/// On-screen position of the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BannerPosition {
    TopRight,
    BottomRight,
}

/// Call-to-action button inside the banner content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CtaButton {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

/// Design and copy of the banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BannerContent {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub font: Option<String>,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub position: Option<BannerPosition>,
    #[serde(default)]
    pub button: Option<CtaButton>,
}

/// Display window. `timezone` is a display-only label; `start`/`end` are
/// compared in absolute time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BannerSchedule {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Aggregate counters kept on the banner itself, distinct from the raw
/// event log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BannerStats {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: String,
    pub name: String,
    pub banner_type: BannerType,
    pub status: BannerStatus,
    pub pages: Vec<String>,
    pub content: BannerContent,
    pub schedule: BannerSchedule,
    pub stats: BannerStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    /// Literal set intersection over `pages` (the "ALL" sentinel is compared
    /// as a plain string here)
    pub fn pages_overlap(&self, other_pages: &[String]) -> bool {
        self.pages.iter().any(|p| other_pages.contains(p))
    }
}

/// Request-facing tracking vocabulary (plural), mapped to the singular
/// event-log vocabulary on write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Views,
    Clicks,
}

impl TrackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Views => "views",
            Self::Clicks => "clicks",
        }
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Self::Views => EventType::View,
            Self::Clicks => EventType::Click,
        }
    }
}

impl std::str::FromStr for TrackKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "views" => Ok(Self::Views),
            "clicks" => Ok(Self::Clicks),
            _ => Err(format!(
                "Invalid tracking type: '{}'. Valid: views, clicks",
                s
            )),
        }
    }
}

/// Event-log vocabulary (singular)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    View,
    Click,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Click => "click",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One raw tracking occurrence to append to the event log
#[derive(Debug, Clone)]
pub struct NewAnalyticEvent {
    pub banner_id: String,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub meta: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_track_kind_parsing() {
        assert_eq!(TrackKind::from_str("views").unwrap(), TrackKind::Views);
        assert_eq!(TrackKind::from_str("clicks").unwrap(), TrackKind::Clicks);
        // 单数形式不属于请求词汇
        assert!(TrackKind::from_str("view").is_err());
        assert!(TrackKind::from_str("impressions").is_err());
    }

    #[test]
    fn test_track_kind_maps_to_singular_event_type() {
        assert_eq!(TrackKind::Views.event_type(), EventType::View);
        assert_eq!(TrackKind::Clicks.event_type(), EventType::Click);
    }

    #[test]
    fn test_banner_position_serializes_kebab_case() {
        let json = serde_json::to_string(&BannerPosition::BottomRight).unwrap();
        assert_eq!(json, "\"bottom-right\"");
    }

    #[test]
    fn test_pages_overlap_is_literal() {
        let banner = Banner {
            id: "b1".to_string(),
            name: "Sale".to_string(),
            banner_type: BannerType::Popup,
            status: BannerStatus::Active,
            pages: vec![ALL_PAGES.to_string()],
            content: BannerContent::default(),
            schedule: BannerSchedule::default(),
            stats: BannerStats::default(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        // "ALL" 在冲突检查中按字面值比较
        assert!(!banner.pages_overlap(&["/".to_string()]));
        assert!(banner.pages_overlap(&[ALL_PAGES.to_string()]));
    }
}
