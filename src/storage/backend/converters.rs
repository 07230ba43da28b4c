use std::str::FromStr;

use crate::errors::{BannerdError, Result};
use crate::storage::models::{Banner, BannerContent, BannerSchedule, BannerStats};
use migration::entities::banner;

/// 将 Sea-ORM Model 转换为 Banner
///
/// `pages` 和 `content` 列以 JSON 文本存储，这里解析回领域类型。
pub fn model_to_banner(model: banner::Model) -> Result<Banner> {
    let banner_type = crate::storage::BannerType::from_str(&model.banner_type)
        .map_err(BannerdError::serialization)?;
    let status =
        crate::storage::BannerStatus::from_str(&model.status).map_err(BannerdError::serialization)?;

    let pages: Vec<String> = serde_json::from_str(&model.pages)?;
    let content: BannerContent = serde_json::from_str(&model.content)?;

    Ok(Banner {
        id: model.id,
        name: model.name,
        banner_type,
        status,
        pages,
        content,
        schedule: BannerSchedule {
            start: model.schedule_start,
            end: model.schedule_end,
            timezone: model.schedule_timezone,
        },
        stats: BannerStats {
            views: model.views.max(0) as u64,
            clicks: model.clicks.max(0) as u64,
        },
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

/// 将 Banner 转换为 ActiveModel（用于插入/更新）
///
/// 所有列都会被设置；upsert 的 ON CONFLICT 列表决定更新时哪些列真正生效
/// （views/clicks/created_at 不在列表中，更新时保持原值）。
pub fn banner_to_active_model(banner: &Banner) -> Result<banner::ActiveModel> {
    use sea_orm::ActiveValue::Set;

    let pages = serde_json::to_string(&banner.pages)?;
    let content = serde_json::to_string(&banner.content)?;

    Ok(banner::ActiveModel {
        id: Set(banner.id.clone()),
        name: Set(banner.name.clone()),
        banner_type: Set(banner.banner_type.as_str().to_string()),
        status: Set(banner.status.as_str().to_string()),
        pages: Set(pages),
        content: Set(content),
        schedule_start: Set(banner.schedule.start),
        schedule_end: Set(banner.schedule.end),
        schedule_timezone: Set(banner.schedule.timezone.clone()),
        views: Set(banner.stats.views as i64),
        clicks: Set(banner.stats.clicks as i64),
        created_at: Set(banner.created_at),
        updated_at: Set(banner.updated_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::{BannerPosition, BannerStatus, BannerType, CtaButton};
    use chrono::{Duration, Utc};
    use sea_orm::ActiveValue;

    fn create_test_model() -> banner::Model {
        banner::Model {
            id: "c2f1a7e0-0000-4000-8000-000000000001".to_string(),
            name: "Summer Sale".to_string(),
            banner_type: "popup".to_string(),
            status: "active".to_string(),
            pages: r#"["/","/sale"]"#.to_string(),
            content: r#"{"text":"20% off","position":"bottom-right"}"#.to_string(),
            schedule_start: Some(Utc::now()),
            schedule_end: Some(Utc::now() + Duration::days(7)),
            schedule_timezone: Some("GMT+0".to_string()),
            views: 42,
            clicks: 7,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_test_banner() -> Banner {
        Banner {
            id: "c2f1a7e0-0000-4000-8000-000000000002".to_string(),
            name: "Side Promo".to_string(),
            banner_type: BannerType::Side,
            status: BannerStatus::Paused,
            pages: vec!["/about".to_string()],
            content: BannerContent {
                text: Some("New arrivals".to_string()),
                font: Some("Inter, sans-serif".to_string()),
                bg_color: Some("#ffffff".to_string()),
                text_color: Some("#1e293b".to_string()),
                position: Some(BannerPosition::TopRight),
                button: Some(CtaButton {
                    enabled: true,
                    text: Some("Shop".to_string()),
                    link: Some("/shop".to_string()),
                    color: Some("#000000".to_string()),
                    text_color: Some("#ffffff".to_string()),
                }),
            },
            schedule: BannerSchedule::default(),
            stats: BannerStats {
                views: 100,
                clicks: 3,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_banner_basic() {
        let model = create_test_model();
        let expected_id = model.id.clone();

        let banner = model_to_banner(model).unwrap();

        assert_eq!(banner.id, expected_id);
        assert_eq!(banner.banner_type, BannerType::Popup);
        assert_eq!(banner.status, BannerStatus::Active);
        assert_eq!(banner.pages, vec!["/".to_string(), "/sale".to_string()]);
        assert_eq!(banner.content.text.as_deref(), Some("20% off"));
        assert_eq!(banner.content.position, Some(BannerPosition::BottomRight));
        assert_eq!(banner.stats.views, 42);
        assert_eq!(banner.stats.clicks, 7);
    }

    #[test]
    fn test_model_to_banner_negative_counters_clamped() {
        let mut model = create_test_model();
        model.views = -10;
        model.clicks = -1;

        let banner = model_to_banner(model).unwrap();
        assert_eq!(banner.stats.views, 0);
        assert_eq!(banner.stats.clicks, 0);
    }

    #[test]
    fn test_model_to_banner_rejects_unknown_type() {
        let mut model = create_test_model();
        model.banner_type = "carousel".to_string();

        assert!(model_to_banner(model).is_err());
    }

    #[test]
    fn test_model_to_banner_rejects_malformed_pages() {
        let mut model = create_test_model();
        model.pages = "not json".to_string();

        assert!(model_to_banner(model).is_err());
    }

    #[test]
    fn test_banner_to_active_model_sets_all_columns() {
        let banner = create_test_banner();
        let active_model = banner_to_active_model(&banner).unwrap();

        assert!(matches!(active_model.id, ActiveValue::Set(_)));
        assert!(matches!(active_model.pages, ActiveValue::Set(_)));
        assert!(matches!(active_model.content, ActiveValue::Set(_)));
        assert!(matches!(active_model.views, ActiveValue::Set(_)));
        assert!(matches!(active_model.created_at, ActiveValue::Set(_)));

        if let ActiveValue::Set(banner_type) = active_model.banner_type {
            assert_eq!(banner_type, "side");
        }
        if let ActiveValue::Set(status) = active_model.status {
            assert_eq!(status, "paused");
        }
        if let ActiveValue::Set(views) = active_model.views {
            assert_eq!(views, 100);
        }
    }

    #[test]
    fn test_roundtrip_conversion() {
        let original = create_test_banner();
        let active_model = banner_to_active_model(&original).unwrap();

        // ActiveModel -> Model -> Banner，关键字段保持一致
        let model = banner::Model {
            id: match active_model.id {
                ActiveValue::Set(v) => v,
                _ => unreachable!(),
            },
            name: original.name.clone(),
            banner_type: original.banner_type.as_str().to_string(),
            status: original.status.as_str().to_string(),
            pages: serde_json::to_string(&original.pages).unwrap(),
            content: serde_json::to_string(&original.content).unwrap(),
            schedule_start: original.schedule.start,
            schedule_end: original.schedule.end,
            schedule_timezone: original.schedule.timezone.clone(),
            views: original.stats.views as i64,
            clicks: original.stats.clicks as i64,
            created_at: original.created_at,
            updated_at: original.updated_at,
        };

        let roundtripped = model_to_banner(model).unwrap();
        assert_eq!(roundtripped, original);
    }
}
