//! Banner registry service integration tests
//!
//! Runs against a fresh SQLite database per test. Covers the non-overlap
//! invariant, stats handling on create/update, pause/resume and idempotent
//! delete.

use std::sync::Arc;
use std::sync::Once;

use bannerd::config::init_config;
use bannerd::errors::BannerdError;
use bannerd::services::{BannerDraft, BannerService};
use bannerd::storage::{
    BannerContent, BannerSchedule, BannerStatus, BannerType, SeaOrmStorage, TrackKind,
};
use chrono::{Duration, Utc};
use tempfile::TempDir;

static INIT: Once = Once::new();

fn init_static_config() {
    INIT.call_once(|| {
        init_config();
    });
}

/// 每个测试独立的 SQLite 库；TempDir 需要保活到测试结束
async fn setup() -> (TempDir, Arc<SeaOrmStorage>, BannerService) {
    init_static_config();

    let temp_dir = TempDir::new().expect("创建临时目录失败");
    let db_path = temp_dir.path().join("banner_service_test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&db_url, "sqlite")
            .await
            .expect("创建存储失败"),
    );
    let service = BannerService::new(storage.clone());

    (temp_dir, storage, service)
}

fn draft(name: &str, banner_type: BannerType, status: BannerStatus, pages: &[&str]) -> BannerDraft {
    BannerDraft {
        id: None,
        name: name.to_string(),
        banner_type,
        status,
        pages: pages.iter().map(|s| s.to_string()).collect(),
        content: BannerContent::default(),
        schedule: BannerSchedule::default(),
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_zero_stats() {
    let (_dir, _storage, service) = setup().await;

    let banner = service
        .upsert(draft("Promo", BannerType::Popup, BannerStatus::Active, &["/"]))
        .await
        .unwrap();

    assert!(!banner.id.is_empty());
    assert_eq!(banner.status, BannerStatus::Active);
    assert_eq!(banner.stats.views, 0);
    assert_eq!(banner.stats.clicks, 0);
}

#[tokio::test]
async fn test_active_same_type_overlapping_pages_rejected() {
    let (_dir, _storage, service) = setup().await;

    service
        .upsert(draft("A", BannerType::Popup, BannerStatus::Active, &["/"]))
        .await
        .unwrap();

    // B 与 A 同类型、active，页面集相交 → 拒绝，store 状态不变
    let result = service
        .upsert(draft(
            "B",
            BannerType::Popup,
            BannerStatus::Active,
            &["/", "/about"],
        ))
        .await;

    assert!(matches!(result, Err(BannerdError::Conflict(_))));

    let all = service.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "A");
}

#[tokio::test]
async fn test_different_type_may_share_pages() {
    let (_dir, _storage, service) = setup().await;

    service
        .upsert(draft("A", BannerType::Popup, BannerStatus::Active, &["/"]))
        .await
        .unwrap();

    // side 与 popup 不互斥
    let result = service
        .upsert(draft("B", BannerType::Side, BannerStatus::Active, &["/"]))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_paused_draft_skips_collision_check() {
    let (_dir, _storage, service) = setup().await;

    service
        .upsert(draft("A", BannerType::Popup, BannerStatus::Active, &["/"]))
        .await
        .unwrap();

    // paused 状态不参与冲突检查
    let result = service
        .upsert(draft("B", BannerType::Popup, BannerStatus::Paused, &["/"]))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_all_sentinel_is_literal_in_collision_check() {
    let (_dir, _storage, service) = setup().await;

    service
        .upsert(draft("A", BannerType::Popup, BannerStatus::Active, &["/"]))
        .await
        .unwrap();

    // "ALL" 在冲突检查中按字面值比较，与 ["/"] 不相交
    let result = service
        .upsert(draft("B", BannerType::Popup, BannerStatus::Active, &["ALL"]))
        .await;
    assert!(result.is_ok());

    // 但两个都声明 "ALL" 的会冲突
    let result = service
        .upsert(draft("C", BannerType::Popup, BannerStatus::Active, &["ALL"]))
        .await;
    assert!(matches!(result, Err(BannerdError::Conflict(_))));
}

#[tokio::test]
async fn test_update_preserves_stats_and_created_at() {
    let (_dir, storage, service) = setup().await;

    let created = service
        .upsert(draft("A", BannerType::Popup, BannerStatus::Active, &["/"]))
        .await
        .unwrap();

    // 模拟一些打点流量
    storage
        .increment_stat(&created.id, TrackKind::Views)
        .await
        .unwrap();
    storage
        .increment_stat(&created.id, TrackKind::Clicks)
        .await
        .unwrap();

    let mut update = draft("A renamed", BannerType::Popup, BannerStatus::Active, &["/"]);
    update.id = Some(created.id.clone());
    let updated = service.upsert(update).await.unwrap();

    assert_eq!(updated.name, "A renamed");
    assert_eq!(updated.stats.views, 1);
    assert_eq!(updated.stats.clicks, 1);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_excludes_self_from_collision_check() {
    let (_dir, _storage, service) = setup().await;

    let created = service
        .upsert(draft("A", BannerType::Side, BannerStatus::Active, &["/"]))
        .await
        .unwrap();

    // 自己更新自己的页面不算冲突
    let mut update = draft("A", BannerType::Side, BannerStatus::Active, &["/", "/sale"]);
    update.id = Some(created.id.clone());

    assert!(service.upsert(update).await.is_ok());
}

#[tokio::test]
async fn test_resume_without_collision_succeeds() {
    let (_dir, _storage, service) = setup().await;

    let banner = service
        .upsert(draft("A", BannerType::Side, BannerStatus::Paused, &["/"]))
        .await
        .unwrap();

    service
        .set_status(&banner.id, BannerStatus::Active)
        .await
        .unwrap();

    let stored = service.list().await.unwrap();
    assert_eq!(stored[0].status, BannerStatus::Active);
}

#[tokio::test]
async fn test_resume_with_collision_leaves_status_unchanged() {
    let (_dir, _storage, service) = setup().await;

    let paused = service
        .upsert(draft("A", BannerType::Popup, BannerStatus::Paused, &["/"]))
        .await
        .unwrap();
    service
        .upsert(draft("B", BannerType::Popup, BannerStatus::Active, &["/"]))
        .await
        .unwrap();

    let result = service.set_status(&paused.id, BannerStatus::Active).await;
    assert!(matches!(result, Err(BannerdError::Conflict(_))));

    let all = service.list().await.unwrap();
    let a = all.iter().find(|b| b.id == paused.id).unwrap();
    assert_eq!(a.status, BannerStatus::Paused);
}

#[tokio::test]
async fn test_pause_never_checks_collision() {
    let (_dir, _storage, service) = setup().await;

    let banner = service
        .upsert(draft("A", BannerType::Popup, BannerStatus::Active, &["/"]))
        .await
        .unwrap();

    service
        .set_status(&banner.id, BannerStatus::Paused)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_status_unknown_id_is_not_found() {
    let (_dir, _storage, service) = setup().await;

    let result = service.set_status("no-such-id", BannerStatus::Paused).await;
    assert!(matches!(result, Err(BannerdError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (_dir, _storage, service) = setup().await;

    let banner = service
        .upsert(draft("A", BannerType::Popup, BannerStatus::Active, &["/"]))
        .await
        .unwrap();

    service.delete(&banner.id).await.unwrap();
    // 再删一次、删除不存在的 id 都成功
    service.delete(&banner.id).await.unwrap();
    service.delete("never-existed").await.unwrap();

    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let (_dir, _storage, service) = setup().await;

    for name in ["first", "second", "third"] {
        service
            .upsert(draft(name, BannerType::Popup, BannerStatus::Paused, &["/"]))
            .await
            .unwrap();
        // created_at 需要可区分
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let all = service.list().await.unwrap();
    let names: Vec<&str> = all.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_get_config_applies_path_and_schedule() {
    let (_dir, _storage, service) = setup().await;
    let now = Utc::now();

    let mut shop = draft("Shop", BannerType::Popup, BannerStatus::Active, &["/shop"]);
    shop.schedule.start = Some(now - Duration::hours(1));
    shop.schedule.end = Some(now + Duration::hours(1));
    service.upsert(shop).await.unwrap();

    let mut everywhere = draft("Everywhere", BannerType::Side, BannerStatus::Active, &["ALL"]);
    everywhere.schedule.start = None;
    everywhere.schedule.end = None;
    service.upsert(everywhere).await.unwrap();

    // active 但窗口已过：被 schedule 条件过滤，而非状态
    let mut expired = draft("Expired", BannerType::Side, BannerStatus::Active, &["/shop"]);
    expired.schedule.end = Some(now - Duration::hours(1));
    service.upsert(expired).await.unwrap();

    let eligible = service.get_config("/shop", now).await.unwrap();
    let names: Vec<&str> = eligible.iter().map(|b| b.name.as_str()).collect();
    assert!(names.contains(&"Shop"));
    assert!(names.contains(&"Everywhere"));
    assert!(!names.contains(&"Expired"));

    let elsewhere = service.get_config("/about", now).await.unwrap();
    let names: Vec<&str> = elsewhere.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Everywhere"]);
}
