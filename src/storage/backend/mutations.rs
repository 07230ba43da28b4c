//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations, including the
//! atomic counter increment used by the tracking path.

use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, OnConflict, Query};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, ExprTrait, QueryFilter,
};
use tracing::{debug, info};

use super::{SeaOrmStorage, retry};
use crate::errors::{BannerdError, Result};
use crate::storage::models::{Banner, NewAnalyticEvent, TrackKind};

use super::converters::banner_to_active_model;

use migration::entities::{analytic_event, banner};

impl SeaOrmStorage {
    /// 使用 ON CONFLICT 的原子 upsert
    ///
    /// 更新路径只覆盖可变列；views/clicks/created_at 不在冲突更新列表中，
    /// 已有记录的计数器和创建时间保持不变。
    pub async fn upsert(&self, record: &Banner) -> Result<()> {
        let active_model = banner_to_active_model(record)?;

        let db = &self.db;
        retry::with_retry(
            &format!("upsert({})", record.id),
            self.retry_config,
            || async {
                banner::Entity::insert(active_model.clone())
                    .on_conflict(
                        OnConflict::column(banner::Column::Id)
                            .update_columns([
                                banner::Column::Name,
                                banner::Column::BannerType,
                                banner::Column::Status,
                                banner::Column::Pages,
                                banner::Column::Content,
                                banner::Column::ScheduleStart,
                                banner::Column::ScheduleEnd,
                                banner::Column::ScheduleTimezone,
                                banner::Column::UpdatedAt,
                            ])
                            .to_owned(),
                    )
                    .exec(db)
                    .await
                    .map(|_| ())
            },
        )
        .await
        .map_err(|e| {
            BannerdError::database_operation(format!("Upsert banner '{}' 失败: {}", record.id, e))
        })?;

        info!("Banner upserted: {}", record.id);
        Ok(())
    }

    /// 更新状态与 updated_at
    pub async fn set_status(
        &self,
        id: &str,
        status: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<u64> {
        let db = &self.db;
        let id_owned = id.to_string();
        let status_owned = status.to_string();

        let result = retry::with_retry(
            &format!("set_status({})", id),
            self.retry_config,
            || async {
                banner::Entity::update_many()
                    .col_expr(banner::Column::Status, Expr::value(status_owned.clone()))
                    .col_expr(banner::Column::UpdatedAt, Expr::value(updated_at))
                    .filter(banner::Column::Id.eq(id_owned.clone()))
                    .exec(db)
                    .await
            },
        )
        .await
        .map_err(|e| {
            BannerdError::database_operation(format!("更新 banner '{}' 状态失败: {}", id, e))
        })?;

        Ok(result.rows_affected)
    }

    /// 硬删除。不存在的 id 也视为成功（幂等删除），返回受影响行数。
    pub async fn remove(&self, id: &str) -> Result<u64> {
        let db = &self.db;
        let id_owned = id.to_string();

        let result = retry::with_retry(&format!("remove({})", id), self.retry_config, || async {
            banner::Entity::delete_by_id(&id_owned).exec(db).await
        })
        .await
        .map_err(|e| BannerdError::database_operation(format!("删除 banner '{}' 失败: {}", id, e)))?;

        if result.rows_affected > 0 {
            info!("Banner deleted: {}", id);
        } else {
            debug!("Banner delete no-op, id not found: {}", id);
        }
        Ok(result.rows_affected)
    }

    /// 原子递增聚合计数器
    ///
    /// 单条 UPDATE 直接在存储层做 col = col + 1，避免读-改-写在并发打点下
    /// 丢失更新。id 不存在时返回 0 行，调用方按静默 no-op 处理。
    pub async fn increment_stat(&self, id: &str, kind: TrackKind) -> Result<u64> {
        let column = match kind {
            TrackKind::Views => banner::Column::Views,
            TrackKind::Clicks => banner::Column::Clicks,
        };

        let stmt = Query::update()
            .table(banner::Entity)
            .value(column, Expr::col(column).add(Expr::val(1i64)))
            .and_where(Expr::col(banner::Column::Id).eq(Expr::val(id)))
            .to_owned();

        // SeaORM 内部自动 build 为带绑定参数的 Statement
        let db = &self.db;
        let stmt_ref = &stmt;
        let result = retry::with_retry(
            &format!("increment_stat({}, {})", id, kind.as_str()),
            self.retry_config,
            || async { db.execute(stmt_ref).await },
        )
        .await
        .map_err(|e| {
            BannerdError::database_operation(format!(
                "递增 banner '{}' 的 {} 计数失败: {}",
                id,
                kind.as_str(),
                e
            ))
        })?;

        Ok(result.rows_affected())
    }

    /// 向事件日志追加一条记录
    pub async fn append_event(&self, event: &NewAnalyticEvent) -> Result<()> {
        let meta = event
            .meta
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let model = analytic_event::ActiveModel {
            banner_id: Set(event.banner_id.clone()),
            event_type: Set(event.event_type.as_str().to_string()),
            timestamp: Set(event.timestamp),
            meta: Set(meta),
            ..Default::default()
        };

        let db = &self.db;
        retry::with_retry("append_event", self.retry_config, || async {
            analytic_event::Entity::insert(model.clone()).exec(db).await
        })
        .await
        .map_err(|e| BannerdError::database_operation(format!("写入事件日志失败: {}", e)))?;

        debug!(
            "Analytic event appended: {} {}",
            event.banner_id,
            event.event_type.as_str()
        );
        Ok(())
    }
}
