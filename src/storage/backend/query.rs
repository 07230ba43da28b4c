//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::error;

use super::{SeaOrmStorage, retry};
use crate::errors::{BannerdError, Result};
use crate::storage::models::{Banner, BannerStatus, BannerType};

use migration::entities::banner;

use super::converters::model_to_banner;

impl SeaOrmStorage {
    pub async fn get(&self, id: &str) -> Result<Option<Banner>> {
        let db = &self.db;
        let id_owned = id.to_string();

        let result = retry::with_retry(&format!("get({})", id), self.retry_config, || async {
            banner::Entity::find_by_id(&id_owned).one(db).await
        })
        .await
        .map_err(|e| {
            error!("查询 banner 失败（重试后仍失败）: {}", e);
            BannerdError::database_operation(format!("查询 banner '{}' 失败: {}", id, e))
        })?;

        result.map(model_to_banner).transpose()
    }

    /// 加载所有 banner，按创建时间从新到旧
    pub async fn load_all(&self) -> Result<Vec<Banner>> {
        let models = banner::Entity::find()
            .order_by_desc(banner::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| BannerdError::database_operation(format!("加载 banner 列表失败: {}", e)))?;

        models.into_iter().map(model_to_banner).collect()
    }

    /// 加载所有 active 状态的 banner（资格过滤的输入集）
    pub async fn load_active(&self) -> Result<Vec<Banner>> {
        let models = banner::Entity::find()
            .filter(banner::Column::Status.eq(BannerStatus::Active.as_str()))
            .all(&self.db)
            .await
            .map_err(|e| {
                BannerdError::database_operation(format!("加载 active banner 失败: {}", e))
            })?;

        models.into_iter().map(model_to_banner).collect()
    }

    /// 查找与给定类型/页面集合冲突的另一个 active banner
    ///
    /// 数据库侧先按状态 + 类型缩小候选集（走 idx_banners_status_type），
    /// 页面交集在内存中按字面值比较（pages 为 JSON 文本列，
    /// 跨数据库无法可移植地下推集合交集）。
    pub async fn find_collision(
        &self,
        banner_type: BannerType,
        pages: &[String],
        exclude_id: Option<&str>,
    ) -> Result<Option<Banner>> {
        let mut condition = Condition::all()
            .add(banner::Column::Status.eq(BannerStatus::Active.as_str()))
            .add(banner::Column::BannerType.eq(banner_type.as_str()));

        if let Some(id) = exclude_id {
            condition = condition.add(banner::Column::Id.ne(id));
        }

        let db = &self.db;
        let cond = condition.clone();
        let models = retry::with_retry("find_collision", self.retry_config, || async {
            banner::Entity::find().filter(cond.clone()).all(db).await
        })
        .await
        .map_err(|e| BannerdError::database_operation(format!("冲突检查查询失败: {}", e)))?;

        for model in models {
            let candidate = model_to_banner(model)?;
            if candidate.pages_overlap(pages) {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    /// banner 总数（用于首次启动时判断是否需要种子数据）
    pub async fn count(&self) -> Result<u64> {
        banner::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| BannerdError::database_operation(format!("统计 banner 数量失败: {}", e)))
    }
}
