//! 事件日志表迁移
//!
//! 创建 analytic_events 表，按条记录曝光/点击事件：
//! - 时间戳
//! - 事件类型 (view/click)
//! - 可选 meta 负载（User Agent 等）

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnalyticEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnalyticEvents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AnalyticEvents::BannerId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AnalyticEvents::EventType)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AnalyticEvents::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AnalyticEvents::Meta).text().null())
                    .to_owned(),
            )
            .await?;

        // banner_id 索引（单 banner 事件查询）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_analytic_events_banner_id")
                    .table(AnalyticEvents::Table)
                    .col(AnalyticEvents::BannerId)
                    .to_owned(),
            )
            .await?;

        // 时间索引（时间范围查询）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_analytic_events_timestamp")
                    .table(AnalyticEvents::Table)
                    .col(AnalyticEvents::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_analytic_events_timestamp")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_analytic_events_banner_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AnalyticEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AnalyticEvents {
    #[sea_orm(iden = "analytic_events")]
    Table,
    Id,
    BannerId,
    EventType,
    Timestamp,
    Meta,
}
