use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建 banners 表
        manager
            .create_table(
                Table::create()
                    .table(Banners::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Banners::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Banners::Name).string().not_null())
                    .col(ColumnDef::new(Banners::BannerType).string().not_null())
                    .col(ColumnDef::new(Banners::Status).string().not_null())
                    // pages 与 content 以 JSON 文本存储
                    .col(ColumnDef::new(Banners::Pages).text().not_null())
                    .col(ColumnDef::new(Banners::Content).text().not_null())
                    .col(
                        ColumnDef::new(Banners::ScheduleStart)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Banners::ScheduleEnd)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Banners::ScheduleTimezone).string().null())
                    .col(
                        ColumnDef::new(Banners::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Banners::Clicks)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Banners::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Banners::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 状态 + 类型复合索引（冲突检查的查询路径）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_banners_status_type")
                    .table(Banners::Table)
                    .col(Banners::Status)
                    .col(Banners::BannerType)
                    .to_owned(),
            )
            .await?;

        // 创建时间索引（列表按新到旧排序）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_banners_created_at")
                    .table(Banners::Table)
                    .col(Banners::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_banners_created_at").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_banners_status_type").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Banners::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Banners {
    #[sea_orm(iden = "banners")]
    Table,
    Id,
    Name,
    BannerType,
    Status,
    Pages,
    Content,
    ScheduleStart,
    ScheduleEnd,
    ScheduleTimezone,
    Views,
    Clicks,
    CreatedAt,
    UpdatedAt,
}
