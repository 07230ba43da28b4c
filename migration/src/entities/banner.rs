use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "banners")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub banner_type: String,
    pub status: String,
    /// JSON array of target paths
    #[sea_orm(column_type = "Text")]
    pub pages: String,
    /// JSON object with text, colors, position and CTA button
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub schedule_start: Option<DateTimeUtc>,
    pub schedule_end: Option<DateTimeUtc>,
    pub schedule_timezone: Option<String>,
    pub views: i64,
    pub clicks: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
