//! Analytic event entity for the append-only view/click log

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "analytic_events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub banner_id: String,
    pub event_type: String,
    pub timestamp: DateTimeUtc,
    /// Optional JSON payload (user agent, page, ...), stored as-is
    #[sea_orm(column_type = "Text", nullable)]
    pub meta: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
