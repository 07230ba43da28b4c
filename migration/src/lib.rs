pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20260301_000001_banners_table;
mod m20260301_000002_analytic_events;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_banners_table::Migration),
            Box::new(m20260301_000002_analytic_events::Migration),
        ]
    }
}
