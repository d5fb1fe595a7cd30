pub use sea_orm_migration::prelude::*;

mod m20251020_000001_baseline_catalog;
mod m20251021_000002_add_rating_aggregates;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_baseline_catalog::Migration),
            Box::new(m20251021_000002_add_rating_aggregates::Migration),
        ]
    }
}
