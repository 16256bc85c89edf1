pub use sea_orm_migration::prelude::*;

mod m20251020_000001_varietal;
mod m20251020_000002_winery;
mod m20251020_000003_tag;
mod m20251020_000004_cellar_location;
mod m20251020_000005_wine;
mod m20251020_000006_wine_tag;
mod m20251020_000007_photo;
mod m20251020_000008_setting;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_varietal::Migration),
            Box::new(m20251020_000002_winery::Migration),
            Box::new(m20251020_000003_tag::Migration),
            Box::new(m20251020_000004_cellar_location::Migration),
            Box::new(m20251020_000005_wine::Migration),
            Box::new(m20251020_000006_wine_tag::Migration),
            Box::new(m20251020_000007_photo::Migration),
            Box::new(m20251020_000008_setting::Migration),
        ]
    }
}
