//! Collection seeding.
//!
//! Replaces every wine, winery, tag and cellar location with freshly generated data while
//! keeping the varietal catalog.

use chrono::{NaiveDate, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        cellar_location::CellarLocationRepository, photo::PhotoRepository, tag::TagRepository,
        varietal::VarietalRepository, wine::WineRepository, winery::WineryRepository,
    },
    error::{seed::SeedError, Error},
    service::seed::{
        generator::{generate_wine, GeneratorContext, VarietalBuckets},
        reference::{tags_with_colors, CELLAR_LOCATIONS, WINERIES},
        stats::CollectionStats,
    },
};

pub const DEFAULT_WINE_COUNT: usize = 1000;
const PROGRESS_INTERVAL: usize = 100;
const TOP_VARIETAL_LIMIT: u64 = 10;

#[derive(Clone, Copy, Debug)]
pub struct SeedOptions {
    pub wine_count: usize,
    /// Date the collection is generated against, decides vintages and wine status.
    pub today: NaiveDate,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            wine_count: DEFAULT_WINE_COUNT,
            today: Utc::now().date_naive(),
        }
    }
}

pub struct CollectionSeeder<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollectionSeeder<'a> {
    /// Creates a new instance of [`CollectionSeeder`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates a new collection.
    ///
    /// Runs sequentially, one awaited write at a time. The first failure aborts the run and
    /// leaves whatever was already written in place.
    ///
    /// # Arguments
    /// - `rng` - Source of every random decision, seed it for a reproducible collection
    /// - `options` - Number of wines and reference date
    ///
    /// # Returns
    /// - `Ok(CollectionStats)` - Summary of the generated collection
    /// - `Err(Error::SeedError)` - The varietal catalog is empty, nothing was modified
    /// - `Err(Error::DbErr)` - A database operation failed
    pub async fn run<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        options: SeedOptions,
    ) -> Result<CollectionStats, Error> {
        let varietals = VarietalRepository::new(self.db).get_all().await?;
        if varietals.is_empty() {
            return Err(SeedError::EmptyVarietalCatalog.into());
        }

        self.purge().await?;

        let wineries = WineryRepository::new(self.db)
            .create_many(&WINERIES)
            .await?;
        tracing::info!("Created {} wineries", wineries.len());

        let tags = TagRepository::new(self.db)
            .create_many(tags_with_colors())
            .await?;
        tracing::info!("Created {} tags", tags.len());

        let locations = CellarLocationRepository::new(self.db)
            .create_many(&CELLAR_LOCATIONS)
            .await?;
        tracing::info!("Created {} cellar locations", locations.len());

        let buckets = VarietalBuckets::from_catalog(varietals);
        tracing::info!(
            "Loaded varietals: {} red, {} white, {} rosé, {} sparkling, {} dessert",
            buckets.red.len(),
            buckets.white.len(),
            buckets.rose.len(),
            buckets.sparkling.len(),
            buckets.dessert.len()
        );

        let ctx = GeneratorContext::new(&wineries, &tags, &locations, &buckets, options.today)?;
        let wine_repo = WineRepository::new(self.db);
        let mut total_value = 0.0;

        for created in 1..=options.wine_count {
            let wine = generate_wine(rng, &ctx);
            wine_repo.create(&wine).await?;
            total_value += wine.current_value * wine.quantity as f64;

            if created % PROGRESS_INTERVAL == 0 {
                tracing::info!("Created {}/{} wines", created, options.wine_count);
            }
        }

        Ok(CollectionStats {
            wine_count: options.wine_count,
            by_type: wine_repo.count_by_type().await?,
            top_varietals: wine_repo.top_varietals(TOP_VARIETAL_LIMIT).await?,
            total_value,
        })
    }

    /// Deletes photos, tag links, wines, wineries, tags and cellar locations in
    /// dependency order.
    async fn purge(&self) -> Result<(), Error> {
        let wine_repo = WineRepository::new(self.db);

        let photos = PhotoRepository::new(self.db).delete_all().await?;
        let links = wine_repo.delete_all_tag_links().await?;
        let wines = wine_repo.delete_all().await?;
        let wineries = WineryRepository::new(self.db).delete_all().await?;
        let tags = TagRepository::new(self.db).delete_all().await?;
        let locations = CellarLocationRepository::new(self.db).delete_all().await?;

        tracing::info!(
            "Cleared {} photos, {} tag links, {} wines, {} wineries, {} tags, {} cellar locations",
            photos.rows_affected,
            links.rows_affected,
            wines.rows_affected,
            wineries.rows_affected,
            tags.rows_affected,
            locations.rows_affected
        );

        Ok(())
    }
}
