use chrono::Utc;
use entity::sea_orm_active_enums::WineType;
use migration::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{db::WineModel, wine::NewWine};

pub struct WineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WineRepository<'a, C> {
    /// Creates a new instance of [`WineRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the wine row followed by its tag links
    ///
    /// The two writes are not wrapped in a transaction, pass one as the connection if the
    /// wine must not persist without its links.
    pub async fn create(&self, wine: &NewWine) -> Result<WineModel, DbErr> {
        let now = Utc::now().naive_utc();

        let wine_am = entity::wine::ActiveModel {
            name: ActiveValue::Set(wine.name.clone()),
            vintage: ActiveValue::Set(wine.vintage),
            winery_id: ActiveValue::Set(wine.winery_id),
            varietal_id: ActiveValue::Set(wine.varietal_id),
            region: ActiveValue::Set(wine.region.clone()),
            country: ActiveValue::Set(wine.country.clone()),
            wine_type: ActiveValue::Set(wine.wine_type),
            sweetness: ActiveValue::Set(wine.sweetness),
            quantity: ActiveValue::Set(wine.quantity),
            bottle_size: ActiveValue::Set(wine.bottle_size),
            purchase_date: ActiveValue::Set(wine.purchase_date),
            purchase_price: ActiveValue::Set(Some(wine.purchase_price)),
            purchase_location: ActiveValue::Set(wine.purchase_location.clone()),
            retailer: ActiveValue::Set(wine.retailer.clone()),
            storage_location: ActiveValue::Set(wine.storage_location.clone()),
            bin: ActiveValue::Set(wine.bin.clone()),
            rack: ActiveValue::Set(wine.rack.clone()),
            drink_from: ActiveValue::Set(Some(wine.drink_from)),
            drink_to: ActiveValue::Set(Some(wine.drink_to)),
            peak_drinking: ActiveValue::Set(Some(wine.peak_drinking)),
            personal_rating: ActiveValue::Set(wine.personal_rating),
            critic_rating: ActiveValue::Set(wine.critic_rating),
            tasting_notes: ActiveValue::Set(Some(wine.tasting_notes.clone())),
            current_value: ActiveValue::Set(Some(wine.current_value)),
            estimated_value: ActiveValue::Set(Some(wine.estimated_value)),
            status: ActiveValue::Set(wine.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let wine_model = wine_am.insert(self.db).await?;

        if !wine.tag_ids.is_empty() {
            let links = wine
                .tag_ids
                .iter()
                .map(|tag_id| entity::wine_tag::ActiveModel {
                    wine_id: ActiveValue::Set(wine_model.id),
                    tag_id: ActiveValue::Set(*tag_id),
                });

            entity::prelude::WineTag::insert_many(links)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(wine_model)
    }

    pub async fn get_by_id(&self, wine_id: i32) -> Result<Option<WineModel>, DbErr> {
        entity::prelude::Wine::find_by_id(wine_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<WineModel>, DbErr> {
        entity::prelude::Wine::find()
            .order_by_asc(entity::wine::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the tag IDs linked to a wine
    pub async fn get_tag_ids(&self, wine_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::WineTag::find()
            .select_only()
            .column(entity::wine_tag::Column::TagId)
            .filter(entity::wine_tag::Column::WineId.eq(wine_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Wine::find().count(self.db).await
    }

    /// Counts wines per type, most common type first
    pub async fn count_by_type(&self) -> Result<Vec<(WineType, i64)>, DbErr> {
        let wine_count = Expr::expr(Func::count(Expr::col((
            entity::wine::Entity,
            entity::wine::Column::Id,
        ))));

        entity::prelude::Wine::find()
            .select_only()
            .column(entity::wine::Column::WineType)
            .column_as(wine_count.clone(), "wine_count")
            .group_by(entity::wine::Column::WineType)
            .order_by_desc(wine_count)
            .order_by_asc(entity::wine::Column::WineType)
            .into_tuple::<(WineType, i64)>()
            .all(self.db)
            .await
    }

    /// Returns the varietals referenced by the most wines along with their wine count
    ///
    /// Ties are broken by varietal name. Wines without a varietal are not counted.
    pub async fn top_varietals(&self, limit: u64) -> Result<Vec<(String, i64)>, DbErr> {
        let wine_count = Expr::expr(Func::count(Expr::col((
            entity::wine::Entity,
            entity::wine::Column::Id,
        ))));

        entity::prelude::Wine::find()
            .select_only()
            .column(entity::varietal::Column::Name)
            .column_as(wine_count.clone(), "wine_count")
            .inner_join(entity::prelude::Varietal)
            .group_by(entity::varietal::Column::Id)
            .group_by(entity::varietal::Column::Name)
            .order_by_desc(wine_count)
            .order_by_asc(entity::varietal::Column::Name)
            .limit(limit)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// Deletes every wine tag link
    pub async fn delete_all_tag_links(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::WineTag::delete_many().exec(self.db).await
    }

    /// Deletes every wine
    ///
    /// Photos and tag links cascade with their wine.
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Wine::delete_many().exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::{BottleSize, Sweetness, WineStatus, WineType};

    use crate::server::model::{db::WineryModel, wine::NewWine};

    fn new_wine(
        winery: &WineryModel,
        varietal_id: Option<i32>,
        wine_type: WineType,
        tag_ids: Vec<i32>,
    ) -> NewWine {
        NewWine {
            name: "Reserva Tempranillo 2012".to_string(),
            vintage: Some(2012),
            winery_id: winery.id,
            varietal_id,
            region: winery.region.clone(),
            country: winery.country.clone(),
            wine_type,
            sweetness: Some(Sweetness::Dry),
            quantity: 3,
            bottle_size: BottleSize::Standard,
            purchase_date: chrono::NaiveDate::from_ymd_opt(2016, 5, 14),
            purchase_price: 42.5,
            purchase_location: Some("Online".to_string()),
            retailer: Some("Wine.com".to_string()),
            storage_location: Some("Main Cellar".to_string()),
            bin: Some("C12".to_string()),
            rack: Some("Rack 4".to_string()),
            drink_from: 2017,
            drink_to: 2032,
            peak_drinking: 2024,
            personal_rating: Some(91),
            critic_rating: None,
            tasting_notes: "Cherry, Leather, Tobacco".to_string(),
            current_value: 60.56,
            estimated_value: 63.0,
            status: WineStatus::ReadyToDrink,
            tag_ids,
        }
    }

    mod create {
        use cellar_test_utils::prelude::*;
        use entity::sea_orm_active_enums::WineType;

        use super::new_wine;
        use crate::server::data::wine::WineRepository;

        /// Expect the wine and its tag links to be written
        #[tokio::test]
        async fn creates_wine_with_tags() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_cellar_tables().build().await?;
            let varietal = test
                .cellar()
                .insert_mock_varietal("Tempranillo", WineType::Red)
                .await?;
            let winery = test
                .cellar()
                .insert_mock_winery("Bodegas Vega Sicilia", "Ribera del Duero", "Spain")
                .await?;
            let gift = test.cellar().insert_mock_tag("Gift").await?;
            let organic = test.cellar().insert_mock_tag("Organic").await?;

            let wine_repo = WineRepository::new(&test.db);
            let wine = new_wine(
                &winery,
                Some(varietal.id),
                WineType::Red,
                vec![gift.id, organic.id],
            );
            let result = wine_repo.create(&wine).await;

            assert!(result.is_ok());
            let wine_model = result.unwrap();
            assert_eq!(wine_model.region, "Ribera del Duero");
            assert_eq!(wine_model.purchase_price, Some(42.5));
            assert_eq!(wine_model.varietal_id, Some(varietal.id));

            let mut tag_ids = wine_repo.get_tag_ids(wine_model.id).await?;
            tag_ids.sort();
            assert_eq!(tag_ids, vec![gift.id, organic.id]);

            Ok(())
        }

        /// Expect no tag links for a wine without tags
        #[tokio::test]
        async fn creates_wine_without_tags() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_cellar_tables().build().await?;
            let winery = test
                .cellar()
                .insert_mock_winery("Domaine Ott", "Provence", "France")
                .await?;

            let wine_repo = WineRepository::new(&test.db);
            let wine_model = wine_repo
                .create(&new_wine(&winery, None, WineType::Rose, Vec::new()))
                .await?;

            assert!(wine_repo.get_tag_ids(wine_model.id).await?.is_empty());

            Ok(())
        }

        /// Expect Error when the referenced winery does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_winery() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_cellar_tables().build().await?;
            let mut winery = test
                .cellar()
                .insert_mock_winery("Domaine Ott", "Provence", "France")
                .await?;
            winery.id += 1;

            let wine_repo = WineRepository::new(&test.db);
            let result = wine_repo
                .create(&new_wine(&winery, None, WineType::Rose, Vec::new()))
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod count_by_type {
        use cellar_test_utils::prelude::*;
        use entity::sea_orm_active_enums::WineType;

        use crate::server::data::wine::WineRepository;

        /// Expect one entry per present type, most common first
        #[tokio::test]
        async fn groups_wines_by_type() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_cellar_tables().build().await?;
            for wine_type in [
                WineType::Red,
                WineType::White,
                WineType::Red,
                WineType::Sparkling,
                WineType::Red,
                WineType::White,
            ] {
                test.cellar().insert_mock_wine(None, wine_type).await?;
            }

            let wine_repo = WineRepository::new(&test.db);
            let counts = wine_repo.count_by_type().await?;

            assert_eq!(
                counts,
                vec![
                    (WineType::Red, 3),
                    (WineType::White, 2),
                    (WineType::Sparkling, 1),
                ]
            );
            assert_eq!(wine_repo.count().await?, 6);

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let wine_repo = WineRepository::new(&test.db);
            let result = wine_repo.count_by_type().await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod top_varietals {
        use cellar_test_utils::prelude::*;
        use entity::sea_orm_active_enums::WineType;

        use crate::server::data::wine::WineRepository;

        /// Expect varietals ordered by wine count, ties broken by name, wines without a
        /// varietal skipped
        #[tokio::test]
        async fn ranks_varietals_by_wine_count() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_cellar_tables().build().await?;
            let merlot = test
                .cellar()
                .insert_mock_varietal("Merlot", WineType::Red)
                .await?;
            let malbec = test
                .cellar()
                .insert_mock_varietal("Malbec", WineType::Red)
                .await?;
            let riesling = test
                .cellar()
                .insert_mock_varietal("Riesling", WineType::White)
                .await?;

            for (varietal_id, wine_type) in [
                (Some(riesling.id), WineType::White),
                (Some(merlot.id), WineType::Red),
                (Some(riesling.id), WineType::White),
                (Some(malbec.id), WineType::Red),
                (Some(merlot.id), WineType::Red),
                (None, WineType::Rose),
                (Some(riesling.id), WineType::White),
            ] {
                test
                    .cellar()
                    .insert_mock_wine(varietal_id, wine_type)
                    .await?;
            }

            let wine_repo = WineRepository::new(&test.db);

            let top = wine_repo.top_varietals(10).await?;
            assert_eq!(
                top,
                vec![
                    ("Riesling".to_string(), 3),
                    ("Merlot".to_string(), 2),
                    ("Malbec".to_string(), 1),
                ]
            );

            let limited = wine_repo.top_varietals(1).await?;
            assert_eq!(limited, vec![("Riesling".to_string(), 3)]);

            Ok(())
        }
    }

    mod delete_all {
        use cellar_test_utils::prelude::*;
        use entity::sea_orm_active_enums::WineType;

        use super::new_wine;
        use crate::server::data::wine::WineRepository;

        /// Expect links and wines to be removed in turn
        #[tokio::test]
        async fn deletes_wines_and_links() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_cellar_tables().build().await?;
            let winery = test
                .cellar()
                .insert_mock_winery("Weingut Dr. Loosen", "Mosel", "Germany")
                .await?;
            let tag = test.cellar().insert_mock_tag("Weeknight").await?;

            let wine_repo = WineRepository::new(&test.db);
            wine_repo
                .create(&new_wine(&winery, None, WineType::White, vec![tag.id]))
                .await?;
            wine_repo
                .create(&new_wine(&winery, None, WineType::White, Vec::new()))
                .await?;

            assert_eq!(wine_repo.delete_all_tag_links().await?.rows_affected, 1);
            assert_eq!(wine_repo.delete_all().await?.rows_affected, 2);
            assert_eq!(wine_repo.count().await?, 0);

            Ok(())
        }
    }
}
