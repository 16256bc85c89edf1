//! Cellar entity database insertion utilities.
//!
//! Reference records (varietals, tags) are looked up by their unique name first so
//! fixtures can be requested more than once without tripping unique constraints.

use entity::sea_orm_active_enums::WineType;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    fixtures::cellar::{factory, CellarFixtures},
    model::{TagModel, VarietalModel, WineModel, WineryModel},
};

impl<'a> CellarFixtures<'a> {
    /// Insert a mock varietal, returning the existing row if the name is taken.
    ///
    /// # Returns
    /// - `Ok(VarietalModel)` - The created or existing varietal record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_varietal(
        &self,
        name: &str,
        wine_type: WineType,
    ) -> Result<VarietalModel, TestError> {
        if let Some(existing) = entity::prelude::Varietal::find()
            .filter(entity::varietal::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(factory::mock_varietal(name, wine_type)
            .insert(&self.setup.db)
            .await?)
    }

    /// Insert a mock winery.
    pub async fn insert_mock_winery(
        &self,
        name: &str,
        region: &str,
        country: &str,
    ) -> Result<WineryModel, TestError> {
        Ok(factory::mock_winery(name, region, country)
            .insert(&self.setup.db)
            .await?)
    }

    /// Insert a mock tag, returning the existing row if the name is taken.
    pub async fn insert_mock_tag(&self, name: &str) -> Result<TagModel, TestError> {
        if let Some(existing) = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(factory::mock_tag(name).insert(&self.setup.db).await?)
    }

    /// Insert a mock wine along with a fresh mock winery to own it.
    ///
    /// # Arguments
    /// - `varietal_id` - Optional varietal the wine references
    /// - `wine_type` - Type of the wine
    pub async fn insert_mock_wine(
        &self,
        varietal_id: Option<i32>,
        wine_type: WineType,
    ) -> Result<WineModel, TestError> {
        let winery = self
            .insert_mock_winery("Mock Winery", "Napa Valley", "USA")
            .await?;

        Ok(factory::mock_wine(&winery, varietal_id, wine_type)
            .insert(&self.setup.db)
            .await?)
    }
}
