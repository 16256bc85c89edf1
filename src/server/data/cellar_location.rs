use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait};

use crate::server::model::{db::CellarLocationModel, reference::CellarLocationDefinition};

pub struct CellarLocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CellarLocationRepository<'a, C> {
    /// Creates a new instance of [`CellarLocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts every cellar location, returning the created rows in insertion order
    pub async fn create_many(
        &self,
        locations: &[CellarLocationDefinition],
    ) -> Result<Vec<CellarLocationModel>, DbErr> {
        if locations.is_empty() {
            return Ok(Vec::new());
        }

        let locations = locations
            .iter()
            .map(|location| entity::cellar_location::ActiveModel {
                name: ActiveValue::Set(location.name.to_string()),
                temperature: ActiveValue::Set(location.temperature.to_string()),
                humidity: ActiveValue::Set(location.humidity.to_string()),
                capacity: ActiveValue::Set(location.capacity),
                ..Default::default()
            });

        entity::prelude::CellarLocation::insert_many(locations)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::CellarLocation::delete_many()
            .exec(self.db)
            .await
    }
}
