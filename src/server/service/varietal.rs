//! Varietal catalog service.
//!
//! Loads the fixed catalog and backs the varietal API, mapping missing rows and name
//! collisions to [`CellarError`].

use sea_orm::DatabaseConnection;

use crate::server::{
    data::varietal::VarietalRepository,
    error::{cellar::CellarError, Error},
    model::{db::VarietalModel, varietal::NewVarietal},
    service::seed::catalog::VARIETAL_CATALOG,
};

pub struct VarietalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VarietalService<'a> {
    /// Creates a new instance of [`VarietalService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts every entry of the fixed catalog by name.
    ///
    /// Safe to run repeatedly, varietals missing from the catalog are left untouched. Stops
    /// at the first failed upsert.
    ///
    /// # Returns
    /// - `Ok(Vec<VarietalModel>)` - The stored rows in catalog order
    /// - `Err(Error::DbErr)` - An upsert failed
    pub async fn load_catalog(&self) -> Result<Vec<VarietalModel>, Error> {
        let varietal_repo = VarietalRepository::new(self.db);
        let mut loaded = Vec::with_capacity(VARIETAL_CATALOG.len());

        for (index, definition) in VARIETAL_CATALOG.iter().enumerate() {
            let varietal = varietal_repo.upsert(definition.into()).await?;

            tracing::info!(
                "Upserted varietal {} ({}/{})",
                varietal.name,
                index + 1,
                VARIETAL_CATALOG.len()
            );

            loaded.push(varietal);
        }

        Ok(loaded)
    }

    pub async fn list(&self) -> Result<Vec<VarietalModel>, Error> {
        Ok(VarietalRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, varietal_id: i32) -> Result<VarietalModel, Error> {
        VarietalRepository::new(self.db)
            .get_by_id(varietal_id)
            .await?
            .ok_or_else(|| CellarError::VarietalNotFound(varietal_id).into())
    }

    /// Creates a varietal
    ///
    /// # Returns
    /// - `Ok(VarietalModel)` - The created varietal
    /// - `Err(Error::CellarError)` - The name is already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, varietal: NewVarietal) -> Result<VarietalModel, Error> {
        let varietal_repo = VarietalRepository::new(self.db);

        if varietal_repo.get_by_name(&varietal.name).await?.is_some() {
            return Err(CellarError::VarietalNameTaken(varietal.name).into());
        }

        Ok(varietal_repo.create(varietal).await?)
    }

    /// Replaces every field of a varietal
    ///
    /// Renaming onto the name of another varietal is rejected.
    pub async fn update(
        &self,
        varietal_id: i32,
        varietal: NewVarietal,
    ) -> Result<VarietalModel, Error> {
        let varietal_repo = VarietalRepository::new(self.db);

        if let Some(existing) = varietal_repo.get_by_name(&varietal.name).await? {
            if existing.id != varietal_id {
                return Err(CellarError::VarietalNameTaken(varietal.name).into());
            }
        }

        varietal_repo
            .update(varietal_id, varietal)
            .await?
            .ok_or_else(|| CellarError::VarietalNotFound(varietal_id).into())
    }

    pub async fn delete(&self, varietal_id: i32) -> Result<(), Error> {
        let result = VarietalRepository::new(self.db).delete(varietal_id).await?;

        if result.rows_affected == 0 {
            return Err(CellarError::VarietalNotFound(varietal_id).into());
        }

        Ok(())
    }
}
