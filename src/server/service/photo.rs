use sea_orm::DatabaseConnection;

use crate::server::{
    data::{photo::PhotoRepository, wine::WineRepository},
    error::{cellar::CellarError, Error},
    model::db::PhotoModel,
};

/// Attaches stored uploads to wines.
pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoService<'a> {
    /// Creates a new instance of [`PhotoService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an uploaded object as a photo of the wine
    ///
    /// # Returns
    /// - `Ok(PhotoModel)` - The attached photo
    /// - `Err(Error::CellarError)` - The wine does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn attach(
        &self,
        wine_id: i32,
        url: String,
        storage_key: String,
    ) -> Result<PhotoModel, Error> {
        self.ensure_wine_exists(wine_id).await?;

        Ok(PhotoRepository::new(self.db)
            .create(wine_id, url, storage_key)
            .await?)
    }

    pub async fn list(&self, wine_id: i32) -> Result<Vec<PhotoModel>, Error> {
        self.ensure_wine_exists(wine_id).await?;

        Ok(PhotoRepository::new(self.db).get_by_wine_id(wine_id).await?)
    }

    async fn ensure_wine_exists(&self, wine_id: i32) -> Result<(), Error> {
        match WineRepository::new(self.db).get_by_id(wine_id).await? {
            Some(_) => Ok(()),
            None => Err(CellarError::WineNotFound(wine_id).into()),
        }
    }
}
