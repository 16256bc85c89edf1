use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::PhotoModel;

pub struct PhotoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhotoRepository<'a, C> {
    /// Creates a new instance of [`PhotoRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Attaches a stored object to a wine
    ///
    /// # Arguments
    /// - `wine_id`: ID of the wine the photo belongs to, must exist
    /// - `url`: Public URL of the object
    /// - `storage_key`: Key of the object within the bucket
    pub async fn create(
        &self,
        wine_id: i32,
        url: String,
        storage_key: String,
    ) -> Result<PhotoModel, DbErr> {
        let photo = entity::photo::ActiveModel {
            wine_id: ActiveValue::Set(wine_id),
            url: ActiveValue::Set(url),
            storage_key: ActiveValue::Set(storage_key),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        photo.insert(self.db).await
    }

    /// Returns the photos of a wine, oldest first
    pub async fn get_by_wine_id(&self, wine_id: i32) -> Result<Vec<PhotoModel>, DbErr> {
        entity::prelude::Photo::find()
            .filter(entity::photo::Column::WineId.eq(wine_id))
            .order_by_asc(entity::photo::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every photo row, stored objects are left untouched
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Photo::delete_many().exec(self.db).await
    }
}
