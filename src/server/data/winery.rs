use chrono::Utc;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};

use crate::server::model::{db::WineryModel, reference::WineryDefinition};

pub struct WineryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WineryRepository<'a, C> {
    /// Creates a new instance of [`WineryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts every winery, returning the created rows in insertion order
    pub async fn create_many(
        &self,
        wineries: &[WineryDefinition],
    ) -> Result<Vec<WineryModel>, DbErr> {
        if wineries.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let wineries = wineries.iter().map(|winery| entity::winery::ActiveModel {
            name: ActiveValue::Set(winery.name.to_string()),
            region: ActiveValue::Set(winery.region.to_string()),
            country: ActiveValue::Set(winery.country.to_string()),
            founded: ActiveValue::Set(winery.founded),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::Winery::insert_many(wineries)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<WineryModel>, DbErr> {
        entity::prelude::Winery::find()
            .order_by_asc(entity::winery::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every winery
    ///
    /// Fails while wines still reference a winery, purge wines first.
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Winery::delete_many().exec(self.db).await
    }
}
