use chrono::Utc;
use entity::varietal::StringList;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{db::VarietalModel, varietal::NewVarietal};

pub struct VarietalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VarietalRepository<'a, C> {
    /// Creates a new instance of [`VarietalRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the varietal or, if a varietal with the same name exists, replaces every
    /// field except `created_at`.
    pub async fn upsert(&self, varietal: NewVarietal) -> Result<VarietalModel, DbErr> {
        let now = Utc::now().naive_utc();

        let varietal = entity::varietal::ActiveModel {
            name: ActiveValue::Set(varietal.name),
            wine_type: ActiveValue::Set(varietal.wine_type),
            description: ActiveValue::Set(varietal.description),
            common_regions: ActiveValue::Set(StringList(varietal.common_regions)),
            characteristics: ActiveValue::Set(StringList(varietal.characteristics)),
            aliases: ActiveValue::Set(StringList(varietal.aliases)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Varietal::insert(varietal)
            .on_conflict(
                OnConflict::column(entity::varietal::Column::Name)
                    .update_columns([
                        entity::varietal::Column::WineType,
                        entity::varietal::Column::Description,
                        entity::varietal::Column::CommonRegions,
                        entity::varietal::Column::Characteristics,
                        entity::varietal::Column::Aliases,
                        entity::varietal::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Creates a new varietal, failing on a name collision
    pub async fn create(&self, varietal: NewVarietal) -> Result<VarietalModel, DbErr> {
        let now = Utc::now().naive_utc();

        let varietal = entity::varietal::ActiveModel {
            name: ActiveValue::Set(varietal.name),
            wine_type: ActiveValue::Set(varietal.wine_type),
            description: ActiveValue::Set(varietal.description),
            common_regions: ActiveValue::Set(StringList(varietal.common_regions)),
            characteristics: ActiveValue::Set(StringList(varietal.characteristics)),
            aliases: ActiveValue::Set(StringList(varietal.aliases)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        varietal.insert(self.db).await
    }

    pub async fn get_by_id(&self, varietal_id: i32) -> Result<Option<VarietalModel>, DbErr> {
        entity::prelude::Varietal::find_by_id(varietal_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<VarietalModel>, DbErr> {
        entity::prelude::Varietal::find()
            .filter(entity::varietal::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Returns every varietal ordered by name
    pub async fn get_all(&self) -> Result<Vec<VarietalModel>, DbErr> {
        entity::prelude::Varietal::find()
            .order_by_asc(entity::varietal::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Varietal::find().count(self.db).await
    }

    /// Replaces every field of an existing varietal
    ///
    /// Returns `Ok(None)` if no varietal has the provided ID.
    pub async fn update(
        &self,
        varietal_id: i32,
        varietal: NewVarietal,
    ) -> Result<Option<VarietalModel>, DbErr> {
        let existing = match entity::prelude::Varietal::find_by_id(varietal_id)
            .one(self.db)
            .await?
        {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let mut varietal_am = existing.into_active_model();
        varietal_am.name = ActiveValue::Set(varietal.name);
        varietal_am.wine_type = ActiveValue::Set(varietal.wine_type);
        varietal_am.description = ActiveValue::Set(varietal.description);
        varietal_am.common_regions = ActiveValue::Set(StringList(varietal.common_regions));
        varietal_am.characteristics = ActiveValue::Set(StringList(varietal.characteristics));
        varietal_am.aliases = ActiveValue::Set(StringList(varietal.aliases));
        varietal_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let varietal = varietal_am.update(self.db).await?;

        Ok(Some(varietal))
    }

    /// Deletes a varietal
    ///
    /// Wines referencing the varietal keep their row with `varietal_id` set to null. Returns
    /// OK regardless of the varietal existing, check [`DeleteResult::rows_affected`] to
    /// confirm the deletion.
    pub async fn delete(&self, varietal_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Varietal::delete_by_id(varietal_id)
            .exec(self.db)
            .await
    }
}
