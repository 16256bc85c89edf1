use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};

use crate::server::model::db::TagModel;

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    /// Creates a new instance of [`TagRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts every tag, returning the created rows in insertion order
    ///
    /// # Arguments
    /// - `tags`: Vector of a tuple containing the unique tag name and optional hex color
    pub async fn create_many(
        &self,
        tags: Vec<(String, Option<String>)>,
    ) -> Result<Vec<TagModel>, DbErr> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        let tags = tags
            .into_iter()
            .map(|(name, color)| entity::tag::ActiveModel {
                name: ActiveValue::Set(name),
                color: ActiveValue::Set(color),
                ..Default::default()
            });

        entity::prelude::Tag::insert_many(tags)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<TagModel>, DbErr> {
        entity::prelude::Tag::find()
            .order_by_asc(entity::tag::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every tag along with its wine links
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::Tag::delete_many().exec(self.db).await
    }
}
