use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::SettingModel;

pub struct SettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    /// Creates a new instance of [`SettingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the raw stored value for a key, `None` if it was never set
    pub async fn get(&self, key: &str) -> Result<Option<String>, DbErr> {
        let setting = entity::prelude::Setting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(setting.map(|setting| setting.value))
    }

    /// Stores the value for a key, replacing any previous value
    pub async fn set(&self, key: &str, value: String) -> Result<SettingModel, DbErr> {
        let setting = entity::setting::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::Setting::insert(setting)
            .on_conflict(
                OnConflict::column(entity::setting::Column::Key)
                    .update_columns([
                        entity::setting::Column::Value,
                        entity::setting::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<SettingModel>, DbErr> {
        entity::prelude::Setting::find().all(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod get {
        use cellar_test_utils::prelude::*;

        use crate::server::data::setting::SettingRepository;

        /// Expect Ok(None) for a key that was never stored
        #[tokio::test]
        async fn returns_none_for_unset_key() -> Result<(), TestError> {
            let test = TestBuilder::new().with_settings_table().build().await?;

            let setting_repo = SettingRepository::new(&test.db);
            let result = setting_repo.get("settings_currency").await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let setting_repo = SettingRepository::new(&test.db);
            let result = setting_repo.get("settings_currency").await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod set {
        use cellar_test_utils::prelude::*;

        use crate::server::data::setting::SettingRepository;

        /// Expect the latest write to win for a repeated key
        #[tokio::test]
        async fn overwrites_existing_value() -> Result<(), TestError> {
            let test = TestBuilder::new().with_settings_table().build().await?;

            let setting_repo = SettingRepository::new(&test.db);
            setting_repo
                .set("settings_currency", "EUR".to_string())
                .await?;
            setting_repo
                .set("settings_currency", "GBP".to_string())
                .await?;

            let value = setting_repo.get("settings_currency").await?;
            assert_eq!(value.as_deref(), Some("GBP"));
            assert_eq!(setting_repo.get_all().await?.len(), 1);

            Ok(())
        }
    }
}
