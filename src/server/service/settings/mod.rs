//! Settings service.
//!
//! Typed access to the key/value `setting` table. Reads never fail: a missing row, an
//! unparseable value or a database error all fall back to the key's default.

pub mod schema;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::setting::SettingRepository,
    error::{settings::SettingsError, Error},
    service::settings::schema::{SettingKey, SettingValue, Settings},
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    /// Creates a new instance of [`SettingsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the stored value for a key, or its default.
    pub async fn get(&self, key: SettingKey) -> SettingValue {
        let raw = match SettingRepository::new(self.db)
            .get(key.storage_key())
            .await
        {
            Ok(Some(raw)) => raw,
            Ok(None) => return key.default_value(),
            Err(err) => {
                tracing::warn!(
                    "Failed to read setting {}, using default: {}",
                    key.name(),
                    err
                );
                return key.default_value();
            }
        };

        parse_or_default(key, &raw)
    }

    /// Stores a value, rejecting one whose kind doesn't match the key.
    ///
    /// # Returns
    /// - `Ok(())` - Value stored
    /// - `Err(Error::SettingsError)` - Value kind doesn't match the key's kind
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn set(&self, key: SettingKey, value: SettingValue) -> Result<(), Error> {
        if value.kind() != key.kind() {
            return Err(SettingsError::InvalidValue {
                key: key.name(),
                value: value.to_storage_string(),
                expected: key.kind().as_str(),
            }
            .into());
        }

        SettingRepository::new(self.db)
            .set(key.storage_key(), value.to_storage_string())
            .await?;

        Ok(())
    }

    /// Parses a raw string by the key's kind and stores it.
    pub async fn set_raw(&self, key: SettingKey, raw: &str) -> Result<SettingValue, Error> {
        let value = key
            .kind()
            .parse(raw)
            .ok_or_else(|| SettingsError::InvalidValue {
                key: key.name(),
                value: raw.to_string(),
                expected: key.kind().as_str(),
            })?;

        self.set(key, value.clone()).await?;

        Ok(value)
    }

    /// Returns every setting, stored values merged over defaults.
    pub async fn get_all(&self) -> Settings {
        let mut settings = Settings::default();

        let rows = match SettingRepository::new(self.db).get_all().await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!("Failed to read settings, using defaults: {}", err);
                return settings;
            }
        };

        for key in SettingKey::ALL {
            if let Some(row) = rows.iter().find(|row| row.key == key.storage_key()) {
                settings.apply(key, parse_or_default(key, &row.value));
            }
        }

        settings
    }
}

fn parse_or_default(key: SettingKey, raw: &str) -> SettingValue {
    match key.kind().parse(raw) {
        Some(value) => value,
        None => {
            tracing::warn!(
                "Stored value {:?} for setting {} is not {}, using default",
                raw,
                key.name(),
                key.kind().as_str()
            );
            key.default_value()
        }
    }
}
