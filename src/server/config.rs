use crate::server::error::config::ConfigError;

/// Address the HTTP server binds to when `BIND_ADDRESS` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:4000";

/// Settings shared by every command.
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")?
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

/// Object storage settings, only needed by `cellar serve`.
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Base URL uploaded objects are publicly reachable under.
    pub public_url: String,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bucket: required("STORAGE_BUCKET")?,
            region: required("STORAGE_REGION")?,
            endpoint: required("STORAGE_ENDPOINT")?,
            access_key_id: required("STORAGE_ACCESS_KEY_ID")?,
            secret_access_key: required("STORAGE_SECRET_ACCESS_KEY")?,
            public_url: required("STORAGE_PUBLIC_URL")?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var)?.ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(var: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is not valid unicode".to_string(),
        }),
    }
}
