//! Error types for the cellar server and seed commands.
//!
//! Each domain has its own error enum (configuration, cellar records, seeding, uploads,
//! settings). They are aggregated into [`Error`] so the `?` operator works across layers,
//! and every error converts into an Axum response for the HTTP API.

pub mod cellar;
pub mod config;
pub mod seed;
pub mod settings;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        cellar::CellarError, config::ConfigError, seed::SeedError, settings::SettingsError,
        upload::UploadError,
    },
};

/// Main error type for the cellar application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Cellar record errors (missing varietal or wine, name collisions)
/// - Seed errors (preconditions of the collection generator)
/// - Upload errors (multipart validation, object storage)
/// - Settings errors (unknown keys, values not matching the key's kind)
/// - External library errors (database, object storage, IO)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Cellar record error (not found, name already taken).
    #[error(transparent)]
    CellarError(#[from] CellarError),
    /// Seed precondition error.
    #[error(transparent)]
    SeedError(#[from] SeedError),
    /// Photo upload error.
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// Settings validation error.
    #[error(transparent)]
    SettingsError(#[from] SettingsError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Object storage error.
    #[error(transparent)]
    StorageError(#[from] opendal::Error),
    /// IO error (binding the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own status mapping; everything else is an internal
/// server error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CellarError(err) => err.into_response(),
            Self::UploadError(err) => err.into_response(),
            Self::SettingsError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
