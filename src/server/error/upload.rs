use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, ErrorMessageDto};

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file uploaded")]
    MissingFile,
    #[error("Invalid file type {0:?}. Only JPEG, PNG, and WebP images are allowed.")]
    InvalidMimeType(String),
    #[error("File too large: {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Failed to read multipart body: {0}")]
    Multipart(String),
    #[error("Failed to store object {key}: {source}")]
    Storage {
        key: String,
        #[source]
        source: opendal::Error,
    },
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingFile => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("Upload error: {}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorMessageDto {
                        error: "Upload failed".to_string(),
                        message: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
