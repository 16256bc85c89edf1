use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CellarError {
    #[error("Varietal ID {0} not found")]
    VarietalNotFound(i32),
    #[error("A varietal named {0:?} already exists")]
    VarietalNameTaken(String),
    #[error("Wine ID {0} not found")]
    WineNotFound(i32),
}

impl IntoResponse for CellarError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::VarietalNotFound(_) | Self::WineNotFound(_) => StatusCode::NOT_FOUND,
            Self::VarietalNameTaken(_) => StatusCode::CONFLICT,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
