use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error(
        "No varietals found in the database. Run `cellar seed varietals` first to load the \
        varietal catalog, then run the collection seed again."
    )]
    EmptyVarietalCatalog,
    #[error("Cannot generate wines without at least one winery")]
    NoWineries,
}

impl IntoResponse for SeedError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
