use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        varietal::{VarietalDto, VarietalInputDto},
    },
    server::{error::Error, model::app::AppState, service::varietal::VarietalService},
};

pub static VARIETAL_TAG: &str = "varietal";

/// List every varietal sorted by name
#[utoipa::path(
    get,
    path = "/api/varietals",
    tag = VARIETAL_TAG,
    responses(
        (status = 200, description = "All varietals", body = Vec<VarietalDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_varietals(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let varietals = VarietalService::new(&state.db).list().await?;

    let varietal_dtos: Vec<VarietalDto> = varietals.into_iter().map(VarietalDto::from).collect();

    Ok((StatusCode::OK, Json(varietal_dtos)))
}

/// Get a varietal by ID
#[utoipa::path(
    get,
    path = "/api/varietals/{id}",
    tag = VARIETAL_TAG,
    params(("id" = i32, Path, description = "Varietal ID")),
    responses(
        (status = 200, description = "The varietal", body = VarietalDto),
        (status = 404, description = "Varietal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_varietal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let varietal = VarietalService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(VarietalDto::from(varietal))))
}

/// Create a varietal
#[utoipa::path(
    post,
    path = "/api/varietals",
    tag = VARIETAL_TAG,
    request_body = VarietalInputDto,
    responses(
        (status = 201, description = "Varietal created", body = VarietalDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_varietal(
    State(state): State<AppState>,
    Json(input): Json<VarietalInputDto>,
) -> Result<impl IntoResponse, Error> {
    let varietal = VarietalService::new(&state.db).create(input.into()).await?;

    Ok((StatusCode::CREATED, Json(VarietalDto::from(varietal))))
}

/// Replace every field of a varietal
#[utoipa::path(
    put,
    path = "/api/varietals/{id}",
    tag = VARIETAL_TAG,
    params(("id" = i32, Path, description = "Varietal ID")),
    request_body = VarietalInputDto,
    responses(
        (status = 200, description = "Varietal updated", body = VarietalDto),
        (status = 404, description = "Varietal not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_varietal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<VarietalInputDto>,
) -> Result<impl IntoResponse, Error> {
    let varietal = VarietalService::new(&state.db)
        .update(id, input.into())
        .await?;

    Ok((StatusCode::OK, Json(VarietalDto::from(varietal))))
}

/// Delete a varietal
///
/// Wines of the varietal are kept without a varietal.
#[utoipa::path(
    delete,
    path = "/api/varietals/{id}",
    tag = VARIETAL_TAG,
    params(("id" = i32, Path, description = "Varietal ID")),
    responses(
        (status = 204, description = "Varietal deleted"),
        (status = 404, description = "Varietal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_varietal(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    VarietalService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
