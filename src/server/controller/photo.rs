use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        photo::{AttachPhotoDto, PhotoDto},
    },
    server::{
        error::Error,
        model::{app::AppState, db::PhotoModel},
        service::photo::PhotoService,
    },
};

pub static PHOTO_TAG: &str = "photo";

fn to_dto(photo: PhotoModel) -> PhotoDto {
    PhotoDto {
        id: photo.id,
        wine_id: photo.wine_id,
        url: photo.url,
        key: photo.storage_key,
        created_at: photo.created_at,
    }
}

/// Attach an uploaded photo to a wine
#[utoipa::path(
    post,
    path = "/api/wines/{id}/photos",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Wine ID")),
    request_body = AttachPhotoDto,
    responses(
        (status = 201, description = "Photo attached", body = PhotoDto),
        (status = 404, description = "Wine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_photo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<AttachPhotoDto>,
) -> Result<impl IntoResponse, Error> {
    let photo = PhotoService::new(&state.db)
        .attach(id, input.url, input.key)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(photo))))
}

/// List the photos of a wine
#[utoipa::path(
    get,
    path = "/api/wines/{id}/photos",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Wine ID")),
    responses(
        (status = 200, description = "Photos of the wine, oldest first", body = Vec<PhotoDto>),
        (status = 404, description = "Wine not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_photos(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let photos = PhotoService::new(&state.db).list(id).await?;

    let photo_dtos: Vec<PhotoDto> = photos.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(photo_dtos)))
}
