use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ErrorMessageDto},
        upload::{UploadDto, UploadFormDto},
    },
    server::{
        error::{upload::UploadError, Error},
        model::app::AppState,
        service::upload::UploadService,
    },
};

pub static UPLOAD_TAG: &str = "upload";

/// Name of the multipart field holding the image.
const FILE_FIELD: &str = "file";

/// Upload a wine photo
///
/// Accepts a single JPEG, PNG or WebP image of at most 5 MB and stores it in object
/// storage. Attach the returned key to a wine with `POST /api/wines/{id}/photos`.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = UPLOAD_TAG,
    request_body(content = UploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = UploadDto),
        (status = 400, description = "No file uploaded", body = ErrorDto),
        (status = 500, description = "Invalid file or storage failure", body = ErrorMessageDto)
    ),
)]
pub async fn upload_photo(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, Error> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!("Rejected upload without multipart body: {}", rejection);
            return Err(UploadError::MissingFile.into());
        }
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| UploadError::Multipart(err.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let mimetype = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|err| UploadError::Multipart(err.body_text()))?;

        let upload = UploadService::new(&state.storage, &state.public_url)
            .upload(file_name.as_deref(), &mimetype, data)
            .await?;

        return Ok((StatusCode::OK, Json(upload)));
    }

    Err(UploadError::MissingFile.into())
}
