//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here through `utoipa-axum`, which collects their
//! `#[utoipa::path]` annotations into a single OpenAPI document. The document is served as
//! JSON at `/api/docs/openapi.json`.

use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState, service::upload::MAX_UPLOAD_BYTES};

/// Request body limit; leaves room for multipart framing around a maximum size upload.
const BODY_LIMIT_BYTES: usize = MAX_UPLOAD_BYTES as usize + 1024 * 1024;

/// Builds the application's HTTP router with all API endpoints.
///
/// # Registered Endpoints
/// - `POST /api/upload` - Upload a wine photo to object storage
/// - `GET|POST /api/wines/{id}/photos` - List or attach photos of a wine
/// - `GET|POST /api/varietals` - List or create varietals
/// - `GET|PUT|DELETE /api/varietals/{id}` - Read, replace or delete a varietal
/// - `GET /api/settings` - Read all settings
/// - `PUT /api/settings/{key}` - Update one setting
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given its state with `with_state`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Cellar", description = "Cellar API"), tags(
        (name = controller::upload::UPLOAD_TAG, description = "Photo upload API routes"),
        (name = controller::photo::PHOTO_TAG, description = "Wine photo API routes"),
        (name = controller::varietal::VARIETAL_TAG, description = "Varietal catalog API routes"),
        (name = controller::settings::SETTINGS_TAG, description = "User settings API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::upload::upload_photo))
        .routes(routes!(
            controller::photo::attach_photo,
            controller::photo::list_photos
        ))
        .routes(routes!(
            controller::varietal::list_varietals,
            controller::varietal::create_varietal
        ))
        .routes(routes!(
            controller::varietal::get_varietal,
            controller::varietal::update_varietal,
            controller::varietal::delete_varietal
        ))
        .routes(routes!(controller::settings::get_settings))
        .routes(routes!(controller::settings::update_setting))
        .split_for_parts();

    routes
        .route(
            "/api/docs/openapi.json",
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}
