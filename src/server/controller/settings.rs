use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        settings::{SettingsDto, UpdateSettingDto},
    },
    server::{
        error::{settings::SettingsError, Error},
        model::app::AppState,
        service::settings::{schema::SettingKey, SettingsService},
    },
};

pub static SETTINGS_TAG: &str = "settings";

/// Get every setting, defaults filled in for unset keys
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Current settings", body = SettingsDto),
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> impl IntoResponse {
    let settings = SettingsService::new(&state.db).get_all().await;

    (StatusCode::OK, Json(SettingsDto::from(settings)))
}

/// Update a single setting
///
/// The value is parsed by the setting's kind: `true`/`false` for toggles, a number for
/// thresholds, any string for text settings.
#[utoipa::path(
    put,
    path = "/api/settings/{key}",
    tag = SETTINGS_TAG,
    params(("key" = String, Path, description = "Setting name, e.g. `currency`")),
    request_body = UpdateSettingDto,
    responses(
        (status = 204, description = "Setting stored"),
        (status = 400, description = "Unknown key or invalid value", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<UpdateSettingDto>,
) -> Result<impl IntoResponse, Error> {
    let key = SettingKey::from_name(&key).ok_or(SettingsError::UnknownKey(key))?;

    SettingsService::new(&state.db)
        .set_raw(key, &input.value)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
