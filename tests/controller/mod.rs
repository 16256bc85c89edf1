//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments where possible. The upload
//! endpoint goes through the full router since its multipart body has to be parsed.

mod photo;
mod settings;
mod upload;
mod varietal;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cellar::server::model::app::AppState;
use cellar_test_utils::prelude::*;
use entity::sea_orm_active_enums::WineType;
use serde_json::Value;

use crate::util::body_json;
