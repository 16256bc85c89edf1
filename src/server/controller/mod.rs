//! HTTP controller endpoints for the cellar web API.
//!
//! Axum handlers that extract request data, call into the service layer and map the
//! results to JSON responses. Every handler carries a `utoipa` annotation so it shows up
//! in the generated OpenAPI document.

pub mod photo;
pub mod settings;
pub mod upload;
pub mod varietal;
