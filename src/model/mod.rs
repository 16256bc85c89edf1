//! Request and response bodies shared by the HTTP API.

pub mod api;
pub mod photo;
pub mod settings;
pub mod upload;
pub mod varietal;
