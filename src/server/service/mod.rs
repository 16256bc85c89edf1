//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and object storage on behalf of the HTTP controllers
//! and the seed commands.

pub mod photo;
pub mod seed;
pub mod settings;
pub mod upload;
pub mod varietal;
