//! Data access layer repositories.
//!
//! Each repository wraps a borrowed connection (or transaction) and exposes the queries
//! one table needs. Repositories return [`sea_orm::DbErr`] and leave error mapping to the
//! services calling them.

pub mod cellar_location;
pub mod photo;
pub mod setting;
pub mod tag;
pub mod varietal;
pub mod wine;
pub mod winery;
