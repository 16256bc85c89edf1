//! Database seeding.
//!
//! - [`catalog`] - Fixed varietal catalog loaded by the varietal service
//! - [`collection`] - Generates a complete wine collection
//! - [`generator`] - Pure, seedable synthesis of single wines
//! - [`reference`] - Fixed wineries, tags and cellar locations
//! - [`stats`] - Summary logged after a collection run

pub mod catalog;
pub mod collection;
pub mod generator;
pub mod reference;
pub mod stats;
