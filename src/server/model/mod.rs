//! Server application models and type definitions.
//!
//! Application state shared by HTTP handlers, database model type aliases, and the
//! unpersisted record shapes passed from services to the repositories.

pub mod app;
pub mod db;
pub mod reference;
pub mod varietal;
pub mod wine;
