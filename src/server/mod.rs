//! Server application core modules.
//!
//! This module contains all server-side functionality for the cellar backend: HTTP routing,
//! database operations, the varietal catalog and collection seeders, typed user settings
//! and photo uploads to object storage.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
