//! Test fixture modules for database record creation.
//!
//! - `cellar` - Varietal, winery, tag and wine records

pub mod cellar;
