//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used across repositories and services so
//! signatures don't need to spell out the `entity` crate paths.

/// Grape varietal reference record, upserted by name.
pub type VarietalModel = entity::varietal::Model;

/// Winery a wine belongs to.
///
/// # Fields (from `entity::winery::Model`)
/// - `id` - Primary key
/// - `name` - Winery name
/// - `region` - Region the winery is located in, copied onto each wine
/// - `country` - Country the winery is located in, copied onto each wine
/// - `founded` - Year the winery was founded
/// - `created_at` - Timestamp when the record was created
pub type WineryModel = entity::winery::Model;

/// Free-form label attached to wines through `wine_tag`.
pub type TagModel = entity::tag::Model;

/// Physical storage area of the cellar.
pub type CellarLocationModel = entity::cellar_location::Model;

/// A wine held in the cellar.
pub type WineModel = entity::wine::Model;

/// Photo stored in object storage and attached to a wine.
pub type PhotoModel = entity::photo::Model;

/// Raw key/value settings row.
pub type SettingModel = entity::setting::Model;
