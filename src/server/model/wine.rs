use chrono::NaiveDate;
use entity::sea_orm_active_enums::{BottleSize, Sweetness, WineStatus, WineType};

/// A wine that has not yet been persisted.
///
/// Produced by the collection generator and consumed by
/// [`WineRepository::create`](crate::server::data::wine::WineRepository::create), which writes
/// the wine row followed by one `wine_tag` link per entry in `tag_ids`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewWine {
    pub name: String,
    pub vintage: Option<i32>,
    pub winery_id: i32,
    pub varietal_id: Option<i32>,
    pub region: String,
    pub country: String,
    pub wine_type: WineType,
    pub sweetness: Option<Sweetness>,
    pub quantity: i32,
    pub bottle_size: BottleSize,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: f64,
    pub purchase_location: Option<String>,
    pub retailer: Option<String>,
    pub storage_location: Option<String>,
    pub bin: Option<String>,
    pub rack: Option<String>,
    pub drink_from: i32,
    pub drink_to: i32,
    pub peak_drinking: i32,
    pub personal_rating: Option<i32>,
    pub critic_rating: Option<i32>,
    pub tasting_notes: String,
    pub current_value: f64,
    pub estimated_value: f64,
    pub status: WineStatus,
    /// Distinct tag ids, at most three.
    pub tag_ids: Vec<i32>,
}
