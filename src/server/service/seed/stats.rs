use entity::sea_orm_active_enums::WineType;
use sea_orm::ActiveEnum;

/// Summary of a generated collection.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionStats {
    pub wine_count: usize,
    /// Wine count per type, most common first.
    pub by_type: Vec<(WineType, i64)>,
    /// Up to ten varietals with the most wines, with their wine count.
    pub top_varietals: Vec<(String, i64)>,
    /// Sum of `current_value * quantity` over the generated wines.
    pub total_value: f64,
}

impl CollectionStats {
    pub fn log(&self) {
        tracing::info!("Created {} wines", self.wine_count);

        for (wine_type, count) in &self.by_type {
            tracing::info!("  {}: {}", wine_type.to_value(), count);
        }

        tracing::info!("Top varietals:");
        for (name, count) in &self.top_varietals {
            tracing::info!("  {}: {} wines", name, count);
        }

        tracing::info!("Total collection value: ${:.2}", self.total_value);
    }
}
