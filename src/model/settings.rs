use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SettingsDto {
    pub default_bottle_size: String,
    pub currency: String,
    pub currency_symbol: String,
    pub low_quantity_threshold: f64,
    pub sort_by: String,
    pub view_style: String,
    pub show_prices: bool,
    pub show_drinking_window: bool,
}

/// Request body for updating a single setting, parsed by the setting's declared kind
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateSettingDto {
    pub value: String,
}
