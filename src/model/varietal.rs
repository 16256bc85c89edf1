use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::WineType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VarietalDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "RED")]
    pub wine_type: WineType,
    pub description: String,
    pub common_regions: Vec<String>,
    pub characteristics: Vec<String>,
    pub aliases: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating or fully replacing a varietal
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VarietalInputDto {
    pub name: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "RED")]
    pub wine_type: WineType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub common_regions: Vec<String>,
    #[serde(default)]
    pub characteristics: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}
