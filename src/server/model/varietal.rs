use entity::sea_orm_active_enums::WineType;

use crate::{
    model::varietal::{VarietalDto, VarietalInputDto},
    server::model::db::VarietalModel,
};

/// Every field of a varietal except its id and timestamps.
///
/// Used both for catalog upserts and for full replacement through the varietal API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewVarietal {
    pub name: String,
    pub wine_type: WineType,
    pub description: String,
    pub common_regions: Vec<String>,
    pub characteristics: Vec<String>,
    pub aliases: Vec<String>,
}

impl From<VarietalInputDto> for NewVarietal {
    fn from(dto: VarietalInputDto) -> Self {
        Self {
            name: dto.name,
            wine_type: dto.wine_type,
            description: dto.description,
            common_regions: dto.common_regions,
            characteristics: dto.characteristics,
            aliases: dto.aliases,
        }
    }
}

impl From<VarietalModel> for VarietalDto {
    fn from(model: VarietalModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            wine_type: model.wine_type,
            description: model.description,
            common_regions: model.common_regions.0,
            characteristics: model.characteristics.0,
            aliases: model.aliases.0,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
