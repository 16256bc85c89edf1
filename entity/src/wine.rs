use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{BottleSize, Sweetness, WineStatus, WineType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wine")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
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
    pub purchase_date: Option<Date>,
    pub purchase_price: Option<f64>,
    pub purchase_location: Option<String>,
    pub retailer: Option<String>,
    pub storage_location: Option<String>,
    pub bin: Option<String>,
    pub rack: Option<String>,
    pub drink_from: Option<i32>,
    pub drink_to: Option<i32>,
    pub peak_drinking: Option<i32>,
    pub personal_rating: Option<i32>,
    pub critic_rating: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub tasting_notes: Option<String>,
    pub current_value: Option<f64>,
    pub estimated_value: Option<f64>,
    pub status: WineStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::winery::Entity",
        from = "Column::WineryId",
        to = "super::winery::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    Winery,
    #[sea_orm(
        belongs_to = "super::varietal::Entity",
        from = "Column::VarietalId",
        to = "super::varietal::Column::Id",
        on_delete = "SetNull",
        on_update = "Cascade"
    )]
    Varietal,
    #[sea_orm(has_many = "super::wine_tag::Entity")]
    WineTag,
    #[sea_orm(has_many = "super::photo::Entity")]
    Photo,
}

impl Related<super::winery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Winery.def()
    }
}

impl Related<super::varietal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Varietal.def()
    }
}

impl Related<super::wine_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WineTag.def()
    }
}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photo.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::wine_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::wine_tag::Relation::Wine.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
