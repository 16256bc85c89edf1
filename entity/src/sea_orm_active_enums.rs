use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WineType {
    #[sea_orm(string_value = "RED")]
    Red,
    #[sea_orm(string_value = "WHITE")]
    White,
    #[sea_orm(string_value = "ROSE")]
    Rose,
    #[sea_orm(string_value = "SPARKLING")]
    Sparkling,
    #[sea_orm(string_value = "DESSERT")]
    Dessert,
    #[sea_orm(string_value = "FORTIFIED")]
    Fortified,
    #[sea_orm(string_value = "ORANGE")]
    Orange,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sweetness {
    #[sea_orm(string_value = "BONE_DRY")]
    BoneDry,
    #[sea_orm(string_value = "DRY")]
    Dry,
    #[sea_orm(string_value = "OFF_DRY")]
    OffDry,
    #[sea_orm(string_value = "MEDIUM_SWEET")]
    MediumSweet,
    #[sea_orm(string_value = "SWEET")]
    Sweet,
    #[sea_orm(string_value = "VERY_SWEET")]
    VerySweet,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BottleSize {
    /// 187.5 ml
    #[sea_orm(string_value = "SPLIT")]
    Split,
    /// 375 ml
    #[sea_orm(string_value = "HALF")]
    Half,
    /// 750 ml
    #[default]
    #[sea_orm(string_value = "STANDARD")]
    Standard,
    #[sea_orm(string_value = "LITER")]
    Liter,
    /// 1.5 l
    #[sea_orm(string_value = "MAGNUM")]
    Magnum,
    /// 3 l
    #[sea_orm(string_value = "DOUBLE_MAGNUM")]
    DoubleMagnum,
    /// 4.5 l
    #[sea_orm(string_value = "JEROBOAM")]
    Jeroboam,
    /// 6 l
    #[sea_orm(string_value = "IMPERIAL")]
    Imperial,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WineStatus {
    #[sea_orm(string_value = "IN_CELLAR")]
    InCellar,
    #[sea_orm(string_value = "READY_TO_DRINK")]
    ReadyToDrink,
    #[sea_orm(string_value = "PAST_PEAK")]
    PastPeak,
    #[sea_orm(string_value = "RESERVED")]
    Reserved,
}
