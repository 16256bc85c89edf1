pub type VarietalModel = entity::varietal::Model;
pub type WineryModel = entity::winery::Model;
pub type TagModel = entity::tag::Model;
pub type WineModel = entity::wine::Model;
pub type SettingModel = entity::setting::Model;
