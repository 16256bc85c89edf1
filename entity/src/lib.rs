pub mod prelude;

pub mod cellar_location;
pub mod photo;
pub mod sea_orm_active_enums;
pub mod setting;
pub mod tag;
pub mod varietal;
pub mod wine;
pub mod wine_tag;
pub mod winery;
