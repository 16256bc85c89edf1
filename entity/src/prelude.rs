pub use super::cellar_location::Entity as CellarLocation;
pub use super::photo::Entity as Photo;
pub use super::setting::Entity as Setting;
pub use super::tag::Entity as Tag;
pub use super::varietal::Entity as Varietal;
pub use super::wine::Entity as Wine;
pub use super::wine_tag::Entity as WineTag;
pub use super::winery::Entity as Winery;
