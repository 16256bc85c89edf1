use chrono::Utc;
use entity::{
    sea_orm_active_enums::{BottleSize, WineStatus, WineType},
    varietal::StringList,
};
use sea_orm::ActiveValue;

/// Create a mock varietal with default test values.
///
/// # Arguments
/// - `name` - Unique varietal name
/// - `wine_type` - Wine type the varietal belongs to
pub fn mock_varietal(name: &str, wine_type: WineType) -> entity::varietal::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::varietal::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        wine_type: ActiveValue::Set(wine_type),
        description: ActiveValue::Set(format!("{} test description", name)),
        common_regions: ActiveValue::Set(StringList(vec!["Test Region".to_string()])),
        characteristics: ActiveValue::Set(StringList(vec![
            "Cherry".to_string(),
            "Oak".to_string(),
            "Spice".to_string(),
            "Vanilla".to_string(),
        ])),
        aliases: ActiveValue::Set(StringList::default()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

/// Create a mock winery with the provided location.
pub fn mock_winery(name: &str, region: &str, country: &str) -> entity::winery::ActiveModel {
    entity::winery::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        region: ActiveValue::Set(region.to_string()),
        country: ActiveValue::Set(country.to_string()),
        founded: ActiveValue::Set(1900),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}

/// Create a mock tag without a color.
pub fn mock_tag(name: &str) -> entity::tag::ActiveModel {
    entity::tag::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        color: ActiveValue::Set(None),
        ..Default::default()
    }
}

/// Create a mock wine for the given winery.
///
/// Region and country are copied from the winery the same way the collection seeder does.
pub fn mock_wine(
    winery: &entity::winery::Model,
    varietal_id: Option<i32>,
    wine_type: WineType,
) -> entity::wine::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::wine::ActiveModel {
        name: ActiveValue::Set("Test Wine 2015".to_string()),
        vintage: ActiveValue::Set(Some(2015)),
        winery_id: ActiveValue::Set(winery.id),
        varietal_id: ActiveValue::Set(varietal_id),
        region: ActiveValue::Set(winery.region.clone()),
        country: ActiveValue::Set(winery.country.clone()),
        wine_type: ActiveValue::Set(wine_type),
        sweetness: ActiveValue::Set(None),
        quantity: ActiveValue::Set(1),
        bottle_size: ActiveValue::Set(BottleSize::Standard),
        purchase_date: ActiveValue::Set(None),
        purchase_price: ActiveValue::Set(Some(25.0)),
        purchase_location: ActiveValue::Set(None),
        retailer: ActiveValue::Set(None),
        storage_location: ActiveValue::Set(None),
        bin: ActiveValue::Set(None),
        rack: ActiveValue::Set(None),
        drink_from: ActiveValue::Set(Some(2020)),
        drink_to: ActiveValue::Set(Some(2035)),
        peak_drinking: ActiveValue::Set(Some(2027)),
        personal_rating: ActiveValue::Set(None),
        critic_rating: ActiveValue::Set(None),
        tasting_notes: ActiveValue::Set(None),
        current_value: ActiveValue::Set(Some(30.0)),
        estimated_value: ActiveValue::Set(Some(31.0)),
        status: ActiveValue::Set(WineStatus::InCellar),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}
