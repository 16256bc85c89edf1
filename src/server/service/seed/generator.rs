//! Pure wine synthesis.
//!
//! Every random decision of the collection seeder is made here against a caller supplied
//! [`Rng`], so a seeded generator reproduces the same collection for the same reference
//! data. Nothing in this module touches the database.

use chrono::{Datelike, Months, NaiveDate};
use entity::sea_orm_active_enums::{BottleSize, Sweetness, WineStatus, WineType};
use rand::{seq::IndexedRandom, Rng};

use crate::server::{
    error::seed::SeedError,
    model::{
        db::{CellarLocationModel, TagModel, VarietalModel, WineryModel},
        wine::NewWine,
    },
    service::seed::reference::{style_qualifiers, PURCHASE_LOCATIONS, RETAILERS},
};

pub const WINE_TYPES: [WineType; 7] = [
    WineType::Red,
    WineType::White,
    WineType::Rose,
    WineType::Sparkling,
    WineType::Dessert,
    WineType::Fortified,
    WineType::Orange,
];

pub const SWEETNESS_LEVELS: [Sweetness; 6] = [
    Sweetness::BoneDry,
    Sweetness::Dry,
    Sweetness::OffDry,
    Sweetness::MediumSweet,
    Sweetness::Sweet,
    Sweetness::VerySweet,
];

pub const EARLIEST_VINTAGE: i32 = 1990;
pub const MAX_TAGS_PER_WINE: usize = 3;
pub const FALLBACK_TASTING_NOTES: &str = "A well-balanced wine with good structure.";

const NON_VINTAGE_SPARKLING_PROBABILITY: f64 = 0.3;
const STYLE_QUALIFIER_PROBABILITY: f64 = 0.5;
const ANNUAL_APPRECIATION: f64 = 0.03;
const READY_TO_DRINK_PROBABILITY: f64 = 0.5;
const PAST_PEAK_PROBABILITY: f64 = 0.7;
const RESERVED_PROBABILITY: f64 = 0.05;
const PERSONAL_RATING_PROBABILITY: f64 = 0.6;
const CRITIC_RATING_PROBABILITY: f64 = 0.5;
const CHAMPAGNE_GRAPES: [&str; 2] = ["Chardonnay", "Pinot Noir"];

/// The varietal catalog partitioned by wine type.
#[derive(Debug, Default)]
pub struct VarietalBuckets {
    pub red: Vec<VarietalModel>,
    pub white: Vec<VarietalModel>,
    pub rose: Vec<VarietalModel>,
    pub sparkling: Vec<VarietalModel>,
    pub dessert: Vec<VarietalModel>,
    /// Chardonnay and Pinot Noir, whichever are present, used for sparkling wines.
    pub champagne: Vec<VarietalModel>,
}

impl VarietalBuckets {
    pub fn from_catalog(varietals: Vec<VarietalModel>) -> Self {
        let mut buckets = Self::default();

        for varietal in varietals {
            if CHAMPAGNE_GRAPES.contains(&varietal.name.as_str()) {
                buckets.champagne.push(varietal.clone());
            }

            match varietal.wine_type {
                WineType::Red => buckets.red.push(varietal),
                WineType::White => buckets.white.push(varietal),
                WineType::Rose => buckets.rose.push(varietal),
                WineType::Sparkling => buckets.sparkling.push(varietal),
                WineType::Dessert => buckets.dessert.push(varietal),
                WineType::Fortified | WineType::Orange => {}
            }
        }

        buckets
    }

    /// Candidate varietals for a wine of the given type.
    ///
    /// Rosé, fortified and orange wines are generated without a varietal.
    pub fn candidates(&self, wine_type: WineType) -> &[VarietalModel] {
        match wine_type {
            WineType::Red => &self.red,
            WineType::White => &self.white,
            WineType::Dessert => &self.dessert,
            WineType::Sparkling => &self.champagne,
            WineType::Rose | WineType::Fortified | WineType::Orange => &[],
        }
    }
}

/// Reference records and the date a collection is generated against.
pub struct GeneratorContext<'a> {
    wineries: &'a [WineryModel],
    tags: &'a [TagModel],
    locations: &'a [CellarLocationModel],
    buckets: &'a VarietalBuckets,
    today: NaiveDate,
}

impl<'a> GeneratorContext<'a> {
    /// Creates a new generator context
    ///
    /// # Returns
    /// - `Ok(GeneratorContext)` - Context ready to generate wines
    /// - `Err(SeedError::NoWineries)` - No winery to attach wines to
    pub fn new(
        wineries: &'a [WineryModel],
        tags: &'a [TagModel],
        locations: &'a [CellarLocationModel],
        buckets: &'a VarietalBuckets,
        today: NaiveDate,
    ) -> Result<Self, SeedError> {
        if wineries.is_empty() {
            return Err(SeedError::NoWineries);
        }

        Ok(Self {
            wineries,
            tags,
            locations,
            buckets,
            today,
        })
    }

    pub fn current_year(&self) -> i32 {
        self.today.year()
    }
}

/// Synthesizes one wine.
pub fn generate_wine<R: Rng + ?Sized>(rng: &mut R, ctx: &GeneratorContext) -> NewWine {
    let current_year = ctx.current_year();

    // Non-empty, checked by GeneratorContext::new
    let winery = &ctx.wineries[rng.random_range(0..ctx.wineries.len())];
    let wine_type = WINE_TYPES[rng.random_range(0..WINE_TYPES.len())];
    let vintage = pick_vintage(rng, wine_type, current_year);
    let varietal = ctx.buckets.candidates(wine_type).choose(rng);
    let name = build_name(rng, wine_type, varietal, vintage);

    let (min_price, max_price) = price_range(wine_type, winery);
    let purchase_price = round2(rng.random_range(min_price..=max_price));
    let current_value = value_at_age(purchase_price, vintage, current_year);
    let estimated_value = round2(current_value * rng.random_range(0.95..=1.15));

    let (drink_from, drink_to, peak_drinking) = drinking_window(rng, vintage, current_year);
    let status = derive_status(rng, drink_from, drink_to, current_year);
    let sweetness = pick_sweetness(rng, wine_type);
    let tag_ids = pick_tags(rng, ctx.tags);

    let purchase_date = purchase_date(rng, vintage, ctx.today);
    let purchase_location = PURCHASE_LOCATIONS.choose(rng).map(|l| l.to_string());
    let retailer = RETAILERS.choose(rng).map(|r| r.to_string());
    let storage_location = ctx.locations.choose(rng).map(|l| l.name.clone());
    let bin = format!(
        "{}{}",
        char::from(b'A' + rng.random_range(0..6u8)),
        rng.random_range(1..=20)
    );
    let rack = format!("Rack {}", rng.random_range(1..=10));

    let personal_rating = if rng.random_bool(PERSONAL_RATING_PROBABILITY) {
        Some(rng.random_range(80..=100))
    } else {
        None
    };
    let critic_rating = if rng.random_bool(CRITIC_RATING_PROBABILITY) {
        Some(rng.random_range(85..=100))
    } else {
        None
    };

    NewWine {
        name,
        vintage,
        winery_id: winery.id,
        varietal_id: varietal.map(|v| v.id),
        region: winery.region.clone(),
        country: winery.country.clone(),
        wine_type,
        sweetness,
        quantity: rng.random_range(1..=6),
        bottle_size: BottleSize::Standard,
        purchase_date: Some(purchase_date),
        purchase_price,
        purchase_location,
        retailer,
        storage_location,
        bin: Some(bin),
        rack: Some(rack),
        drink_from,
        drink_to,
        peak_drinking,
        personal_rating,
        critic_rating,
        tasting_notes: tasting_notes(varietal),
        current_value,
        estimated_value,
        status,
        tag_ids,
    }
}

/// Non-vintage only happens for sparkling wine.
pub fn pick_vintage<R: Rng + ?Sized>(
    rng: &mut R,
    wine_type: WineType,
    current_year: i32,
) -> Option<i32> {
    if wine_type == WineType::Sparkling && rng.random_bool(NON_VINTAGE_SPARKLING_PROBABILITY) {
        return None;
    }

    Some(rng.random_range(EARLIEST_VINTAGE..=current_year - 1))
}

/// Builds the display name: optional style qualifier, base name, optional vintage.
///
/// Sparkling wines are always labelled "Champagne", qualifiers are still looked up by the
/// underlying varietal.
pub fn build_name<R: Rng + ?Sized>(
    rng: &mut R,
    wine_type: WineType,
    varietal: Option<&VarietalModel>,
    vintage: Option<i32>,
) -> String {
    let base = match (wine_type, varietal) {
        (WineType::Sparkling, _) => "Champagne",
        (_, Some(varietal)) => varietal.name.as_str(),
        (_, None) => "Estate Wine",
    };

    let qualifiers = varietal
        .map(|v| style_qualifiers(&v.name))
        .unwrap_or_default();

    let mut name = match qualifiers.choose(rng) {
        Some(qualifier) if rng.random_bool(STYLE_QUALIFIER_PROBABILITY) => {
            format!("{} {}", qualifier, base)
        }
        _ => base.to_string(),
    };

    if let Some(vintage) = vintage {
        name.push_str(&format!(" {}", vintage));
    }

    name
}

/// Purchase price bounds, Bordeaux overriding the type based range.
pub fn price_range(wine_type: WineType, winery: &WineryModel) -> (f64, f64) {
    let mut range = match wine_type {
        WineType::Sparkling | WineType::Dessert => (30.0, 300.0),
        _ => (15.0, 150.0),
    };

    if winery.country == "France" && winery.region.contains("Bordeaux") {
        range = (50.0, 500.0);
    }

    range
}

/// Appreciates the purchase price by 3% per year since the vintage.
pub fn value_at_age(purchase_price: f64, vintage: Option<i32>, current_year: i32) -> f64 {
    let age = vintage
        .map(|vintage| (current_year - vintage).max(0))
        .unwrap_or(0);

    round2(purchase_price * (1.0 + ANNUAL_APPRECIATION * age as f64))
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Returns `(drink_from, drink_to, peak_drinking)`.
pub fn drinking_window<R: Rng + ?Sized>(
    rng: &mut R,
    vintage: Option<i32>,
    current_year: i32,
) -> (i32, i32, i32) {
    let drink_from = match vintage {
        Some(vintage) => vintage + rng.random_range(3..=8),
        None => current_year,
    };
    let drink_to = drink_from + rng.random_range(10..=25);
    let peak_drinking = (drink_from + drink_to).div_euclid(2);

    (drink_from, drink_to, peak_drinking)
}

pub fn derive_status<R: Rng + ?Sized>(
    rng: &mut R,
    drink_from: i32,
    drink_to: i32,
    current_year: i32,
) -> WineStatus {
    let mut status = WineStatus::InCellar;

    if (drink_from..=drink_to).contains(&current_year) {
        if rng.random_bool(READY_TO_DRINK_PROBABILITY) {
            status = WineStatus::ReadyToDrink;
        }
    } else if drink_to < current_year && rng.random_bool(PAST_PEAK_PROBABILITY) {
        status = WineStatus::PastPeak;
    }

    if rng.random_bool(RESERVED_PROBABILITY) {
        status = WineStatus::Reserved;
    }

    status
}

/// Reds are always dry, whites and dessert wines span every level, the rest have none.
pub fn pick_sweetness<R: Rng + ?Sized>(rng: &mut R, wine_type: WineType) -> Option<Sweetness> {
    match wine_type {
        WineType::Red => Some(Sweetness::Dry),
        WineType::White | WineType::Dessert => SWEETNESS_LEVELS.choose(rng).copied(),
        _ => None,
    }
}

/// Draws up to three tags, silently dropping repeats.
pub fn pick_tags<R: Rng + ?Sized>(rng: &mut R, tags: &[TagModel]) -> Vec<i32> {
    let count = rng.random_range(0..=MAX_TAGS_PER_WINE);
    let mut tag_ids = Vec::with_capacity(count);

    for _ in 0..count {
        if let Some(tag) = tags.choose(rng) {
            if !tag_ids.contains(&tag.id) {
                tag_ids.push(tag.id);
            }
        }
    }

    tag_ids
}

/// First three characteristics of the varietal.
pub fn tasting_notes(varietal: Option<&VarietalModel>) -> String {
    match varietal {
        Some(varietal) => varietal
            .characteristics
            .0
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", "),
        None => FALLBACK_TASTING_NOTES.to_string(),
    }
}

/// Random day between the earliest plausible purchase and `today`.
///
/// A vintage wine can't be bought before the year after harvest, non-vintage wines go back
/// five years, and nothing goes back further than twenty.
pub fn purchase_date<R: Rng + ?Sized>(
    rng: &mut R,
    vintage: Option<i32>,
    today: NaiveDate,
) -> NaiveDate {
    let earliest_year = vintage
        .map(|vintage| vintage + 1)
        .unwrap_or(today.year() - 5);
    let twenty_years_back = today.checked_sub_months(Months::new(240)).unwrap_or(today);

    let earliest = NaiveDate::from_ymd_opt(earliest_year, 1, 1)
        .unwrap_or(today)
        .max(twenty_years_back)
        .min(today);

    let span = (today - earliest).num_days();
    earliest + chrono::Duration::days(rng.random_range(0..=span))
}
