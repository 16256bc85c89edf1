use std::collections::{HashMap, HashSet};

use cellar::server::{
    data::{varietal::VarietalRepository, wine::WineRepository, winery::WineryRepository},
    service::{
        seed::{
            collection::{CollectionSeeder, SeedOptions},
            generator::round2,
        },
        varietal::VarietalService,
    },
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{Sweetness, WineType};
use rand::{rngs::StdRng, SeedableRng};

use super::*;

const WINE_COUNT: usize = 1000;

fn options() -> SeedOptions {
    SeedOptions {
        wine_count: WINE_COUNT,
        today: NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
    }
}

/// Tests a full seed run: catalog load followed by a 1000 wine collection.
///
/// Verifies every generated wine against the collection rules: varietal type agreement
/// outside sparkling, sweetness by type, quantity and tag bounds, drinking window order,
/// current value derived from price and age, and the Bordeaux price range.
///
/// Expected: exactly 1000 wines, type counts summing to 1000, all rules holding
#[tokio::test]
async fn seeds_catalog_and_collection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cellar_tables().build().await?;

    VarietalService::new(&test.db)
        .load_catalog()
        .await
        .unwrap();

    let mut rng = StdRng::seed_from_u64(42);
    let stats = CollectionSeeder::new(&test.db)
        .run(&mut rng, options())
        .await
        .unwrap();

    let wine_repo = WineRepository::new(&test.db);
    assert_eq!(stats.wine_count, WINE_COUNT);
    assert_eq!(wine_repo.count().await?, WINE_COUNT as u64);
    assert_eq!(
        stats.by_type.iter().map(|(_, count)| count).sum::<i64>(),
        WINE_COUNT as i64
    );
    assert!(stats.top_varietals.len() <= 10);
    assert!(stats.total_value > 0.0);

    let varietal_types: HashMap<i32, WineType> = VarietalRepository::new(&test.db)
        .get_all()
        .await?
        .into_iter()
        .map(|varietal| (varietal.id, varietal.wine_type))
        .collect();
    let wineries: HashMap<i32, (String, String)> = WineryRepository::new(&test.db)
        .get_all()
        .await?
        .into_iter()
        .map(|winery| (winery.id, (winery.region, winery.country)))
        .collect();
    assert_eq!(wineries.len(), 100);

    for wine in wine_repo.get_all().await? {
        if let Some(varietal_id) = wine.varietal_id {
            if wine.wine_type != WineType::Sparkling {
                assert_eq!(varietal_types[&varietal_id], wine.wine_type);
            }
        }

        match wine.wine_type {
            WineType::Red => assert_eq!(wine.sweetness, Some(Sweetness::Dry)),
            WineType::White | WineType::Dessert => assert!(wine.sweetness.is_some()),
            _ => assert_eq!(wine.sweetness, None),
        }

        assert!((1..=6).contains(&wine.quantity));

        let (drink_from, drink_to) = (wine.drink_from.unwrap(), wine.drink_to.unwrap());
        assert!(drink_from <= drink_to);

        let purchase_price = wine.purchase_price.unwrap();
        let age = wine.vintage.map_or(0, |vintage| (2025 - vintage).max(0));
        assert_eq!(
            wine.current_value.unwrap(),
            round2(purchase_price * (1.0 + 0.03 * age as f64))
        );

        let (region, country) = &wineries[&wine.winery_id];
        if country == "France" && region.contains("Bordeaux") {
            assert!((50.0..=500.0).contains(&purchase_price));
        }

        let tag_ids = wine_repo.get_tag_ids(wine.id).await?;
        let unique: HashSet<i32> = tag_ids.iter().copied().collect();
        assert!(tag_ids.len() <= 3);
        assert_eq!(unique.len(), tag_ids.len());
    }

    Ok(())
}

/// Tests the same seed produces the same collection.
///
/// Expected: identical wine names and prices across two seeded runs
#[tokio::test]
async fn seeded_runs_are_reproducible() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cellar_tables().build().await?;
    VarietalService::new(&test.db)
        .load_catalog()
        .await
        .unwrap();

    let seeder = CollectionSeeder::new(&test.db);
    let wine_repo = WineRepository::new(&test.db);
    let small = SeedOptions {
        wine_count: 50,
        ..options()
    };

    seeder
        .run(&mut StdRng::seed_from_u64(7), small)
        .await
        .unwrap();
    let first: Vec<(String, Option<f64>)> = wine_repo
        .get_all()
        .await?
        .into_iter()
        .map(|wine| (wine.name, wine.purchase_price))
        .collect();

    seeder
        .run(&mut StdRng::seed_from_u64(7), small)
        .await
        .unwrap();
    let second: Vec<(String, Option<f64>)> = wine_repo
        .get_all()
        .await?
        .into_iter()
        .map(|wine| (wine.name, wine.purchase_price))
        .collect();

    assert_eq!(first.len(), 50);
    assert_eq!(first, second);

    Ok(())
}
