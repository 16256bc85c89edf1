use cellar::server::{
    data::varietal::VarietalRepository, model::varietal::NewVarietal,
    service::varietal::VarietalService,
};
use entity::sea_orm_active_enums::WineType;

use super::*;

/// Tests loading the catalog twice.
///
/// Verifies the loader upserts by name so a second run neither duplicates rows nor
/// keeps stale field values.
///
/// Expected: 30 varietals after each run with catalog values restored
#[tokio::test]
async fn loader_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cellar_tables().build().await?;
    let varietal_service = VarietalService::new(&test.db);
    let varietal_repo = VarietalRepository::new(&test.db);

    let first = varietal_service.load_catalog().await.unwrap();
    assert_eq!(first.len(), 30);
    assert_eq!(varietal_repo.count().await?, 30);

    let syrah = varietal_repo.get_by_name("Syrah").await?.unwrap();
    varietal_service
        .update(
            syrah.id,
            NewVarietal {
                name: "Syrah".to_string(),
                wine_type: WineType::Rose,
                description: "Edited".to_string(),
                common_regions: Vec::new(),
                characteristics: Vec::new(),
                aliases: Vec::new(),
            },
        )
        .await
        .unwrap();

    varietal_service.load_catalog().await.unwrap();

    assert_eq!(varietal_repo.count().await?, 30);
    let reloaded = varietal_repo.get_by_name("Syrah").await?.unwrap();
    assert_eq!(reloaded.id, syrah.id);
    assert_eq!(reloaded.wine_type, WineType::Red);
    assert_eq!(reloaded.description, syrah.description);
    assert_eq!(reloaded.aliases, syrah.aliases);

    Ok(())
}

/// Tests a varietal outside the catalog survives a reload.
///
/// Expected: 31 varietals after loading the catalog next to a custom one
#[tokio::test]
async fn loader_keeps_custom_varietals() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cellar_tables()
        .with_mock_varietal("Xinomavro", WineType::Red)
        .build()
        .await?;

    VarietalService::new(&test.db)
        .load_catalog()
        .await
        .unwrap();

    let varietal_repo = VarietalRepository::new(&test.db);
    assert_eq!(varietal_repo.count().await?, 31);
    assert!(varietal_repo.get_by_name("Xinomavro").await?.is_some());

    Ok(())
}
