//! Tests for the varietal endpoints.

use cellar::{
    model::varietal::{VarietalDto, VarietalInputDto},
    server::controller::varietal::{
        create_varietal, delete_varietal, get_varietal, list_varietals, update_varietal,
    },
};

use super::*;

fn input(name: &str, wine_type: WineType) -> VarietalInputDto {
    VarietalInputDto {
        name: name.to_string(),
        wine_type,
        description: format!("{} description", name),
        common_regions: vec!["Somewhere".to_string()],
        characteristics: vec!["Fruity".to_string()],
        aliases: Vec::new(),
    }
}

/// Expect 200 with varietals sorted by name
#[tokio::test]
async fn lists_varietals_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cellar_tables()
        .with_mock_varietal("Syrah", WineType::Red)
        .with_mock_varietal("Chardonnay", WineType::White)
        .build()
        .await?;

    let resp = list_varietals(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let varietals: Vec<VarietalDto> = body_json(resp).await;
    let names: Vec<&str> = varietals.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Chardonnay", "Syrah"]);

    Ok(())
}

/// Expect 201 with the stored varietal, type serialized under `type`
#[tokio::test]
async fn creates_varietal() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cellar_tables().build().await?;

    let resp = create_varietal(
        State(test.to_app_state::<AppState>()),
        Json(input("Nebbiolo", WineType::Red)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["name"], "Nebbiolo");
    assert_eq!(body["type"], "RED");
    assert_eq!(body["characteristics"][0], "Fruity");

    Ok(())
}

/// Expect 409 when creating a varietal whose name is taken
#[tokio::test]
async fn create_conflicts_on_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_cellar_tables()
        .with_mock_varietal("Merlot", WineType::Red)
        .build()
        .await?;

    let resp = create_varietal(
        State(test.to_app_state::<AppState>()),
        Json(input("Merlot", WineType::Red)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Merlot"));

    Ok(())
}

/// Expect 404 with an error body for an unknown ID
#[tokio::test]
async fn get_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cellar_tables().build().await?;

    let resp = get_varietal(State(test.to_app_state::<AppState>()), Path(999))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect 200 with every field replaced
#[tokio::test]
async fn updates_varietal() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_cellar_tables().build().await?;
    let varietal = test
        .cellar()
        .insert_mock_varietal("Grenache", WineType::Red)
        .await?;

    let resp = update_varietal(
        State(test.to_app_state::<AppState>()),
        Path(varietal.id),
        Json(input("Garnacha", WineType::Rose)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: VarietalDto = body_json(resp).await;
    assert_eq!(updated.id, varietal.id);
    assert_eq!(updated.name, "Garnacha");
    assert_eq!(updated.wine_type, WineType::Rose);

    Ok(())
}

/// Expect 409 when renaming onto another varietal's name
#[tokio::test]
async fn update_conflicts_on_rename_collision() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_cellar_tables()
        .with_mock_varietal("Riesling", WineType::White)
        .build()
        .await?;
    let varietal = test
        .cellar()
        .insert_mock_varietal("Chenin Blanc", WineType::White)
        .await?;

    let resp = update_varietal(
        State(test.to_app_state::<AppState>()),
        Path(varietal.id),
        Json(input("Riesling", WineType::White)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 when updating an unknown ID
#[tokio::test]
async fn update_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cellar_tables().build().await?;

    let resp = update_varietal(
        State(test.to_app_state::<AppState>()),
        Path(42),
        Json(input("Zinfandel", WineType::Red)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 204, then 404 on a second delete
#[tokio::test]
async fn deletes_varietal() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_cellar_tables().build().await?;
    let varietal = test
        .cellar()
        .insert_mock_varietal("Malbec", WineType::Red)
        .await?;

    let resp = delete_varietal(State(test.to_app_state::<AppState>()), Path(varietal.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = delete_varietal(State(test.to_app_state::<AppState>()), Path(varietal.id))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
