//! Tests for the wine photo endpoints.

use cellar::{
    model::photo::{AttachPhotoDto, PhotoDto},
    server::controller::photo::{attach_photo, list_photos},
};

use super::*;

fn attachment(key: &str) -> Json<AttachPhotoDto> {
    Json(AttachPhotoDto {
        url: format!("http://localhost:9000/cellar-test/{}", key),
        key: key.to_string(),
    })
}

/// Expect 201 with the photo linked to the wine
#[tokio::test]
async fn attaches_photo() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_cellar_tables().build().await?;
    let wine = test.cellar().insert_mock_wine(None, WineType::Red).await?;

    let resp = attach_photo(
        State(test.to_app_state::<AppState>()),
        Path(wine.id),
        attachment("wines/label.jpg"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let photo: PhotoDto = body_json(resp).await;
    assert_eq!(photo.wine_id, wine.id);
    assert_eq!(photo.key, "wines/label.jpg");
    assert_eq!(
        photo.url,
        "http://localhost:9000/cellar-test/wines/label.jpg"
    );

    Ok(())
}

/// Expect 404 when attaching to a wine that does not exist
#[tokio::test]
async fn attach_returns_not_found_for_missing_wine() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cellar_tables().build().await?;

    let resp = attach_photo(
        State(test.to_app_state::<AppState>()),
        Path(7),
        attachment("wines/orphan.png"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect photos listed in the order they were attached
#[tokio::test]
async fn lists_photos_of_wine() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_cellar_tables().build().await?;
    let wine = test
        .cellar()
        .insert_mock_wine(None, WineType::White)
        .await?;
    let other = test.cellar().insert_mock_wine(None, WineType::Red).await?;

    for (wine_id, key) in [
        (wine.id, "wines/front.jpg"),
        (other.id, "wines/other.jpg"),
        (wine.id, "wines/back.jpg"),
    ] {
        let resp = attach_photo(
            State(test.to_app_state::<AppState>()),
            Path(wine_id),
            attachment(key),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = list_photos(State(test.to_app_state::<AppState>()), Path(wine.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let photos: Vec<PhotoDto> = body_json(resp).await;
    let keys: Vec<&str> = photos.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["wines/front.jpg", "wines/back.jpg"]);

    Ok(())
}

/// Expect 404 when listing photos of a missing wine
#[tokio::test]
async fn list_returns_not_found_for_missing_wine() -> Result<(), TestError> {
    let test = TestBuilder::new().with_cellar_tables().build().await?;

    let resp = list_photos(State(test.to_app_state::<AppState>()), Path(3))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
