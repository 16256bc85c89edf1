//! Tests for the upload endpoint, exercised through the router.

use axum::{body::Body, http::Request};
use cellar::server::{router::routes, service::upload::MAX_UPLOAD_BYTES};
use cellar_test_utils::constant::TEST_PUBLIC_URL;
use tower::ServiceExt;

use super::*;
use crate::util::multipart_upload;

/// Expect 200 with the object stored under `wines/` and its public URL
#[tokio::test]
async fn uploads_image() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());
    let data = b"\xFF\xD8\xFFfake-jpeg".to_vec();

    let resp = app
        .oneshot(multipart_upload("file", "bottle.jpg", "image/jpeg", &data))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    let key = body["key"].as_str().unwrap().to_string();
    assert_eq!(body["success"], true);
    assert!(key.starts_with("wines/"));
    assert!(key.ends_with(".jpg"));
    assert_eq!(body["url"], format!("{}/{}", TEST_PUBLIC_URL, key));
    assert_eq!(body["size"], data.len());
    assert_eq!(body["mimetype"], "image/jpeg");

    let stored = test.storage.read(&key).await?.to_vec();
    assert_eq!(stored, data);

    Ok(())
}

/// Expect 400 with an error body when no `file` field is sent
#[tokio::test]
async fn rejects_missing_file() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let request = multipart_upload("photo", "bottle.jpg", "image/jpeg", b"data");
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error"], "No file uploaded");

    Ok(())
}

/// Expect 400 when the request is not multipart at all
#[tokio::test]
async fn rejects_non_multipart_body() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let request = Request::builder()
        .method("POST")
        .uri("/api/upload")
        .body(Body::from("not a form"))
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 with `error` and `message` for a disallowed MIME type
#[tokio::test]
async fn rejects_disallowed_mime_type() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());

    let request = multipart_upload("file", "notes.txt", "text/plain", b"hello");
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error"], "Upload failed");
    assert!(body["message"].as_str().unwrap().contains("text/plain"));

    Ok(())
}

/// Expect 500 for an image larger than the upload limit
#[tokio::test]
async fn rejects_oversized_file() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.to_app_state::<AppState>());
    let data = vec![0u8; MAX_UPLOAD_BYTES as usize + 1];

    let resp = app
        .oneshot(multipart_upload("file", "huge.png", "image/png", &data))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error"], "Upload failed");

    Ok(())
}
