//! Helpers shared by the integration tests.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request},
    response::Response,
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

const BOUNDARY: &str = "cellar-test-boundary";

/// Collect a response body and deserialize it as JSON.
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}

/// Build a `POST /api/upload` request with a single multipart field.
pub fn multipart_upload(
    field: &str,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> Request<Body> {
    let disposition = format!("form-data; name=\"{field}\"; filename=\"{file_name}\"");
    let header = format!(
        "--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\nContent-Type: {content_type}\r\n\r\n"
    );

    let mut body = header.into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
