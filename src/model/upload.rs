use serde::{Deserialize, Serialize};

/// Successful photo upload
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadDto {
    pub success: bool,
    /// Public URL of the stored object
    pub url: String,
    /// Object key within the bucket, `wines/<id>.<ext>`
    pub key: String,
    /// Size of the upload in bytes
    pub size: u64,
    pub mimetype: String,
}

/// Multipart form accepted by the upload endpoint
#[derive(utoipa::ToSchema)]
pub struct UploadFormDto {
    /// JPEG, PNG or WebP image, at most 5 MB
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}
