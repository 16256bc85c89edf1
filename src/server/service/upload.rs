//! Photo upload service.
//!
//! Validates an uploaded image and writes it to object storage under a fresh
//! `wines/<uuid>.<ext>` key.

use std::path::Path;

use axum::body::Bytes;
use opendal::Operator;
use uuid::Uuid;

use crate::{model::upload::UploadDto, server::error::upload::UploadError};

/// Largest accepted upload, 5 MB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

const KEY_PREFIX: &str = "wines";

pub struct UploadService<'a> {
    storage: &'a Operator,
    public_url: &'a str,
}

impl<'a> UploadService<'a> {
    /// Creates a new instance of [`UploadService`]
    ///
    /// # Arguments
    /// - `storage` - Operator for the bucket photos are written to
    /// - `public_url` - Base URL the bucket is publicly served from
    pub fn new(storage: &'a Operator, public_url: &'a str) -> Self {
        Self {
            storage,
            public_url,
        }
    }

    /// Validates and stores an uploaded image.
    ///
    /// # Arguments
    /// - `file_name` - Client supplied file name, only its extension is kept
    /// - `mimetype` - Client supplied content type
    /// - `data` - File contents
    ///
    /// # Returns
    /// - `Ok(UploadDto)` - Object stored, with its key and public URL
    /// - `Err(UploadError::InvalidMimeType)` - Content type is not an allowed image type
    /// - `Err(UploadError::FileTooLarge)` - File exceeds [`MAX_UPLOAD_BYTES`]
    /// - `Err(UploadError::Storage)` - Object storage write failed
    pub async fn upload(
        &self,
        file_name: Option<&str>,
        mimetype: &str,
        data: Bytes,
    ) -> Result<UploadDto, UploadError> {
        if !ALLOWED_MIME_TYPES.contains(&mimetype) {
            return Err(UploadError::InvalidMimeType(mimetype.to_string()));
        }

        let size = data.len() as u64;
        if size > MAX_UPLOAD_BYTES {
            return Err(UploadError::FileTooLarge {
                size,
                limit: MAX_UPLOAD_BYTES,
            });
        }

        let key = object_key(file_name);
        self.storage
            .write(&key, data)
            .await
            .map_err(|source| UploadError::Storage {
                key: key.clone(),
                source,
            })?;

        tracing::debug!("Stored upload {} ({} bytes)", key, size);

        Ok(UploadDto {
            success: true,
            url: public_url(self.public_url, &key),
            key,
            size,
            mimetype: mimetype.to_string(),
        })
    }
}

/// Builds a new object key, keeping the original file extension if there is one.
pub fn object_key(file_name: Option<&str>) -> String {
    let id = Uuid::new_v4();
    let extension = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|extension| extension.to_str())
        .filter(|extension| !extension.is_empty());

    match extension {
        Some(extension) => format!("{}/{}.{}", KEY_PREFIX, id, extension),
        None => format!("{}/{}", KEY_PREFIX, id),
    }
}

pub fn public_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), key)
}
