use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PhotoDto {
    pub id: i32,
    pub wine_id: i32,
    pub url: String,
    pub key: String,
    pub created_at: NaiveDateTime,
}

/// Request body for attaching an uploaded object to a wine
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AttachPhotoDto {
    pub url: String,
    pub key: String,
}
