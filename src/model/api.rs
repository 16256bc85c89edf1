use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when a request fails after validation, carrying the failure detail
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorMessageDto {
    /// Short summary of what failed
    pub error: String,
    /// Detail of the underlying failure
    pub message: String,
}
