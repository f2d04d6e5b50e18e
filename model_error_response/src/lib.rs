#![deny(missing_docs)]
//! The plain old json error envelope returned by every failing endpoint.

/// A json error response body for use with axum.
#[derive(serde::Serialize, serde::Deserialize, Debug, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Message to explain failure
    pub message: String,
}

impl ErrorResponse {
    /// build an envelope from any displayable error or message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
