//! Mapping of domain errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model_error_response::ErrorResponse;
use rentals_service::domain::error::RentalsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl From<RentalsError> for HttpError {
    fn from(err: RentalsError) -> Self {
        match err {
            RentalsError::NotFound(msg) => HttpError::NotFound(msg),
            RentalsError::ValidationError(msg) => HttpError::BadRequest(msg),
            RentalsError::Forbidden(msg) => HttpError::Forbidden(msg),
            RentalsError::Conflict(msg) => HttpError::Conflict(msg),
            RentalsError::Internal(e) => HttpError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match &self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(
                error = %self,
                error_type = "HttpError",
                "Internal server error"
            );
            // never leak internals to the caller
            return (
                status,
                Json(ErrorResponse::new("internal server error")),
            )
                .into_response();
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_categories() {
        let cases = [
            (
                RentalsError::NotFound("listing not found".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                RentalsError::ValidationError("bad title".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                RentalsError::Forbidden("not yours".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (
                RentalsError::Conflict("duplicate".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                RentalsError::Internal(anyhow::anyhow!("store exploded")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (domain_error, expected) in cases {
            let response = HttpError::from(domain_error).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
