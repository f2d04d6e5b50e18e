//! Domain error types

use thiserror::Error;

/// Domain-level errors for marketplace operations
#[derive(Debug, Error)]
pub enum RentalsError {
    /// Referenced entity absent
    #[error("{0}")]
    NotFound(String),

    /// Malformed or out-of-range input, with field-level detail
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Authenticated, but not permitted to touch this entity
    #[error("{0}")]
    Forbidden(String),

    /// Uniqueness violation, e.g. a duplicate wishlist entry
    #[error("{0}")]
    Conflict(String),

    /// Internal error (wraps storage errors and other infrastructure failures)
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type for domain operations
pub type Result<T> = std::result::Result<T, RentalsError>;
