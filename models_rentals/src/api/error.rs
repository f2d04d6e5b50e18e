//! API validation errors

use thiserror::Error;

/// Errors that can occur while validating a listing create/update payload
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ListingValidationError {
    #[error("Title length {length} is invalid. Must be between {min} and {max} characters.")]
    InvalidTitleLength {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Description length {length} is invalid. Must be between {min} and {max} characters.")]
    InvalidDescriptionLength {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Price must be a finite, non-negative number (got {price})")]
    InvalidPrice { price: f64 },

    #[error("City cannot be empty or whitespace")]
    EmptyCity,

    #[error("Address cannot be empty or whitespace")]
    EmptyAddress,

    #[error("Size cannot be empty or whitespace")]
    EmptySize,

    #[error("Image URI at position {index} cannot be empty")]
    EmptyImageUri { index: usize },
}

/// Errors that can occur while validating a feedback submission
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeedbackValidationError {
    #[error("Name cannot be empty or whitespace")]
    EmptyName,

    #[error("Email cannot be empty or whitespace")]
    EmptyEmail,

    #[error("Subject cannot be empty or whitespace")]
    EmptySubject,

    #[error("Message cannot be empty or whitespace")]
    EmptyMessage,

    #[error("Rating {rating} is out of range. Must be between 1 and 5.")]
    InvalidRating { rating: u8 },
}
