use thiserror::Error;

/// Errors surfaced by the rentals database client.
#[derive(Debug, Error)]
pub enum RentalsDatabaseError {
    /// A conditional write was rejected by the store. Callers map this to the
    /// operation-appropriate meaning (duplicate insert, vanished document).
    #[error("conditional check failed")]
    ConditionalCheckFailed,

    /// A document could not be (de)serialized to the store's item format
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_dynamo::Error),

    /// Any other SDK or transport failure
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
