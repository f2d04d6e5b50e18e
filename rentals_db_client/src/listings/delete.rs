use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use uuid::Uuid;

use crate::error::RentalsDatabaseError;

/// Remove a listing document. Returns whether anything was actually deleted
/// so the caller can distinguish a no-op from a removal.
pub async fn delete_listing(
    client: &Client,
    table: &str,
    id: Uuid,
) -> Result<bool, RentalsDatabaseError> {
    let result = client
        .delete_item()
        .table_name(table)
        .key("id", AttributeValue::S(id.to_string()))
        .return_values(ReturnValue::AllOld)
        .send()
        .await
        .context("could not delete listing, dynamodb")?;

    Ok(result.attributes.is_some())
}
