use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use uuid::Uuid;

use crate::error::RentalsDatabaseError;

/// Remove one (user, listing) entry. Returns whether an entry existed.
pub async fn delete_wishlist_entry(
    client: &Client,
    table: &str,
    user_id: &str,
    listing_id: Uuid,
) -> Result<bool, RentalsDatabaseError> {
    let result = client
        .delete_item()
        .table_name(table)
        .key("user_id", AttributeValue::S(user_id.to_string()))
        .key("listing_id", AttributeValue::S(listing_id.to_string()))
        .return_values(ReturnValue::AllOld)
        .send()
        .await
        .context("could not delete wishlist entry, dynamodb")?;

    Ok(result.attributes.is_some())
}
