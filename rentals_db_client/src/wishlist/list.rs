use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use models_rentals::db::WishlistRecord;
use serde_dynamo::from_items;

use crate::error::RentalsDatabaseError;

/// Every wishlist entry for one account. Order follows the range key
/// (listing id); callers treat it as unspecified.
pub async fn get_wishlist_entries(
    client: &Client,
    table: &str,
    user_id: &str,
) -> Result<Vec<WishlistRecord>, RentalsDatabaseError> {
    let mut entries: Vec<WishlistRecord> = Vec::new();
    let mut last_evaluated_key: Option<HashMap<String, AttributeValue>> = None;

    loop {
        let query = client
            .query()
            .table_name(table)
            .key_condition_expression("#user_id = :user_id")
            .expression_attribute_names("#user_id", "user_id")
            .expression_attribute_values(":user_id", AttributeValue::S(user_id.to_string()))
            .set_exclusive_start_key(last_evaluated_key);

        let query_output = query
            .send()
            .await
            .context("could not query wishlist entries, dynamodb")?;

        let items = query_output.items.unwrap_or_default();
        let page: Vec<WishlistRecord> = from_items(items)?;
        entries.extend(page);

        last_evaluated_key = query_output.last_evaluated_key;
        if last_evaluated_key.is_none() {
            break;
        }
    }

    Ok(entries)
}
