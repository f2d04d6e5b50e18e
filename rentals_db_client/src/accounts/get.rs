use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use model_account::AccountRecord;
use serde_dynamo::from_item;

use crate::error::RentalsDatabaseError;

pub async fn get_account_by_id(
    client: &Client,
    table: &str,
    id: &str,
) -> Result<Option<AccountRecord>, RentalsDatabaseError> {
    let result = client
        .get_item()
        .table_name(table)
        .key("id", AttributeValue::S(id.to_string()))
        .send()
        .await
        .context("could not get account, dynamodb")?;

    match result.item {
        Some(item) => Ok(Some(from_item(item)?)),
        None => Ok(None),
    }
}
