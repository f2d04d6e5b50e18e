use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use models_rentals::db::FeedbackRecord;
use serde_dynamo::from_item;
use uuid::Uuid;

use crate::error::RentalsDatabaseError;

pub async fn get_feedback_by_id(
    client: &Client,
    table: &str,
    id: Uuid,
) -> Result<Option<FeedbackRecord>, RentalsDatabaseError> {
    let result = client
        .get_item()
        .table_name(table)
        .key("id", AttributeValue::S(id.to_string()))
        .send()
        .await
        .context("could not get feedback, dynamodb")?;

    match result.item {
        Some(item) => Ok(Some(from_item(item)?)),
        None => Ok(None),
    }
}
