use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use models_rentals::db::{FEEDBACK_ENTITY, FeedbackRecord};
use models_rentals::shared::FeedbackStatus;
use serde_dynamo::from_items;

use crate::CREATED_AT_INDEX;
use crate::error::RentalsDatabaseError;

/// All feedback newest-first, optionally restricted to an exact status.
/// Returns the full match set; the service pages it.
pub async fn list_feedback(
    client: &Client,
    table: &str,
    status: Option<&str>,
) -> Result<Vec<FeedbackRecord>, RentalsDatabaseError> {
    let mut entries: Vec<FeedbackRecord> = Vec::new();
    let mut last_evaluated_key: Option<HashMap<String, AttributeValue>> = None;

    loop {
        let mut query = client
            .query()
            .table_name(table)
            .index_name(CREATED_AT_INDEX)
            .key_condition_expression("#entity = :entity")
            .expression_attribute_names("#entity", "entity")
            .expression_attribute_values(":entity", AttributeValue::S(FEEDBACK_ENTITY.to_string()))
            .scan_index_forward(false);

        if let Some(status) = status {
            query = query
                .filter_expression("#status = :status")
                .expression_attribute_names("#status", "status")
                .expression_attribute_values(":status", AttributeValue::S(status.to_string()));
        }

        query = query.set_exclusive_start_key(last_evaluated_key);

        let query_output = query
            .send()
            .await
            .context("could not query feedback, dynamodb")?;

        let items = query_output.items.unwrap_or_default();
        let page: Vec<FeedbackRecord> = from_items(items)?;
        entries.extend(page);

        last_evaluated_key = query_output.last_evaluated_key;
        if last_evaluated_key.is_none() {
            break;
        }
    }

    Ok(entries)
}

/// Up to `limit` publicly visible entries (resolved AND public), newest
/// first. The filter post-applies, so keep walking pages until the quota is
/// filled or the index is exhausted.
pub async fn list_public_feedback(
    client: &Client,
    table: &str,
    limit: u64,
) -> Result<Vec<FeedbackRecord>, RentalsDatabaseError> {
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    let mut entries: Vec<FeedbackRecord> = Vec::new();
    let mut last_evaluated_key: Option<HashMap<String, AttributeValue>> = None;

    loop {
        let query = client
            .query()
            .table_name(table)
            .index_name(CREATED_AT_INDEX)
            .key_condition_expression("#entity = :entity")
            .expression_attribute_names("#entity", "entity")
            .expression_attribute_values(":entity", AttributeValue::S(FEEDBACK_ENTITY.to_string()))
            .filter_expression("#status = :resolved AND #is_public = :is_public")
            .expression_attribute_names("#status", "status")
            .expression_attribute_names("#is_public", "is_public")
            .expression_attribute_values(
                ":resolved",
                AttributeValue::S(FeedbackStatus::RESOLVED.to_string()),
            )
            .expression_attribute_values(":is_public", AttributeValue::Bool(true))
            .scan_index_forward(false)
            .set_exclusive_start_key(last_evaluated_key);

        let query_output = query
            .send()
            .await
            .context("could not query public feedback, dynamodb")?;

        let items = query_output.items.unwrap_or_default();
        let page: Vec<FeedbackRecord> = from_items(items)?;
        entries.extend(page);

        if entries.len() >= limit {
            entries.truncate(limit);
            break;
        }

        last_evaluated_key = query_output.last_evaluated_key;
        if last_evaluated_key.is_none() {
            break;
        }
    }

    Ok(entries)
}
