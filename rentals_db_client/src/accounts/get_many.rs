use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, KeysAndAttributes};
use model_account::AccountRecord;
use serde_dynamo::from_item;

use crate::error::RentalsDatabaseError;

/// DynamoDB caps BatchGetItem at 100 keys per request
const BATCH_GET_MAX_KEYS: usize = 100;

/// Fetch many accounts by id for owner population. Ids that resolve to no
/// document are simply absent from the result; duplicates are collapsed.
pub async fn get_accounts_by_ids(
    client: &Client,
    table: &str,
    ids: &[String],
) -> Result<Vec<AccountRecord>, RentalsDatabaseError> {
    let mut unique_ids: Vec<&String> = ids.iter().collect();
    unique_ids.sort();
    unique_ids.dedup();

    let mut accounts: Vec<AccountRecord> = Vec::with_capacity(unique_ids.len());

    for chunk in unique_ids.chunks(BATCH_GET_MAX_KEYS) {
        let keys: Vec<HashMap<String, AttributeValue>> = chunk
            .iter()
            .map(|id| {
                HashMap::from([("id".to_string(), AttributeValue::S(id.to_string()))])
            })
            .collect();

        let mut request_items = KeysAndAttributes::builder()
            .set_keys(Some(keys))
            .build()
            .context("could not build batch get request")?;

        // Retry unprocessed keys until the batch drains
        loop {
            let output = client
                .batch_get_item()
                .request_items(table, request_items)
                .send()
                .await
                .context("could not batch get accounts, dynamodb")?;

            if let Some(mut responses) = output.responses {
                if let Some(items) = responses.remove(table) {
                    for item in items {
                        accounts.push(from_item(item)?);
                    }
                }
            }

            match output
                .unprocessed_keys
                .and_then(|mut unprocessed| unprocessed.remove(table))
            {
                Some(remaining) if !remaining.keys().is_empty() => {
                    request_items = remaining;
                }
                _ => break,
            }
        }
    }

    Ok(accounts)
}
