use anyhow::Context;
use aws_sdk_dynamodb::Client;
use models_rentals::db::FeedbackRecord;
use serde_dynamo::{Item, to_item};

use crate::error::RentalsDatabaseError;

pub async fn put_feedback(
    client: &Client,
    table: &str,
    record: &FeedbackRecord,
) -> Result<(), RentalsDatabaseError> {
    let item: Item = to_item(record)?;
    client
        .put_item()
        .table_name(table)
        .set_item(Some(item.into()))
        .send()
        .await
        .context("could not put feedback, dynamodb")?;

    Ok(())
}
