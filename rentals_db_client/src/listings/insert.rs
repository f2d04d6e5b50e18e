use anyhow::Context;
use aws_sdk_dynamodb::Client;
use models_rentals::db::ListingRecord;
use serde_dynamo::{Item, to_item};

use crate::error::RentalsDatabaseError;

pub async fn put_listing(
    client: &Client,
    table: &str,
    record: &ListingRecord,
) -> Result<(), RentalsDatabaseError> {
    let item: Item = to_item(record)?;
    client
        .put_item()
        .table_name(table)
        .set_item(Some(item.into()))
        .send()
        .await
        .context("could not put listing, dynamodb")?;

    Ok(())
}
