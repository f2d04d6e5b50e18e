use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use models_rentals::db::ListingRecord;
use serde_dynamo::{Item, to_item};

use crate::error::RentalsDatabaseError;

/// Replace the full listing document. The condition keeps a concurrent delete
/// from being silently resurrected by this write.
pub async fn replace_listing(
    client: &Client,
    table: &str,
    record: &ListingRecord,
) -> Result<(), RentalsDatabaseError> {
    let item: Item = to_item(record)?;
    match client
        .put_item()
        .table_name(table)
        .set_item(Some(item.into()))
        .condition_expression("attribute_exists(id)")
        .send()
        .await
    {
        Ok(_) => Ok(()),
        Err(SdkError::ServiceError(e)) => {
            if matches!(e.err(), PutItemError::ConditionalCheckFailedException(_)) {
                Err(RentalsDatabaseError::ConditionalCheckFailed)
            } else {
                Err(anyhow::Error::from(e.into_err())
                    .context("could not replace listing, dynamodb")
                    .into())
            }
        }
        Err(e) => Err(anyhow::Error::from(e)
            .context("could not replace listing, dynamodb")
            .into()),
    }
}
