use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use models_rentals::db::{WishlistInsertOutcome, WishlistRecord};
use serde_dynamo::{Item, to_item};

use crate::error::RentalsDatabaseError;

/// Conditionally insert a wishlist entry. The table's composite primary key
/// is (user_id, listing_id); the condition rejects the write atomically when
/// the pair already exists, so concurrent duplicate adds resolve to exactly
/// one stored entry and one [WishlistInsertOutcome::AlreadyExists].
pub async fn put_wishlist_entry(
    client: &Client,
    table: &str,
    record: &WishlistRecord,
) -> Result<WishlistInsertOutcome, RentalsDatabaseError> {
    let item: Item = to_item(record)?;
    match client
        .put_item()
        .table_name(table)
        .set_item(Some(item.into()))
        .condition_expression("attribute_not_exists(user_id)")
        .send()
        .await
    {
        Ok(_) => Ok(WishlistInsertOutcome::Inserted),
        Err(SdkError::ServiceError(e)) => {
            if matches!(e.err(), PutItemError::ConditionalCheckFailedException(_)) {
                Ok(WishlistInsertOutcome::AlreadyExists)
            } else {
                Err(anyhow::Error::from(e.into_err())
                    .context("could not put wishlist entry, dynamodb")
                    .into())
            }
        }
        Err(e) => Err(anyhow::Error::from(e)
            .context("could not put wishlist entry, dynamodb")
            .into()),
    }
}
