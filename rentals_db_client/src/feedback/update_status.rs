use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use models_rentals::db::FeedbackRecord;
use serde_dynamo::from_item;
use uuid::Uuid;

use crate::error::RentalsDatabaseError;

/// Set the moderation fields on one feedback document and return the updated
/// record. Returns None when no document with that id exists (the condition
/// keeps update_item from upserting a phantom record).
pub async fn update_feedback_status(
    client: &Client,
    table: &str,
    id: Uuid,
    status: &str,
    is_public: bool,
) -> Result<Option<FeedbackRecord>, RentalsDatabaseError> {
    let result = client
        .update_item()
        .table_name(table)
        .key("id", AttributeValue::S(id.to_string()))
        .condition_expression("attribute_exists(id)")
        .update_expression("SET #status = :status, #is_public = :is_public")
        .expression_attribute_names("#status", "status")
        .expression_attribute_names("#is_public", "is_public")
        .expression_attribute_values(":status", AttributeValue::S(status.to_string()))
        .expression_attribute_values(":is_public", AttributeValue::Bool(is_public))
        .return_values(ReturnValue::AllNew)
        .send()
        .await;

    match result {
        Ok(output) => match output.attributes {
            Some(attributes) => Ok(Some(from_item(attributes)?)),
            None => Ok(None),
        },
        Err(SdkError::ServiceError(e)) => {
            if matches!(e.err(), UpdateItemError::ConditionalCheckFailedException(_)) {
                Ok(None)
            } else {
                Err(anyhow::Error::from(e.into_err())
                    .context("could not update feedback status, dynamodb")
                    .into())
            }
        }
        Err(e) => Err(anyhow::Error::from(e)
            .context("could not update feedback status, dynamodb")
            .into()),
    }
}
