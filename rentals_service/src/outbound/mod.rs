//! Outbound adapters binding the storage port to real infrastructure.

mod dynamodb;

pub use dynamodb::DynamoStorage;
