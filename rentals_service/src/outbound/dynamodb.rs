//! DynamoDB-backed implementation of the storage port.

use model_account::AccountRecord;
use models_rentals::db::{FeedbackRecord, ListingRecord, WishlistInsertOutcome, WishlistRecord};
use models_rentals::service::ListingFilters;
use rentals_db_client::{RentalsDbClient, error::RentalsDatabaseError};
use uuid::Uuid;

use crate::domain::ports::RentalsStorage;

/// Adapter over [RentalsDbClient]. Conditional-write outcomes are translated
/// into the port's value-level semantics here so the domain never parses
/// store errors.
pub struct DynamoStorage {
    client: RentalsDbClient,
}

impl DynamoStorage {
    pub fn new(client: RentalsDbClient) -> Self {
        Self { client }
    }
}

impl RentalsStorage for DynamoStorage {
    type Error = RentalsDatabaseError;

    async fn insert_listing(&self, record: ListingRecord) -> Result<(), Self::Error> {
        self.client.put_listing(&record).await
    }

    async fn get_listing(&self, id: Uuid) -> Result<Option<ListingRecord>, Self::Error> {
        self.client.get_listing(id).await
    }

    async fn replace_listing(&self, record: ListingRecord) -> Result<bool, Self::Error> {
        match self.client.replace_listing(&record).await {
            Ok(()) => Ok(true),
            Err(RentalsDatabaseError::ConditionalCheckFailed) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn delete_listing(&self, id: Uuid) -> Result<bool, Self::Error> {
        self.client.delete_listing(id).await
    }

    async fn search_listings(
        &self,
        filters: &ListingFilters,
    ) -> Result<Vec<ListingRecord>, Self::Error> {
        self.client.search_listings(filters).await
    }

    async fn insert_wishlist_entry(
        &self,
        record: WishlistRecord,
    ) -> Result<WishlistInsertOutcome, Self::Error> {
        self.client.put_wishlist_entry(&record).await
    }

    async fn delete_wishlist_entry(
        &self,
        user_id: &str,
        listing_id: Uuid,
    ) -> Result<bool, Self::Error> {
        self.client.delete_wishlist_entry(user_id, listing_id).await
    }

    async fn wishlist_entries(&self, user_id: &str) -> Result<Vec<WishlistRecord>, Self::Error> {
        self.client.get_wishlist_entries(user_id).await
    }

    async fn insert_feedback(&self, record: FeedbackRecord) -> Result<(), Self::Error> {
        self.client.put_feedback(&record).await
    }

    async fn list_feedback(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<FeedbackRecord>, Self::Error> {
        self.client.list_feedback(status).await
    }

    async fn list_public_feedback(&self, limit: u64) -> Result<Vec<FeedbackRecord>, Self::Error> {
        self.client.list_public_feedback(limit).await
    }

    async fn update_feedback_status(
        &self,
        id: Uuid,
        status: &str,
        is_public: bool,
    ) -> Result<Option<FeedbackRecord>, Self::Error> {
        self.client.update_feedback_status(id, status, is_public).await
    }

    async fn get_account(&self, id: &str) -> Result<Option<AccountRecord>, Self::Error> {
        self.client.get_account(id).await
    }

    async fn get_accounts(&self, ids: &[String]) -> Result<Vec<AccountRecord>, Self::Error> {
        self.client.get_accounts(ids).await
    }
}
