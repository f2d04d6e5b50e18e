//! DynamoDB persistence for the rental marketplace.
//!
//! One module per entity, one file per operation. Every document is keyed by
//! its generated id (listings, feedback, accounts) or by the (user, listing)
//! composite key (wishlist); newest-first listings ride the `CreatedAtIndex`
//! GSI each table carries on a constant `entity` attribute.

use aws_config::Region;
use aws_sdk_dynamodb::Client;
use model_account::AccountRecord;
use models_rentals::db::{FeedbackRecord, ListingRecord, WishlistInsertOutcome, WishlistRecord};
use models_rentals::service::ListingFilters;
use uuid::Uuid;

pub mod accounts;
pub mod error;
pub mod feedback;
pub mod listings;
pub mod wishlist;

use error::RentalsDatabaseError;

/// Name of the newest-first GSI on the listings and feedback tables
pub const CREATED_AT_INDEX: &str = "CreatedAtIndex";

/// The set of tables this client reads and writes.
#[derive(Debug, Clone)]
pub struct RentalsTables {
    pub listings: String,
    pub wishlist: String,
    pub feedback: String,
    pub accounts: String,
}

impl RentalsTables {
    /// Read table names from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            listings: std::env::var("LISTINGS_TABLE")?,
            wishlist: std::env::var("WISHLIST_TABLE")?,
            feedback: std::env::var("FEEDBACK_TABLE")?,
            accounts: std::env::var("ACCOUNTS_TABLE")?,
        })
    }
}

/// Thin wrapper over the SDK client carrying the table names.
#[derive(Debug, Clone)]
pub struct RentalsDbClient {
    client: Client,
    tables: RentalsTables,
}

impl RentalsDbClient {
    pub async fn new(region: Region, tables: RentalsTables) -> Self {
        let client = Client::new(
            &aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(region)
                .load()
                .await,
        );
        RentalsDbClient { client, tables }
    }

    /// Wrap an already-constructed SDK client.
    pub fn from_client(client: Client, tables: RentalsTables) -> Self {
        RentalsDbClient { client, tables }
    }

    // ===== Listings =====

    #[tracing::instrument(skip(self, record), fields(listing_id = %record.id))]
    pub async fn put_listing(&self, record: &ListingRecord) -> Result<(), RentalsDatabaseError> {
        listings::insert::put_listing(&self.client, &self.tables.listings, record).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_listing(
        &self,
        id: Uuid,
    ) -> Result<Option<ListingRecord>, RentalsDatabaseError> {
        listings::get::get_listing_by_id(&self.client, &self.tables.listings, id).await
    }

    /// Replace an existing listing document. Fails the conditional check if
    /// the document vanished between read and write.
    #[tracing::instrument(skip(self, record), fields(listing_id = %record.id))]
    pub async fn replace_listing(
        &self,
        record: &ListingRecord,
    ) -> Result<(), RentalsDatabaseError> {
        listings::update::replace_listing(&self.client, &self.tables.listings, record).await
    }

    /// Returns whether a document was actually removed.
    #[tracing::instrument(skip(self))]
    pub async fn delete_listing(&self, id: Uuid) -> Result<bool, RentalsDatabaseError> {
        listings::delete::delete_listing(&self.client, &self.tables.listings, id).await
    }

    /// All matching listings, unsliced. The service layer orders and pages.
    #[tracing::instrument(skip(self, filters))]
    pub async fn search_listings(
        &self,
        filters: &ListingFilters,
    ) -> Result<Vec<ListingRecord>, RentalsDatabaseError> {
        listings::search::search_listings(&self.client, &self.tables.listings, filters).await
    }

    // ===== Wishlist =====

    #[tracing::instrument(skip(self, record), fields(user_id = %record.user_id, listing_id = %record.listing_id))]
    pub async fn put_wishlist_entry(
        &self,
        record: &WishlistRecord,
    ) -> Result<WishlistInsertOutcome, RentalsDatabaseError> {
        wishlist::insert::put_wishlist_entry(&self.client, &self.tables.wishlist, record).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_wishlist_entry(
        &self,
        user_id: &str,
        listing_id: Uuid,
    ) -> Result<bool, RentalsDatabaseError> {
        wishlist::delete::delete_wishlist_entry(
            &self.client,
            &self.tables.wishlist,
            user_id,
            listing_id,
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_wishlist_entries(
        &self,
        user_id: &str,
    ) -> Result<Vec<WishlistRecord>, RentalsDatabaseError> {
        wishlist::list::get_wishlist_entries(&self.client, &self.tables.wishlist, user_id).await
    }

    // ===== Feedback =====

    #[tracing::instrument(skip(self, record), fields(feedback_id = %record.id))]
    pub async fn put_feedback(&self, record: &FeedbackRecord) -> Result<(), RentalsDatabaseError> {
        feedback::insert::put_feedback(&self.client, &self.tables.feedback, record).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_feedback(
        &self,
        id: Uuid,
    ) -> Result<Option<FeedbackRecord>, RentalsDatabaseError> {
        feedback::get::get_feedback_by_id(&self.client, &self.tables.feedback, id).await
    }

    /// All feedback, newest first, optionally restricted to one status.
    #[tracing::instrument(skip(self))]
    pub async fn list_feedback(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<FeedbackRecord>, RentalsDatabaseError> {
        feedback::list::list_feedback(&self.client, &self.tables.feedback, status).await
    }

    /// Up to `limit` publicly visible entries, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn list_public_feedback(
        &self,
        limit: u64,
    ) -> Result<Vec<FeedbackRecord>, RentalsDatabaseError> {
        feedback::list::list_public_feedback(&self.client, &self.tables.feedback, limit).await
    }

    /// Returns the updated record, or None when no such document exists.
    #[tracing::instrument(skip(self))]
    pub async fn update_feedback_status(
        &self,
        id: Uuid,
        status: &str,
        is_public: bool,
    ) -> Result<Option<FeedbackRecord>, RentalsDatabaseError> {
        feedback::update_status::update_feedback_status(
            &self.client,
            &self.tables.feedback,
            id,
            status,
            is_public,
        )
        .await
    }

    // ===== Accounts (read-only) =====

    #[tracing::instrument(skip(self))]
    pub async fn get_account(
        &self,
        id: &str,
    ) -> Result<Option<AccountRecord>, RentalsDatabaseError> {
        accounts::get::get_account_by_id(&self.client, &self.tables.accounts, id).await
    }

    /// Batch lookup for owner population. Missing ids are simply absent from
    /// the result.
    #[tracing::instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn get_accounts(
        &self,
        ids: &[String],
    ) -> Result<Vec<AccountRecord>, RentalsDatabaseError> {
        accounts::get_many::get_accounts_by_ids(&self.client, &self.tables.accounts, ids).await
    }
}
