//! Storage port - defines the interface for marketplace persistence operations

use model_account::AccountRecord;
use models_rentals::db::{FeedbackRecord, ListingRecord, WishlistInsertOutcome, WishlistRecord};
use models_rentals::service::ListingFilters;
use uuid::Uuid;

/// Storage port for all marketplace persistence operations. Every mutation is
/// one document write; the wishlist insert must be atomic on the (user,
/// listing) pair via the store's conditional-write primitive.
#[cfg_attr(feature = "mock", mockall::automock(type Error = std::convert::Infallible;))]
pub trait RentalsStorage: Send + Sync + 'static {
    /// Error type for storage operations
    type Error: Send + Sync + std::error::Error;

    // Listing Operations
    fn insert_listing(
        &self,
        record: ListingRecord,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;

    fn get_listing(
        &self,
        id: Uuid,
    ) -> impl std::future::Future<Output = Result<Option<ListingRecord>, Self::Error>> + Send;

    /// Replace an existing listing document. Returns false when the document
    /// no longer exists (a concurrent delete won the race).
    fn replace_listing(
        &self,
        record: ListingRecord,
    ) -> impl std::future::Future<Output = Result<bool, Self::Error>> + Send;

    /// Returns whether a document was removed.
    fn delete_listing(
        &self,
        id: Uuid,
    ) -> impl std::future::Future<Output = Result<bool, Self::Error>> + Send;

    /// Every listing matching the filters, unordered and unsliced.
    fn search_listings(
        &self,
        filters: &ListingFilters,
    ) -> impl std::future::Future<Output = Result<Vec<ListingRecord>, Self::Error>> + Send;

    // Wishlist Operations
    fn insert_wishlist_entry(
        &self,
        record: WishlistRecord,
    ) -> impl std::future::Future<Output = Result<WishlistInsertOutcome, Self::Error>> + Send;

    fn delete_wishlist_entry(
        &self,
        user_id: &str,
        listing_id: Uuid,
    ) -> impl std::future::Future<Output = Result<bool, Self::Error>> + Send;

    fn wishlist_entries(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<WishlistRecord>, Self::Error>> + Send;

    // Feedback Operations
    fn insert_feedback(
        &self,
        record: FeedbackRecord,
    ) -> impl std::future::Future<Output = Result<(), Self::Error>> + Send;

    fn list_feedback(
        &self,
        status: Option<&str>,
    ) -> impl std::future::Future<Output = Result<Vec<FeedbackRecord>, Self::Error>> + Send;

    /// Up to `limit` entries that are resolved AND public, newest first.
    fn list_public_feedback(
        &self,
        limit: u64,
    ) -> impl std::future::Future<Output = Result<Vec<FeedbackRecord>, Self::Error>> + Send;

    /// Returns the updated record, or None when no such document exists.
    fn update_feedback_status(
        &self,
        id: Uuid,
        status: &str,
        is_public: bool,
    ) -> impl std::future::Future<Output = Result<Option<FeedbackRecord>, Self::Error>> + Send;

    // Account Operations (read-only)
    fn get_account(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<AccountRecord>, Self::Error>> + Send;

    fn get_accounts(
        &self,
        ids: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<AccountRecord>, Self::Error>> + Send;
}
