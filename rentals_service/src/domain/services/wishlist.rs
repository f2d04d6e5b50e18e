//! Wishlist operations: one entry per (user, listing) pair, enforced by the
//! store's conditional write rather than check-then-insert.

use chrono::Utc;
use models_rentals::api::ListingResponse;
use models_rentals::db::{ListingRecord, WishlistInsertOutcome, WishlistRecord};
use uuid::Uuid;

use crate::domain::error::{RentalsError, Result};
use crate::domain::ports::RentalsStorage;
use crate::domain::services::RentalsService;

impl<S> RentalsService<S>
where
    S: RentalsStorage,
    anyhow::Error: From<S::Error>,
{
    /// Save a listing to the caller's wishlist. The listing must exist;
    /// a duplicate add is a Conflict, never silently ignored.
    pub async fn add_to_wishlist(&self, user_id: &str, listing_id: Uuid) -> Result<()> {
        self.storage()
            .get_listing(listing_id)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?
            .ok_or_else(|| RentalsError::NotFound("listing not found".to_string()))?;

        let record = WishlistRecord::new(user_id.to_string(), listing_id, Utc::now());
        let outcome = self
            .storage()
            .insert_wishlist_entry(record)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?;

        match outcome {
            WishlistInsertOutcome::Inserted => Ok(()),
            WishlistInsertOutcome::AlreadyExists => Err(RentalsError::Conflict(
                "listing already in wishlist".to_string(),
            )),
        }
    }

    /// Remove a saved listing from the caller's wishlist.
    pub async fn remove_from_wishlist(&self, user_id: &str, listing_id: Uuid) -> Result<()> {
        let deleted = self
            .storage()
            .delete_wishlist_entry(user_id, listing_id)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?;

        if !deleted {
            return Err(RentalsError::NotFound(
                "listing not found in wishlist".to_string(),
            ));
        }
        Ok(())
    }

    /// Every listing the caller has saved, owners populated. Entries whose
    /// listing has since been deleted are skipped (deletes do not cascade).
    pub async fn wishlist_listings(&self, user_id: &str) -> Result<Vec<ListingResponse>> {
        let entries = self
            .storage()
            .wishlist_entries(user_id)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?;

        let mut records: Vec<ListingRecord> = Vec::with_capacity(entries.len());
        for entry in entries {
            let listing = self
                .storage()
                .get_listing(entry.listing_id)
                .await
                .map_err(|e| RentalsError::Internal(e.into()))?;
            if let Some(listing) = listing {
                records.push(listing);
            }
        }

        self.populate_owners(records).await
    }
}
