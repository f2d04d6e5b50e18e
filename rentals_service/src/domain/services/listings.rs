//! Listing query and mutation operations.

use std::collections::HashMap;

use chrono::Utc;
use model_account::OwnerProfile;
use models_rentals::api::{
    CreateListingRequest, ListingResponse, Pagination, UpdateListingRequest,
};
use models_rentals::db::ListingRecord;
use models_rentals::service::{ListingFilters, PageParams};
use uuid::Uuid;

use crate::domain::error::{RentalsError, Result};
use crate::domain::ports::RentalsStorage;
use crate::domain::services::RentalsService;

impl<S> RentalsService<S>
where
    S: RentalsStorage,
    anyhow::Error: From<S::Error>,
{
    /// Search available listings. Returns the requested page newest-first
    /// with owners populated, plus the pagination summary over the full
    /// match count.
    pub async fn search(
        &self,
        filters: ListingFilters,
        page: PageParams,
    ) -> Result<(Vec<ListingResponse>, Pagination)> {
        let mut matches = self
            .storage()
            .search_listings(&filters)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?;

        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matches.len() as u64;
        let window = page.slice(&matches).to_vec();
        let listings = self.populate_owners(window).await?;

        Ok((listings, Pagination::new(page, total)))
    }

    /// Fetch one listing by id with its owner populated.
    pub async fn get(&self, listing_id: Uuid) -> Result<ListingResponse> {
        let record = self
            .storage()
            .get_listing(listing_id)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?
            .ok_or_else(|| RentalsError::NotFound("listing not found".to_string()))?;

        let mut listings = self.populate_owners(vec![record]).await?;
        Ok(listings.remove(0))
    }

    /// Create a listing owned by the authenticated caller.
    pub async fn create(
        &self,
        owner_id: &str,
        request: CreateListingRequest,
    ) -> Result<ListingResponse> {
        request
            .validate()
            .map_err(|e| RentalsError::ValidationError(e.to_string()))?;

        let record = ListingRecord::new(owner_id.to_string(), request, Utc::now());

        self.storage()
            .insert_listing(record.clone())
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?;

        let mut listings = self.populate_owners(vec![record]).await?;
        Ok(listings.remove(0))
    }

    /// Apply a patch to a listing. Only the owning account may update.
    pub async fn update(
        &self,
        listing_id: Uuid,
        requester_id: &str,
        patch: UpdateListingRequest,
    ) -> Result<ListingResponse> {
        let mut record = self
            .storage()
            .get_listing(listing_id)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?
            .ok_or_else(|| RentalsError::NotFound("listing not found".to_string()))?;

        if record.owner != requester_id {
            return Err(RentalsError::Forbidden(
                "not authorized to update this listing".to_string(),
            ));
        }

        patch
            .validate()
            .map_err(|e| RentalsError::ValidationError(e.to_string()))?;

        record.apply_patch(patch, Utc::now());

        let replaced = self
            .storage()
            .replace_listing(record.clone())
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?;
        if !replaced {
            return Err(RentalsError::NotFound("listing not found".to_string()));
        }

        let mut listings = self.populate_owners(vec![record]).await?;
        Ok(listings.remove(0))
    }

    /// Remove a listing. Only the owning account may delete. Wishlist entries
    /// pointing at the listing are left in place; the wishlist read path
    /// skips dangling references.
    pub async fn delete(&self, listing_id: Uuid, requester_id: &str) -> Result<()> {
        let record = self
            .storage()
            .get_listing(listing_id)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?
            .ok_or_else(|| RentalsError::NotFound("listing not found".to_string()))?;

        if record.owner != requester_id {
            return Err(RentalsError::Forbidden(
                "not authorized to delete this listing".to_string(),
            ));
        }

        let deleted = self
            .storage()
            .delete_listing(listing_id)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?;
        if !deleted {
            return Err(RentalsError::NotFound("listing not found".to_string()));
        }

        Ok(())
    }

    /// Attach each listing's owner public profile by batch lookup. An owner
    /// account that no longer resolves leaves the field empty rather than
    /// failing the read.
    pub(crate) async fn populate_owners(
        &self,
        records: Vec<ListingRecord>,
    ) -> Result<Vec<ListingResponse>> {
        let owner_ids: Vec<String> = records.iter().map(|r| r.owner.clone()).collect();

        let owners: HashMap<String, OwnerProfile> = self
            .storage()
            .get_accounts(&owner_ids)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?
            .into_iter()
            .map(|account| (account.id.clone(), OwnerProfile::from(account)))
            .collect();

        Ok(records
            .into_iter()
            .map(|record| {
                let owner = owners.get(&record.owner).cloned();
                ListingResponse::from_record(record, owner)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::in_memory::{InMemoryStorage, test_account, test_listing};
    use models_rentals::shared::PropertyType;

    fn service() -> RentalsService<InMemoryStorage> {
        let storage = InMemoryStorage::default();
        storage.add_account(test_account("acct_owner", "Asha"));
        storage.add_account(test_account("acct_other", "Ravi"));
        RentalsService::new(storage)
    }

    #[tokio::test]
    async fn create_attaches_owner_and_defaults_availability() {
        let service = service();

        let listing = service
            .create("acct_owner", test_listing("PG Room", "Pune", 4500.0))
            .await
            .unwrap();

        assert!(listing.is_available);
        assert!(!listing.is_featured);
        let owner = listing.owner.expect("owner should be populated");
        assert_eq!(owner.id, "acct_owner");
        assert_eq!(owner.name, "Asha");
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload() {
        let service = service();

        let mut request = test_listing("PG Room", "Pune", 4500.0);
        request.price = -10.0;

        let err = service.create("acct_owner", request).await.unwrap_err();
        assert!(matches!(err, RentalsError::ValidationError(_)));
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let service = service();

        let created = service
            .create("acct_owner", test_listing("PG Room", "Pune", 4500.0))
            .await
            .unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let service = service();
        let err = service.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, RentalsError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_by_non_owner_is_forbidden_regardless_of_payload() {
        let service = service();
        let created = service
            .create("acct_owner", test_listing("PG Room", "Pune", 4500.0))
            .await
            .unwrap();

        // even an invalid payload must not change the outcome
        let invalid_patch = UpdateListingRequest {
            title: Some("".to_string()),
            ..Default::default()
        };
        let err = service
            .update(created.id, "acct_other", invalid_patch)
            .await
            .unwrap_err();
        assert!(matches!(err, RentalsError::Forbidden(_)));
    }

    #[tokio::test]
    async fn update_by_owner_applies_patch() {
        let service = service();
        let created = service
            .create("acct_owner", test_listing("PG Room", "Pune", 4500.0))
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                "acct_owner",
                UpdateListingRequest {
                    price: Some(5200.0),
                    is_featured: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, 5200.0);
        assert!(updated.is_featured);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn delete_by_non_owner_is_forbidden() {
        let service = service();
        let created = service
            .create("acct_owner", test_listing("PG Room", "Pune", 4500.0))
            .await
            .unwrap();

        let err = service
            .delete(created.id, "acct_other")
            .await
            .unwrap_err();
        assert!(matches!(err, RentalsError::Forbidden(_)));

        // still there
        assert!(service.get(created.id).await.is_ok());
    }

    #[tokio::test]
    async fn full_listing_lifecycle() {
        let service = service();

        // create by owner
        let mut request = test_listing("PG Room", "Pune", 4500.0);
        request.property_type = PropertyType::Pg;
        request.bedrooms = 1;
        request.bathrooms = 1;
        let created = service.create("acct_owner", request).await.unwrap();

        // case-insensitive substring city search finds it
        let (results, pagination) = service
            .search(
                ListingFilters {
                    city: Some("pune".to_string()),
                    ..Default::default()
                },
                PageParams::new(1, 10),
            )
            .await
            .unwrap();
        assert_eq!(pagination.total, 1);
        assert_eq!(results[0].id, created.id);

        // update by someone else fails
        let err = service
            .update(created.id, "acct_other", UpdateListingRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RentalsError::Forbidden(_)));

        // delete by the owner succeeds
        service.delete(created.id, "acct_owner").await.unwrap();

        // subsequent get is NotFound
        let err = service.get(created.id).await.unwrap_err();
        assert!(matches!(err, RentalsError::NotFound(_)));
    }

    #[tokio::test]
    async fn search_with_no_filters_returns_most_recent_available() {
        let service = service();

        for i in 0..3 {
            service
                .create(
                    "acct_owner",
                    test_listing(&format!("Listing {i}"), "Pune", 1000.0 + i as f64),
                )
                .await
                .unwrap();
        }

        let (results, pagination) = service
            .search(ListingFilters::default(), PageParams::new(1, 2))
            .await
            .unwrap();

        assert_eq!(pagination.total, 3);
        assert_eq!(pagination.pages, 2);
        assert_eq!(results.len(), 2);
        // newest first
        assert!(results[0].created_at >= results[1].created_at);
    }

    #[tokio::test]
    async fn contradictory_price_bounds_return_empty_not_error() {
        let service = service();
        service
            .create("acct_owner", test_listing("PG Room", "Pune", 750.0))
            .await
            .unwrap();

        let (results, pagination) = service
            .search(
                ListingFilters {
                    min_price: Some(1000.0),
                    max_price: Some(500.0),
                    ..Default::default()
                },
                PageParams::new(1, 10),
            )
            .await
            .unwrap();

        assert!(results.is_empty());
        assert_eq!(pagination.total, 0);
        assert_eq!(pagination.pages, 0);
    }

    #[tokio::test]
    async fn pagination_skips_pages() {
        let service = service();
        for i in 0..25 {
            service
                .create(
                    "acct_owner",
                    test_listing(&format!("Listing {i}"), "Pune", 1000.0),
                )
                .await
                .unwrap();
        }

        let (page_two, pagination) = service
            .search(ListingFilters::default(), PageParams::new(2, 10))
            .await
            .unwrap();

        assert_eq!(pagination.current, 2);
        assert_eq!(pagination.total, 25);
        assert_eq!(pagination.pages, 3);
        assert_eq!(page_two.len(), 10);

        let (page_three, _) = service
            .search(ListingFilters::default(), PageParams::new(3, 10))
            .await
            .unwrap();
        assert_eq!(page_three.len(), 5);
    }

    #[tokio::test]
    async fn vanished_owner_leaves_owner_unpopulated() {
        let storage = InMemoryStorage::default();
        storage.add_account(test_account("acct_owner", "Asha"));
        let service = RentalsService::new(storage);

        let created = service
            .create("acct_owner", test_listing("PG Room", "Pune", 4500.0))
            .await
            .unwrap();

        service.storage().remove_account("acct_owner");

        let fetched = service.get(created.id).await.unwrap();
        assert!(fetched.owner.is_none());
    }
}
