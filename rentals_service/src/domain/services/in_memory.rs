//! In-memory storage used by the domain tests. Mirrors the store semantics
//! the DynamoDB adapter relies on: single-document writes, and an atomic
//! insert-if-absent for the wishlist composite key.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Mutex;

use chrono::Utc;
use model_account::{AccountRecord, AccountRole};
use models_rentals::api::CreateListingRequest;
use models_rentals::db::{FeedbackRecord, ListingRecord, WishlistInsertOutcome, WishlistRecord};
use models_rentals::service::ListingFilters;
use models_rentals::shared::PropertyType;
use uuid::Uuid;

use crate::domain::ports::RentalsStorage;

#[derive(Default)]
pub(crate) struct InMemoryStorage {
    listings: Mutex<HashMap<Uuid, ListingRecord>>,
    wishlist: Mutex<HashMap<(String, Uuid), WishlistRecord>>,
    feedback: Mutex<HashMap<Uuid, FeedbackRecord>>,
    accounts: Mutex<HashMap<String, AccountRecord>>,
}

impl InMemoryStorage {
    pub(crate) fn add_account(&self, account: AccountRecord) {
        self.accounts
            .lock()
            .unwrap()
            .insert(account.id.clone(), account);
    }

    pub(crate) fn remove_account(&self, id: &str) {
        self.accounts.lock().unwrap().remove(id);
    }

    pub(crate) fn wishlist_len(&self) -> usize {
        self.wishlist.lock().unwrap().len()
    }
}

impl RentalsStorage for InMemoryStorage {
    type Error = Infallible;

    async fn insert_listing(&self, record: ListingRecord) -> Result<(), Infallible> {
        self.listings.lock().unwrap().insert(record.id, record);
        Ok(())
    }

    async fn get_listing(&self, id: Uuid) -> Result<Option<ListingRecord>, Infallible> {
        Ok(self.listings.lock().unwrap().get(&id).cloned())
    }

    async fn replace_listing(&self, record: ListingRecord) -> Result<bool, Infallible> {
        let mut listings = self.listings.lock().unwrap();
        if !listings.contains_key(&record.id) {
            return Ok(false);
        }
        listings.insert(record.id, record);
        Ok(true)
    }

    async fn delete_listing(&self, id: Uuid) -> Result<bool, Infallible> {
        Ok(self.listings.lock().unwrap().remove(&id).is_some())
    }

    async fn search_listings(
        &self,
        filters: &ListingFilters,
    ) -> Result<Vec<ListingRecord>, Infallible> {
        let mut matches: Vec<ListingRecord> = self
            .listings
            .lock()
            .unwrap()
            .values()
            .filter(|record| filters.matches(record))
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(matches)
    }

    async fn insert_wishlist_entry(
        &self,
        record: WishlistRecord,
    ) -> Result<WishlistInsertOutcome, Infallible> {
        let mut wishlist = self.wishlist.lock().unwrap();
        let key = (record.user_id.clone(), record.listing_id);
        match wishlist.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => {
                Ok(WishlistInsertOutcome::AlreadyExists)
            }
            std::collections::hash_map::Entry::Vacant(vacant) => {
                vacant.insert(record);
                Ok(WishlistInsertOutcome::Inserted)
            }
        }
    }

    async fn delete_wishlist_entry(
        &self,
        user_id: &str,
        listing_id: Uuid,
    ) -> Result<bool, Infallible> {
        Ok(self
            .wishlist
            .lock()
            .unwrap()
            .remove(&(user_id.to_string(), listing_id))
            .is_some())
    }

    async fn wishlist_entries(&self, user_id: &str) -> Result<Vec<WishlistRecord>, Infallible> {
        let mut entries: Vec<WishlistRecord> = self
            .wishlist
            .lock()
            .unwrap()
            .values()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.listing_id.cmp(&b.listing_id));
        Ok(entries)
    }

    async fn insert_feedback(&self, record: FeedbackRecord) -> Result<(), Infallible> {
        self.feedback.lock().unwrap().insert(record.id, record);
        Ok(())
    }

    async fn list_feedback(
        &self,
        status: Option<&str>,
    ) -> Result<Vec<FeedbackRecord>, Infallible> {
        let mut entries: Vec<FeedbackRecord> = self
            .feedback
            .lock()
            .unwrap()
            .values()
            .filter(|record| status.map_or(true, |status| record.status.0 == status))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(entries)
    }

    async fn list_public_feedback(&self, limit: u64) -> Result<Vec<FeedbackRecord>, Infallible> {
        let mut entries: Vec<FeedbackRecord> = self
            .feedback
            .lock()
            .unwrap()
            .values()
            .filter(|record| record.is_publicly_visible())
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        entries.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(entries)
    }

    async fn update_feedback_status(
        &self,
        id: Uuid,
        status: &str,
        is_public: bool,
    ) -> Result<Option<FeedbackRecord>, Infallible> {
        let mut feedback = self.feedback.lock().unwrap();
        let Some(record) = feedback.get_mut(&id) else {
            return Ok(None);
        };
        record.status = models_rentals::shared::FeedbackStatus(status.to_string());
        record.is_public = is_public;
        Ok(Some(record.clone()))
    }

    async fn get_account(&self, id: &str) -> Result<Option<AccountRecord>, Infallible> {
        Ok(self.accounts.lock().unwrap().get(id).cloned())
    }

    async fn get_accounts(&self, ids: &[String]) -> Result<Vec<AccountRecord>, Infallible> {
        let accounts = self.accounts.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| accounts.get(id).cloned())
            .collect())
    }
}

pub(crate) fn test_account(id: &str, name: &str) -> AccountRecord {
    AccountRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{name}@example.com").to_lowercase(),
        phone: Some("+91 98765 43210".to_string()),
        role: AccountRole::Owner,
        created_at: Utc::now(),
    }
}

pub(crate) fn test_listing(title: &str, city: &str, price: f64) -> CreateListingRequest {
    CreateListingRequest {
        title: title.to_string(),
        description: "Clean, well lit, close to transit".to_string(),
        price,
        city: city.to_string(),
        address: "12 FC Road".to_string(),
        property_type: PropertyType::Apartment,
        bedrooms: 2,
        bathrooms: 1,
        size: "850 sqft".to_string(),
        images: vec!["https://img.example/1.jpg".to_string()],
        amenities: vec!["wifi".to_string()],
        location: None,
        contact_info: None,
        rules: vec![],
        nearby_places: vec![],
    }
}
