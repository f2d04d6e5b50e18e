//! The listing document as persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::{CreateListingRequest, UpdateListingRequest};
use crate::shared::{ContactInfo, GeoPoint, NearbyPlace, PropertyType};

/// Constant partition attribute for the CreatedAtIndex GSI. Every listing
/// document carries it so the index can serve newest-first queries.
pub const LISTING_ENTITY: &str = "LISTING";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingRecord {
    pub id: Uuid,
    /// GSI partition attribute, always [LISTING_ENTITY]
    pub entity: String,
    /// Owning account id. Immutable after creation.
    pub owner: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub city: String,
    pub address: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub is_available: bool,
    pub is_featured: bool,
    pub location: Option<GeoPoint>,
    pub contact_info: Option<ContactInfo>,
    pub rules: Vec<String>,
    pub nearby_places: Vec<NearbyPlace>,
    /// Lowercased city, matched by the case-insensitive city filter
    pub city_search: String,
    /// Lowercased title + description + city, matched by the free-text filter
    pub search_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListingRecord {
    /// Build a fresh document from a validated create request. Generates the
    /// id, stamps both timestamps and computes the search attributes.
    pub fn new(owner: String, request: CreateListingRequest, now: DateTime<Utc>) -> Self {
        let mut record = Self {
            id: Uuid::new_v4(),
            entity: LISTING_ENTITY.to_string(),
            owner,
            title: request.title,
            description: request.description,
            price: request.price,
            city: request.city,
            address: request.address,
            property_type: request.property_type,
            bedrooms: request.bedrooms,
            bathrooms: request.bathrooms,
            size: request.size,
            images: request.images,
            amenities: request.amenities,
            is_available: true,
            is_featured: false,
            location: request.location,
            contact_info: request.contact_info,
            rules: request.rules,
            nearby_places: request.nearby_places,
            city_search: String::new(),
            search_text: String::new(),
            created_at: now,
            updated_at: now,
        };
        record.refresh_search_attributes();
        record
    }

    /// Apply a validated patch, bump updated_at and recompute the search
    /// attributes. Owner, id and created_at are never touched.
    pub fn apply_patch(&mut self, patch: UpdateListingRequest, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(property_type) = patch.property_type {
            self.property_type = property_type;
        }
        if let Some(bedrooms) = patch.bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = patch.bathrooms {
            self.bathrooms = bathrooms;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(amenities) = patch.amenities {
            self.amenities = amenities;
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(contact_info) = patch.contact_info {
            self.contact_info = Some(contact_info);
        }
        if let Some(rules) = patch.rules {
            self.rules = rules;
        }
        if let Some(nearby_places) = patch.nearby_places {
            self.nearby_places = nearby_places;
        }
        if let Some(is_available) = patch.is_available {
            self.is_available = is_available;
        }
        if let Some(is_featured) = patch.is_featured {
            self.is_featured = is_featured;
        }
        self.updated_at = now;
        self.refresh_search_attributes();
    }

    fn refresh_search_attributes(&mut self) {
        self.city_search = self.city.to_lowercase();
        self.search_text = format!("{} {} {}", self.title, self.description, self.city)
            .to_lowercase();
    }
}
