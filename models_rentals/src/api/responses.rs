//! API layer response bodies.

use chrono::{DateTime, Utc};
use model_account::OwnerProfile;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::{FeedbackRecord, ListingRecord};
use crate::service::PageParams;
use crate::shared::{ContactInfo, GeoPoint, NearbyPlace, PropertyType};

/// Offset pagination summary attached to list responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Pagination {
    /// The 1-indexed page this response covers
    pub current: u64,
    /// ceil(total / limit)
    pub pages: u64,
    /// Count of all matches ignoring pagination
    pub total: u64,
}

impl Pagination {
    pub fn new(page: PageParams, total: u64) -> Self {
        Self {
            current: page.page,
            pages: page.total_pages(total),
            total,
        }
    }
}

/// A listing as returned over the wire: the document minus its storage
/// artifacts, with the owner's public profile attached when the owning
/// account still resolves.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: Uuid,
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
    pub owner: Option<OwnerProfile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListingResponse {
    pub fn from_record(record: ListingRecord, owner: Option<OwnerProfile>) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            price: record.price,
            city: record.city,
            address: record.address,
            property_type: record.property_type,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            size: record.size,
            images: record.images,
            amenities: record.amenities,
            is_available: record.is_available,
            is_featured: record.is_featured,
            location: record.location,
            contact_info: record.contact_info,
            rules: record.rules,
            nearby_places: record.nearby_places,
            owner,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Response body for the listing search endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchListingsResponse {
    pub listings: Vec<ListingResponse>,
    pub pagination: Pagination,
}

/// Response body for the wishlist listing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WishlistListingsResponse {
    pub listings: Vec<ListingResponse>,
}

/// A feedback entry as seen by authenticated reviewers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub rating: u8,
    pub status: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl From<FeedbackRecord> for FeedbackResponse {
    fn from(record: FeedbackRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            subject: record.subject,
            message: record.message,
            rating: record.rating,
            status: record.status.0,
            is_public: record.is_public,
            created_at: record.created_at,
        }
    }
}

/// Response body for the authenticated feedback listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedbackListResponse {
    pub feedbacks: Vec<FeedbackResponse>,
    pub pagination: Pagination,
}

/// A feedback entry as shown publicly: email and moderation state withheld.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicFeedbackEntry {
    pub name: String,
    pub subject: String,
    pub message: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

impl From<FeedbackRecord> for PublicFeedbackEntry {
    fn from(record: FeedbackRecord) -> Self {
        Self {
            name: record.name,
            subject: record.subject,
            message: record.message,
            rating: record.rating,
            created_at: record.created_at,
        }
    }
}

/// Response body for the public feedback endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PublicFeedbackResponse {
    pub feedbacks: Vec<PublicFeedbackEntry>,
}
