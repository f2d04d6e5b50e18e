//! API layer query parameter types.

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::shared::PropertyType;

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// Query parameters for the listing search endpoint. Every recognized filter
/// key is enumerated here; an absent key means "no constraint".
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListingQueryParams {
    /// 1-indexed page (default 1)
    #[serde(default = "default_page")]
    pub page: u64,
    /// Page size (default 10)
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Case-insensitive substring match on the city
    pub city: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Exact property type match
    pub property_type: Option<PropertyType>,
    /// Exact bedroom count
    pub bedrooms: Option<u32>,
    /// Exact bathroom count
    pub bathrooms: Option<u32>,
    /// Free text search over title/description/city
    pub search: Option<String>,
    /// Restrict to featured listings when explicitly true
    pub featured: Option<bool>,
    /// Exact owner account id
    pub owner: Option<String>,
}

/// Query parameters for the public feedback endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PublicFeedbackQueryParams {
    /// Maximum number of entries to return (default 10)
    #[serde(default = "default_limit")]
    pub limit: u64,
}

/// Query parameters for the authenticated feedback listing.
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackListQueryParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Exact status match; absent means all statuses
    pub status: Option<String>,
}
