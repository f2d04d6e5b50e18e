//! Geographic coordinate attached to a listing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A longitude/latitude pair. Stored with the listing document; no distance
/// query is exposed today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}
