//! Points of interest an owner lists near a property.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NearbyPlace {
    pub name: String,
    /// Free text, e.g. "1.2 km"
    pub distance: String,
    /// Free text category, e.g. "metro", "school"
    #[serde(rename = "type")]
    pub place_type: String,
}
