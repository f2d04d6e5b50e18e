//! Contact block a listing owner can publish alongside a listing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
}
