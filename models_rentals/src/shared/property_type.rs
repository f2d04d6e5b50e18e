//! The kind of property a listing advertises.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed set of property kinds. Filtering is an exact match on this enum;
/// there is no coercion from unknown strings.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ToSchema,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Shared,
    Pg,
}
