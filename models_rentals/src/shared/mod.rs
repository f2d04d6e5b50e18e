//! Shared types used across the db, service and api layers.

mod contact_info;
mod feedback_status;
mod geo_point;
mod nearby_place;
mod property_type;

pub use contact_info::ContactInfo;
pub use feedback_status::FeedbackStatus;
pub use geo_point::GeoPoint;
pub use nearby_place::NearbyPlace;
pub use property_type::PropertyType;
