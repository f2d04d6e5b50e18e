//! API layer request bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::error::{FeedbackValidationError, ListingValidationError};
use crate::shared::{ContactInfo, GeoPoint, NearbyPlace, PropertyType};

/// Bounds for listing text fields
pub const TITLE_MIN: usize = 1;
pub const TITLE_MAX: usize = 100;
pub const DESCRIPTION_MIN: usize = 1;
pub const DESCRIPTION_MAX: usize = 1000;

/// Body for creating a listing. The owner is never part of the payload; it is
/// taken from the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub city: String,
    pub address: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Free text, e.g. "850 sqft"
    pub size: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub location: Option<GeoPoint>,
    pub contact_info: Option<ContactInfo>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub nearby_places: Vec<NearbyPlace>,
}

impl CreateListingRequest {
    pub fn validate(&self) -> Result<(), ListingValidationError> {
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        validate_price(self.price)?;
        if self.city.trim().is_empty() {
            return Err(ListingValidationError::EmptyCity);
        }
        if self.address.trim().is_empty() {
            return Err(ListingValidationError::EmptyAddress);
        }
        if self.size.trim().is_empty() {
            return Err(ListingValidationError::EmptySize);
        }
        validate_images(&self.images)?;
        Ok(())
    }
}

/// Patch body for updating a listing. Absent fields are left untouched;
/// the owner and generated timestamps are never patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub property_type: Option<PropertyType>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub size: Option<String>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub location: Option<GeoPoint>,
    pub contact_info: Option<ContactInfo>,
    pub rules: Option<Vec<String>>,
    pub nearby_places: Option<Vec<NearbyPlace>>,
    pub is_available: Option<bool>,
    pub is_featured: Option<bool>,
}

impl UpdateListingRequest {
    /// Validate only the fields present in the patch. The patched record is
    /// re-validated as a whole by the service after application.
    pub fn validate(&self) -> Result<(), ListingValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(city) = &self.city {
            if city.trim().is_empty() {
                return Err(ListingValidationError::EmptyCity);
            }
        }
        if let Some(address) = &self.address {
            if address.trim().is_empty() {
                return Err(ListingValidationError::EmptyAddress);
            }
        }
        if let Some(size) = &self.size {
            if size.trim().is_empty() {
                return Err(ListingValidationError::EmptySize);
            }
        }
        if let Some(images) = &self.images {
            validate_images(images)?;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), ListingValidationError> {
    let length = title.trim().chars().count();
    if length < TITLE_MIN || length > TITLE_MAX {
        return Err(ListingValidationError::InvalidTitleLength {
            length,
            min: TITLE_MIN,
            max: TITLE_MAX,
        });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), ListingValidationError> {
    let length = description.trim().chars().count();
    if length < DESCRIPTION_MIN || length > DESCRIPTION_MAX {
        return Err(ListingValidationError::InvalidDescriptionLength {
            length,
            min: DESCRIPTION_MIN,
            max: DESCRIPTION_MAX,
        });
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ListingValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ListingValidationError::InvalidPrice { price });
    }
    Ok(())
}

fn validate_images(images: &[String]) -> Result<(), ListingValidationError> {
    for (index, uri) in images.iter().enumerate() {
        if uri.trim().is_empty() {
            return Err(ListingValidationError::EmptyImageUri { index });
        }
    }
    Ok(())
}

/// Body for adding a listing to the caller's wishlist.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToWishlistRequest {
    pub listing_id: Uuid,
}

/// Body for a feedback submission. No authentication required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Defaults to 5 when absent
    pub rating: Option<u8>,
}

impl SubmitFeedbackRequest {
    pub fn validate(&self) -> Result<(), FeedbackValidationError> {
        if self.name.trim().is_empty() {
            return Err(FeedbackValidationError::EmptyName);
        }
        if self.email.trim().is_empty() {
            return Err(FeedbackValidationError::EmptyEmail);
        }
        if self.subject.trim().is_empty() {
            return Err(FeedbackValidationError::EmptySubject);
        }
        if self.message.trim().is_empty() {
            return Err(FeedbackValidationError::EmptyMessage);
        }
        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(FeedbackValidationError::InvalidRating { rating });
            }
        }
        Ok(())
    }
}

/// Body for a reviewer updating a feedback entry's moderation state.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedbackStatusRequest {
    pub status: String,
    pub is_public: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateListingRequest {
        CreateListingRequest {
            title: "PG Room".to_string(),
            description: "Clean single room near the station".to_string(),
            price: 4500.0,
            city: "Pune".to_string(),
            address: "12 FC Road".to_string(),
            property_type: PropertyType::Pg,
            bedrooms: 1,
            bathrooms: 1,
            size: "120 sqft".to_string(),
            images: vec!["https://img.example/1.jpg".to_string()],
            amenities: vec!["wifi".to_string()],
            location: None,
            contact_info: None,
            rules: vec![],
            nearby_places: vec![],
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn title_bounds_are_enforced() {
        let mut request = valid_create();
        request.title = "".to_string();
        assert_eq!(
            request.validate(),
            Err(ListingValidationError::InvalidTitleLength {
                length: 0,
                min: TITLE_MIN,
                max: TITLE_MAX,
            })
        );

        request.title = "x".repeat(101);
        assert!(matches!(
            request.validate(),
            Err(ListingValidationError::InvalidTitleLength { length: 101, .. })
        ));
    }

    #[test]
    fn description_over_one_thousand_chars_is_rejected() {
        let mut request = valid_create();
        request.description = "d".repeat(1001);
        assert!(matches!(
            request.validate(),
            Err(ListingValidationError::InvalidDescriptionLength { length: 1001, .. })
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut request = valid_create();
        request.price = -1.0;
        assert_eq!(
            request.validate(),
            Err(ListingValidationError::InvalidPrice { price: -1.0 })
        );
    }

    #[test]
    fn nan_price_is_rejected() {
        let mut request = valid_create();
        request.price = f64::NAN;
        assert!(matches!(
            request.validate(),
            Err(ListingValidationError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn empty_image_uri_is_rejected() {
        let mut request = valid_create();
        request.images = vec!["https://img.example/1.jpg".to_string(), "  ".to_string()];
        assert_eq!(
            request.validate(),
            Err(ListingValidationError::EmptyImageUri { index: 1 })
        );
    }

    #[test]
    fn empty_image_list_is_allowed() {
        let mut request = valid_create();
        request.images = vec![];
        assert!(request.validate().is_ok());
    }

    #[test]
    fn patch_validates_only_present_fields() {
        let patch = UpdateListingRequest {
            price: Some(5200.0),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());

        let patch = UpdateListingRequest {
            title: Some("".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn feedback_rating_bounds() {
        let mut request = SubmitFeedbackRequest {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            subject: "Great site".to_string(),
            message: "Found a flat in two days".to_string(),
            rating: None,
        };
        assert!(request.validate().is_ok());

        request.rating = Some(0);
        assert_eq!(
            request.validate(),
            Err(FeedbackValidationError::InvalidRating { rating: 0 })
        );

        request.rating = Some(6);
        assert!(request.validate().is_err());

        request.rating = Some(5);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn camel_case_wire_format() {
        let json = serde_json::json!({
            "title": "PG Room",
            "description": "desc",
            "price": 4500,
            "city": "Pune",
            "address": "12 FC Road",
            "propertyType": "pg",
            "bedrooms": 1,
            "bathrooms": 1,
            "size": "120 sqft",
            "contactInfo": { "phone": "123" },
            "nearbyPlaces": [{ "name": "Metro", "distance": "1 km", "type": "transit" }]
        });
        let request: CreateListingRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.property_type, PropertyType::Pg);
        assert_eq!(request.contact_info.unwrap().phone.as_deref(), Some("123"));
        assert_eq!(request.nearby_places[0].place_type, "transit");
    }
}
