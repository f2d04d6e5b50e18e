//! The search filter set, with every recognized key enumerated.

use crate::api::ListingQueryParams;
use crate::db::ListingRecord;
use crate::shared::PropertyType;

/// Filters applied by the listing search. Absent means "no constraint";
/// availability is always constrained to available listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilters {
    /// Case-insensitive substring match against the city
    pub city: Option<String>,
    /// Exact enum match
    pub property_type: Option<PropertyType>,
    /// Exact count match
    pub bedrooms: Option<u32>,
    /// Exact count match
    pub bathrooms: Option<u32>,
    /// Inclusive lower bound
    pub min_price: Option<f64>,
    /// Inclusive upper bound
    pub max_price: Option<f64>,
    /// Constrains to featured listings; false means unconstrained
    pub featured: bool,
    /// Exact owner account id
    pub owner: Option<String>,
    /// Free text over title/description/city
    pub search: Option<String>,
}

impl From<ListingQueryParams> for ListingFilters {
    fn from(params: ListingQueryParams) -> Self {
        Self {
            city: params.city,
            property_type: params.property_type,
            bedrooms: params.bedrooms,
            bathrooms: params.bathrooms,
            min_price: params.min_price,
            max_price: params.max_price,
            // only an explicit true constrains the result set
            featured: params.featured == Some(true),
            owner: params.owner,
            search: params.search,
        }
    }
}

impl ListingFilters {
    /// The reference predicate for this filter set. The DynamoDB client builds
    /// an equivalent filter expression; in-memory storage applies this
    /// directly.
    pub fn matches(&self, record: &ListingRecord) -> bool {
        if !record.is_available {
            return false;
        }
        if let Some(city) = &self.city {
            if !record.city_search.contains(&city.to_lowercase()) {
                return false;
            }
        }
        if let Some(property_type) = self.property_type {
            if record.property_type != property_type {
                return false;
            }
        }
        if let Some(bedrooms) = self.bedrooms {
            if record.bedrooms != bedrooms {
                return false;
            }
        }
        if let Some(bathrooms) = self.bathrooms {
            if record.bathrooms != bathrooms {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if record.price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if record.price > max_price {
                return false;
            }
        }
        if self.featured && !record.is_featured {
            return false;
        }
        if let Some(owner) = &self.owner {
            if &record.owner != owner {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !record.search_text.contains(&search.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CreateListingRequest;
    use chrono::Utc;

    fn record(city: &str, price: f64, property_type: PropertyType) -> ListingRecord {
        ListingRecord::new(
            "acct_1".to_string(),
            CreateListingRequest {
                title: "PG Room".to_string(),
                description: "Near the station".to_string(),
                price,
                city: city.to_string(),
                address: "12 FC Road".to_string(),
                property_type,
                bedrooms: 1,
                bathrooms: 1,
                size: "120 sqft".to_string(),
                images: vec![],
                amenities: vec![],
                location: None,
                contact_info: None,
                rules: vec![],
                nearby_places: vec![],
            },
            Utc::now(),
        )
    }

    #[test]
    fn empty_filters_match_available_listings() {
        let filters = ListingFilters::default();
        assert!(filters.matches(&record("Pune", 4500.0, PropertyType::Pg)));
    }

    #[test]
    fn unavailable_listings_never_match() {
        let mut listing = record("Pune", 4500.0, PropertyType::Pg);
        listing.is_available = false;
        assert!(!ListingFilters::default().matches(&listing));
    }

    #[test]
    fn city_match_is_case_insensitive_substring() {
        let listing = record("Pune", 4500.0, PropertyType::Pg);
        let filters = ListingFilters {
            city: Some("PUN".to_string()),
            ..Default::default()
        };
        assert!(filters.matches(&listing));

        let filters = ListingFilters {
            city: Some("mumbai".to_string()),
            ..Default::default()
        };
        assert!(!filters.matches(&listing));
    }

    #[test]
    fn contradictory_price_bounds_match_nothing() {
        let listing = record("Pune", 750.0, PropertyType::Pg);
        let filters = ListingFilters {
            min_price: Some(1000.0),
            max_price: Some(500.0),
            ..Default::default()
        };
        assert!(!filters.matches(&listing));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let listing = record("Pune", 1000.0, PropertyType::Pg);
        let filters = ListingFilters {
            min_price: Some(1000.0),
            max_price: Some(1000.0),
            ..Default::default()
        };
        assert!(filters.matches(&listing));
    }

    #[test]
    fn featured_false_does_not_constrain() {
        let listing = record("Pune", 4500.0, PropertyType::Pg);
        assert!(!listing.is_featured);

        let from_explicit_false = ListingFilters::from(ListingQueryParams {
            featured: Some(false),
            ..serde_json::from_str("{}").unwrap()
        });
        assert!(!from_explicit_false.featured);
        assert!(from_explicit_false.matches(&listing));

        let from_true = ListingFilters {
            featured: true,
            ..Default::default()
        };
        assert!(!from_true.matches(&listing));
    }

    #[test]
    fn free_text_searches_title_description_and_city() {
        let listing = record("Pune", 4500.0, PropertyType::Pg);

        for query in ["pg room", "STATION", "pune"] {
            let filters = ListingFilters {
                search: Some(query.to_string()),
                ..Default::default()
            };
            assert!(filters.matches(&listing), "query {query:?} should match");
        }

        let filters = ListingFilters {
            search: Some("penthouse".to_string()),
            ..Default::default()
        };
        assert!(!filters.matches(&listing));
    }

    #[test]
    fn exact_property_type_match() {
        let listing = record("Pune", 4500.0, PropertyType::Pg);
        let filters = ListingFilters {
            property_type: Some(PropertyType::Apartment),
            ..Default::default()
        };
        assert!(!filters.matches(&listing));
    }
}
