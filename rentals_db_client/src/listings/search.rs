use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use models_rentals::db::{LISTING_ENTITY, ListingRecord};
use models_rentals::service::ListingFilters;
use serde_dynamo::from_items;

use crate::CREATED_AT_INDEX;
use crate::error::RentalsDatabaseError;

/// A DynamoDB filter expression with its attribute name/value maps.
/// Every attribute is aliased so reserved words can never bite us.
#[derive(Debug, PartialEq)]
pub struct FilterExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Translate a [ListingFilters] into the store-native filter expression.
/// This must stay equivalent to [ListingFilters::matches], which is the
/// reference predicate exercised by the service tests.
pub fn build_filter_expression(filters: &ListingFilters) -> FilterExpression {
    let mut conditions: Vec<String> = Vec::new();
    let mut names: HashMap<String, String> = HashMap::new();
    let mut values: HashMap<String, AttributeValue> = HashMap::new();

    // always-implicit availability constraint
    conditions.push("#is_available = :is_available".to_string());
    names.insert("#is_available".to_string(), "is_available".to_string());
    values.insert(":is_available".to_string(), AttributeValue::Bool(true));

    if let Some(city) = &filters.city {
        conditions.push("contains(#city_search, :city)".to_string());
        names.insert("#city_search".to_string(), "city_search".to_string());
        values.insert(":city".to_string(), AttributeValue::S(city.to_lowercase()));
    }

    if let Some(property_type) = filters.property_type {
        conditions.push("#property_type = :property_type".to_string());
        names.insert("#property_type".to_string(), "property_type".to_string());
        values.insert(
            ":property_type".to_string(),
            AttributeValue::S(property_type.to_string()),
        );
    }

    if let Some(bedrooms) = filters.bedrooms {
        conditions.push("#bedrooms = :bedrooms".to_string());
        names.insert("#bedrooms".to_string(), "bedrooms".to_string());
        values.insert(
            ":bedrooms".to_string(),
            AttributeValue::N(bedrooms.to_string()),
        );
    }

    if let Some(bathrooms) = filters.bathrooms {
        conditions.push("#bathrooms = :bathrooms".to_string());
        names.insert("#bathrooms".to_string(), "bathrooms".to_string());
        values.insert(
            ":bathrooms".to_string(),
            AttributeValue::N(bathrooms.to_string()),
        );
    }

    if let Some(min_price) = filters.min_price {
        conditions.push("#price >= :min_price".to_string());
        names.insert("#price".to_string(), "price".to_string());
        values.insert(
            ":min_price".to_string(),
            AttributeValue::N(min_price.to_string()),
        );
    }

    if let Some(max_price) = filters.max_price {
        conditions.push("#price <= :max_price".to_string());
        names.insert("#price".to_string(), "price".to_string());
        values.insert(
            ":max_price".to_string(),
            AttributeValue::N(max_price.to_string()),
        );
    }

    if filters.featured {
        conditions.push("#is_featured = :is_featured".to_string());
        names.insert("#is_featured".to_string(), "is_featured".to_string());
        values.insert(":is_featured".to_string(), AttributeValue::Bool(true));
    }

    if let Some(owner) = &filters.owner {
        conditions.push("#owner = :owner".to_string());
        names.insert("#owner".to_string(), "owner".to_string());
        values.insert(":owner".to_string(), AttributeValue::S(owner.clone()));
    }

    if let Some(search) = &filters.search {
        conditions.push("contains(#search_text, :search)".to_string());
        names.insert("#search_text".to_string(), "search_text".to_string());
        values.insert(
            ":search".to_string(),
            AttributeValue::S(search.to_lowercase()),
        );
    }

    FilterExpression {
        expression: conditions.join(" AND "),
        names,
        values,
    }
}

/// Query the CreatedAtIndex newest-first with the filter expression, walking
/// every page. Returns the full match set; the service slices pages out of it
/// (filter expressions post-filter reads, so the total count needs the full
/// walk anyway).
pub async fn search_listings(
    client: &Client,
    table: &str,
    filters: &ListingFilters,
) -> Result<Vec<ListingRecord>, RentalsDatabaseError> {
    let filter = build_filter_expression(filters);

    let mut matches: Vec<ListingRecord> = Vec::new();
    let mut last_evaluated_key: Option<HashMap<String, AttributeValue>> = None;

    loop {
        let mut query = client
            .query()
            .table_name(table)
            .index_name(CREATED_AT_INDEX)
            .key_condition_expression("#entity = :entity")
            .expression_attribute_names("#entity", "entity")
            .expression_attribute_values(":entity", AttributeValue::S(LISTING_ENTITY.to_string()))
            .filter_expression(filter.expression.clone())
            .scan_index_forward(false);

        for (alias, name) in &filter.names {
            query = query.expression_attribute_names(alias, name);
        }
        for (placeholder, value) in &filter.values {
            query = query.expression_attribute_values(placeholder, value.clone());
        }

        query = query.set_exclusive_start_key(last_evaluated_key);

        let query_output = query
            .send()
            .await
            .context("could not query listings, dynamodb")?;

        let items = query_output.items.unwrap_or_default();
        let page: Vec<ListingRecord> = from_items(items)?;
        matches.extend(page);

        last_evaluated_key = query_output.last_evaluated_key;
        if last_evaluated_key.is_none() {
            break;
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models_rentals::shared::PropertyType;

    #[test]
    fn empty_filters_only_constrain_availability() {
        let filter = build_filter_expression(&ListingFilters::default());
        assert_eq!(filter.expression, "#is_available = :is_available");
        assert_eq!(filter.names.len(), 1);
        assert_eq!(
            filter.values.get(":is_available"),
            Some(&AttributeValue::Bool(true))
        );
    }

    #[test]
    fn all_filters_compose_with_and() {
        let filters = ListingFilters {
            city: Some("Pune".to_string()),
            property_type: Some(PropertyType::Pg),
            bedrooms: Some(1),
            bathrooms: Some(2),
            min_price: Some(1000.0),
            max_price: Some(5000.0),
            featured: true,
            owner: Some("acct_1".to_string()),
            search: Some("Station".to_string()),
        };
        let filter = build_filter_expression(&filters);

        for piece in [
            "#is_available = :is_available",
            "contains(#city_search, :city)",
            "#property_type = :property_type",
            "#bedrooms = :bedrooms",
            "#bathrooms = :bathrooms",
            "#price >= :min_price",
            "#price <= :max_price",
            "#is_featured = :is_featured",
            "#owner = :owner",
            "contains(#search_text, :search)",
        ] {
            assert!(
                filter.expression.contains(piece),
                "expression missing {piece:?}: {}",
                filter.expression
            );
        }

        // text operands are lowercased to match the denormalized attributes
        assert_eq!(
            filter.values.get(":city"),
            Some(&AttributeValue::S("pune".to_string()))
        );
        assert_eq!(
            filter.values.get(":search"),
            Some(&AttributeValue::S("station".to_string()))
        );
        assert_eq!(
            filter.values.get(":property_type"),
            Some(&AttributeValue::S("pg".to_string()))
        );
    }

    #[test]
    fn price_bounds_share_the_price_alias() {
        let filters = ListingFilters {
            min_price: Some(1000.0),
            max_price: Some(500.0),
            ..Default::default()
        };
        let filter = build_filter_expression(&filters);
        assert_eq!(filter.names.get("#price"), Some(&"price".to_string()));
        // contradictory bounds stay contradictory; the store returns nothing
        assert!(filter.expression.contains("#price >= :min_price"));
        assert!(filter.expression.contains("#price <= :max_price"));
    }
}
