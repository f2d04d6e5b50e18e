use axum::{Json, extract::Query, extract::State};
use models_rentals::api::{ListingQueryParams, SearchListingsResponse};
use models_rentals::service::{ListingFilters, PageParams};

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Search available listings with optional, combinable filters.
#[utoipa::path(
    get,
    path = "/api/listings",
    params(ListingQueryParams),
    responses(
        (status = 200, description = "Matching listings with pagination", body = SearchListingsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Listings"
)]
#[tracing::instrument(skip(rentals))]
pub async fn search_listings(
    State(rentals): State<Rentals>,
    Query(params): Query<ListingQueryParams>,
) -> Result<Json<SearchListingsResponse>, HttpError> {
    let page = PageParams::new(params.page, params.limit);
    let filters = ListingFilters::from(params);

    let (listings, pagination) = rentals.search(filters, page).await?;

    Ok(Json(SearchListingsResponse {
        listings,
        pagination,
    }))
}
