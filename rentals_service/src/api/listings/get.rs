use axum::{
    Json,
    extract::{Path, State},
};
use models_rentals::api::ListingResponse;
use uuid::Uuid;

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Fetch a single listing by id.
#[utoipa::path(
    get,
    path = "/api/listings/{listing_id}",
    params(
        ("listing_id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "The listing with its owner populated", body = ListingResponse),
        (status = 404, description = "Listing not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Listings"
)]
#[tracing::instrument(skip(rentals))]
pub async fn get_listing(
    State(rentals): State<Rentals>,
    Path(listing_id): Path<Uuid>,
) -> Result<Json<ListingResponse>, HttpError> {
    let listing = rentals.get(listing_id).await?;
    Ok(Json(listing))
}
