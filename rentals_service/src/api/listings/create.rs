use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
};
use model_account::UserContext;
use models_rentals::api::{CreateListingRequest, ListingResponse};

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Create a new listing owned by the authenticated caller.
#[utoipa::path(
    post,
    path = "/api/listings",
    request_body = CreateListingRequest,
    responses(
        (status = 201, description = "Listing created successfully", body = ListingResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller lacks the owner role"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Listings"
)]
#[tracing::instrument(skip(rentals, user_context, request), fields(user_id = %user_context.user_id))]
pub async fn create_listing(
    State(rentals): State<Rentals>,
    Extension(user_context): Extension<UserContext>,
    Json(request): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<ListingResponse>), HttpError> {
    let listing = rentals.create(&user_context.user_id, request).await?;

    tracing::info!(listing_id = %listing.id, "created listing");

    Ok((StatusCode::CREATED, Json(listing)))
}
