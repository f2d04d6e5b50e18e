use axum::{
    Json,
    extract::{Extension, Path, State},
};
use model_account::UserContext;
use models_rentals::api::{ListingResponse, UpdateListingRequest};
use uuid::Uuid;

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Apply a patch to a listing. Only the owning account may update.
#[utoipa::path(
    put,
    path = "/api/listings/{listing_id}",
    params(
        ("listing_id" = Uuid, Path, description = "Listing ID")
    ),
    request_body = UpdateListingRequest,
    responses(
        (status = 200, description = "Listing updated successfully", body = ListingResponse),
        (status = 400, description = "Invalid patch"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller does not own this listing"),
        (status = 404, description = "Listing not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Listings"
)]
#[tracing::instrument(skip(rentals, user_context, patch), fields(user_id = %user_context.user_id))]
pub async fn update_listing(
    State(rentals): State<Rentals>,
    Extension(user_context): Extension<UserContext>,
    Path(listing_id): Path<Uuid>,
    Json(patch): Json<UpdateListingRequest>,
) -> Result<Json<ListingResponse>, HttpError> {
    let listing = rentals
        .update(listing_id, &user_context.user_id, patch)
        .await?;

    Ok(Json(listing))
}
