use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
};
use model_account::UserContext;
use uuid::Uuid;

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Remove a saved listing from the caller's wishlist.
#[utoipa::path(
    delete,
    path = "/api/listings/wishlist/{listing_id}",
    params(
        ("listing_id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 204, description = "Removed from wishlist"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Listing not found in wishlist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wishlist"
)]
#[tracing::instrument(skip(rentals, user_context), fields(user_id = %user_context.user_id))]
pub async fn remove_from_wishlist(
    State(rentals): State<Rentals>,
    Extension(user_context): Extension<UserContext>,
    Path(listing_id): Path<Uuid>,
) -> Result<StatusCode, HttpError> {
    rentals
        .remove_from_wishlist(&user_context.user_id, listing_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
