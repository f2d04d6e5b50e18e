use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
};
use model_account::UserContext;
use models_rentals::api::AddToWishlistRequest;

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Save a listing to the caller's wishlist.
#[utoipa::path(
    post,
    path = "/api/listings/wishlist",
    request_body = AddToWishlistRequest,
    responses(
        (status = 201, description = "Added to wishlist"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Listing not found"),
        (status = 409, description = "Listing already in wishlist"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wishlist"
)]
#[tracing::instrument(skip(rentals, user_context), fields(user_id = %user_context.user_id))]
pub async fn add_to_wishlist(
    State(rentals): State<Rentals>,
    Extension(user_context): Extension<UserContext>,
    Json(request): Json<AddToWishlistRequest>,
) -> Result<StatusCode, HttpError> {
    rentals
        .add_to_wishlist(&user_context.user_id, request.listing_id)
        .await?;

    Ok(StatusCode::CREATED)
}
