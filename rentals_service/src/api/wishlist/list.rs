use axum::{
    Json,
    extract::{Extension, State},
};
use model_account::UserContext;
use models_rentals::api::WishlistListingsResponse;

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Every listing the caller has saved, owners populated.
#[utoipa::path(
    get,
    path = "/api/listings/wishlist/user",
    responses(
        (status = 200, description = "The caller's saved listings", body = WishlistListingsResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wishlist"
)]
#[tracing::instrument(skip(rentals, user_context), fields(user_id = %user_context.user_id))]
pub async fn get_wishlist(
    State(rentals): State<Rentals>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<WishlistListingsResponse>, HttpError> {
    let listings = rentals.wishlist_listings(&user_context.user_id).await?;

    Ok(Json(WishlistListingsResponse { listings }))
}
