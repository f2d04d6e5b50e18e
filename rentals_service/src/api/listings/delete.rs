use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
};
use model_account::UserContext;
use uuid::Uuid;

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Remove a listing. Only the owning account may delete.
#[utoipa::path(
    delete,
    path = "/api/listings/{listing_id}",
    params(
        ("listing_id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Caller does not own this listing"),
        (status = 404, description = "Listing not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Listings"
)]
#[tracing::instrument(skip(rentals, user_context), fields(user_id = %user_context.user_id))]
pub async fn delete_listing(
    State(rentals): State<Rentals>,
    Extension(user_context): Extension<UserContext>,
    Path(listing_id): Path<Uuid>,
) -> Result<StatusCode, HttpError> {
    rentals.delete(listing_id, &user_context.user_id).await?;

    tracing::info!(%listing_id, "deleted listing");

    Ok(StatusCode::NO_CONTENT)
}
