use axum::{
    Json,
    extract::{Extension, State},
};
use model_account::{ProfileResponse, UserContext};

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// The authenticated caller's own account record.
#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "The caller's profile", body = ProfileResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
#[tracing::instrument(skip(rentals, user_context), fields(user_id = %user_context.user_id))]
pub async fn get_profile(
    State(rentals): State<Rentals>,
    Extension(user_context): Extension<UserContext>,
) -> Result<Json<ProfileResponse>, HttpError> {
    let profile = rentals.profile(&user_context.user_id).await?;

    Ok(Json(profile))
}
