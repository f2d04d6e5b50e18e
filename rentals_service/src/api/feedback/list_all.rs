use axum::{
    Json,
    extract::{Extension, Query, State},
};
use model_account::UserContext;
use models_rentals::api::{FeedbackListQueryParams, FeedbackListResponse};
use models_rentals::service::PageParams;

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Every feedback entry, paged, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/feedback",
    params(FeedbackListQueryParams),
    responses(
        (status = 200, description = "Feedback entries with pagination", body = FeedbackListResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Feedback"
)]
#[tracing::instrument(skip(rentals, user_context), fields(user_id = %user_context.user_id))]
pub async fn get_all_feedback(
    State(rentals): State<Rentals>,
    Extension(user_context): Extension<UserContext>,
    Query(params): Query<FeedbackListQueryParams>,
) -> Result<Json<FeedbackListResponse>, HttpError> {
    let page = PageParams::new(params.page, params.limit);

    let (feedbacks, pagination) = rentals.all_feedback(params.status.as_deref(), page).await?;

    Ok(Json(FeedbackListResponse {
        feedbacks,
        pagination,
    }))
}
