use axum::{
    Json,
    extract::{Extension, Path, State},
};
use model_account::UserContext;
use models_rentals::api::{FeedbackResponse, UpdateFeedbackStatusRequest};
use uuid::Uuid;

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Set the moderation state of one feedback entry.
#[utoipa::path(
    put,
    path = "/api/feedback/{feedback_id}/status",
    params(
        ("feedback_id" = Uuid, Path, description = "Feedback ID")
    ),
    request_body = UpdateFeedbackStatusRequest,
    responses(
        (status = 200, description = "Feedback updated", body = FeedbackResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Feedback not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Feedback"
)]
#[tracing::instrument(skip(rentals, user_context, request), fields(user_id = %user_context.user_id))]
pub async fn update_feedback_status(
    State(rentals): State<Rentals>,
    Extension(user_context): Extension<UserContext>,
    Path(feedback_id): Path<Uuid>,
    Json(request): Json<UpdateFeedbackStatusRequest>,
) -> Result<Json<FeedbackResponse>, HttpError> {
    let feedback = rentals.update_feedback_status(feedback_id, request).await?;

    Ok(Json(feedback))
}
