use axum::{Json, extract::State, http::StatusCode};
use models_rentals::api::{FeedbackResponse, SubmitFeedbackRequest};

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Accept a visitor feedback submission.
#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 201, description = "Feedback submitted successfully", body = FeedbackResponse),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Feedback"
)]
#[tracing::instrument(skip(rentals, request))]
pub async fn submit_feedback(
    State(rentals): State<Rentals>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackResponse>), HttpError> {
    let feedback = rentals.submit_feedback(request).await?;

    tracing::info!(feedback_id = %feedback.id, "feedback submitted");

    Ok((StatusCode::CREATED, Json(feedback)))
}
