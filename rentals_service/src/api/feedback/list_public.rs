use axum::{
    Json,
    extract::{Query, State},
};
use models_rentals::api::{PublicFeedbackQueryParams, PublicFeedbackResponse};

use crate::api::context::Rentals;
use crate::api::error::HttpError;

/// Published testimonials: resolved AND public entries only, newest first.
#[utoipa::path(
    get,
    path = "/api/feedback/public",
    params(PublicFeedbackQueryParams),
    responses(
        (status = 200, description = "Publicly visible feedback", body = PublicFeedbackResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Feedback"
)]
#[tracing::instrument(skip(rentals))]
pub async fn get_public_feedback(
    State(rentals): State<Rentals>,
    Query(params): Query<PublicFeedbackQueryParams>,
) -> Result<Json<PublicFeedbackResponse>, HttpError> {
    let feedbacks = rentals.public_feedback(params.limit).await?;

    Ok(Json(PublicFeedbackResponse { feedbacks }))
}
