pub mod list_all;
pub mod list_public;
pub mod submit;
pub mod update_status;

use axum::Router;
use axum::routing::{get, post, put};

use crate::api::context::ApiContext;

/// Unauthenticated feedback routes: anyone may submit, anyone may read the
/// published testimonials.
pub fn public_router() -> Router<ApiContext> {
    Router::new()
        .route("/feedback", post(submit::submit_feedback))
        .route("/feedback/public", get(list_public::get_public_feedback))
}

/// Reviewer routes, mounted behind auth middleware. Any authenticated account
/// qualifies; no separate reviewer role exists today.
pub fn reviewer_router() -> Router<ApiContext> {
    Router::new()
        .route("/feedback", get(list_all::get_all_feedback))
        .route(
            "/feedback/:feedback_id/status",
            put(update_status::update_feedback_status),
        )
}
