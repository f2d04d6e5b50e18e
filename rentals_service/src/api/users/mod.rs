pub mod profile;

use axum::Router;
use axum::routing::get;

use crate::api::context::ApiContext;

/// Account routes. All require an authenticated caller.
pub fn router() -> Router<ApiContext> {
    Router::new().route("/users/profile", get(profile::get_profile))
}
