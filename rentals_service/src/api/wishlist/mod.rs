pub mod add;
pub mod list;
pub mod remove;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::api::context::ApiContext;

/// Wishlist routes. All require an authenticated caller; the paths live under
/// /listings/wishlist to match the public API contract.
pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/listings/wishlist", post(add::add_to_wishlist))
        .route(
            "/listings/wishlist/:listing_id",
            delete(remove::remove_from_wishlist),
        )
        .route("/listings/wishlist/user", get(list::get_wishlist))
}
