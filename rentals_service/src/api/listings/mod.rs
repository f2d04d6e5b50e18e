pub mod create;
pub mod delete;
pub mod get;
pub mod search;
pub mod update;

use axum::Router;
use axum::routing::{get, post, put};

use crate::api::context::ApiContext;

/// Unauthenticated listing reads.
pub fn public_router() -> Router<ApiContext> {
    Router::new()
        .route("/listings", get(search::search_listings))
        .route("/listings/:listing_id", get(get::get_listing))
}

/// Mutations, mounted behind auth + owner-role middleware.
pub fn owner_router() -> Router<ApiContext> {
    Router::new()
        .route("/listings", post(create::create_listing))
        .route(
            "/listings/:listing_id",
            put(update::update_listing).delete(delete::delete_listing),
        )
}
