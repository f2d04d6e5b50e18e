//! API layer types: request bodies, query parameters, responses and the
//! validation errors surfaced to callers.

pub mod error;
mod query_params;
mod requests;
mod responses;

pub use query_params::{FeedbackListQueryParams, ListingQueryParams, PublicFeedbackQueryParams};
pub use requests::{
    AddToWishlistRequest, CreateListingRequest, DESCRIPTION_MAX, DESCRIPTION_MIN,
    SubmitFeedbackRequest, TITLE_MAX, TITLE_MIN, UpdateFeedbackStatusRequest,
    UpdateListingRequest,
};
pub use responses::{
    FeedbackListResponse, FeedbackResponse, ListingResponse, Pagination, PublicFeedbackEntry,
    PublicFeedbackResponse, SearchListingsResponse, WishlistListingsResponse,
};
