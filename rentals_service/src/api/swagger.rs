use utoipa::OpenApi;

use crate::api::{feedback, listings, users, wishlist};

#[derive(OpenApi)]
#[openapi(
    paths(
        listings::search::search_listings,
        listings::get::get_listing,
        listings::create::create_listing,
        listings::update::update_listing,
        listings::delete::delete_listing,
        wishlist::add::add_to_wishlist,
        wishlist::remove::remove_from_wishlist,
        wishlist::list::get_wishlist,
        feedback::submit::submit_feedback,
        feedback::list_public::get_public_feedback,
        feedback::list_all::get_all_feedback,
        feedback::update_status::update_feedback_status,
        users::profile::get_profile,
    ),
    components(
        schemas(
            models_rentals::api::CreateListingRequest,
            models_rentals::api::UpdateListingRequest,
            models_rentals::api::AddToWishlistRequest,
            models_rentals::api::SubmitFeedbackRequest,
            models_rentals::api::UpdateFeedbackStatusRequest,
            models_rentals::api::ListingResponse,
            models_rentals::api::SearchListingsResponse,
            models_rentals::api::WishlistListingsResponse,
            models_rentals::api::FeedbackResponse,
            models_rentals::api::FeedbackListResponse,
            models_rentals::api::PublicFeedbackEntry,
            models_rentals::api::PublicFeedbackResponse,
            models_rentals::api::Pagination,
            models_rentals::shared::PropertyType,
            models_rentals::shared::GeoPoint,
            models_rentals::shared::ContactInfo,
            models_rentals::shared::NearbyPlace,
            model_account::OwnerProfile,
            model_account::ProfileResponse,
            model_account::AccountRole,
            model_error_response::ErrorResponse,
        )
    ),
    tags(
        (name = "Listings", description = "Search, read and manage rental listings"),
        (name = "Wishlist", description = "Saved listings per account"),
        (name = "Feedback", description = "Visitor feedback and moderation"),
        (name = "Users", description = "Account profile")
    )
)]
pub struct ApiDoc;
