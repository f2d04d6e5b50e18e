//! Database layer types. These are the documents as persisted, including the
//! denormalized attributes the store's filter expressions match against.

mod feedback_record;
mod listing_record;
mod wishlist_record;

pub use feedback_record::{DEFAULT_RATING, FEEDBACK_ENTITY, FeedbackRecord};
pub use listing_record::{LISTING_ENTITY, ListingRecord};
pub use wishlist_record::{WishlistInsertOutcome, WishlistRecord};
