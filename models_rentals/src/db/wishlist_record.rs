//! The wishlist join document as persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One saved listing for one account. The table's composite primary key
/// (user_id HASH, listing_id RANGE) is the uniqueness invariant; there is no
/// separate generated id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WishlistRecord {
    pub user_id: String,
    pub listing_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl WishlistRecord {
    pub fn new(user_id: String, listing_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            listing_id,
            created_at: now,
        }
    }
}

/// Result of a conditional wishlist insert. The store reports a duplicate via
/// its conditional-write primitive rather than an error the caller must parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistInsertOutcome {
    Inserted,
    AlreadyExists,
}
