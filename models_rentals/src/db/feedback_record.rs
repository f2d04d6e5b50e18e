//! The feedback document as persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::SubmitFeedbackRequest;
use crate::shared::FeedbackStatus;

/// Constant partition attribute for the feedback CreatedAtIndex GSI.
pub const FEEDBACK_ENTITY: &str = "FEEDBACK";

/// Rating applied when a submission does not carry one.
pub const DEFAULT_RATING: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRecord {
    pub id: Uuid,
    /// GSI partition attribute, always [FEEDBACK_ENTITY]
    pub entity: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub rating: u8,
    pub status: FeedbackStatus,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Build a fresh document from a validated submission: pending, private,
    /// rating defaulted to 5 when absent.
    pub fn new(request: SubmitFeedbackRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity: FEEDBACK_ENTITY.to_string(),
            name: request.name,
            email: request.email,
            subject: request.subject,
            message: request.message,
            rating: request.rating.unwrap_or(DEFAULT_RATING),
            status: FeedbackStatus::pending(),
            is_public: false,
            created_at: now,
        }
    }

    /// Whether this entry may appear on the public testimonial endpoint.
    pub fn is_publicly_visible(&self) -> bool {
        self.status.is_resolved() && self.is_public
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(rating: Option<u8>) -> SubmitFeedbackRequest {
        SubmitFeedbackRequest {
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            subject: "Thanks".to_string(),
            message: "Found a place quickly".to_string(),
            rating,
        }
    }

    #[test]
    fn rating_defaults_to_five() {
        let record = FeedbackRecord::new(submission(None), Utc::now());
        assert_eq!(record.rating, 5);
    }

    #[test]
    fn new_submission_is_pending_and_private() {
        let record = FeedbackRecord::new(submission(Some(4)), Utc::now());
        assert_eq!(record.status.0, FeedbackStatus::PENDING);
        assert!(!record.is_public);
        assert!(!record.is_publicly_visible());
    }

    #[test]
    fn visibility_requires_resolved_and_public() {
        let mut record = FeedbackRecord::new(submission(None), Utc::now());

        record.is_public = true;
        assert!(!record.is_publicly_visible());

        record.status = FeedbackStatus(FeedbackStatus::RESOLVED.to_string());
        assert!(record.is_publicly_visible());

        record.is_public = false;
        assert!(!record.is_publicly_visible());
    }
}
