//! Moderation status of a feedback submission.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Free-form status label. "pending" and "resolved" are the values the
/// platform assigns; reviewers may set custom labels, so this is a newtype
/// rather than a closed enum. Only [FeedbackStatus::RESOLVED] participates in
/// the public-visibility rule.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct FeedbackStatus(pub String);

impl FeedbackStatus {
    /// Initial status of every submission
    pub const PENDING: &'static str = "pending";
    /// Status required for public display
    pub const RESOLVED: &'static str = "resolved";

    /// the status every new submission starts in
    pub fn pending() -> Self {
        Self(Self::PENDING.to_string())
    }

    /// whether this status permits public display (together with is_public)
    pub fn is_resolved(&self) -> bool {
        self.0 == Self::RESOLVED
    }
}

impl From<String> for FeedbackStatus {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
