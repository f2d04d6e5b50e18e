//! Feedback operations: open submission, moderated public display.

use chrono::Utc;
use models_rentals::api::{
    FeedbackResponse, Pagination, PublicFeedbackEntry, SubmitFeedbackRequest,
    UpdateFeedbackStatusRequest,
};
use models_rentals::db::FeedbackRecord;
use models_rentals::service::PageParams;
use uuid::Uuid;

use crate::domain::error::{RentalsError, Result};
use crate::domain::ports::RentalsStorage;
use crate::domain::services::RentalsService;

impl<S> RentalsService<S>
where
    S: RentalsStorage,
    anyhow::Error: From<S::Error>,
{
    /// Accept a visitor submission. Starts pending and private.
    pub async fn submit_feedback(&self, request: SubmitFeedbackRequest) -> Result<FeedbackResponse> {
        request
            .validate()
            .map_err(|e| RentalsError::ValidationError(e.to_string()))?;

        let record = FeedbackRecord::new(request, Utc::now());

        self.storage()
            .insert_feedback(record.clone())
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?;

        Ok(FeedbackResponse::from(record))
    }

    /// Up to `limit` resolved-and-public entries, newest first, projected to
    /// the public fields.
    pub async fn public_feedback(&self, limit: u64) -> Result<Vec<PublicFeedbackEntry>> {
        let entries = self
            .storage()
            .list_public_feedback(limit)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?;

        Ok(entries
            .into_iter()
            .filter(|record| record.is_publicly_visible())
            .map(PublicFeedbackEntry::from)
            .collect())
    }

    /// Every entry, newest first, optionally filtered to one status, paged.
    pub async fn all_feedback(
        &self,
        status: Option<&str>,
        page: PageParams,
    ) -> Result<(Vec<FeedbackResponse>, Pagination)> {
        let mut entries = self
            .storage()
            .list_feedback(status)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?;

        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = entries.len() as u64;
        let window = page
            .slice(&entries)
            .iter()
            .cloned()
            .map(FeedbackResponse::from)
            .collect();

        Ok((window, Pagination::new(page, total)))
    }

    /// Set the moderation fields on one entry. Status transitions are
    /// free-form by design.
    pub async fn update_feedback_status(
        &self,
        id: Uuid,
        request: UpdateFeedbackStatusRequest,
    ) -> Result<FeedbackResponse> {
        let updated = self
            .storage()
            .update_feedback_status(id, &request.status, request.is_public)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?
            .ok_or_else(|| RentalsError::NotFound("feedback not found".to_string()))?;

        Ok(FeedbackResponse::from(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::in_memory::InMemoryStorage;
    use models_rentals::shared::FeedbackStatus;

    fn submission(name: &str, rating: Option<u8>) -> SubmitFeedbackRequest {
        SubmitFeedbackRequest {
            name: name.to_string(),
            email: format!("{name}@example.com").to_lowercase(),
            subject: "Feedback".to_string(),
            message: "Found a great flat".to_string(),
            rating,
        }
    }

    fn service() -> RentalsService<InMemoryStorage> {
        RentalsService::new(InMemoryStorage::default())
    }

    #[tokio::test]
    async fn submission_defaults_rating_and_starts_private() {
        let service = service();

        let feedback = service.submit_feedback(submission("Meera", None)).await.unwrap();

        assert_eq!(feedback.rating, 5);
        assert_eq!(feedback.status, FeedbackStatus::PENDING);
        assert!(!feedback.is_public);
    }

    #[tokio::test]
    async fn invalid_rating_is_rejected() {
        let service = service();
        let err = service
            .submit_feedback(submission("Meera", Some(9)))
            .await
            .unwrap_err();
        assert!(matches!(err, RentalsError::ValidationError(_)));
    }

    #[tokio::test]
    async fn public_listing_only_shows_resolved_public_entries() {
        let service = service();

        let pending = service
            .submit_feedback(submission("Pending", None))
            .await
            .unwrap();
        let resolved_private = service
            .submit_feedback(submission("Private", None))
            .await
            .unwrap();
        let resolved_public = service
            .submit_feedback(submission("Public", Some(4)))
            .await
            .unwrap();

        service
            .update_feedback_status(
                resolved_private.id,
                UpdateFeedbackStatusRequest {
                    status: FeedbackStatus::RESOLVED.to_string(),
                    is_public: false,
                },
            )
            .await
            .unwrap();
        service
            .update_feedback_status(
                resolved_public.id,
                UpdateFeedbackStatusRequest {
                    status: FeedbackStatus::RESOLVED.to_string(),
                    is_public: true,
                },
            )
            .await
            .unwrap();

        let public = service.public_feedback(10).await.unwrap();

        assert_eq!(public.len(), 1);
        assert_eq!(public[0].name, "Public");
        assert_eq!(public[0].rating, 4);
        assert!(!public.iter().any(|entry| entry.name == pending.name));
    }

    #[tokio::test]
    async fn public_listing_respects_limit() {
        let service = service();

        for i in 0..5 {
            let entry = service
                .submit_feedback(submission(&format!("User{i}"), None))
                .await
                .unwrap();
            service
                .update_feedback_status(
                    entry.id,
                    UpdateFeedbackStatusRequest {
                        status: FeedbackStatus::RESOLVED.to_string(),
                        is_public: true,
                    },
                )
                .await
                .unwrap();
        }

        let public = service.public_feedback(3).await.unwrap();
        assert_eq!(public.len(), 3);
    }

    #[tokio::test]
    async fn all_feedback_filters_by_status_and_pages() {
        let service = service();

        for i in 0..12 {
            let entry = service
                .submit_feedback(submission(&format!("User{i}"), None))
                .await
                .unwrap();
            if i < 4 {
                service
                    .update_feedback_status(
                        entry.id,
                        UpdateFeedbackStatusRequest {
                            status: FeedbackStatus::RESOLVED.to_string(),
                            is_public: false,
                        },
                    )
                    .await
                    .unwrap();
            }
        }

        let (all, pagination) = service
            .all_feedback(None, PageParams::new(1, 10))
            .await
            .unwrap();
        assert_eq!(all.len(), 10);
        assert_eq!(pagination.total, 12);
        assert_eq!(pagination.pages, 2);

        let (resolved, pagination) = service
            .all_feedback(Some(FeedbackStatus::RESOLVED), PageParams::new(1, 10))
            .await
            .unwrap();
        assert_eq!(resolved.len(), 4);
        assert_eq!(pagination.total, 4);
        assert!(resolved.iter().all(|f| f.status == FeedbackStatus::RESOLVED));
    }

    #[tokio::test]
    async fn update_status_of_missing_entry_is_not_found() {
        let service = service();
        let err = service
            .update_feedback_status(
                Uuid::new_v4(),
                UpdateFeedbackStatusRequest {
                    status: "resolved".to_string(),
                    is_public: true,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RentalsError::NotFound(_)));
    }

    #[tokio::test]
    async fn custom_status_values_are_allowed() {
        let service = service();
        let entry = service
            .submit_feedback(submission("Meera", None))
            .await
            .unwrap();

        let updated = service
            .update_feedback_status(
                entry.id,
                UpdateFeedbackStatusRequest {
                    status: "escalated".to_string(),
                    is_public: false,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, "escalated");
    }
}
