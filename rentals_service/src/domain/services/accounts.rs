//! Account operations. Accounts are written by the authentication service;
//! this service only reads them.

use model_account::ProfileResponse;

use crate::domain::error::{RentalsError, Result};
use crate::domain::ports::RentalsStorage;
use crate::domain::services::RentalsService;

impl<S> RentalsService<S>
where
    S: RentalsStorage,
    anyhow::Error: From<S::Error>,
{
    /// The authenticated caller's own account record.
    pub async fn profile(&self, user_id: &str) -> Result<ProfileResponse> {
        let account = self
            .storage()
            .get_account(user_id)
            .await
            .map_err(|e| RentalsError::Internal(e.into()))?
            .ok_or_else(|| RentalsError::NotFound("account not found".to_string()))?;

        Ok(ProfileResponse::from(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::in_memory::{InMemoryStorage, test_account};

    #[tokio::test]
    async fn profile_returns_own_record() {
        let storage = InMemoryStorage::default();
        storage.add_account(test_account("acct_1", "Asha"));
        let service = RentalsService::new(storage);

        let profile = service.profile("acct_1").await.unwrap();
        assert_eq!(profile.id, "acct_1");
        assert_eq!(profile.name, "Asha");
    }

    #[tokio::test]
    async fn missing_account_is_not_found() {
        let service = RentalsService::new(InMemoryStorage::default());
        let err = service.profile("acct_missing").await.unwrap_err();
        assert!(matches!(err, RentalsError::NotFound(_)));
    }
}
