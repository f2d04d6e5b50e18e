//! Account types shared across the hearth services: the request identity
//! decoded from the access token, the persisted account document, and the
//! public profile projection attached to listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What an account is allowed to do on the platform.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Can browse, wishlist and leave feedback
    Tenant,
    /// Everything a tenant can do, plus create and manage listings
    Owner,
}

/// Used to store information about the caller for the duration of a request.
/// Inserted as a request extension by the auth middleware.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct UserContext {
    /// The account id
    pub user_id: String,
    /// The account email
    pub email: String,
    /// The role carried by the access token
    pub role: AccountRole,
}

impl UserContext {
    /// whether this caller holds the owner role
    pub fn is_owner(&self) -> bool {
        self.role == AccountRole::Owner
    }
}

/// The account document as persisted. Accounts are written by the
/// authentication service; this workspace only reads them.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct AccountRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
}

/// The owner's public profile fields attached to a listing response.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, utoipa::ToSchema)]
pub struct OwnerProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<AccountRecord> for OwnerProfile {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: record.phone,
        }
    }
}

/// Response body for the profile endpoint. Mirrors [AccountRecord] minus
/// nothing today, but kept separate so the wire shape can drift from the
/// document shape.
#[derive(Serialize, Deserialize, Debug, utoipa::ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
}

impl From<AccountRecord> for ProfileResponse {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            role: record.role,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AccountRole::Owner).unwrap(),
            "\"owner\""
        );
        assert_eq!(
            serde_json::from_str::<AccountRole>("\"tenant\"").unwrap(),
            AccountRole::Tenant
        );
    }

    #[test]
    fn owner_profile_projects_public_fields_only() {
        let record = AccountRecord {
            id: "acct_1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: Some("+91 98765 43210".to_string()),
            role: AccountRole::Owner,
            created_at: Utc::now(),
        };

        let profile = OwnerProfile::from(record.clone());
        assert_eq!(profile.id, record.id);
        assert_eq!(profile.name, record.name);

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("role").is_none());
        assert!(json.get("created_at").is_none());
    }
}
