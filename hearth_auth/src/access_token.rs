use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use model_account::AccountRole;

use crate::error::HearthAuthError;

/// Everything needed to validate an access token, read once at startup.
#[derive(Clone)]
pub struct JwtValidationArgs {
    audience: String,
    issuer: String,
    jwt_secret: String,
}

impl JwtValidationArgs {
    /// create a new instance of self by reading the required data from the environment
    pub fn new_from_env() -> anyhow::Result<Self> {
        let audience = std::env::var("JWT_AUDIENCE")?;
        let issuer = std::env::var("JWT_ISSUER")?;
        let jwt_secret = std::env::var("JWT_SECRET")?;
        Ok(Self {
            audience,
            issuer,
            jwt_secret,
        })
    }

    #[cfg(any(test, feature = "testing"))]
    /// create a new instance of Self from explicit values
    pub fn new_testing(audience: &str, issuer: &str, jwt_secret: &str) -> Self {
        Self {
            audience: audience.to_string(),
            issuer: issuer.to_string(),
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

/// Claims carried by a hearth access token. Signed by the authentication
/// service; this crate only ever decodes them.
#[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug, Clone)]
pub struct HearthAccessToken {
    /// The audience of the token
    pub aud: String,
    /// The expiration time of the token
    pub exp: usize,
    /// The issuer of the token
    pub iss: String,
    /// The account id of the caller
    pub user_id: String,
    /// The email of the caller
    pub email: String,
    /// The role granted to the account when the token was minted
    pub role: AccountRole,
}

/// Verify signature, audience, issuer and expiry, and return the claims.
pub fn validate_access_token(
    access_token: &str,
    args: &JwtValidationArgs,
) -> Result<HearthAccessToken, HearthAuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    validation.leeway = 0;
    validation.reject_tokens_expiring_in_less_than = 60;

    validation.set_audience(&[&args.audience]);
    validation.set_issuer(&[&args.issuer]);

    let decoded_jwt: HearthAccessToken = match decode::<HearthAccessToken>(
        access_token,
        &DecodingKey::from_secret(args.jwt_secret.as_bytes()),
        &validation,
    ) {
        Ok(decoded) => decoded.claims,
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                return Err(HearthAuthError::JwtExpired);
            }
            _ => {
                return Err(HearthAuthError::JwtValidationFailed {
                    details: e.to_string(),
                });
            }
        },
    };

    Ok(decoded_jwt)
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn create_test_jwt(
        audience: &str,
        issuer: &str,
        user_id: &str,
        role: AccountRole,
        jwt_secret: &str,
        time: Option<usize>,
    ) -> String {
        let now = time.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_secs() as usize
        });

        let claims = HearthAccessToken {
            aud: audience.to_string(),
            exp: now + 3600,
            iss: issuer.to_string(),
            user_id: user_id.to_string(),
            email: "test@hearth.rentals".to_string(),
            role,
        };

        let header = jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256);
        jsonwebtoken::encode(
            &header,
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(jwt_secret.as_ref()),
        )
        .expect("Failed to create test JWT")
    }

    fn test_args() -> JwtValidationArgs {
        JwtValidationArgs::new_testing("test_audience", "test.hearth.rentals", "super_secret_key")
    }

    #[test]
    fn valid_token_round_trips() -> anyhow::Result<()> {
        let token = create_test_jwt(
            "test_audience",
            "test.hearth.rentals",
            "acct_42",
            AccountRole::Owner,
            "super_secret_key",
            None,
        );

        let claims = validate_access_token(&token, &test_args())?;

        assert_eq!(claims.user_id, "acct_42");
        assert_eq!(claims.role, AccountRole::Owner);
        Ok(())
    }

    #[test]
    fn invalid_audience_is_rejected() {
        let token = create_test_jwt(
            "bad",
            "test.hearth.rentals",
            "acct_42",
            AccountRole::Tenant,
            "super_secret_key",
            None,
        );

        let err = validate_access_token(&token, &test_args()).unwrap_err();
        assert_eq!(err.to_string(), "jwt validation failed: InvalidAudience");
    }

    #[test]
    fn invalid_issuer_is_rejected() {
        let token = create_test_jwt(
            "test_audience",
            "bad.hearth.rentals",
            "acct_42",
            AccountRole::Tenant,
            "super_secret_key",
            None,
        );

        let err = validate_access_token(&token, &test_args()).unwrap_err();
        assert_eq!(err.to_string(), "jwt validation failed: InvalidIssuer");
    }

    #[test]
    fn expired_token_is_rejected() {
        let past = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as usize
            - 10000;
        let token = create_test_jwt(
            "test_audience",
            "test.hearth.rentals",
            "acct_42",
            AccountRole::Tenant,
            "super_secret_key",
            Some(past),
        );

        let err = validate_access_token(&token, &test_args()).unwrap_err();
        assert_eq!(err.to_string(), "jwt is expired");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_test_jwt(
            "test_audience",
            "test.hearth.rentals",
            "acct_42",
            AccountRole::Tenant,
            "other_secret",
            None,
        );

        assert!(validate_access_token(&token, &test_args()).is_err());
    }
}
