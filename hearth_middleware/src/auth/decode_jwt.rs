use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use hearth_auth::{
    access_token::{JwtValidationArgs, validate_access_token},
    error::HearthAuthError,
};
use model_account::UserContext;
use model_error_response::ErrorResponse;

/// Decodes the bearer JWT and inserts a [UserContext] request extension.
/// Mount this on every route group that requires an authenticated caller;
/// role checks are layered separately (see `require_owner`).
pub async fn handler(
    jwt_validation_args: State<JwtValidationArgs>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    if cfg!(feature = "local_auth") {
        req.extensions_mut().insert(UserContext {
            user_id: std::env::var("LOCAL_USER_ID").unwrap_or("acct_local".to_string()),
            email: std::env::var("LOCAL_USER_EMAIL").unwrap_or("local@hearth.rentals".to_string()),
            role: model_account::AccountRole::Owner,
        });
        return Ok(next.run(req).await);
    }

    let access_token =
        match hearth_auth::headers::extract_access_token_from_request_headers(req.headers()) {
            Ok(access_token) => access_token,
            Err(e) => {
                tracing::trace!(error=?e, "unable to get access token");
                return Err((
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new("unauthorized")),
                )
                    .into_response());
            }
        };

    let claims = validate_access_token(&access_token, &jwt_validation_args).map_err(|e| {
        match e {
            HearthAuthError::JwtExpired => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("jwt expired")),
            )
                .into_response(),
            _ => {
                tracing::error!(error=?e, "unable to decode jwt");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new("unauthorized")),
                )
                    .into_response()
            }
        }
    })?;

    req.extensions_mut().insert(UserContext {
        user_id: claims.user_id,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(req).await)
}
