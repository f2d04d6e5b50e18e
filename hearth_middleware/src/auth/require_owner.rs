use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use model_account::UserContext;
use model_error_response::ErrorResponse;

/// Rejects callers without the owner role. Must be mounted inside
/// `decode_jwt` so the [UserContext] extension is already attached.
pub async fn handler(req: Request, next: Next) -> Result<Response, Response> {
    let Some(user_context) = req.extensions().get::<UserContext>() else {
        // decode_jwt was not layered before us; treat as unauthenticated
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("unauthorized")),
        )
            .into_response());
    };

    if !user_context.is_owner() {
        tracing::trace!(user_id = %user_context.user_id, "caller lacks owner role");
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("owner role required")),
        )
            .into_response());
    }

    Ok(next.run(req).await)
}
