use crate::error::HearthAuthError;

/// Pull the bearer token out of the Authorization header.
pub fn extract_access_token_from_request_headers(
    headers: &axum::http::HeaderMap,
) -> Result<String, HearthAuthError> {
    let auth_token_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let Some(auth_token) = auth_token_header else {
        return Err(HearthAuthError::NoAccessTokenProvided);
    };

    let auth_token_parts = auth_token.split("Bearer ").collect::<Vec<&str>>();
    if auth_token_parts.len() != 2 {
        return Err(HearthAuthError::InvalidAuthorizationHeaderFormat);
    }
    tracing::trace!("Authorization header provided");
    Ok(auth_token_parts[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));

        let token = extract_access_token_from_request_headers(&headers).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn missing_header_is_rejected() {
        let headers = HeaderMap::new();
        let err = extract_access_token_from_request_headers(&headers).unwrap_err();
        assert_eq!(err.to_string(), "no access token provided");
    }

    #[test]
    fn non_bearer_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwdw=="));

        let err = extract_access_token_from_request_headers(&headers).unwrap_err();
        assert_eq!(err.to_string(), "invalid Authorization header format");
    }
}
