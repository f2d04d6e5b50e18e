use tower_http::cors::{Any, CorsLayer};

/// The CORS layer every public hearth API mounts. The browser client runs on
/// its own origin; credentials ride in the Authorization header, so wildcard
/// origins are acceptable here.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
