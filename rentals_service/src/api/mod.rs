pub mod context;
mod error;
mod feedback;
mod health;
mod listings;
mod swagger;
mod users;
mod wishlist;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::context::ApiContext;

static MAX_REQUEST_SIZE: usize = 1024 * 1024;

pub async fn setup_and_serve(context: ApiContext) -> anyhow::Result<()> {
    let cors = hearth_middleware::cors_layer();

    let auth = axum::middleware::from_fn_with_state(
        context.jwt_args.clone(),
        hearth_middleware::auth::decode_jwt::handler,
    );
    let owner_only = ServiceBuilder::new().layer(auth.clone()).layer(
        axum::middleware::from_fn(hearth_middleware::auth::require_owner::handler),
    );

    let port = context.config.port;
    let environment = context.config.environment;

    let app = Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(listings::public_router())
                .merge(feedback::public_router())
                .merge(listings::owner_router().layer(owner_only))
                .merge(wishlist::router().layer(auth.clone()))
                .merge(feedback::reviewer_router().layer(auth.clone()))
                .merge(users::router().layer(auth))
                .merge(health::router()),
        )
        .with_state(context)
        .merge(
            SwaggerUi::new("/api/docs")
                .url("/api/api-doc/openapi.json", swagger::ApiDoc::openapi()),
        )
        .layer(cors)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_SIZE));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .context("could not bind listener")?;

    tracing::info!(
        "\nrentals_service\nenvironment: {:?}\nport: {}",
        environment,
        port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}
