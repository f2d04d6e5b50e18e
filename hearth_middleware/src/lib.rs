//! Axum middleware shared by the hearth services: JWT decoding into a
//! [model_account::UserContext] request extension, the owner-role guard for
//! listing mutation routes, and the common CORS layer.

pub mod auth;
mod cors;

pub use cors::cors_layer;
