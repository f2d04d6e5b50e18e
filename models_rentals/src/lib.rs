//! Rentals Models
//!
//! This crate defines the data models for the rental marketplace using a
//! three-layer architecture:
//!
//! - **shared**: Shared types (PropertyType, GeoPoint, ...) used across all layers
//! - **db**: Database layer types (used only by rentals_db_client and storage adapters)
//! - **service**: Business logic layer types (filters, pagination)
//! - **api**: API layer types (external-facing requests/responses)

pub mod api;
pub mod db;
pub mod service;
pub mod shared;

// Re-export commonly used shared types for convenience
pub use shared::{ContactInfo, FeedbackStatus, GeoPoint, NearbyPlace, PropertyType};
