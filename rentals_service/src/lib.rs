//! Rentals Service library following hexagonal architecture pattern
//!
//! The domain module owns the marketplace rules (search/mutation authorization,
//! wishlist consistency, feedback moderation) behind a storage port; outbound
//! adapters bind that port to DynamoDB. The HTTP surface lives with the binary.

pub mod domain;
pub mod outbound;
