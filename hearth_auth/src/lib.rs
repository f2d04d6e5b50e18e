//! Validation of hearth access tokens.
//!
//! Token issuance lives in the authentication service; everything here only
//! verifies and decodes what that service signed.

pub mod access_token;
pub mod error;
pub mod headers;
