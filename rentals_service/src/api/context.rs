use axum::extract::FromRef;
use hearth_auth::access_token::JwtValidationArgs;
use rentals_service::{domain::services::RentalsService, outbound::DynamoStorage};
use std::sync::Arc;

use crate::config::Config;

/// The concrete service type the handlers talk to.
pub type Rentals = Arc<RentalsService<DynamoStorage>>;

#[derive(Clone, FromRef)]
pub struct ApiContext {
    pub rentals: Rentals,
    pub jwt_args: JwtValidationArgs,
    pub config: Arc<Config>,
}
