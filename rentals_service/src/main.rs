use std::sync::Arc;

use anyhow::Context;
use aws_config::Region;
use hearth_auth::access_token::JwtValidationArgs;
use hearth_entrypoint::HearthEntrypoint;
use rentals_db_client::{RentalsDbClient, RentalsTables};
use rentals_service::domain::services::RentalsService;
use rentals_service::outbound::DynamoStorage;

use crate::api::context::ApiContext;
use crate::config::Config;

mod api;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    HearthEntrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::info!("initialized config");

    let jwt_args =
        JwtValidationArgs::new_from_env().context("expected jwt validation args in env")?;

    let tables = RentalsTables::from_env().context("expected table names in env")?;
    let db_client = RentalsDbClient::new(Region::from_static("us-east-1"), tables).await;

    tracing::info!("initialized dynamodb client");

    let rentals = Arc::new(RentalsService::new(DynamoStorage::new(db_client)));

    api::setup_and_serve(ApiContext {
        rentals,
        jwt_args,
        config: Arc::new(config),
    })
    .await?;
    Ok(())
}
