//! Items API - REST server over a JSON item document

use axum_helpers::{configure_error_details, server::create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    configure_error_details(config.explicit_environment.as_ref());

    info!("Using item document at {}", config.data_path.display());

    let state = AppState::new(config);
    let app = api::app(&state).await?;

    info!("Starting Items API on port {}", state.config.server.port);

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: no open resources to release");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
