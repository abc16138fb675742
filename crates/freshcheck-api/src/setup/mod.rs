//! Application setup and initialization.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Result;
use freshcheck_core::Config;

use crate::state::AppState;

/// Initialize telemetry, state, and routes.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry();

    tracing::info!("Configuration loaded");

    let state = Arc::new(AppState::new(config.clone())?);

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
