//! RIO Onderwijs Gateway
//!
//! Search Dutch education-institution registrations through the RIO LOD API:
//! - Erkenningen per place, with locations and licenses
//! - Organisatorische eenheden per erkenning
//! - Offered study programs per organisatorische eenheid
//! - A static page rendering the results

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::rio::RioLodClient;
use tracing::info;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let client = RioLodClient::from_config(&config.rio)?;

    info!(
        base_url = %client.base_url(),
        timeout_secs = config.rio.timeout_secs,
        "RIO LOD client configured"
    );

    Ok(AppState::with_client(Arc::new(client)))
}
