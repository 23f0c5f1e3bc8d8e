//! CLI module for the RIO Onderwijs Gateway
//!
//! Provides subcommands for running the gateway in different modes:
//! - `serve`: API + presentation page (default)
//! - `api`: JSON API only

pub mod api;
pub mod serve;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};
use tokio::signal;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// RIO Onderwijs Gateway - search Dutch education registrations
#[derive(Parser)]
#[command(name = "rio-onderwijs-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run API + presentation page (default mode)
    Serve(ServerArgs),

    /// Run the JSON API only
    Api(ServerArgs),
}

/// Options shared by the server commands
#[derive(Args, Clone, Debug, Default)]
pub struct ServerArgs {
    /// Port to listen on (overrides config and PORT)
    #[arg(long)]
    pub port: Option<u16>,
}

/// Load `.env` and layered configuration, then initialise logging
pub(crate) fn bootstrap(args: &ServerArgs) -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load()?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    logging::init_logging(&config.logging);
    Ok(config)
}

pub(crate) fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
