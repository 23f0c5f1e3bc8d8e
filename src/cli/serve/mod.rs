//! Serve command - runs API + presentation page on the same port

use tokio::net::TcpListener;
use tracing::info;

use super::{bootstrap, build_socket_addr, shutdown_signal, ServerArgs};
use crate::api::create_router_with_ui;

/// Run the combined API + page server
pub async fn run(args: ServerArgs) -> anyhow::Result<()> {
    let config = bootstrap(&args)?;

    let state = crate::create_app_state(&config)?;
    let app = create_router_with_ui(state, &config.ui);

    let addr = build_socket_addr(&config)?;
    info!(static_dir = %config.ui.static_dir, "Starting server (API + UI) on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
