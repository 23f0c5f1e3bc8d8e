//! API command - runs the JSON API only (no page)

use tokio::net::TcpListener;
use tracing::info;

use super::{bootstrap, build_socket_addr, shutdown_signal, ServerArgs};
use crate::api::create_router;

/// Run the API-only server
pub async fn run(args: ServerArgs) -> anyhow::Result<()> {
    let config = bootstrap(&args)?;

    let state = crate::create_app_state(&config)?;
    let app = create_router(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting API server on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server shutdown complete");
    Ok(())
}
