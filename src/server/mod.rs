//! HTTP server wiring: shared state, routes and the serve loop

pub mod router;
pub mod state;

pub use router::*;
pub use state::*;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};
use crate::config::Config;

/// Binds the configured address and serves `app` until Ctrl+C.
pub async fn serve(config: &Config, app: Router) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("📛 Received shutdown signal (Ctrl+C), draining connections..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
