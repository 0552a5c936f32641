//! u-roster HTTP service.
//!
//! Serves the rostering engine over JSON. See [`u_roster::server`] for
//! the routes.

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use u_roster::models::ENGINE_VERSION;
use u_roster::server::{create_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    // Prefer RUST_LOG, fall back to ROSTER_LOG_LEVEL
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(config.log_json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.log_json).then(tracing_subscriber::fmt::layer))
        .init();

    info!(version = ENGINE_VERSION, strategy = %config.strategy, "Starting u-roster");

    let app = create_router(AppState::new(config.strategy));
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for connections");

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for shutdown signal");
        }
        info!("Received shutdown signal");
    });

    if let Err(e) = server.await {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    info!("u-roster shutdown complete");
    Ok(())
}
