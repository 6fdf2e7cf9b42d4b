//! MeetLink - instant meeting link server
//!
//! Binary entry point: loads configuration, wires the application context,
//! and runs the axum server until interrupted.

use meetlink_lib::utils::logging;
use meetlink_lib::{build_router, AppContext};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before logging init so RUST_LOG from the file takes effect.
    let dotenv_result = dotenvy::dotenv();
    logging::init();

    match dotenv_result {
        Ok(path) => debug!(path = %path.display(), "loaded environment from .env"),
        Err(err) => debug!(error = %err, "no .env file loaded"),
    }

    let config = meetlink_infra::config::load()?;
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let static_dir = config.server.static_dir.clone();

    let context = AppContext::new(config);
    let app = build_router(context);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %listener.local_addr()?, static_dir = %static_dir, "meetlink listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("meetlink stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to install shutdown signal handler");
    }
}
