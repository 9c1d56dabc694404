//! Voxconv server - hosts the upload page and the conversion endpoint.

use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};
use voxconv_server::logging::{self, LoggingConfig};
use voxconv_server::{ServerConfig, UnavailableConverter, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let _logging_guard =
        logging::init(&LoggingConfig::auto().with_log_directory(config.log_directory.clone()))?;

    info!("Starting Voxconv server");

    let output_dir = config.output_dir();
    tokio::fs::create_dir_all(&output_dir)
        .await
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    info!("Converted audio directory: {}", output_dir.display());

    let app = build_router(&config, Arc::new(UnavailableConverter));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C, running until killed: {e}");
        std::future::pending::<()>().await;
    }
}
