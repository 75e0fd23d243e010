mod cli;
mod telemetry;

use crate::cli::CLI;
use burrow_gateway::{App, AppState};
use burrow_shortener::{ShortenerService, ShortenerSettings};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(&config.log_level, config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        log_format = %config.log_format,
        "starting gateway server"
    );

    let settings = ShortenerSettings::builder()
        .base_url(config.base_url)
        .build();
    let state = AppState::new(Arc::new(ShortenerService::with_settings(settings)));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
