mod cli;

use crate::cli::CLI;
use anyhow::Context;
use clap::Parser;
use galleria_core::{ContentService, InMemoryHashStore};
use galleria_gateway::{App, AppState};
use galleria_upstream::{HttpGalleryClient, UpstreamSettings};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    galleria_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        upstream_base_url = %config.upstream_base_url,
        upstream_culture = %config.upstream_culture,
        public_base_url = ?config.public_base_url,
        "starting gateway server"
    );

    let settings = UpstreamSettings::builder()
        .base_url(config.upstream_base_url)
        .culture(config.upstream_culture)
        .timeout(config.upstream_timeout_secs.map(Duration::from_secs))
        .build();
    let client = HttpGalleryClient::new(settings).context("failed to build upstream client")?;

    let content = ContentService::new(Arc::new(client), Arc::new(InMemoryHashStore::new()));
    let state = match config.public_base_url {
        Some(base_url) => AppState::new(content).with_public_base_url(base_url),
        None => AppState::new(content),
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("gateway server failed")?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
    }
}
