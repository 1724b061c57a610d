//! void-gateway - HTTP ingestion endpoint for VOID protocol invoice packets

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use void_gateway::api::AppState;
use void_gateway::config::{Args, Config};
use void_gateway::server::{serve, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI args
    let config = Config::from(Args::parse());

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting void-gateway v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.listen_addr()?;
    let listener = TcpListener::bind(&addr).await?;

    // No settlement backend yet; accepted packets are dropped after the ack
    let state = Arc::new(AppState::default());

    serve(listener, state, shutdown_signal()).await?;

    Ok(())
}
