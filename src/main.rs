//! Courtside Stats - Binary Entry Point
//!
//! This is the main entry point for the courtside-server binary.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use courtside_stats::{create_router, AppConfig, AppState, EventStore, League, StatsResult};

#[tokio::main]
async fn main() -> StatsResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing init failed: {}", e);
    }

    let config = AppConfig::from_env()?;
    let league = Arc::new(League::open(&config.data_dir)?);
    let events = Arc::new(EventStore::open(config.event_store_config())?);
    let state = Arc::new(AppState::new(league, Arc::clone(&events)));

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, data_dir = %config.data_dir.display(), "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router and its state are gone once serve returns.
    match Arc::try_unwrap(events) {
        Ok(store) => store.close()?,
        Err(_) => tracing::warn!("Event store still shared at shutdown; skipping close"),
    }
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
