//! Feed server binary for LinkUp.
//!
//! Wires the feed store to the HTTP API and runs until `Ctrl-C` or
//! `SIGTERM`.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from the environment
//! 3. Connect to `PostgreSQL` and run migrations (or use the memory store)
//! 4. Serve the API until a shutdown signal arrives
//! 5. Close the database pool

mod config;
mod error;

use std::sync::Arc;

use linkup_api::{AppState, shutdown_signal, start_server};
use linkup_db::{FeedStore, PostgresPool};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, StoreBackend};
use crate::error::StartupError;

/// Application entry point for the feed server.
///
/// # Errors
///
/// Returns an error if configuration, the database connection, or the
/// HTTP server fails.
#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("linkup-server starting");

    // 2. Load configuration.
    let config = AppConfig::from_env()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    // 3. Open the store.
    let store = match &config.backend {
        StoreBackend::Postgres(pg_config) => {
            let pool = PostgresPool::connect(pg_config).await?;
            pool.run_migrations().await?;
            FeedStore::Postgres(pool)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; posts will not survive a restart");
            FeedStore::in_memory()
        }
    };

    // 4. Serve until shutdown.
    let state = Arc::new(AppState::new(store.clone()));
    let result = start_server(&config.server, state, shutdown_signal()).await;

    // 5. Release the database.
    if let FeedStore::Postgres(pool) = &store {
        pool.close().await;
    }

    result?;
    info!("linkup-server stopped");
    Ok(())
}
