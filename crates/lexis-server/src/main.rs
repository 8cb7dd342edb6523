//! Lexis server - Main Entry Point
//!
//! Usage:
//!     lexis-server --port 3000 --database string_analyzer.db
//!     PORT=8080 lexis-server --in-memory

use clap::Parser;
use lexis_server::{app, logging, AppState, Config};
use lexis_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    logging::init_with_filter(&config.log_level);

    let state = if config.in_memory {
        warn!("running with in-memory store; records are lost on exit");
        AppState::in_memory()
    } else {
        info!(database = %config.database.display(), "opening SQLite store");
        AppState::new(SqliteStore::open(&config.database)?)
    };

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!(
        address = %listener.local_addr()?,
        version = env!("CARGO_PKG_VERSION"),
        "Lexis server listening"
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Lexis server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
