//! Hotel Insights HTTP Server Binary
//!
//! Loads the booking dataset once, sets up the HTTP router and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! HOTEL_INSIGHTS_DATA=data/hotel_bookings.csv \
//!   cargo run --bin hotel-insights-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOTEL_INSIGHTS_DATA`: Path to the bookings CSV
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `HOTEL_INSIGHTS_STRICT_MONTHS`: Abort the load on an unknown month name
//! - `HOTEL_INSIGHTS_PREVIEW_ROWS`: Default preview size
//! - `RUST_LOG`: Log level (default: info)
//!
//! Values from `hotel-insights.toml` are used when a variable is not set.

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use hotel_insights::config::AppConfig;
use hotel_insights::http::{create_router, AppState};
use hotel_insights::store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Hotel Insights HTTP Server");

    let config = AppConfig::load()?;

    let path = config.dataset.path.clone();
    let options = config.load_options();
    let store = tokio::task::spawn_blocking(move || RecordStore::from_csv_path(&path, options))
        .await?
        .with_context(|| format!("Failed to load bookings from {}", config.dataset.path.display()))?;

    let report = store.load_report();
    info!(
        "Dataset ready: {} records (checksum {})",
        store.len(),
        store.checksum()
    );
    if !report.rejected.is_empty() {
        warn!("{} rows were rejected during load", report.rejected.len());
    }

    let addr: SocketAddr = config.bind_address().parse()?;

    // Create application state and router
    let state = AppState::new(store, config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
