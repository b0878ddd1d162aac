//! # Hotel Insights Backend
//!
//! Filter-and-aggregate engine for hotel booking dashboards.
//!
//! Reservation records are loaded once from a CSV export into an immutable
//! store. Each user interaction produces a [`FilterState`](models::FilterState);
//! the filter engine narrows the store to the matching records and every
//! dashboard view is computed from that single filtered set, so the views
//! always agree with each other.
//!
//! ## Views
//!
//! - **Geographic**: bookings per country, split by hotel type
//! - **Monthly series**: guests per arrival month for each hotel type
//! - **Cancellation channel**: canceled bookings per distribution channel
//! - **Market segment**: guests per segment, zero-filled across hotel types
//! - **Price by room type**: box-plot summary of the average daily rate
//!
//! ## Architecture
//!
//! - [`parsing`]: CSV ingestion with polars and record normalization
//! - [`store`]: the load-once [`RecordStore`](store::RecordStore)
//! - [`models`]: booking records and filter state
//! - [`services`]: filter engine, aggregators and the view registry
//! - [`routes`]: output row types and view identifiers
//! - [`api`]: re-exports of the public types
//! - [`config`]: TOML and environment configuration
//! - [`http`]: axum REST server (feature `http-server`)

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
