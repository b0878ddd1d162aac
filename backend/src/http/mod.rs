//! HTTP server module for the hotel insights backend.
//!
//! Exposes the view registry as a REST API. Handlers only parse requests and
//! shape responses; all computation happens in the service layer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing into FilterState                         │
//! │  - JSON serialization, CORS, compression, errors          │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Filter engine and aggregators                          │
//! │  - ViewRegistry snapshot cache                            │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  RecordStore (store/)                                     │
//! │  - Immutable records loaded once at startup               │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
