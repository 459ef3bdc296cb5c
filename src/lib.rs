//! # hilo
//!
//! A read-only HTTP API server for climate-station measurement data.
//!
//! This library serves precipitation, temperature observations, and station
//! metadata from a pre-populated SQLite dataset over a small JSON API.
//!
//! ## Key Features
//!
//! - **Zero-maintenance serving**: point it at a dataset file and every route is live
//! - **Read-only by construction**: the connection pool is opened read-only
//! - **Scoped connections**: each request runs exactly one query on a pooled connection
//!
//! ## Architecture
//!
//! - **Data Layer**: a bounded SQLite connection pool with statically declared row types
//! - **API Layer**: axum handlers, one per route, each shaping rows into JSON

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod state;

pub use config::Config;
pub use error::{HiloError, Result};
pub use logging::{create_http_trace_layer, generate_request_id, init_tracing, log_request_error};
pub use state::AppState;
