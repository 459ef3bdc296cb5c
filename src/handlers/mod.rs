//! HTTP request handlers for the hilo API.
//!
//! This module contains all the endpoint handlers for the web server.

pub mod home;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use home::home_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{temperature_range_handler, temperature_start_handler};
pub use tobs::tobs_handler;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::HiloError;
use crate::logging::log_request_error;

/// Map a failed query to a 500 response with a JSON error body.
///
/// Every handler issues exactly one query; any failure reaching this point
/// is a database or dataset problem, not a client error.
pub(crate) fn error_response(error: HiloError, endpoint: &str, request_id: &str) -> Response {
    log_request_error(&error, endpoint, request_id, None);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": error.to_string()
        })),
    )
        .into_response()
}
