//! Temperature range endpoint handlers.
//!
//! Returns `(date, tobs)` pairs for an inclusive date range given as path
//! segments. The end date is optional and defaults to the current date,
//! computed at request time.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::db::{self, TemperatureRow};
use crate::logging::generate_request_id;
use crate::state::AppState;

use super::error_response;

/// Handle GET /api/v1.0/{start} requests.
///
/// The end of the range defaults to the current date at request time.
pub async fn temperature_start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    let end = chrono::Local::now().format("%Y-%m-%d").to_string();
    temperature_range(&state, start, end).await
}

/// Handle GET /api/v1.0/{start}/{end} requests
pub async fn temperature_range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    temperature_range(&state, start, end).await
}

/// Query the inclusive `[start, end]` range and shape the response.
///
/// Dates are compared as strings; malformed inputs are not validated and
/// simply tend to match no rows, surfacing as the 404 case.
async fn temperature_range(state: &AppState, start: String, end: String) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/{start}/{end}",
        request_id = %request_id,
        range_start = %start,
        range_end = %end,
        "Processing temperature range request"
    );

    match db::temperatures_in_range(&state.pool, &start, &end).await {
        Ok(rows) if rows.is_empty() => {
            let duration = start_time.elapsed();
            info!(
                endpoint = "/api/v1.0/{start}/{end}",
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                range_start = %start,
                range_end = %end,
                "No temperature data in range"
            );

            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": not_found_message(&start, &end)
                })),
            )
                .into_response()
        }
        Ok(rows) => {
            let observation_count = rows.len();
            let pairs = date_tobs_pairs(rows);

            let duration = start_time.elapsed();
            info!(
                endpoint = "/api/v1.0/{start}/{end}",
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                range_start = %start,
                range_end = %end,
                observation_count,
                "Temperature range request successful"
            );

            Json(serde_json::Value::Array(pairs)).into_response()
        }
        Err(error) => error_response(error, "/api/v1.0/{start}/{end}", &request_id),
    }
}

/// Shape each row as a `[date, tobs]` pair, preserving row order.
fn date_tobs_pairs(rows: Vec<TemperatureRow>) -> Vec<serde_json::Value> {
    rows.into_iter()
        .map(|row| serde_json::json!([row.date, row.tobs]))
        .collect()
}

/// The 404 body for an empty range, naming the queried bounds.
fn not_found_message(start: &str, end: &str) -> String {
    format!("Temperature data for dates between {start} and {end} not found.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_tobs_pairs() {
        let rows = vec![
            TemperatureRow {
                date: "2017-08-22".to_string(),
                tobs: 80.0,
            },
            TemperatureRow {
                date: "2017-08-23".to_string(),
                tobs: 81.0,
            },
        ];

        let pairs = date_tobs_pairs(rows);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], serde_json::json!(["2017-08-22", 80.0]));
        assert_eq!(pairs[1], serde_json::json!(["2017-08-23", 81.0]));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            not_found_message("2099-01-01", "2099-01-02"),
            "Temperature data for dates between 2099-01-01 and 2099-01-02 not found."
        );
    }
}
