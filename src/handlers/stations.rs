//! Stations endpoint handler.
//!
//! Returns every station row as a positional 6-element array, in the
//! table's column order.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::db::{self, StationRow};
use crate::logging::generate_request_id;
use crate::state::AppState;

use super::error_response;

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/stations",
        request_id = %request_id,
        "Processing stations request"
    );

    match db::all_stations(&state.pool).await {
        Ok(rows) => {
            let station_count = rows.len();
            let stations = station_tuples(rows);

            let duration = start_time.elapsed();
            info!(
                endpoint = "/api/v1.0/stations",
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                station_count,
                "Stations request successful"
            );

            Json(serde_json::Value::Array(stations)).into_response()
        }
        Err(error) => error_response(error, "/api/v1.0/stations", &request_id),
    }
}

/// Shape station rows as `[id, station, name, latitude, longitude, elevation]`
/// arrays, preserving row order.
fn station_tuples(rows: Vec<StationRow>) -> Vec<serde_json::Value> {
    rows.into_iter()
        .map(|row| {
            serde_json::json!([
                row.id,
                row.station,
                row.name,
                row.latitude,
                row.longitude,
                row.elevation
            ])
        })
        .collect()
}
