//! Precipitation endpoint handler.
//!
//! Returns a JSON object mapping each observation date to a precipitation
//! value, across all measurement rows.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::db::{self, PrecipitationRow};
use crate::logging::generate_request_id;
use crate::state::AppState;

use super::error_response;

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/precipitation",
        request_id = %request_id,
        "Processing precipitation request"
    );

    match db::all_precipitation(&state.pool).await {
        Ok(rows) => {
            let row_count = rows.len();
            let mapping = collapse_by_date(rows);

            let duration = start_time.elapsed();
            info!(
                endpoint = "/api/v1.0/precipitation",
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                row_count,
                date_count = mapping.len(),
                "Precipitation request successful"
            );

            Json(serde_json::Value::Object(mapping)).into_response()
        }
        Err(error) => error_response(error, "/api/v1.0/precipitation", &request_id),
    }
}

/// Collapse `(date, prcp)` rows into a date-keyed object.
///
/// When several stations report the same date, the last row in natural
/// order wins and earlier values for that date are overwritten. Missing
/// `prcp` values become JSON null.
fn collapse_by_date(rows: Vec<PrecipitationRow>) -> serde_json::Map<String, serde_json::Value> {
    let mut mapping = serde_json::Map::new();
    for row in rows {
        mapping.insert(row.date, serde_json::json!(row.prcp));
    }
    mapping
}
