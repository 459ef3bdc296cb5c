//! Temperature observations endpoint handler.
//!
//! Returns the last year of temperature observations: every `(date, tobs)`
//! row whose date falls within 365 days of the most recent measurement,
//! both bounds inclusive.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::db::{self, TemperatureRow};
use crate::error::{HiloError, Result};
use crate::logging::generate_request_id;
use crate::state::AppState;

use super::error_response;

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/tobs",
        request_id = %request_id,
        "Processing tobs request"
    );

    match trailing_year(&state.pool).await {
        Ok(rows) => {
            let observation_count = rows.len();
            let observations = single_key_objects(rows);

            let duration = start_time.elapsed();
            info!(
                endpoint = "/api/v1.0/tobs",
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                observation_count,
                "Tobs request successful"
            );

            Json(serde_json::Value::Array(observations)).into_response()
        }
        Err(error) => error_response(error, "/api/v1.0/tobs", &request_id),
    }
}

/// Fetch all observations within 365 days of the most recent measurement.
///
/// An empty measurement table has no anchor date and yields an empty result
/// rather than an error.
async fn trailing_year(pool: &SqlitePool) -> Result<Vec<TemperatureRow>> {
    let Some(latest) = db::latest_measurement_date(pool).await? else {
        return Ok(Vec::new());
    };

    let start = window_start(&latest)?;
    db::temperatures_in_range(pool, &start, &latest).await
}

/// Compute the start of the 365-day window ending at `latest`.
fn window_start(latest: &str) -> Result<String> {
    let end = NaiveDate::parse_from_str(latest, "%Y-%m-%d").map_err(|e| HiloError::InvalidDate {
        value: latest.to_string(),
        message: e.to_string(),
    })?;

    let start = end - chrono::Duration::days(365);
    Ok(start.format("%Y-%m-%d").to_string())
}

/// Shape each row as a single-key `{date: tobs}` object. Rows are not
/// collapsed; a date appearing in several rows appears in several objects.
fn single_key_objects(rows: Vec<TemperatureRow>) -> Vec<serde_json::Value> {
    rows.into_iter()
        .map(|row| {
            let mut object = serde_json::Map::with_capacity(1);
            object.insert(row.date, serde_json::json!(row.tobs));
            serde_json::Value::Object(object)
        })
        .collect()
}
