//! SQLite access layer for hilo.
//!
//! The dataset is provisioned outside this process and treated as read-only:
//! two tables, `measurement` (one row per station per observation date) and
//! `station` (one row per weather station). The schema is declared statically
//! through the row structs below rather than reflected at runtime.
//!
//! Queries are constructed at runtime (not compile-time checked) so that no
//! live database is required at build time. All queries are parameterized.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::error::Result;

/// A `(date, prcp)` projection of a measurement row. `prcp` is nullable in
/// the dataset.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// A full station row, in the table's column order.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StationRow {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// A `(date, tobs)` projection of a measurement row.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TemperatureRow {
    pub date: String,
    pub tobs: f64,
}

/// Open a bounded, read-only connection pool over the SQLite dataset.
///
/// The pool is created once at startup and injected into the handler layer;
/// each request checks out one connection for the duration of a single query
/// and the connection is returned to the pool when the query completes.
pub async fn connect(path: &Path, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!(
        path = %path.display(),
        max_connections,
        "Connected to SQLite dataset"
    );

    Ok(pool)
}

/// Fetch every `(date, prcp)` pair, unfiltered, in natural row order.
pub async fn all_precipitation(pool: &SqlitePool) -> Result<Vec<PrecipitationRow>> {
    let rows = sqlx::query_as::<_, PrecipitationRow>("SELECT date, prcp FROM measurement")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch every station row, unfiltered, in natural row order.
pub async fn all_stations(pool: &SqlitePool) -> Result<Vec<StationRow>> {
    let rows = sqlx::query_as::<_, StationRow>(
        "SELECT id, station, name, latitude, longitude, elevation FROM station",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Find the maximum `date` across all measurement rows, or `None` if the
/// table is empty. Lexicographic ordering equals chronological ordering for
/// the stored `YYYY-MM-DD` format.
pub async fn latest_measurement_date(pool: &SqlitePool) -> Result<Option<String>> {
    let date =
        sqlx::query_scalar::<_, String>("SELECT date FROM measurement ORDER BY date DESC LIMIT 1")
            .fetch_optional(pool)
            .await?;
    Ok(date)
}

/// Fetch `(date, tobs)` pairs with `start <= date <= end`, both bounds
/// inclusive, compared as strings.
pub async fn temperatures_in_range(
    pool: &SqlitePool,
    start: &str,
    end: &str,
) -> Result<Vec<TemperatureRow>> {
    let rows = sqlx::query_as::<_, TemperatureRow>(
        "SELECT date, tobs FROM measurement WHERE date >= ?1 AND date <= ?2",
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
