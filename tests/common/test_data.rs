//! Fixture dataset for integration tests.
//!
//! Builds a small SQLite climate dataset with two stations and a handful of
//! measurement rows, shaped like the real thing: one row per station per
//! observation date, with a nullable `prcp` column and `YYYY-MM-DD` text
//! dates.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::error::Error;
use std::path::Path;

/// Number of station rows in the fixture
pub const STATION_COUNT: usize = 2;

/// Number of measurement rows in the fixture
pub const MEASUREMENT_COUNT: usize = 7;

/// Latest measurement date in the fixture
pub const LATEST_DATE: &str = "2017-08-23";

/// Start of the 365-day observation window anchored at [`LATEST_DATE`]
pub const WINDOW_START: &str = "2016-08-23";

/// Number of measurement rows falling inside the observation window
pub const WINDOW_OBSERVATION_COUNT: usize = 6;

/// Measurement rows as `(station, date, prcp, tobs)` tuples, in insertion
/// order. The duplicate dates across stations and the trailing NULL `prcp`
/// are deliberate; tests pin the collapse behavior around them.
pub const MEASUREMENTS: [(&str, &str, Option<f64>, f64); MEASUREMENT_COUNT] = [
    ("USC00519397", "2016-06-01", Some(0.10), 74.0),
    ("USC00519397", "2016-08-23", Some(0.70), 76.0),
    ("USC00519397", "2017-08-21", Some(0.56), 79.0),
    ("USC00519397", "2017-08-22", Some(0.02), 80.0),
    ("USC00513117", "2017-08-22", Some(1.79), 78.5),
    ("USC00519397", "2017-08-23", Some(0.00), 81.0),
    ("USC00513117", "2017-08-23", None, 82.0),
];

/// Create the fixture dataset at the given path.
///
/// The file is written through a short-lived writable pool and closed before
/// the server under test opens it read-only.
pub async fn create_test_climate_db(path: &Path) -> Result<(), Box<dyn Error>> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude REAL,
            longitude REAL,
            elevation REAL
        )",
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp REAL,
            tobs REAL
        )",
    )
    .execute(&pool)
    .await?;

    for (station, name, latitude, longitude, elevation) in [
        ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
        ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ] {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(station)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(elevation)
        .execute(&pool)
        .await?;
    }

    for (station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(station)
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(&pool)
            .await?;
    }

    pool.close().await;
    Ok(())
}
