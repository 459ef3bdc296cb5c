//! hilo - a read-only HTTP API server for climate-station measurement data
//!
//! This is the main entry point for the hilo application.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use hilo::handlers::{
    home_handler, precipitation_handler, stations_handler, temperature_range_handler,
    temperature_start_handler, tobs_handler,
};
use hilo::{create_http_trace_layer, db, init_tracing, AppState, Config, HiloError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let (config, database_path) = Config::load()?;

    // Validate configuration
    config.validate().map_err(|e| {
        eprintln!("Invalid configuration: {}", e);
        e
    })?;

    // Initialize tracing with the configured level (RUST_LOG still wins)
    init_tracing(&config.log_level);

    info!("Starting hilo v{}", env!("CARGO_PKG_VERSION"));
    info!("Opening SQLite dataset: {:?}", database_path);

    // Open the read-only connection pool
    let pool = db::connect(&database_path, config.database.max_connections)
        .await
        .map_err(|e| {
            error!("Failed to open SQLite dataset: {}", e);
            e
        })?;

    // Create the shared application state
    let state = AppState::new(config.clone(), pool).into_shared();

    // Build the router
    let app = Router::new()
        .route("/", get(home_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(temperature_start_handler))
        .route("/api/v1.0/:start/:end", get(temperature_range_handler))
        .layer(CorsLayer::permissive())
        .layer(create_http_trace_layer())
        .with_state(state);

    // Create the server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| HiloError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HiloError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    // Set up graceful shutdown
    let shutdown_future = shutdown_signal();

    info!("Server is ready to accept connections");

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_future)
        .await
        .map_err(|e| HiloError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
