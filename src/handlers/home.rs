//! Route listing endpoint handler.
//!
//! Returns a static body enumerating the available API paths. No database
//! access.

use axum::response::Html;

/// Handle GET / requests
pub async fn home_handler() -> Html<&'static str> {
    Html(
        "Available Routes:<br/>\
         /api/v1.0/precipitation<br/>\
         /api/v1.0/stations<br/>\
         /api/v1.0/tobs<br/>\
         /api/v1.0/<start>/<end>",
    )
}
