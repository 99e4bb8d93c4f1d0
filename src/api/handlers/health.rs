//! Handler for health check endpoint.

use axum::{extract::State, http::StatusCode, response::Response};

use crate::api::dto::envelope::Envelope;
use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "data": {
///     "status": "healthy",
///     "version": "0.1.0",
///     "links": 42
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Response {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        links: state.link_service.link_count(),
    };

    Envelope::data(response).render(StatusCode::OK)
}
