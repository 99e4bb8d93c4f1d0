//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /api/shorten` - Create a short link
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/api/shorten", post(shorten_handler))
}
