//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shorten` - Create a short link
//! - `GET  /health`      - Health check
//! - `GET  /{code}`      - Short link redirect
//!
//! Unmatched paths answer `404` and unsupported methods `405`, both as JSON
//! envelopes.
//!
//! # Middleware
//!
//! Every route and fallback runs through [`crate::api::middleware::pipeline`]:
//! request ID, access log, panic recovery. [`app_service`] additionally trims
//! trailing slashes before routing.

use crate::api;
use crate::api::handlers::{
    health_handler, method_not_allowed_handler, not_found_handler, redirect_handler,
};
use crate::api::middleware::pipeline;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Generated codes are always 8 characters long, so `/health` never shadows a
/// short link.
pub fn app_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .merge(api::routes::api_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state);

    pipeline(router)
}

/// The router as served: trailing slashes are trimmed before route matching.
pub fn app_service(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_router(state))
}
