//! Fallback handlers keeping the JSON envelope on unmatched requests.

use axum::{http::StatusCode, response::Response};

use crate::api::dto::envelope::Envelope;

/// Responds to paths that match no route.
pub async fn not_found_handler() -> Response {
    Envelope::error("not found").render(StatusCode::NOT_FOUND)
}

/// Responds to known paths requested with an unsupported method.
pub async fn method_not_allowed_handler() -> Response {
    Envelope::error("method not allowed").render(StatusCode::METHOD_NOT_ALLOWED)
}
