//! Structured access logging.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Emits one log record per request once the inner chain has produced a response.
///
/// Recorded fields: method, path, final status and elapsed milliseconds. The
/// request ID comes from the enclosing `request` span. Server errors log at
/// `ERROR`, client errors at `WARN`, everything else at `INFO`.
///
/// # Example Logs
///
/// ```text
/// INFO request{request_id=0192...}: shortly::api::middleware::access_log: request completed method=POST path=/api/shorten status=201 elapsed_ms=0.4
/// WARN request{request_id=0192...}: shortly::api::middleware::access_log: request completed method=GET path=/doesnotexist status=404 elapsed_ms=0.1
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "request completed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "request completed"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms,
            "request completed"
        );
    }

    response
}
