//! HTTP middleware pipeline.
//!
//! Every request passes through the same ordered stages, outermost first:
//!
//! 1. [`request_id`] - assigns the request ID and opens the request span
//! 2. [`access_log`] - one log record per request with the final status
//! 3. [`recovery`] - converts handler panics into `500` responses
//!
//! Each stage is a plain `(Request, Next) -> Response` function. Recovery sits
//! directly around the handlers so that the access log still sees the final
//! `500` and the response still carries `X-Request-ID` after a panic.

pub mod access_log;
pub mod recovery;
pub mod request_id;

use axum::{Router, middleware};

/// Wraps `router` (handlers and fallbacks) in the middleware pipeline.
pub fn pipeline<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    recovery::install_panic_hook();

    // Router::layer wraps everything added before it, so the last layer is outermost.
    router
        .layer(middleware::from_fn(recovery::layer))
        .layer(middleware::from_fn(access_log::layer))
        .layer(middleware::from_fn(request_id::layer))
}
