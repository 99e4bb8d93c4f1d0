//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `308 Permanent Redirect` with `Location` set to the stored URL.
///
/// # Errors
///
/// Returns `404` with `{"error":"url not found"}` if the code is unknown; the
/// request ends there.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    // A segment that does not decode to UTF-8 cannot name a stored link.
    let Path(code) = path.map_err(|e| AppError::not_found(e.body_text()))?;
    let long_url = state.link_service.resolve(&code)?;
    let location = location_header(&long_url)?;

    Ok((StatusCode::PERMANENT_REDIRECT, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value for a stored URL.
///
/// URLs are stored as submitted, which may include characters a header cannot
/// carry (non-ASCII hosts, stray whitespace). Those fall back to the parser's
/// serialized form, which is always ASCII.
fn location_header(long_url: &str) -> Result<HeaderValue, AppError> {
    if long_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(long_url)
    {
        return Ok(value);
    }

    let normalized = Url::parse(long_url)?;
    HeaderValue::from_str(normalized.as_str())
        .map_err(|e| AppError::Encoding(format!("invalid Location header: {e}")))
}
