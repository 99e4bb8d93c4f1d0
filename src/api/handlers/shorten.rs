//! Handler for link shortening endpoint.

use axum::{extract::State, http::StatusCode, response::Response};

use crate::api::dto::envelope::Envelope;
use crate::api::dto::shorten::ShortenRequest;
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "data": "aZ3kP9qL" }
/// ```
///
/// # Errors
///
/// - `422` with `{"error":"invalid request body"}` if the body cannot be decoded
/// - `400` with `{"error":"invalid url"}` if the URL does not parse
/// - `500` if no unique code could be generated
pub async fn shorten_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ShortenRequest>,
) -> Result<Response, AppError> {
    let link = state.link_service.shorten(&payload.url)?;

    tracing::info!(code = %link.code, "Short link created");

    Ok(Envelope::data(link.code).render(StatusCode::CREATED))
}
