//! JSON response envelope shared by every endpoint.
//!
//! ```json
//! { "data": "aZ3kP9qL" }
//! { "error": "invalid url" }
//! ```
//!
//! Empty fields are omitted.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// Body written when the envelope itself cannot be encoded.
const ENCODING_FALLBACK_BODY: &str = r#"{"error":"internal server error"}"#;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful payload.
    pub fn data(data: T) -> Self {
        Self {
            error: None,
            data: Some(data),
        }
    }

    /// Encodes the envelope into a JSON response with the given status.
    ///
    /// If encoding fails, the failure is logged and an opaque `500` is returned
    /// instead.
    pub fn render(self, status: StatusCode) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => json_response(status, body),
            Err(err) => {
                let err = AppError::Encoding(err.to_string());
                tracing::error!(error = %err, "failed to encode response body");
                json_response(err.status_code(), ENCODING_FALLBACK_BODY.as_bytes().to_vec())
            }
        }
    }
}

impl Envelope<()> {
    /// Error payload with a client-facing message.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            error: (!message.is_empty()).then_some(message),
            data: None,
        }
    }
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
