//! Application error type and its HTTP mapping.
//!
//! Client errors carry a fixed, user-facing message. Server errors are logged with
//! full context and surfaced as an opaque `internal server error`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::envelope::Envelope;

/// Message returned for every 5xx response.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be decoded.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The submitted URL is not syntactically valid.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No link exists for the requested code.
    #[error("url not found for code {code:?}")]
    NotFound { code: String },

    /// Every generated code collided with an existing one.
    #[error("no unique short code after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    /// The response could not be encoded.
    #[error("failed to encode response: {0}")]
    Encoding(String),

    /// A panic caught while handling the request.
    #[error("unrecovered fault: {0}")]
    Fault(String),
}

impl AppError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ExhaustedRetries { .. } | Self::Encoding(_) | Self::Fault(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to clients.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "invalid request body",
            Self::InvalidUrl(_) => "invalid url",
            Self::NotFound { .. } => "url not found",
            Self::ExhaustedRetries { .. } | Self::Encoding(_) | Self::Fault(_) => {
                INTERNAL_ERROR_MESSAGE
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            // Recovery logs faults together with the backtrace.
            Self::Fault(_) => {}
            _ if status.is_server_error() => {
                tracing::error!(error = %self, status = status.as_u16(), "request failed");
            }
            _ => {
                tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
            }
        }

        Envelope::error(self.public_message()).render(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_codes() {
        let parse_error = url::Url::parse("::not a url::").unwrap_err();

        assert_eq!(
            AppError::InvalidBody("eof".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(parse_error).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("abcd1234").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ExhaustedRetries { attempts: 10 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Encoding("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Fault("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_client_error_body() {
        let response = AppError::not_found("abcd1234").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "url not found" }));
    }

    #[tokio::test]
    async fn test_server_error_hides_details() {
        let response = AppError::ExhaustedRetries { attempts: 10 }.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "internal server error" }));
    }

    #[test]
    fn test_display_keeps_internal_context() {
        let err = AppError::ExhaustedRetries { attempts: 3 };
        assert!(err.to_string().contains("3 attempts"));
    }
}
