//! DTOs for link shortening endpoint.

use serde::Deserialize;

/// Request to shorten a single URL.
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL; only its syntax is checked.
    pub url: String,
}
