//! DTOs for health check endpoint.

use serde::Serialize;

/// Service health payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of links currently stored.
    pub links: usize,
}
