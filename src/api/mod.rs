//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats responses
//! as JSON envelopes.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Extractors with API-specific rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request ID, access log, and panic recovery pipeline
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
