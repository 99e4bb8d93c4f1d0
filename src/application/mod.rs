//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations on top of repository traits and give
//! HTTP handlers a small, storage-agnostic API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and lookup

pub mod services;
