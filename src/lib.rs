//! # Shortly
//!
//! A small in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate follows the same layering as a database-backed service, with the
//! storage layer swapped for a process-local map:
//!
//! - **Domain Layer** ([`domain`]) - Link entity and the storage trait
//! - **Application Layer** ([`application`]) - Shortening and lookup logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory store
//! - **API Layer** ([`api`]) - Handlers, DTOs, extractors, and middleware
//!
//! ## Request Pipeline
//!
//! Every request is wrapped, outermost first, in request ID assignment, access
//! logging, and panic recovery (see [`api::middleware`]).
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"   # Optional
//! cargo run
//!
//! curl -X POST localhost:3000/api/shorten -H 'content-type: application/json' \
//!      -d '{"url":"https://example.com/a"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::MemoryLinkRepository;
    pub use crate::state::AppState;
}
