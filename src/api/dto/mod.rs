//! Data Transfer Objects for API requests and responses.
//!
//! Every response body is wrapped in [`envelope::Envelope`].

pub mod envelope;
pub mod health;
pub mod shorten;
