//! Infrastructure layer implementing the domain storage contracts.
//!
//! - [`memory`] - In-memory link store (lives for the process lifetime)

pub mod memory;
