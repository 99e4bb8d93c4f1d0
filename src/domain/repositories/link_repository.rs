//! Repository trait for short link storage.

use crate::domain::entities::{Link, NewLink};

/// Storage interface for short links.
///
/// Implementations own their synchronization and must be safe to share between
/// request tasks. All methods are synchronous: lookups and inserts are plain CPU
/// work and never suspend.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkRepository`] - sharded in-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link if its code is not taken yet.
    ///
    /// The check and the insert happen atomically with respect to other inserts of
    /// the same code.
    ///
    /// # Returns
    ///
    /// - `Some(Link)` with the stored link when the insert won
    /// - `None` if the code already exists (the caller should pick another code)
    fn insert(&self, new_link: NewLink) -> Option<Link>;

    /// Finds a link by its short code.
    fn find_by_code(&self, code: &str) -> Option<Link>;

    /// Number of stored links.
    fn count(&self) -> usize;
}
