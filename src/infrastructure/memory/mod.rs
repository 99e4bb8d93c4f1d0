//! Process-local storage.

mod link_repository;

pub use link_repository::MemoryLinkRepository;
