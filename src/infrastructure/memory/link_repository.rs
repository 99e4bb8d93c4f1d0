//! In-memory implementation of [`LinkRepository`].

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;

/// Link store backed by a sharded concurrent map.
///
/// Each shard has its own read/write lock: inserts lock only the shard owning the
/// code, and readers never see a half-written entry. The map lives as long as the
/// process; there is no eviction and no capacity bound.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, Link>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkRepository for MemoryLinkRepository {
    fn insert(&self, new_link: NewLink) -> Option<Link> {
        // The entry guard holds the shard write lock, so check-and-set is atomic.
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                let link = new_link.into_link(Utc::now());
                slot.insert(link.clone());
                Some(link)
            }
        }
    }

    fn find_by_code(&self, code: &str) -> Option<Link> {
        self.links.get(code).map(|entry| entry.value().clone())
    }

    fn count(&self) -> usize {
        self.links.len()
    }
}
