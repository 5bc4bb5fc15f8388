//! Explicit response cache keyed by cache region.
//!
//! # Design
//! The cache is owned by the client instance rather than living in process
//! globals. Regions are an enum, so the mapping from write operations to the
//! regions they invalidate is checked at compile time. Each region holds at
//! most the latest successful list-fetch result; invalidation is
//! all-or-nothing per region and idempotent, so concurrent invalidations
//! are safe.

use parking_lot::Mutex;
use tracing::debug;

use crate::types::Todo;

/// Logical grouping of cached data invalidated as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheRegion {
    /// The full to-do collection as returned by the list endpoint.
    Todos,
}

/// Whether a region currently holds usable data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// The region holds the result of a successful fetch with no
    /// intervening write.
    Fresh,
    /// The region is empty; the next read must refetch.
    Stale,
}

/// Region-keyed store for the latest successful responses.
#[derive(Default)]
pub struct ResponseCache {
    todos: Mutex<Option<Vec<Todo>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, region: CacheRegion) -> &Mutex<Option<Vec<Todo>>> {
        match region {
            CacheRegion::Todos => &self.todos,
        }
    }

    /// Return the cached collection for `region`, if fresh.
    pub fn get(&self, region: CacheRegion) -> Option<Vec<Todo>> {
        let value = self.slot(region).lock().clone();
        match value {
            Some(_) => debug!(?region, "cache hit"),
            None => debug!(?region, "cache miss"),
        }
        value
    }

    /// Store a collection under `region`, replacing any previous entry.
    pub fn insert(&self, region: CacheRegion, todos: Vec<Todo>) {
        *self.slot(region).lock() = Some(todos);
    }

    /// Drop the entry for `region`. Invalidating an already-stale region is
    /// a no-op.
    pub fn invalidate(&self, region: CacheRegion) {
        if self.slot(region).lock().take().is_some() {
            debug!(?region, "cache invalidated");
        }
    }

    pub fn status(&self, region: CacheRegion) -> CacheStatus {
        if self.slot(region).lock().is_some() {
            CacheStatus::Fresh
        } else {
            CacheStatus::Stale
        }
    }
}
