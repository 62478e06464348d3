//! Shared memoization cache for reverse geocoding lookups.
//!
//! Keyed by canonical (lowercase) tag. Values are idempotent per tag, so
//! concurrent fills for the same key may race freely; last writer wins.
//! The cache is created by the caller at process start and injected into
//! the client; `clear` exists so tests can reset state explicitly.

use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory place name cache, keyed by tag.
#[derive(Debug, Default)]
pub struct TagCache {
    entries: RwLock<HashMap<String, String>>,
}

impl TagCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached place name for a tag, if any.
    pub fn get(&self, tag: &str) -> Option<String> {
        self.entries
            .read()
            .ok()?
            .get(&tag.to_ascii_lowercase())
            .cloned()
    }

    /// Stores a place name for a tag, replacing any previous value.
    pub fn insert(&self, tag: &str, place: impl Into<String>) {
        if let Ok(mut guard) = self.entries.write() {
            guard.insert(tag.to_ascii_lowercase(), place.into());
        }
    }

    /// Removes every entry.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.entries.write() {
            guard.clear();
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
