//! In-memory cache implementation.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::{Cache, CacheBucket};

/// Entries of one bucket: key → (etag, value).
type Entries = HashMap<String, (String, Vec<u8>)>;

/// Process-local [`Cache`] backed by hash maps.
///
/// Sized for a handful of documents, so entries are never evicted. Cloning
/// the cache, or opening the same bucket name twice, shares the entries.
#[derive(Clone, Default)]
pub struct MemoryCache {
    buckets: Arc<RwLock<HashMap<String, Arc<RwLock<Entries>>>>>,
}

impl MemoryCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cache for MemoryCache {
    fn bucket(&self, name: &str) -> Box<dyn CacheBucket> {
        let mut buckets = self
            .buckets
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let entries = Arc::clone(buckets.entry(name.to_owned()).or_default());
        Box::new(MemoryCacheBucket {
            name: name.to_owned(),
            entries,
        })
    }
}

/// A single bucket of a [`MemoryCache`].
struct MemoryCacheBucket {
    name: String,
    entries: Arc<RwLock<Entries>>,
}

impl CacheBucket for MemoryCacheBucket {
    fn get(&self, key: &str, etag: &str) -> Option<Vec<u8>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let Some((stored_etag, value)) = entries.get(key) else {
            tracing::debug!(bucket = %self.name, key, "cache miss");
            return None;
        };

        if !etag.is_empty() && stored_etag != etag {
            tracing::debug!(bucket = %self.name, key, stored = %stored_etag, etag, "cache stale");
            return None;
        }

        tracing::debug!(bucket = %self.name, key, "cache hit");
        Some(value.clone())
    }

    fn set(&self, key: &str, etag: &str, value: &[u8]) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), (etag.to_owned(), value.to_vec()));
    }
}
