//! Extension trait for [`CacheBucket`] with typed convenience methods.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::CacheBucket;

/// Typed convenience methods for [`CacheBucket`].
///
/// Provides `get_json`/`set_json` for serde-serializable types,
/// `get_string`/`set_string` for UTF-8 strings, and
/// [`get_or_fetch_string`](Self::get_or_fetch_string) for memoising a fallible
/// load. [`CacheBucket`] itself stays object-safe and byte-oriented.
///
/// # Example
///
/// ```
/// use folio_cache::{Cache, CacheBucketExt, MemoryCache};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Index { ids: Vec<String> }
///
/// let cache = MemoryCache::new();
/// let bucket = cache.bucket("manifest");
///
/// bucket.set_json("index", "v1", &Index { ids: vec!["001".into()] });
/// let index: Option<Index> = bucket.get_json("index", "v1");
/// assert_eq!(index.unwrap().ids, ["001"]);
/// ```
pub trait CacheBucketExt: CacheBucket {
    /// Retrieve a JSON-deserialized value from the cache.
    ///
    /// Returns `None` on cache miss, etag mismatch, or deserialization failure.
    fn get_json<T: DeserializeOwned>(&self, key: &str, etag: &str) -> Option<T> {
        let bytes = self.get(key, etag)?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Store a value as JSON in the cache.
    ///
    /// Silently does nothing if serialization fails.
    fn set_json<T: Serialize>(&self, key: &str, etag: &str, value: &T) {
        if let Ok(bytes) = serde_json::to_vec(value) {
            self.set(key, etag, &bytes);
        }
    }

    /// Retrieve a cached UTF-8 string.
    ///
    /// Returns `None` on cache miss, etag mismatch, or invalid UTF-8.
    fn get_string(&self, key: &str, etag: &str) -> Option<String> {
        let bytes = self.get(key, etag)?;
        String::from_utf8(bytes).ok()
    }

    /// Store a string value in the cache.
    fn set_string(&self, key: &str, etag: &str, value: &str) {
        self.set(key, etag, value.as_bytes());
    }

    /// Return the cached string for `key`, or run `fetch` and cache its result.
    ///
    /// The boolean is `true` when the value came from the cache. Errors from
    /// `fetch` are returned unchanged and nothing is stored.
    fn get_or_fetch_string<E>(
        &self,
        key: &str,
        etag: &str,
        fetch: impl FnOnce() -> Result<String, E>,
    ) -> Result<(String, bool), E> {
        if let Some(cached) = self.get_string(key, etag) {
            return Ok((cached, true));
        }
        let value = fetch()?;
        self.set_string(key, etag, &value);
        Ok((value, false))
    }
}

impl<B: CacheBucket + ?Sized> CacheBucketExt for B {}
