//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::storage::{Storage, StorageError};

const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores files in memory. Every write bumps the file's version, which is
/// reported as its etag. Successful reads are counted so tests can check
/// whether a caller hit its cache.
///
/// # Example
///
/// ```ignore
/// use folio_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("manifest.json", r#"{"posts": []}"#)
///     .with_file("001.md", "# First");
///
/// assert_eq!(storage.read("001.md").unwrap(), "# First");
/// assert_eq!(storage.reads(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: RwLock<HashMap<String, (String, u64)>>,
    reads: AtomicUsize,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    #[must_use]
    pub fn with_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.set_file(path, content);
        self
    }

    /// Create or replace a file, bumping its version.
    pub fn set_file(&self, path: impl Into<String>, content: impl Into<String>) {
        let mut files = self.files.write().unwrap_or_else(PoisonError::into_inner);
        let entry = files.entry(path.into()).or_insert_with(|| (String::new(), 0));
        entry.0 = content.into();
        entry.1 += 1;
    }

    /// Remove a file.
    pub fn remove_file(&self, path: &str) {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path);
    }

    /// Number of successful reads so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Storage for MockStorage {
    fn read(&self, path: &str) -> Result<String, StorageError> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        let (content, _) = files
            .get(path)
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(content.clone())
    }

    fn exists(&self, path: &str) -> bool {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path)
    }

    fn etag(&self, path: &str) -> Result<String, StorageError> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files
            .get(path)
            .map(|(_, version)| format!("v{version}"))
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }
}
