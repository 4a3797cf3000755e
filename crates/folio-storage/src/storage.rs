//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for reading static content, along
//! with [`StorageError`] for unified error handling across backends.
//!
//! # Path Convention
//!
//! Paths are `/`-separated and relative to the storage root, exactly as they
//! appear in the blog manifest (e.g., `"manifest.json"`, `"001-crawler.md"`).

use std::path::PathBuf;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path (absolute, or escapes the storage root).
    InvalidPath,
    /// Resource exists but is not valid UTF-8 text.
    InvalidData,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            std::io::ErrorKind::InvalidData => StorageErrorKind::InvalidData,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }

    /// Whether the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::InvalidData => "Invalid data",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read access to static text resources.
///
/// Implementations must be shareable across threads; callers hold them as
/// `Arc<dyn Storage>`.
pub trait Storage: Send + Sync {
    /// Read a resource as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the resource doesn't exist, the path is
    /// invalid, or the content can't be read.
    fn read(&self, path: &str) -> Result<String, StorageError>;

    /// Check if a resource exists.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, path: &str) -> bool;

    /// Opaque version tag that changes whenever the resource content changes.
    ///
    /// Used as the cache etag for fetched content.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the resource doesn't exist.
    fn etag(&self, path: &str) -> Result<String, StorageError>;
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_display_full() {
        let err = StorageError::io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            Some(PathBuf::from("blogs/001.md")),
        )
        .with_backend("Fs");

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: no such file (path: blogs/001.md)"
        );
    }

    #[test]
    fn test_display_minimal() {
        let err = StorageError::new(StorageErrorKind::InvalidPath);
        assert_eq!(err.to_string(), "Invalid path");
    }

    #[test]
    fn test_io_kind_mapping() {
        let denied = StorageError::io(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            None,
        );
        assert_eq!(denied.kind, StorageErrorKind::PermissionDenied);
        assert!(denied.path.is_none());

        let other = StorageError::io(std::io::Error::other("boom"), None);
        assert_eq!(other.kind, StorageErrorKind::Other);
    }

    #[test]
    fn test_source_is_exposed() {
        let err = StorageError::io(std::io::Error::other("inner"), None);
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("inner"));
    }

    #[test]
    fn test_not_found_helper() {
        let err = StorageError::not_found("manifest.json");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found (path: manifest.json)");
    }
}
