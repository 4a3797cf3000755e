//! Storage abstraction for Folio static content.
//!
//! This crate provides a [`Storage`] trait for reading the static text
//! resources a site is built from (the blog manifest and markdown posts).
//! This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (local directory today, other stores later)
//! - **Clean separation** between content loading and rendering
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `read()`, `exists()`, and `etag()` methods
//! - [`FsStorage`] implementation rooted at a content directory
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use folio_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("blogs"));
//! let manifest = storage.read("manifest.json")?;
//! # Ok::<(), folio_storage::StorageError>(())
//! ```

mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
