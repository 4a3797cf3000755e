//! Blog content for Folio: manifest, posts and cached rendering.
//!
//! This crate provides:
//! - [`Manifest`] / [`Post`]: the `manifest.json` index of blog posts
//! - [`FrontMatter`]: metadata parsed from a post's `---` block
//! - [`Blog`]: manifest and post loading through a [`Storage`](folio_storage::Storage),
//!   memoised in a [`Cache`](folio_cache::Cache), and rendering via
//!   [`folio_renderer::render`]
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use folio_blog::{Blog, BlogConfig};
//! use folio_cache::MemoryCache;
//! use folio_renderer::Mode;
//! use folio_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("blogs")));
//! let blog = Blog::new(storage, &MemoryCache::new(), BlogConfig::default());
//!
//! for post in blog.manifest()?.posts {
//!     println!("LOG_{} - {}", post.id, post.title);
//! }
//!
//! let rendered = blog.render_post("001", Mode::Document)?;
//! # Ok(())
//! # }
//! ```

mod blog;
mod front_matter;
mod manifest;

pub use blog::{Blog, BlogConfig, BlogError, RenderedPost};
pub use front_matter::FrontMatter;
pub use manifest::{Manifest, Post, PostStatus};
