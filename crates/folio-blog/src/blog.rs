//! Blog loading and rendering with caching.
//!
//! Provides [`Blog`], which loads the manifest and post sources from a
//! [`Storage`] and memoises them in a [`Cache`] keyed by storage etag.

use std::sync::Arc;

use folio_cache::{Cache, CacheBucket, CacheBucketExt};
use folio_renderer::Mode;
use folio_storage::{Storage, StorageError};

use crate::front_matter::FrontMatter;
use crate::manifest::{Manifest, Post};

/// Error returned when loading blog content fails.
///
/// These are the caller's concern: a failed load is reported on the display
/// surface and never handed to the renderer.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// No manifest entry with this id.
    #[error("Blog post {0} not found")]
    PostNotFound(String),
    /// Manifest or post could not be read.
    #[error("{0}")]
    Storage(#[from] StorageError),
    /// Manifest is not valid JSON.
    #[error("Invalid manifest {path}: {source}")]
    Manifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration for [`Blog`].
#[derive(Clone, Debug)]
pub struct BlogConfig {
    /// Manifest path within the storage.
    pub manifest_path: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            manifest_path: "manifest.json".to_owned(),
        }
    }
}

/// A rendered post.
#[derive(Clone, Debug)]
pub struct RenderedPost {
    /// Manifest entry.
    pub post: Post,
    /// Metadata from the post's front matter, if any.
    pub front_matter: Option<FrontMatter>,
    /// Rendered HTML fragment.
    pub html: String,
    /// Mode the HTML was rendered in.
    pub mode: Mode,
    /// Whether the markdown source was served from cache.
    pub from_cache: bool,
}

/// Blog content source.
///
/// Owns its cache buckets instead of relying on shared globals; dropping the
/// `Blog` (or passing a [`NullCache`](folio_cache::NullCache)) is how callers
/// control memoisation.
pub struct Blog {
    storage: Arc<dyn Storage>,
    manifest_bucket: Box<dyn CacheBucket>,
    post_bucket: Box<dyn CacheBucket>,
    manifest_path: String,
}

impl Blog {
    /// Create a blog over `storage`, caching in buckets of `cache`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, cache: &dyn Cache, config: BlogConfig) -> Self {
        Self {
            storage,
            manifest_bucket: cache.bucket("manifest"),
            post_bucket: cache.bucket("posts"),
            manifest_path: config.manifest_path,
        }
    }

    /// Load the manifest, from cache when its etag is unchanged.
    pub fn manifest(&self) -> Result<Manifest, BlogError> {
        let path = self.manifest_path.as_str();
        let etag = self.storage.etag(path)?;

        if let Some(manifest) = self.manifest_bucket.get_json::<Manifest>(path, &etag) {
            return Ok(manifest);
        }

        let text = self.storage.read(path)?;
        let manifest: Manifest =
            serde_json::from_str(&text).map_err(|source| BlogError::Manifest {
                path: path.to_owned(),
                source,
            })?;
        tracing::info!(path, posts = manifest.posts.len(), "Loaded blog manifest");

        self.manifest_bucket.set_json(path, &etag, &manifest);
        Ok(manifest)
    }

    /// Look up a post by id.
    pub fn post(&self, id: &str) -> Result<Post, BlogError> {
        self.manifest()?
            .find(id)
            .cloned()
            .ok_or_else(|| BlogError::PostNotFound(id.to_owned()))
    }

    /// Posts matching `keyword` (see [`Manifest::search`]).
    pub fn search(&self, keyword: &str) -> Result<Vec<Post>, BlogError> {
        Ok(self
            .manifest()?
            .search(keyword)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Markdown source of `post`, and whether it came from cache.
    pub fn source(&self, post: &Post) -> Result<(String, bool), BlogError> {
        let path = post.filename.as_str();
        let etag = self.storage.etag(path)?;
        let (markdown, from_cache) = self
            .post_bucket
            .get_or_fetch_string(path, &etag, || self.storage.read(path))?;
        Ok((markdown, from_cache))
    }

    /// Load and render a post.
    pub fn render_post(&self, id: &str, mode: Mode) -> Result<RenderedPost, BlogError> {
        let post = self.post(id)?;
        let (markdown, from_cache) = self.source(&post)?;

        let html = folio_renderer::render(&markdown, mode);
        tracing::debug!(id, %mode, from_cache, "Rendered post");

        Ok(RenderedPost {
            front_matter: FrontMatter::parse(&markdown),
            post,
            html,
            mode,
            from_cache,
        })
    }
}

#[cfg(test)]
mod tests {
    use folio_cache::{MemoryCache, NullCache};
    use folio_storage::{FsStorage, MockStorage};
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(Blog: Send, Sync);

    const MANIFEST: &str = r#"{"posts": [
        {"id": "001", "filename": "001-crawler.md", "title": "Resilient Crawler",
         "tags": ["python"], "status": "RESOLVED", "preview": "Checkpointing."},
        {"id": "002", "filename": "002-missing.md", "title": "Ghost post"}
    ]}"#;

    const POST: &str = "---\ntitle: Crawler\n---\n# Crawler\n\nSurvives **restarts**.";

    fn storage() -> Arc<MockStorage> {
        Arc::new(
            MockStorage::new()
                .with_file("manifest.json", MANIFEST)
                .with_file("001-crawler.md", POST),
        )
    }

    fn blog(storage: Arc<MockStorage>, cache: &dyn Cache) -> Blog {
        Blog::new(storage, cache, BlogConfig::default())
    }

    #[test]
    fn test_render_post_document() {
        let blog = blog(storage(), &MemoryCache::new());

        let rendered = blog.render_post("001", Mode::Document).unwrap();
        assert_eq!(
            rendered.html,
            "<h1>Crawler</h1>\n<p>Survives <strong>restarts</strong>.</p>"
        );
        assert_eq!(rendered.post.title, "Resilient Crawler");
        assert_eq!(
            rendered.front_matter.and_then(|f| f.title).as_deref(),
            Some("Crawler")
        );
        assert!(!rendered.from_cache);
    }

    #[test]
    fn test_render_post_terminal() {
        let blog = blog(storage(), &MemoryCache::new());

        let rendered = blog.render_post("001", Mode::TerminalInline).unwrap();
        assert!(rendered.html.contains("<br><br>Survives <strong>restarts</strong>."));
        assert_eq!(rendered.mode, Mode::TerminalInline);
    }

    #[test]
    fn test_source_cached_until_etag_changes() {
        let storage = storage();
        let blog = blog(Arc::clone(&storage), &MemoryCache::new());

        assert!(!blog.render_post("001", Mode::Document).unwrap().from_cache);
        assert!(blog.render_post("001", Mode::TerminalInline).unwrap().from_cache);
        // manifest + post, each read once
        assert_eq!(storage.reads(), 2);

        storage.set_file("001-crawler.md", "# Updated");
        let rendered = blog.render_post("001", Mode::Document).unwrap();
        assert!(!rendered.from_cache);
        assert_eq!(rendered.html, "<h1>Updated</h1>");
    }

    #[test]
    fn test_null_cache_always_reads() {
        let storage = storage();
        let blog = blog(Arc::clone(&storage), &NullCache);

        blog.render_post("001", Mode::Document).unwrap();
        blog.render_post("001", Mode::Document).unwrap();
        assert_eq!(storage.reads(), 4);
    }

    #[test]
    fn test_post_not_found() {
        let blog = blog(storage(), &MemoryCache::new());

        let err = blog.render_post("999", Mode::Document).unwrap_err();
        assert!(matches!(err, BlogError::PostNotFound(ref id) if id == "999"));
        assert_eq!(err.to_string(), "Blog post 999 not found");
    }

    #[test]
    fn test_missing_post_file_is_storage_error() {
        let blog = blog(storage(), &MemoryCache::new());

        let err = blog.render_post("002", Mode::Document).unwrap_err();
        assert!(matches!(err, BlogError::Storage(ref e) if e.is_not_found()));
    }

    #[test]
    fn test_missing_manifest() {
        let blog = blog(Arc::new(MockStorage::new()), &MemoryCache::new());
        assert!(matches!(blog.manifest(), Err(BlogError::Storage(_))));
    }

    #[test]
    fn test_invalid_manifest() {
        let storage = Arc::new(MockStorage::new().with_file("manifest.json", "{posts: nope"));
        let blog = blog(storage, &MemoryCache::new());

        let err = blog.manifest().unwrap_err();
        assert!(matches!(err, BlogError::Manifest { ref path, .. } if path == "manifest.json"));
    }

    #[test]
    fn test_search() {
        let blog = blog(storage(), &MemoryCache::new());

        let ids: Vec<String> = blog.search("PYTHON").unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["001"]);
        assert!(blog.search("rust").unwrap().is_empty());
    }

    #[test]
    fn test_custom_manifest_path_on_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join("index.json"),
            r#"{"posts": [{"id": "7", "filename": "seven.md", "title": "Seven"}]}"#,
        )
        .unwrap();
        std::fs::write(temp_dir.path().join("seven.md"), "* a\n* b").unwrap();

        let storage = Arc::new(FsStorage::new(temp_dir.path().to_path_buf()));
        let config = BlogConfig {
            manifest_path: "index.json".to_owned(),
        };
        let blog = Blog::new(storage, &MemoryCache::new(), config);

        let rendered = blog.render_post("7", Mode::Document).unwrap();
        assert_eq!(rendered.html, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
        assert!(rendered.front_matter.is_none());
    }
}
