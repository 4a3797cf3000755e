//! Blog manifest (`manifest.json`).

use serde::{Deserialize, Serialize};

/// Index of published posts.
///
/// ```json
/// {
///   "posts": [
///     {
///       "id": "001",
///       "filename": "001-resilient-crawler.md",
///       "title": "Checkpointing a 228k-page crawl",
///       "date": "2024-03-02",
///       "tags": ["python", "scraping"],
///       "status": "RESOLVED",
///       "preview": "How the crawler survives restarts."
///     }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Posts in display order.
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// One manifest entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Short identifier used in commands (e.g., "001").
    pub id: String,
    /// Markdown file, relative to the content directory.
    pub filename: String,
    /// Display title.
    pub title: String,
    /// Publication date as written in the manifest.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form status label (e.g., "RESOLVED", "OPERATIONAL").
    #[serde(default)]
    pub status: String,
    /// One-line teaser.
    #[serde(default)]
    pub preview: String,
}

/// Display category of a post's status label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostStatus {
    Resolved,
    Operational,
    Other,
}

impl Post {
    /// Classify the free-form status label.
    #[must_use]
    pub fn status_kind(&self) -> PostStatus {
        match self.status.as_str() {
            "RESOLVED" => PostStatus::Resolved,
            "OPERATIONAL" => PostStatus::Operational,
            _ => PostStatus::Other,
        }
    }

    /// Case-insensitive match of `needle` (already lowercased) against the
    /// title, preview and tags.
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.preview.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

impl Manifest {
    /// Find a post by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Posts whose title, preview or tags contain `keyword`, ignoring case.
    ///
    /// A blank keyword matches nothing.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<&Post> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.posts.iter().filter(|p| p.matches(&needle)).collect()
    }
}
