//! Post metadata from the front matter block.

use folio_renderer::split_front_matter;
use serde::Deserialize;

/// Metadata declared at the top of a post:
///
/// ```text
/// ---
/// title: Checkpointing at scale
/// date: 2024-03-02
/// tags: [python, scraping]
/// status: RESOLVED
/// ---
/// ```
///
/// All fields are optional; unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub status: Option<String>,
}

impl FrontMatter {
    /// Parse the front matter of `markdown`.
    ///
    /// Returns `None` when the document has no front matter block or the
    /// block is not valid YAML for these fields.
    #[must_use]
    pub fn parse(markdown: &str) -> Option<Self> {
        let (raw, _) = split_front_matter(markdown);
        let raw = raw?;
        if raw.trim().is_empty() {
            return Some(Self::default());
        }

        match serde_yaml::from_str(raw) {
            Ok(front_matter) => Some(front_matter),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse front matter");
                None
            }
        }
    }
}
