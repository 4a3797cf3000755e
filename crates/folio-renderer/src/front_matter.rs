//! Front matter detection.
//!
//! A document may open with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Checkpointing at scale
//! tags: [python, scraping]
//! ---
//! # Body starts here
//! ```
//!
//! Only a block starting on the very first line counts. Without a closing
//! delimiter the document is left untouched.

/// Split a document into its front matter and body.
///
/// Returns `(Some(front_matter), body)` when the first line is a `---`
/// delimiter and a later line closes it; the front matter excludes both
/// delimiter lines. Otherwise returns `(None, text)`.
///
/// # Examples
///
/// ```
/// use folio_renderer::split_front_matter;
///
/// let (meta, body) = split_front_matter("---\ntitle: x\n---\n# Real Title");
/// assert_eq!(meta, Some("title: x\n"));
/// assert_eq!(body, "# Real Title");
/// ```
#[must_use]
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let mut lines = text.split_inclusive('\n');

    match lines.next() {
        Some(first) if is_delimiter(first) => {
            let start = first.len();
            let mut offset = start;
            for line in lines {
                if is_delimiter(line) {
                    return (Some(&text[start..offset]), &text[offset + line.len()..]);
                }
                offset += line.len();
            }
            (None, text)
        }
        _ => (None, text),
    }
}

/// Remove the front matter block, if any, returning the document body.
#[must_use]
pub fn strip_front_matter(text: &str) -> &str {
    split_front_matter(text).1
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}
