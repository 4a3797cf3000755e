//! Document backend: full block vocabulary for the content modal.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::escape::escape_html;

/// Document render backend.
///
/// Produces block-level HTML:
/// - `<h1>`…`<h4>` headings
/// - `<pre>` code blocks with a `code-lang` label, body trimmed and escaped
/// - `<ul>`/`<li>` lists, one container per contiguous item run
/// - `<blockquote>`, `<hr>`, `<em>` and new-tab anchors
/// - `<p>` paragraphs folded from consecutive text lines
pub struct DocumentBackend;

impl RenderBackend for DocumentBackend {
    const ITALIC: bool = true;
    const LINKS: bool = true;
    const BLOCKQUOTES: bool = true;
    const RULES: bool = true;
    const FOLD_PARAGRAPHS: bool = true;

    fn heading(level: u8, content: &str, out: &mut String) {
        let level = level.clamp(1, 4);
        write!(out, "<h{level}>{content}</h{level}>").unwrap();
    }

    fn code_block(lang: Option<&str>, body: &str, out: &mut String) {
        out.push_str("<pre>");
        if let Some(lang) = lang {
            write!(out, r#"<span class="code-lang">{}</span>"#, escape_html(lang)).unwrap();
        }
        out.push_str("<code>");
        out.push_str(&escape_html(body.trim()));
        out.push_str("</code></pre>");
    }

    fn inline_code(content: &str, out: &mut String) {
        out.push_str("<code>");
        out.push_str(content);
        out.push_str("</code>");
    }

    fn list_start() -> Option<&'static str> {
        Some("<ul>")
    }

    fn list_end() -> Option<&'static str> {
        Some("</ul>")
    }

    fn list_item(content: &str, out: &mut String) {
        out.push_str("<li>");
        out.push_str(content);
        out.push_str("</li>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_with_language() {
        let mut out = String::new();
        DocumentBackend::code_block(Some("js"), "\ncode<>&\n", &mut out);
        assert_eq!(
            out,
            r#"<pre><span class="code-lang">js</span><code>code&lt;&gt;&amp;</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_without_language_keeps_inner_newlines() {
        let mut out = String::new();
        DocumentBackend::code_block(None, "  a\n\nb  ", &mut out);
        assert_eq!(out, "<pre><code>a\n\nb</code></pre>");
    }

    #[test]
    fn test_heading_levels() {
        let mut out = String::new();
        DocumentBackend::heading(4, "Deep", &mut out);
        assert_eq!(out, "<h4>Deep</h4>");
    }
}
