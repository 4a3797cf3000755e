//! Render backend abstraction.
//!
//! A backend selects which optional markdown rules run and which HTML
//! vocabulary is emitted. The scanning, inline rules and block assembly are
//! shared by every backend.

/// Output vocabulary and rule set for [`MarkdownRenderer`](crate::MarkdownRenderer).
///
/// Content passed to the hooks has already been through the inline rules,
/// except code block bodies which arrive raw and must be escaped by the
/// backend.
pub trait RenderBackend {
    /// Convert `*text*` to emphasis.
    const ITALIC: bool;

    /// Convert `[label](url)` to anchors.
    const LINKS: bool;

    /// Convert `> ` lines to blockquotes. When disabled the line is plain text.
    const BLOCKQUOTES: bool;

    /// Convert `---` lines to horizontal rules. When disabled the line is plain text.
    const RULES: bool;

    /// Fold consecutive text lines into `<p>` elements.
    ///
    /// When disabled every line is emitted as-is, and blank lines are kept.
    const FOLD_PARAGRAPHS: bool;

    /// Render a heading of level 1 to 4.
    fn heading(level: u8, content: &str, out: &mut String);

    /// Render a fenced code block. `body` is the raw text between the fences.
    fn code_block(lang: Option<&str>, body: &str, out: &mut String);

    /// Render an inline code span.
    fn inline_code(content: &str, out: &mut String);

    /// Opening line of a list container, if the backend wraps item runs.
    fn list_start() -> Option<&'static str>;

    /// Closing line of a list container, if the backend wraps item runs.
    fn list_end() -> Option<&'static str>;

    /// Render one list item (ordered and unordered items render alike).
    fn list_item(content: &str, out: &mut String);

    /// Render a single-line blockquote. Only called when [`Self::BLOCKQUOTES`] is set.
    fn blockquote(content: &str, out: &mut String) {
        out.push_str("<blockquote>");
        out.push_str(content);
        out.push_str("</blockquote>");
    }

    /// Render a horizontal rule. Only called when [`Self::RULES`] is set.
    fn rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Post-process the assembled output.
    fn finish(html: String) -> String {
        html
    }
}
