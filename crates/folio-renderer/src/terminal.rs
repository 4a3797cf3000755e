//! Terminal backend: restricted, inline-styled output for the fake terminal pane.

use crate::backend::RenderBackend;
use crate::escape::escape_html;

/// Terminal render backend.
///
/// Supports headings, code, bold and bullets only. Italic, link, blockquote
/// and rule syntax stay literal. Line structure is expressed with `<br>`
/// instead of block elements, so the result can be appended to a single
/// terminal line container.
pub struct TerminalBackend;

impl RenderBackend for TerminalBackend {
    const ITALIC: bool = false;
    const LINKS: bool = false;
    const BLOCKQUOTES: bool = false;
    const RULES: bool = false;
    const FOLD_PARAGRAPHS: bool = false;

    fn heading(level: u8, content: &str, out: &mut String) {
        let open = match level {
            1 => r#"<span class="terminal-success" style="font-size: 1.1em; font-weight: bold;">"#,
            2 => r#"<span class="terminal-command" style="font-weight: bold;">"#,
            _ => r#"<span class="terminal-info">"#,
        };
        out.push_str(open);
        out.push_str(content);
        out.push_str("</span>");
    }

    fn code_block(_lang: Option<&str>, body: &str, out: &mut String) {
        out.push_str(r#"<pre class="terminal-code"><code>"#);
        out.push_str(&escape_html(body));
        out.push_str("</code></pre>");
    }

    fn inline_code(content: &str, out: &mut String) {
        out.push_str(r#"<span class="terminal-code-inline">"#);
        out.push_str(content);
        out.push_str("</span>");
    }

    fn list_start() -> Option<&'static str> {
        None
    }

    fn list_end() -> Option<&'static str> {
        None
    }

    fn list_item(content: &str, out: &mut String) {
        out.push_str(r#"<span class="terminal-info">  • "#);
        out.push_str(content);
        out.push_str("</span>");
    }

    /// Blank lines become `<br><br>`, remaining newlines `<br>`.
    fn finish(html: String) -> String {
        html.replace("\n\n", "<br><br>").replace('\n', "<br>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_untrimmed_no_label() {
        let mut out = String::new();
        TerminalBackend::code_block(Some("sh"), "ls -la\n", &mut out);
        assert_eq!(out, "<pre class=\"terminal-code\"><code>ls -la\n</code></pre>");
    }

    #[test]
    fn test_finish_converts_line_breaks() {
        let html = TerminalBackend::finish("a\n\nb\nc".to_owned());
        assert_eq!(html, "a<br><br>b<br>c");
    }

    #[test]
    fn test_heading_level_four_uses_info_style() {
        let mut out = String::new();
        TerminalBackend::heading(4, "Notes", &mut out);
        assert_eq!(out, r#"<span class="terminal-info">Notes</span>"#);
    }
}
