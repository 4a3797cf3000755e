//! Block assembly and paragraph folding.

/// Collects rendered lines, folding plain text into paragraphs.
///
/// With folding enabled:
/// - consecutive text lines are trimmed and joined with a space into one
///   pending paragraph,
/// - a blank line flushes the pending paragraph as `<p>…</p>`,
/// - a block flushes the pending paragraph and is then emitted as-is,
/// - the pending paragraph is flushed at the end.
///
/// With folding disabled every text line, blank line and block is emitted
/// in order without modification.
#[derive(Debug)]
pub(crate) struct BlockWriter {
    lines: Vec<String>,
    paragraph: String,
    fold: bool,
}

impl BlockWriter {
    pub(crate) fn new(fold: bool) -> Self {
        Self {
            lines: Vec::new(),
            paragraph: String::new(),
            fold,
        }
    }

    /// Add a line of inline content.
    pub(crate) fn text(&mut self, line: &str) {
        if !self.fold {
            self.lines.push(line.to_owned());
            return;
        }
        if !self.paragraph.is_empty() {
            self.paragraph.push(' ');
        }
        self.paragraph.push_str(line.trim());
    }

    /// Record a blank source line.
    pub(crate) fn blank(&mut self) {
        if self.fold {
            self.flush();
        } else {
            self.lines.push(String::new());
        }
    }

    /// Emit a block-level element.
    pub(crate) fn block(&mut self, html: impl Into<String>) {
        self.flush();
        self.lines.push(html.into());
    }

    /// Flush the pending paragraph and join all lines.
    pub(crate) fn finish(mut self) -> String {
        self.flush();
        self.lines.join("\n")
    }

    fn flush(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let paragraph = std::mem::take(&mut self.paragraph);
        self.lines.push(format!("<p>{paragraph}</p>"));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_consecutive_text_merges() {
        let mut writer = BlockWriter::new(true);
        writer.text("line one");
        writer.text("  line two  ");
        assert_eq!(writer.finish(), "<p>line one line two</p>");
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        let mut writer = BlockWriter::new(true);
        writer.text("a");
        writer.blank();
        writer.blank();
        writer.text("b");
        assert_eq!(writer.finish(), "<p>a</p>\n<p>b</p>");
    }

    #[test]
    fn test_block_flushes_pending_paragraph() {
        let mut writer = BlockWriter::new(true);
        writer.text("before");
        writer.block("<h2>Title</h2>");
        writer.text("after");
        assert_eq!(writer.finish(), "<p>before</p>\n<h2>Title</h2>\n<p>after</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(BlockWriter::new(true).finish(), "");
        assert_eq!(BlockWriter::new(false).finish(), "");
    }

    #[test]
    fn test_without_folding_lines_kept() {
        let mut writer = BlockWriter::new(false);
        writer.text("  indented");
        writer.blank();
        writer.block("<span>b</span>");
        assert_eq!(writer.finish(), "  indented\n\n<span>b</span>");
    }
}
