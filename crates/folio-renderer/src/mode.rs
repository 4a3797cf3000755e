//! Render mode selection.

use std::fmt;
use std::str::FromStr;

use crate::document::DocumentBackend;
use crate::renderer::MarkdownRenderer;
use crate::terminal::TerminalBackend;

/// Output mode, chosen by the caller per display surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Block-level HTML for the content modal.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "document"))]
    Document,
    /// Inline-styled HTML with `<br>` line breaks for the terminal pane.
    #[cfg_attr(feature = "serde", serde(rename = "terminal", alias = "terminal-inline"))]
    TerminalInline,
}

impl Mode {
    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::TerminalInline => "terminal",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseModeError(String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown render mode '{}' (expected 'document' or 'terminal')",
            self.0
        )
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "document" | "doc" => Ok(Self::Document),
            "terminal" | "terminal-inline" => Ok(Self::TerminalInline),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// Render a markdown-subset document to HTML in the given mode.
///
/// Total: returns a string for every input, including empty and malformed
/// documents. A leading front matter block is removed first.
///
/// # Examples
///
/// ```
/// use folio_renderer::{Mode, render};
///
/// assert_eq!(render("# Hello", Mode::Document), "<h1>Hello</h1>");
/// assert_eq!(render("a\nb", Mode::TerminalInline), "a<br>b");
/// ```
#[must_use]
pub fn render(markdown: &str, mode: Mode) -> String {
    tracing::trace!(%mode, input_len = markdown.len(), "rendering markdown");
    let html = match mode {
        Mode::Document => MarkdownRenderer::<DocumentBackend>::new().render(markdown),
        Mode::TerminalInline => MarkdownRenderer::<TerminalBackend>::new().render(markdown),
    };
    tracing::trace!(%mode, output_len = html.len(), "rendered markdown");
    html
}
