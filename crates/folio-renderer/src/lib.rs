//! Markdown-subset renderer with document and terminal backends.
//!
//! This crate converts a constrained markdown dialect into HTML fragments.
//! [`render`] picks a backend from a [`Mode`]; [`MarkdownRenderer`] can also be
//! used directly with any [`RenderBackend`].
//!
//! # Architecture
//!
//! Rendering is a single pass over the document body:
//!
//! 1. A leading `---` front matter block is removed.
//! 2. A line scanner classifies lines (headings, list items, quotes, rules,
//!    fenced code, raw HTML, text) using explicit `Normal` / `InCode` /
//!    `InList` states. Fenced code is taken whole and never sees inline rules.
//! 3. Inline rules (code spans, bold, italic, links) run on each line's content.
//! 4. A block writer emits block elements and folds plain text into paragraphs.
//!
//! The backend decides which optional rules run and which tags are emitted:
//! - [`DocumentBackend`]: headings, `<pre>` with language label, lists wrapped
//!   per contiguous run, blockquotes, rules, italics, links, paragraphs
//! - [`TerminalBackend`]: styled `<span>`s, bullets, code, bold and `<br>` breaks
//!
//! Only fenced code bodies are escaped. Raw HTML elsewhere in the input is
//! passed through unchanged.
//!
//! # Example
//!
//! ```
//! use folio_renderer::{Mode, render};
//!
//! let html = render("line one\nline two\n\nline three", Mode::Document);
//! assert_eq!(html, "<p>line one line two</p>\n<p>line three</p>");
//! ```

mod backend;
mod document;
mod escape;
mod fold;
mod front_matter;
mod inline;
mod mode;
mod renderer;
mod scan;
mod terminal;

pub use backend::RenderBackend;
pub use document::DocumentBackend;
pub use escape::escape_html;
pub use front_matter::{split_front_matter, strip_front_matter};
pub use mode::{Mode, ParseModeError, render};
pub use renderer::MarkdownRenderer;
pub use terminal::TerminalBackend;
