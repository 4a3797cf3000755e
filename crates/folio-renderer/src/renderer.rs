//! Generic markdown renderer with pluggable backend.

use std::marker::PhantomData;

use crate::backend::RenderBackend;
use crate::fold::BlockWriter;
use crate::front_matter::strip_front_matter;
use crate::inline::render_inline;
use crate::scan::{Scanner, Token};

/// Markdown-subset renderer with pluggable backend.
///
/// The renderer holds no state between calls: every [`render`](Self::render)
/// builds its own scanner and block writer, so one instance can be shared
/// freely across threads.
///
/// Rendering never fails. Unsupported or malformed syntax is emitted as
/// literal, or partially transformed, text.
///
/// # Example
///
/// ```
/// use folio_renderer::{DocumentBackend, MarkdownRenderer};
///
/// let renderer = MarkdownRenderer::<DocumentBackend>::new();
/// let html = renderer.render("# Hello\n\n**Bold** text");
/// assert_eq!(html, "<h1>Hello</h1>\n<p><strong>Bold</strong> text</p>");
/// ```
pub struct MarkdownRenderer<B: RenderBackend> {
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> MarkdownRenderer<B> {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _backend: PhantomData,
        }
    }

    /// Render a markdown document to an HTML fragment.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let body = strip_front_matter(markdown);
        let mut writer = BlockWriter::new(B::FOLD_PARAGRAPHS);

        for token in Scanner::new(body) {
            match token {
                Token::Blank => writer.blank(),
                Token::Heading { level, text } => {
                    let mut out = String::new();
                    B::heading(level, &render_inline::<B>(text), &mut out);
                    writer.block(out);
                }
                Token::ListStart => {
                    if let Some(open) = B::list_start() {
                        writer.block(open);
                    }
                }
                Token::ListEnd => {
                    if let Some(close) = B::list_end() {
                        writer.block(close);
                    }
                }
                Token::Item(text) => {
                    let mut out = String::new();
                    B::list_item(&render_inline::<B>(text), &mut out);
                    writer.block(out);
                }
                Token::Quote { line, text } => {
                    if B::BLOCKQUOTES {
                        let mut out = String::new();
                        B::blockquote(&render_inline::<B>(text), &mut out);
                        writer.block(out);
                    } else {
                        writer.text(&render_inline::<B>(line));
                    }
                }
                Token::Rule(line) => {
                    if B::RULES {
                        let mut out = String::new();
                        B::rule(&mut out);
                        writer.block(out);
                    } else {
                        writer.text(line);
                    }
                }
                Token::Code { lang, body } => {
                    let mut out = String::new();
                    B::code_block(lang, &body, &mut out);
                    writer.block(out);
                }
                Token::Html(line) => writer.block(render_inline::<B>(line)),
                Token::Verbatim(line) => writer.block(line),
                Token::Text(line) => writer.text(&render_inline::<B>(line)),
            }
        }

        B::finish(writer.finish())
    }
}

impl<B: RenderBackend> Default for MarkdownRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}
