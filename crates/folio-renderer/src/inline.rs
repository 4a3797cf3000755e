//! Inline span rules.
//!
//! Applied to the content of a single line, in a fixed order: code spans,
//! bold, italic, links. Each rule sees the output of the previous ones, so
//! bold must run before italic or `**x**` would be read as two emphasis
//! markers.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::backend::RenderBackend;

/// Code span: single backticks around at least one non-backtick character.
static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Bold: `**text**`, shortest match.
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Italic: `*text*`, shortest match.
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// Link: `[label](url)`.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Apply the inline rules enabled by `B` to `text`.
pub(crate) fn render_inline<B: RenderBackend>(text: &str) -> String {
    let mut html = CODE_SPAN
        .replace_all(text, |caps: &Captures<'_>| {
            let mut span = String::new();
            B::inline_code(&caps[1], &mut span);
            span
        })
        .into_owned();

    html = BOLD.replace_all(&html, "<strong>${1}</strong>").into_owned();

    if B::ITALIC {
        html = ITALIC.replace_all(&html, "<em>${1}</em>").into_owned();
    }

    if B::LINKS {
        html = LINK
            .replace_all(&html, r#"<a href="${2}" target="_blank" rel="noopener">${1}</a>"#)
            .into_owned();
    }

    html
}
