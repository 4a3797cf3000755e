//! Line scanner for block structure.
//!
//! Converts a document body into a stream of [`Token`]s, one per source line
//! except for fenced code blocks, which are consumed whole. The scanner is a
//! small state machine:
//!
//! - `Normal`: lines are classified by their leading syntax.
//! - `InCode`: inside a raw `<pre>` element from the source. Lines pass through
//!   verbatim until one ends with `</pre>`.
//! - `InList`: inside a run of list items. A markdown run is bracketed by
//!   [`Token::ListStart`] / [`Token::ListEnd`] and ends at the first non-item
//!   line. A raw `<ul>`/`<ol>` from the source ends at its closing tag line.
//!
//! Fenced code is only recognised when a closing fence exists further down;
//! an unterminated opening fence is plain text.

/// A classified source line (or fenced block).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Whitespace-only line.
    Blank,
    /// `#`…`####` heading with its text.
    Heading { level: u8, text: &'a str },
    /// Start of a markdown item run.
    ListStart,
    /// `* `, `- ` or `N. ` item with its text.
    Item(&'a str),
    /// End of a markdown item run.
    ListEnd,
    /// `> ` line: the full line and the quoted text.
    Quote { line: &'a str, text: &'a str },
    /// `---` line.
    Rule(&'a str),
    /// Fenced code block with the raw body between the fences.
    Code { lang: Option<&'a str>, body: String },
    /// Source line that already is block-level HTML.
    Html(&'a str),
    /// Source line inside a raw `<pre>`, never transformed.
    Verbatim(&'a str),
    /// Any other line.
    Text(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListSource {
    Markdown,
    Html,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Normal,
    InCode,
    InList(ListSource),
}

/// Iterator of [`Token`]s over a document body.
pub(crate) struct Scanner<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    state: State,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
            state: State::Normal,
        }
    }

    fn scan_normal(&mut self, line: &'a str) -> Token<'a> {
        if line.trim().is_empty() {
            self.pos += 1;
            return Token::Blank;
        }

        if let Some(lang) = fence_open(line)
            && let Some(close) = self.find_fence_close()
        {
            let body: String = self.lines[self.pos + 1..close]
                .iter()
                .flat_map(|l| [*l, "\n"])
                .collect();
            self.pos = close + 1;
            return Token::Code { lang, body };
        }

        if list_item(line).is_some() {
            // Item itself is emitted on the next call, from `InList`.
            self.state = State::InList(ListSource::Markdown);
            return Token::ListStart;
        }

        self.pos += 1;

        if let Some((level, text)) = heading(line) {
            return Token::Heading { level, text };
        }
        if let Some(text) = line.strip_prefix("> ") {
            return Token::Quote { line, text };
        }
        if line == "---" {
            return Token::Rule(line);
        }

        let trimmed = line.trim();
        if opens_pre(trimmed) {
            if !trimmed.ends_with("</pre>") {
                self.state = State::InCode;
            }
            return Token::Verbatim(line);
        }
        if opens_html_list(trimmed) {
            if !trimmed.contains("</ul>") && !trimmed.contains("</ol>") {
                self.state = State::InList(ListSource::Html);
            }
            return Token::Html(line);
        }
        if is_block_html(trimmed) {
            return Token::Html(line);
        }

        Token::Text(line)
    }

    fn find_fence_close(&self) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .skip(self.pos + 1)
            .find(|(_, l)| l.trim() == "```")
            .map(|(idx, _)| idx)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let Some(&line) = self.lines.get(self.pos) else {
            if self.state == State::InList(ListSource::Markdown) {
                self.state = State::Normal;
                return Some(Token::ListEnd);
            }
            return None;
        };

        let token = match self.state {
            State::Normal => self.scan_normal(line),
            State::InCode => {
                self.pos += 1;
                if line.trim().ends_with("</pre>") {
                    self.state = State::Normal;
                }
                Token::Verbatim(line)
            }
            State::InList(ListSource::Markdown) => {
                if let Some(text) = list_item(line) {
                    self.pos += 1;
                    Token::Item(text)
                } else {
                    self.state = State::Normal;
                    Token::ListEnd
                }
            }
            State::InList(ListSource::Html) => {
                self.pos += 1;
                let trimmed = line.trim();
                if trimmed.starts_with("</ul>") || trimmed.starts_with("</ol>") {
                    self.state = State::Normal;
                }
                if let Some(text) = list_item(line) {
                    Token::Item(text)
                } else if trimmed.is_empty() {
                    Token::Blank
                } else {
                    Token::Html(line)
                }
            }
        };
        Some(token)
    }
}

/// Opening fence: three backticks, optionally followed by a word-character
/// language tag. Returns the tag.
fn fence_open(line: &str) -> Option<Option<&str>> {
    let rest = line.strip_prefix("```")?;
    if rest.is_empty() {
        Some(None)
    } else if rest.chars().all(|c| c.is_alphanumeric() || c == '_') {
        Some(Some(rest))
    } else {
        None
    }
}

/// Heading: one to four `#` followed by a space.
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=4).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    Some((u8::try_from(hashes).ok()?, text))
}

/// List item: `* `, `- ` or one or more digits followed by `. `.
fn list_item(line: &str) -> Option<&str> {
    if let Some(text) = line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) {
        return Some(text);
    }
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

fn opens_pre(trimmed: &str) -> bool {
    trimmed.starts_with("<pre>") || trimmed.starts_with("<pre ")
}

fn opens_html_list(trimmed: &str) -> bool {
    trimmed.starts_with("<ul>") || trimmed.starts_with("<ol>")
}

/// Source lines that already are block-level HTML and must not be wrapped
/// in a paragraph.
fn is_block_html(trimmed: &str) -> bool {
    ["<h", "<blockquote>", "</ul>", "</ol>"]
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}
