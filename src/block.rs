//! Line-oriented block engine.
//!
//! Drives the whole conversion: consumes the document line by line,
//! tracks the open block construct, and dispatches each line to the
//! matching block rule. Inline formatting and link extraction run only on
//! lines eligible for inline content.
//!
//! The engine has no fatal error path — every line either contributes a
//! block, contributes to a buffer, or is silently skipped.

use crate::inline::format_inline;
use crate::links::extract_links;
use crate::render::HtmlWriter;

/// The line that opens and closes a list: a single space and an asterisk,
/// matched against the raw (untrimmed) line.
const LIST_MARKER: &str = " *";

/// The prefix that opens and closes a code block, on the trimmed line.
const FENCE_MARKER: &str = "```";

/// Parsing mode. One construct is open at a time; a list and a code fence
/// can never be open simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// No block construct open.
    Normal,
    /// Between two list marker lines, buffering `<li>` items.
    InList,
    /// Between two fence lines, buffering verbatim code.
    InCodeFence,
}

/// Block engine state: the current mode plus the text gathered for the
/// currently open list or code block.
pub struct BlockEngine {
    mode: Mode,
    buffer: String,
}

impl BlockEngine {
    /// Create an engine in the initial (no open construct) state.
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            buffer: String::new(),
        }
    }

    /// Consume one source line, appending any finished block to `writer`.
    pub fn feed_line(&mut self, line: &str, writer: &mut HtmlWriter) {
        match self.mode {
            Mode::InList => {
                if line == LIST_MARKER {
                    let block = format!("<ul>{}</ul>", self.buffer);
                    writer.write_escaped_block(&block);
                    self.buffer.clear();
                    self.mode = Mode::Normal;
                } else {
                    // Items are buffered raw; the enclosing <ul> unit is
                    // escaped once, as a whole
                    self.buffer.push_str("<li>");
                    self.buffer.push_str(&format_inline(line));
                    self.buffer.push_str("</li>");
                }
            }
            Mode::InCodeFence => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return;
                }
                if trimmed.starts_with(FENCE_MARKER) {
                    let block = format!("<pre><code>{}</code></pre>", self.buffer);
                    writer.write_escaped_block(&block);
                    self.buffer.clear();
                    self.mode = Mode::Normal;
                } else {
                    // Verbatim, newline-joined; no inline formatting, no
                    // per-line escaping
                    if !self.buffer.is_empty() {
                        self.buffer.push('\n');
                    }
                    self.buffer.push_str(trimmed);
                }
            }
            Mode::Normal => {
                if line == LIST_MARKER {
                    self.mode = Mode::InList;
                    return;
                }
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return;
                }
                if trimmed.starts_with(FENCE_MARKER) {
                    self.mode = Mode::InCodeFence;
                    return;
                }
                emit_leaf(trimmed, writer);
            }
        }
    }

    /// End of document. A still-open list or fence is discarded — its
    /// buffered content is never flushed.
    pub fn finish(self) {}
}

impl Default for BlockEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a full document into `writer`: split on newline, feed each line.
pub fn render_document(input: &str, writer: &mut HtmlWriter) {
    let mut engine = BlockEngine::new();
    for line in input.split('\n') {
        engine.feed_line(line, writer);
    }
    engine.finish();
}

/// Inline processing applied to block content: formatter first, then the
/// link extractor over its output.
#[inline]
fn render_inline(text: &str) -> String {
    extract_links(&format_inline(text))
}

/// Classify and emit a single-line leaf block. First match wins; a line
/// matching no rule produces no output.
fn emit_leaf(line: &str, writer: &mut HtmlWriter) {
    if let Some((level, rest)) = heading_split(line) {
        let block = format!("<h{level}>{}</h{level}>", render_inline(rest.trim()));
        writer.write_escaped_block(&block);
        return;
    }

    if line.chars().next().is_some_and(char::is_alphanumeric) {
        // Closing tag is also <p>: dialect behavior, kept as-is
        let block = format!("<p>{}<p>", render_inline(line));
        writer.write_escaped_block(&block);
        return;
    }

    if let Some(rest) = line.strip_prefix("> ") {
        let block = format!("<blockquote>{}</blockquote>", render_inline(rest));
        writer.write_escaped_block(&block);
        return;
    }

    if line.starts_with('!') {
        if let Some((src, alt)) = parse_image(line) {
            let block = if alt.is_empty() {
                format!("<img src=\"{src}\" />")
            } else {
                format!("<img src=\"{src}\" alt=\"{alt}\" />")
            };
            writer.write_escaped_block(&block);
        }
        // A `!` line matching neither image sub-pattern emits nothing
    }
}

/// Split an ATX-style heading: one to six `#` followed by a literal space.
/// Returns the level and the raw remainder.
fn heading_split(line: &str) -> Option<(usize, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &line[level..];
    rest.strip_prefix(' ').map(|rest| (level, rest))
}

/// Parse a block-level image line.
///
/// `![alt](src)` extracts alt and src by first `[`, last `]`, first `(`,
/// last `)`; `!(src)` has an empty alt. Anything else is no image.
fn parse_image(line: &str) -> Option<(&str, &str)> {
    match line.as_bytes().get(1) {
        Some(b'[') => {
            let open_bracket = line.find('[')?;
            let close_bracket = line.rfind(']')?;
            let open_paren = line.find('(')?;
            let close_paren = line.rfind(')')?;
            if close_bracket < open_bracket || close_paren < open_paren {
                return None;
            }
            let alt = &line[open_bracket + 1..close_bracket];
            let src = &line[open_paren + 1..close_paren];
            Some((src, alt))
        }
        Some(b'(') => {
            let close_paren = line.rfind(')')?;
            if close_paren < 2 {
                return None;
            }
            Some((&line[2..close_paren], ""))
        }
        _ => None,
    }
}
