//! Inline formatter for emphasis-style delimiters.
//!
//! Single left-to-right pass with a one-slot active span: the dialect does
//! not nest inline spans, so at most one span is open at any position.
//! Two-character delimiters are matched before the overlapping
//! one-character delimiter (`**` before `*`).

/// Inline span kinds, one per delimiter the dialect recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// `**bold**`
    Strong,
    /// `__underline__`
    Underline,
    /// `~~strikethrough~~`
    Strikethrough,
    /// `*italic*`
    Em,
    /// `` `code` ``
    Code,
}

impl SpanKind {
    /// The delimiter that opens and closes this span.
    #[inline]
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Strong => "**",
            Self::Underline => "__",
            Self::Strikethrough => "~~",
            Self::Em => "*",
            Self::Code => "`",
        }
    }

    /// The HTML element the span renders to.
    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Underline => "u",
            Self::Strikethrough => "del",
            Self::Em => "em",
            Self::Code => "code",
        }
    }
}

/// Rule table in match order: two-character delimiters first, so `**`
/// wins over `*` at the same position.
const SPAN_RULES: [SpanKind; 5] = [
    SpanKind::Strong,
    SpanKind::Underline,
    SpanKind::Strikethrough,
    SpanKind::Em,
    SpanKind::Code,
];

/// Match a delimiter at the head of `rest`, longest first.
#[inline]
fn match_delimiter(rest: &[u8]) -> Option<SpanKind> {
    SPAN_RULES
        .into_iter()
        .find(|kind| rest.starts_with(kind.delimiter().as_bytes()))
}

/// Format a single line's inline spans into HTML.
///
/// Scans left to right. An opening delimiter starts buffering; the same
/// delimiter again closes the span and wraps the buffer in its tag. A
/// *different* delimiter while a span is open is literal text (one span at
/// a time). An opened-but-never-closed span degrades to the literal
/// buffered text without its wrapping tag; the opening delimiter is
/// consumed either way.
///
/// Delimiters inside an open code span are still delimiter characters —
/// accepted dialect behavior, the output is never re-parsed.
///
/// # Example
/// ```
/// use marklite::inline::format_inline;
///
/// assert_eq!(format_inline("**bold**"), "<strong>bold</strong>");
/// assert_eq!(format_inline("**oops"), "oops");
/// ```
pub fn format_inline(line: &str) -> String {
    let bytes = line.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() + 16);
    let mut buffer: Vec<u8> = Vec::new();
    let mut active: Option<SpanKind> = None;

    let mut pos = 0;
    while pos < bytes.len() {
        if let Some(kind) = match_delimiter(&bytes[pos..]) {
            let delimiter = kind.delimiter().as_bytes();
            match active {
                None => {
                    // Open: flush pending plain text, start buffering
                    result.extend_from_slice(&buffer);
                    buffer.clear();
                    active = Some(kind);
                }
                Some(open) if open == kind => {
                    // Close: wrap the buffered span content
                    result.push(b'<');
                    result.extend_from_slice(kind.tag().as_bytes());
                    result.push(b'>');
                    result.extend_from_slice(&buffer);
                    result.extend_from_slice(b"</");
                    result.extend_from_slice(kind.tag().as_bytes());
                    result.push(b'>');
                    buffer.clear();
                    active = None;
                }
                Some(_) => {
                    // A different delimiter while a span is open is literal
                    buffer.extend_from_slice(delimiter);
                }
            }
            pos += delimiter.len();
        } else {
            buffer.push(bytes[pos]);
            pos += 1;
        }
    }

    // Unclosed span (or trailing plain text) flushes unwrapped
    result.extend_from_slice(&buffer);

    // SAFETY: bytes are only split at ASCII delimiter positions and only
    // ASCII tag sequences are inserted, so the output is valid UTF-8
    unsafe { String::from_utf8_unchecked(result) }
}
