//! Link extraction for `[text](url)` syntax.
//!
//! Runs over the already inline-formatted line, after [`crate::inline`].
//! Image syntax (`![alt](src)`) is a block-level construct handled by the
//! block engine, not here.

use crate::escape::escape;

/// Scanner mode. Exactly one mode is active per character scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    /// Outside any link.
    Normal,
    /// Between `[` and `]`, accumulating link text.
    LinkText,
    /// Between `](` and `)`, accumulating the destination.
    LinkUrl,
}

/// Rewrite `[text](url)` occurrences in a line to anchor elements.
///
/// Single left-to-right scan:
/// - `[` outside a link flushes pending text and starts accumulating link
///   text.
/// - `]` followed immediately by `(` switches to accumulating the URL;
///   a `]` not followed by `(` emits the bracketed text literally as
///   `[text]`.
/// - `)` while in the URL emits `<a href="{url}">{text}</a>` with both
///   parts escaped, so they survive the block-level escape/unescape
///   round trip.
///
/// A link missing its closing `)` consumes the remainder of the line into
/// the URL and never emits — trailing content is lost. Known edge case,
/// kept as a tested contract of the lenient dialect.
///
/// # Example
/// ```
/// use marklite::links::extract_links;
///
/// assert_eq!(
///     extract_links("[a](http://x)"),
///     "<a href=\"http://x\">a</a>"
/// );
/// assert_eq!(extract_links("[a](http://x"), "");
/// ```
pub fn extract_links(line: &str) -> String {
    let bytes = line.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() + 16);
    let mut buffer: Vec<u8> = Vec::new();
    let mut link_text: Vec<u8> = Vec::new();
    let mut link_url: Vec<u8> = Vec::new();
    let mut mode = ScanMode::Normal;

    let mut pos = 0;
    while pos < bytes.len() {
        let b = bytes[pos];
        match mode {
            ScanMode::Normal if b == b'[' => {
                result.extend_from_slice(&buffer);
                buffer.clear();
                mode = ScanMode::LinkText;
            }
            ScanMode::Normal => buffer.push(b),
            ScanMode::LinkText if b == b']' => {
                if bytes.get(pos + 1) == Some(&b'(') {
                    // `](` consumed together
                    mode = ScanMode::LinkUrl;
                    pos += 2;
                    continue;
                }
                // No destination follows: the brackets were literal
                result.push(b'[');
                result.extend_from_slice(&link_text);
                result.push(b']');
                link_text.clear();
                mode = ScanMode::Normal;
            }
            ScanMode::LinkText => link_text.push(b),
            ScanMode::LinkUrl if b == b')' => {
                result.extend_from_slice(b"<a href=\"");
                // SAFETY: link_url/link_text split the input at ASCII
                // bytes only, so both are valid UTF-8
                let url = unsafe { std::str::from_utf8_unchecked(&link_url) };
                let text = unsafe { std::str::from_utf8_unchecked(&link_text) };
                result.extend_from_slice(escape(url).as_bytes());
                result.extend_from_slice(b"\">");
                result.extend_from_slice(escape(text).as_bytes());
                result.extend_from_slice(b"</a>");
                link_text.clear();
                link_url.clear();
                mode = ScanMode::Normal;
            }
            ScanMode::LinkUrl => link_url.push(b),
        }
        pos += 1;
    }

    // An unterminated link drops its accumulated state; only plain text
    // outside a link survives end of line
    if mode == ScanMode::Normal {
        result.extend_from_slice(&buffer);
    }

    // SAFETY: splits happen at ASCII bytes and insertions are ASCII or
    // escaped UTF-8 segments
    unsafe { String::from_utf8_unchecked(result) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(extract_links("no links here"), "no links here");
        assert_eq!(extract_links(""), "");
    }

    #[test]
    fn basic_link() {
        assert_eq!(
            extract_links("[a](http://x)"),
            "<a href=\"http://x\">a</a>"
        );
    }

    #[test]
    fn link_with_surrounding_text() {
        assert_eq!(
            extract_links("see [docs](http://d) now"),
            "see <a href=\"http://d\">docs</a> now"
        );
    }

    #[test]
    fn two_links_on_one_line() {
        assert_eq!(
            extract_links("[a](x) and [b](y)"),
            "<a href=\"x\">a</a> and <a href=\"y\">b</a>"
        );
    }

    #[test]
    fn bracket_without_destination_stays_literal() {
        assert_eq!(extract_links("[note] text"), "[note] text");
        assert_eq!(extract_links("a [b] c"), "a [b] c");
    }

    #[test]
    fn unterminated_url_truncates_line() {
        // Everything from `[` onward is consumed and never emitted
        assert_eq!(extract_links("[a](http://x"), "");
        assert_eq!(extract_links("before [a](http://x tail"), "before ");
    }

    #[test]
    fn unterminated_link_text_truncates_line() {
        assert_eq!(extract_links("[abc"), "");
        assert_eq!(extract_links("keep [abc"), "keep ");
    }

    #[test]
    fn url_and_text_are_escaped() {
        assert_eq!(
            extract_links("[a&b](http://x?a=1&b=2)"),
            "<a href=\"http://x?a=1&amp;b=2\">a&amp;b</a>"
        );
    }

    #[test]
    fn closing_paren_outside_link_is_plain() {
        assert_eq!(extract_links("f(x) = y"), "f(x) = y");
    }
}
