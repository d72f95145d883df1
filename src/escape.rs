//! HTML escaping and unescaping for the five sensitive characters.
//!
//! Fast-path optimized: scans for the first escapable character,
//! then bulk-copies segments between escapes.

use std::borrow::Cow;

use memchr::{memchr2, memchr3};

/// Lookup table for the five characters that are rewritten to entities.
/// Indexed by byte value, true if the byte needs escaping.
const ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'&' as usize] = true;
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Entity replacement for one escapable byte.
#[inline]
fn entity_for(b: u8) -> &'static [u8] {
    match b {
        b'&' => b"&amp;",
        b'<' => b"&lt;",
        b'>' => b"&gt;",
        b'"' => b"&quot;",
        _ => b"&#39;",
    }
}

/// Escape HTML-sensitive characters into an output buffer.
///
/// Replaces `&`, `<`, `>`, `"`, `'` with their entities. Each input byte
/// is inspected exactly once, so entities produced by the ampersand
/// substitution are never re-escaped.
///
/// # Example
/// ```
/// let mut out = Vec::new();
/// marklite::escape::escape_into(&mut out, b"<script>");
/// assert_eq!(out, b"&lt;script&gt;");
/// ```
#[inline]
pub fn escape_into(out: &mut Vec<u8>, input: &[u8]) {
    if input.is_empty() {
        return;
    }

    let mut pos = match first_escape(input) {
        Some(p) => p,
        None => {
            out.extend_from_slice(input);
            return;
        }
    };

    if pos > 0 {
        out.extend_from_slice(&input[..pos]);
    }

    while pos < input.len() {
        let scan_start = pos;
        while pos < input.len() && !ESCAPE_TABLE[input[pos] as usize] {
            pos += 1;
        }

        // Copy the clean segment in one shot
        if pos > scan_start {
            out.extend_from_slice(&input[scan_start..pos]);
        }

        if pos < input.len() {
            out.extend_from_slice(entity_for(input[pos]));
            pos += 1;
        }
    }
}

/// Position of the first byte that needs escaping, if any.
#[inline]
fn first_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'&', b'<', b'>', input);
    let b = memchr2(b'"', b'\'', input);
    min_opt(a, b)
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Check if a byte slice contains any escapable character.
#[inline]
pub fn needs_escape(input: &[u8]) -> bool {
    first_escape(input).is_some()
}

/// Escape HTML-sensitive characters, returning a new `String`.
///
/// Prefer [`escape_into`] when a reusable buffer is available.
pub fn escape(input: &str) -> String {
    let mut out = Vec::with_capacity(input.len() + input.len() / 8);
    escape_into(&mut out, input.as_bytes());
    // SAFETY: We only insert ASCII entity sequences between whole input
    // segments, so if input was valid UTF-8, output is also valid UTF-8
    unsafe { String::from_utf8_unchecked(out) }
}

/// Decode HTML entities back to characters.
///
/// Inverse of [`escape`] for the five escaped characters. The decoder is
/// insensitive to evaluation order (a `&amp;` in the input cannot combine
/// with following text into a second entity), so `unescape(escape(s)) == s`
/// holds for all `s`.
pub fn unescape(input: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_plain_text() {
        assert_eq!(escape("Hello, World!"), "Hello, World!");
    }

    #[test]
    fn escape_angle_brackets() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn escape_ampersand_first() {
        // An ampersand already in the input must not double-escape
        assert_eq!(escape("a &amp; b"), "a &amp;amp; b");
        assert_eq!(escape("a & b"), "a &amp; b");
    }

    #[test]
    fn escape_quotes() {
        assert_eq!(escape("\"it's\""), "&quot;it&#39;s&quot;");
    }

    #[test]
    fn escape_all_five() {
        assert_eq!(escape("&<>\"'"), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn escape_empty() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn escape_consecutive() {
        assert_eq!(escape("<<<"), "&lt;&lt;&lt;");
    }

    #[test]
    fn escape_at_boundaries() {
        assert_eq!(escape("<"), "&lt;");
        assert_eq!(escape("hello<"), "hello&lt;");
        assert_eq!(escape("<hello"), "&lt;hello");
    }

    #[test]
    fn escape_unicode_passthrough() {
        assert_eq!(escape("Hallo Wält! <tag>"), "Hallo Wält! &lt;tag&gt;");
    }

    #[test]
    fn unescape_entities() {
        assert_eq!(unescape("&lt;p&gt;"), "<p>");
        assert_eq!(unescape("&amp;lt;"), "&lt;");
        assert_eq!(unescape("&quot;&#39;"), "\"'");
    }

    #[test]
    fn unescape_round_trip() {
        let samples = ["", "plain", "<a href=\"x\">it's &amp; more</a>", "a&&b<<'"];
        for s in samples {
            assert_eq!(unescape(&escape(s)), s);
        }
    }

    #[test]
    fn needs_escape_detection() {
        assert!(!needs_escape(b"hello"));
        assert!(needs_escape(b"<hello>"));
        assert!(needs_escape(b"a & b"));
        assert!(needs_escape(b"don't"));
        assert!(!needs_escape(b""));
    }
}
