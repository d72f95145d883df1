//! Property tests for the conversion laws.

use proptest::prelude::*;

use marklite::{convert, escape, inline, links, to_html};

/// Markdown-ish documents: dialect syntax characters, text, and newlines.
const DOC_REGEX: &str = "[-a-zA-Z0-9#>!*_~ \\n\\[\\]()`'\"&<]{0,200}";

proptest! {
    /// Escaping then decoding is the identity on arbitrary text.
    #[test]
    fn unescape_inverts_escape(s in ".*") {
        let escaped = escape::escape(&s);
        prop_assert_eq!(escape::unescape(&escaped), s);
    }

    /// The inline formatter is the identity on delimiter-free text.
    #[test]
    fn format_inline_identity_without_delimiters(s in "[^*_~`]*") {
        prop_assert_eq!(inline::format_inline(&s), s);
    }

    /// The link extractor is the identity on text without link syntax.
    #[test]
    fn extract_links_identity_without_brackets(s in "[^\\[\\]()]*") {
        prop_assert_eq!(links::extract_links(&s), s);
    }

    /// Conversion is total: no panic on any input, and the two views agree
    /// through the escape/unescape round trip.
    #[test]
    fn convert_is_total(s in DOC_REGEX) {
        let out = convert(&s);
        prop_assert_eq!(escape::unescape(&out.source_view), out.preview_html);
    }

    /// Conversion is deterministic and call-local: repeated calls agree.
    #[test]
    fn convert_is_reentrant(s in DOC_REGEX) {
        prop_assert_eq!(convert(&s), convert(&s));
    }

    /// The source view is entity text: no live markup outside the
    /// block-separating `<br />` markers.
    #[test]
    fn source_view_has_no_live_tags(s in DOC_REGEX) {
        let html = to_html(&s);
        for chunk in html.split("<br />") {
            prop_assert!(!chunk.contains('<'));
        }
    }
}
