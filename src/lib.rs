//! marklite: lenient restricted-Markdown to sanitized HTML converter
//!
//! Converts a small Markdown dialect (headings, paragraphs, blockquotes,
//! marker-delimited lists, fenced code, images, inline emphasis and links)
//! into an HTML string served in two forms: an escaped "source" view safe
//! to display literally, and a preview obtained by decoding that view back
//! to real markup.
//!
//! # Design Principles
//! - One pass: line-oriented block engine over a complete input buffer
//! - Total: no error path, malformed input degrades to literal or dropped
//!   text instead of failing
//! - Call-local state only: conversion is pure and reentrant
//!
//! # Example
//! ```
//! let out = marklite::convert("# Hello");
//! assert_eq!(out.source_view, "&lt;h1&gt;Hello&lt;/h1&gt;<br />");
//! assert_eq!(out.preview_html, "<h1>Hello</h1><br />");
//! ```

pub mod block;
pub mod escape;
pub mod inline;
pub mod links;
pub mod render;

// Re-export primary types
pub use block::BlockEngine;
pub use inline::SpanKind;
pub use render::HtmlWriter;

/// Both views produced by one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The escaped form of the generated HTML (HTML-as-text, safe to
    /// display literally).
    pub source_view: String,
    /// `source_view` decoded back to real markup, for a host that renders
    /// HTML.
    pub preview_html: String,
}

/// Convert a document into its source and preview views.
///
/// This is the primary API. The preview is the source view run back
/// through entity decoding — the round trip is intentional, letting one
/// generated string serve both the "view the markup" and "render the
/// markup" needs.
///
/// # Example
/// ```
/// let out = marklite::convert("say **hi** there");
/// assert_eq!(
///     out.source_view,
///     "&lt;p&gt;say &lt;strong&gt;hi&lt;/strong&gt; there&lt;p&gt;<br />"
/// );
/// assert_eq!(out.preview_html, "<p>say <strong>hi</strong> there<p><br />");
/// ```
pub fn convert(input: &str) -> Rendered {
    let source_view = to_html(input);
    let preview_html = escape::unescape(&source_view).into_owned();
    Rendered {
        source_view,
        preview_html,
    }
}

/// Convert a document to the escaped HTML string (the source view).
///
/// Block elements are escaped as whole units and separated by `<br />`
/// markers.
pub fn to_html(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    block::render_document(input, &mut writer);
    writer.into_string()
}

/// Convert a document to escaped HTML, writing into a provided buffer.
///
/// This avoids allocation if the buffer has sufficient capacity.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::with_capacity(0);
    // Use the provided buffer directly
    std::mem::swap(writer.buffer_mut(), out);
    block::render_document(input, &mut writer);
    std::mem::swap(writer.buffer_mut(), out);
}
