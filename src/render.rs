//! HTML output writer with reusable buffer management.

use crate::escape;

/// Output buffer for the generated (escaped) HTML string.
///
/// Blocks are appended one at a time and never mutated afterwards.
///
/// # Example
/// ```
/// use marklite::render::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.write_escaped_block("<p>Hello <World></p>");
/// assert_eq!(writer.as_str(), "&lt;p&gt;Hello &lt;World&gt;&lt;/p&gt;<br />");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Escaped HTML typically runs a bit larger than its input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 4),
        }
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    /// Write a static string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write text with the five-character HTML escape applied.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &[u8]) {
        escape::escape_into(&mut self.out, text);
    }

    /// Write one finished block: escaped as a whole unit, followed by the
    /// line-break marker separating blocks in the output stream.
    #[inline]
    pub fn write_escaped_block(&mut self, block: &str) {
        self.write_escaped_text(block.as_bytes());
        self.line_break();
    }

    /// Write the block separator: `<br />`.
    #[inline]
    pub fn line_break(&mut self) {
        self.out.extend_from_slice(b"<br />");
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: We only write valid UTF-8 (ASCII markers + escaped content)
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: We only write valid UTF-8
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    /// Get mutable reference to the internal buffer.
    ///
    /// Use with caution - allows bypassing escaping.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut Vec<u8> {
        &mut self.out
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_block_gets_separator() {
        let mut writer = HtmlWriter::new();
        writer.write_escaped_block("<h1>T</h1>");
        writer.write_escaped_block("<p>x<p>");
        assert_eq!(
            writer.as_str(),
            "&lt;h1&gt;T&lt;/h1&gt;<br />&lt;p&gt;x&lt;p&gt;<br />"
        );
    }

    #[test]
    fn with_capacity_zero_allocates_nothing() {
        let writer = HtmlWriter::with_capacity(0);
        assert_eq!(writer.len(), 0);
        assert!(writer.is_empty());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut writer = HtmlWriter::with_capacity_for(100);
        writer.write_str("abc");
        assert_eq!(writer.len(), 3);
        writer.clear();
        assert!(writer.is_empty());
    }
}
