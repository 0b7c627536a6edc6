//! Cursor helpers for the HTML tokenizer.
//!
//! All scanning is done on bytes. Every delimiter the tokenizer looks for is
//! ASCII, and an ASCII byte never occurs inside a multi-byte UTF-8 sequence,
//! so stopping on one always leaves the cursor on a char boundary.

use super::core::HTMLTokenizer;

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLTokenizer {
    /// The byte under the cursor, or `None` at end of input.
    pub(super) fn current_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.current_pos).copied()
    }

    /// The byte `offset` positions past the cursor, without consuming it.
    pub(super) fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.current_pos + offset).copied()
    }

    /// "If the next few characters are..."
    ///
    /// Check if the input at the cursor starts with `target`, exactly.
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input.as_bytes()[self.current_pos..].starts_with(target.as_bytes())
    }

    /// Consume the given string from the input.
    /// Caller must have already verified the characters are present.
    pub(super) const fn consume_string(&mut self, target: &str) {
        self.current_pos += target.len();
    }

    /// Consume one whole character, however many bytes it takes.
    pub(super) fn skip_char(&mut self) {
        if let Some(c) = self.input[self.current_pos..].chars().next() {
            self.current_pos += c.len_utf8();
        }
    }

    /// Advance past any run of whitespace.
    pub(super) fn skip_whitespace(&mut self) {
        while self.current_byte().is_some_and(Self::is_whitespace_byte) {
            self.current_pos += 1;
        }
    }

    /// Read a run of identifier characters. May be empty.
    pub(super) fn read_identifier(&mut self) -> &str {
        let start = self.current_pos;
        while self.current_byte().is_some_and(Self::is_identifier_byte) {
            self.current_pos += 1;
        }
        &self.input[start..self.current_pos]
    }

    /// Read everything up to, not including, the next `delimiter` byte or the
    /// end of input. The delimiter itself is left under the cursor.
    pub(super) fn read_until_byte(&mut self, delimiter: u8) -> &str {
        let start = self.current_pos;
        let rest = &self.input.as_bytes()[start..];
        self.current_pos = rest
            .iter()
            .position(|&b| b == delimiter)
            .map_or(self.input.len(), |offset| start + offset);
        &self.input[start..self.current_pos]
    }

    /// Tag and attribute names: ASCII letters, digits, `-` and `_`.
    ///
    /// There is no name-start rule, so `123invalid` is a valid tag name.
    pub(super) const fn is_identifier_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_')
    }

    /// Space, tab, carriage return and line feed.
    pub(super) const fn is_whitespace_byte(b: u8) -> bool {
        matches!(b, b' ' | b'\t' | b'\r' | b'\n')
    }

    /// Trim the whitespace recognised by [`is_whitespace_byte`](Self::is_whitespace_byte)
    /// from both ends.
    pub(super) fn trim_whitespace(s: &str) -> &str {
        s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n'))
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HTMLTokenizer {
    /// Malformed markup is never fatal: the tokenizer recovers and continues.
    /// The anomaly is reported once per input, tagged with the byte offset
    /// where the construct started.
    pub(super) fn log_parse_error(&mut self, message: &str, position: usize) {
        let _ = self.warnings.warn_once("HTML Tokenizer", message, position);
    }
}
