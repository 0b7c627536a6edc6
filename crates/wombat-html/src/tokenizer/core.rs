use wombat_common::WarningLog;

use super::token::{Attribute, Token};

/// Single-pass, forward-only HTML tokenizer.
///
/// Each call to [`next_token`](Self::next_token) looks at the character under
/// the cursor and scans exactly one token:
///
/// - `</` starts an end tag
/// - `<!DOCTYPE` starts a doctype, reported as a comment
/// - any other `<!` starts a comment
/// - any other `<` starts a start or self-closing tag, even when no name
///   follows
/// - end of input yields [`Token::EndOfInput`], forever after
/// - anything else starts a text run that ends at the next `<`
///
/// Malformed markup never produces an error. The cursor only moves forward
/// and is bounded by the input length, so scanning always terminates.
#[derive(Debug)]
pub struct HTMLTokenizer {
    pub(super) input: String,
    /// Byte offset of the next unread character. Always on a char boundary
    /// between tokens.
    pub(super) current_pos: usize,
    /// Set once `EndOfInput` has been produced.
    pub(super) at_eof: bool,
    /// Anomalies already reported for this input.
    pub(super) warnings: WarningLog,
}

impl HTMLTokenizer {
    /// Create a new tokenizer over `input`, with the cursor at the start.
    #[must_use]
    pub fn new(input: String) -> Self {
        Self {
            input,
            current_pos: 0,
            at_eof: false,
            warnings: WarningLog::new(),
        }
    }

    /// The input being tokenized.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current_pos
    }

    /// Warnings reported while scanning this input.
    #[must_use]
    pub const fn warnings(&self) -> &WarningLog {
        &self.warnings
    }

    /// Scan and return the next token.
    ///
    /// ASCII whitespace before the token is skipped, so whitespace-only runs
    /// between tags never become text. Once the input is exhausted this keeps
    /// returning [`Token::EndOfInput`].
    pub fn next_token(&mut self) -> Token {
        if self.at_eof {
            return Token::EndOfInput;
        }

        self.skip_whitespace();

        match (self.current_byte(), self.peek_byte(1)) {
            (None, _) => {
                self.at_eof = true;
                Token::EndOfInput
            }
            (Some(b'<'), Some(b'/')) => self.read_end_tag(),
            (Some(b'<'), Some(b'!')) if self.next_few_characters_are("<!DOCTYPE") => {
                self.read_doctype()
            }
            (Some(b'<'), Some(b'!')) => self.read_comment(),
            (Some(b'<'), _) => self.read_start_tag(),
            _ => self.read_text(),
        }
    }

    /// Consume the tokenizer and return every remaining token, ending with
    /// exactly one `EndOfInput`.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.collect()
    }

    /// `<name attr=value ...>` or `<name ... />`
    fn read_start_tag(&mut self) -> Token {
        let tag_start = self.current_pos;
        // Consume '<'
        self.current_pos += 1;
        let name = self.read_identifier().to_string();
        let mut attributes: Vec<Attribute> = Vec::new();

        loop {
            self.skip_whitespace();
            match self.current_byte() {
                None => {
                    self.log_parse_error(&format!("unterminated <{name}> tag"), tag_start);
                    return Token::StartTag { name, attributes };
                }
                Some(b'/') if self.peek_byte(1) == Some(b'>') => {
                    self.current_pos += 2;
                    return Token::SelfClosingTag { name, attributes };
                }
                Some(b'>') => {
                    self.current_pos += 1;
                    return Token::StartTag { name, attributes };
                }
                Some(b) if Self::is_identifier_byte(b) => {
                    let attribute = self.read_attribute();
                    // A repeated attribute name keeps its first value.
                    if !attributes.iter().any(|a| a.name == attribute.name) {
                        attributes.push(attribute);
                    }
                }
                // Stray '/', quotes, '=' or anything else that cannot start a
                // name: drop it so the cursor keeps moving.
                Some(_) => self.skip_char(),
            }
        }
    }

    /// `name`, `name=value`, `name="value"` or `name='value'`.
    fn read_attribute(&mut self) -> Attribute {
        let name = self.read_identifier().to_string();

        let after_name = self.current_pos;
        self.skip_whitespace();
        if self.current_byte() != Some(b'=') {
            // Boolean attribute. Leave the whitespace for the tag loop.
            self.current_pos = after_name;
            return Attribute::new(name, String::new());
        }
        // Consume '='
        self.current_pos += 1;
        self.skip_whitespace();

        let value = match self.current_byte() {
            Some(quote @ (b'"' | b'\'')) => {
                let open = self.current_pos;
                self.current_pos += 1;
                let value = self.read_until_byte(quote).to_string();
                if self.current_byte() == Some(quote) {
                    self.current_pos += 1;
                } else {
                    self.log_parse_error("unterminated attribute value", open);
                }
                value
            }
            _ => self.read_identifier().to_string(),
        };

        Attribute::new(name, value)
    }

    /// `</name ... >`
    fn read_end_tag(&mut self) -> Token {
        let tag_start = self.current_pos;
        // Consume '<' and '/'
        self.current_pos += 2;
        let name = self.read_identifier().to_string();

        // Skip to and past the closing '>', tolerating junk before it.
        let _ = self.read_until_byte(b'>');
        if self.current_byte() == Some(b'>') {
            self.current_pos += 1;
        } else {
            self.log_parse_error(&format!("unterminated </{name}> tag"), tag_start);
        }

        Token::EndTag { name }
    }

    /// `<!DOCTYPE ...>`, read up to the next `>` and reported as a comment
    /// holding the trimmed text between `<!` and `>`.
    fn read_doctype(&mut self) -> Token {
        let decl_start = self.current_pos;
        // Consume '<' and '!'
        self.current_pos += 2;
        let data = Self::trim_whitespace(self.read_until_byte(b'>')).to_string();
        if self.current_byte() == Some(b'>') {
            self.current_pos += 1;
        } else {
            self.log_parse_error("unterminated doctype", decl_start);
        }

        Token::Comment { data }
    }

    /// `<!-- ... -->`, with nesting: every inner `<!--` must be balanced by a
    /// `-->` before the comment ends.
    ///
    /// Any `<!` other than a doctype lands here. The opening `--` is
    /// consumed when present, so `<!foo -->` is the comment `foo`.
    fn read_comment(&mut self) -> Token {
        let comment_start = self.current_pos;
        // Consume '<' and '!'
        self.current_pos += 2;
        if self.next_few_characters_are("--") {
            self.consume_string("--");
        }
        let body_start = self.current_pos;
        let mut depth = 1usize;

        let body_end = loop {
            if self.current_pos >= self.input.len() {
                self.log_parse_error("unterminated comment", comment_start);
                break self.input.len();
            }
            if self.next_few_characters_are("<!--") {
                depth += 1;
                self.consume_string("<!--");
            } else if self.next_few_characters_are("-->") {
                depth -= 1;
                if depth == 0 {
                    let end = self.current_pos;
                    self.consume_string("-->");
                    break end;
                }
                self.consume_string("-->");
            } else {
                self.skip_char();
            }
        };

        let data = Self::trim_whitespace(&self.input[body_start..body_end]).to_string();
        Token::Comment { data }
    }

    /// Raw text up to, not including, the next `<`.
    ///
    /// Only called when the cursor is on something other than `<`, so the
    /// run is never empty.
    fn read_text(&mut self) -> Token {
        let start = self.current_pos;
        let _ = self.read_until_byte(b'<');
        Token::Text {
            data: self.input[start..self.current_pos].to_string(),
        }
    }
}

impl Iterator for HTMLTokenizer {
    type Item = Token;

    /// Yields every token up to and including the single `EndOfInput`,
    /// then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.at_eof {
            None
        } else {
            Some(self.next_token())
        }
    }
}

/// Tokenize `input` completely.
///
/// The returned stream always ends with exactly one [`Token::EndOfInput`].
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    HTMLTokenizer::new(input.to_string()).into_tokens()
}
