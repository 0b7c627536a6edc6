use core::fmt;

use strum_macros::Display;

/// An attribute on a start or self-closing tag token.
///
/// Values are raw: character references are decoded later, by the tree
/// builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, as written.
    pub name: String,
    /// Raw attribute value. Empty for a boolean attribute.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// The kind of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenKind {
    /// `<name ...>`
    StartTag,
    /// `</name>`
    EndTag,
    /// `<name ... />`
    SelfClosingTag,
    /// A run of character data.
    Text,
    /// `<!-- ... -->` or any other `<!`, `<!DOCTYPE ...>` included.
    Comment,
    /// Produced once the input is exhausted, and on every call after that.
    EndOfInput,
}

/// A lexical unit produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A start tag. Tag and attribute names keep the case they were written in.
    /// A `<` with no name after it (`a < b`) gives an empty name.
    StartTag {
        /// The tag name.
        name: String,
        /// Attributes in source order. Repeated names keep their first occurrence.
        attributes: Vec<Attribute>,
    },

    /// A start tag closed with `/>`.
    SelfClosingTag {
        /// The tag name.
        name: String,
        /// Attributes in source order. Repeated names keep their first occurrence.
        attributes: Vec<Attribute>,
    },

    /// An end tag. Anything between the name and `>` is discarded.
    EndTag {
        /// The tag name.
        name: String,
    },

    /// Raw, undecoded character data up to the next `<`.
    Text {
        /// The raw text.
        data: String,
    },

    /// Comment body with surrounding whitespace trimmed. Doctype declarations
    /// are reported as comments too (`<!DOCTYPE html>` has data `DOCTYPE html`).
    Comment {
        /// The trimmed body.
        data: String,
    },

    /// End of input.
    EndOfInput,
}

impl Token {
    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::StartTag { .. } => TokenKind::StartTag,
            Self::SelfClosingTag { .. } => TokenKind::SelfClosingTag,
            Self::EndTag { .. } => TokenKind::EndTag,
            Self::Text { .. } => TokenKind::Text,
            Self::Comment { .. } => TokenKind::Comment,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// The token's value: the tag name for tag tokens, the data for text and
    /// comments, and the empty string for end of input.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::StartTag { name, .. } | Self::SelfClosingTag { name, .. } | Self::EndTag { name } => {
                name
            }
            Self::Text { data } | Self::Comment { data } => data,
            Self::EndOfInput => "",
        }
    }

    /// Attributes of a start or self-closing tag; empty for every other token.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Self::StartTag { attributes, .. } | Self::SelfClosingTag { attributes, .. } => {
                attributes
            }
            _ => &[],
        }
    }

    /// Value of the named attribute, if this tag carries it.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag { name, attributes } | Self::SelfClosingTag { name, attributes } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    if attr.value.is_empty() {
                        write!(f, " {}", attr.name)?;
                    } else {
                        write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                    }
                }
                if matches!(self, Self::SelfClosingTag { .. }) {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Text { data } => write!(f, "Text({data:?})"),
            Self::Comment { data } => write!(f, "<!-- {data} -->"),
            Self::EndOfInput => write!(f, "EOF"),
        }
    }
}
