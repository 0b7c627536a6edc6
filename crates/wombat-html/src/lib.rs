//! Lenient HTML tokenizer and tree builder for the wombat scraper.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer**: a single forward pass producing start, end and
//!   self-closing tags, text runs, comments (doctypes included) and a final
//!   end-of-input token. Malformed markup degrades to a best-effort token.
//! - **Entity decoding**: named and numeric character references in text
//!   and attribute values.
//! - **Tree builder**: a stack of open elements over a synthetic root, with
//!   void elements and a small table of implicitly closed elements.
//!
//! # Not Implemented
//!
//! - The WHATWG insertion modes, adoption agency and foster parenting
//! - Raw text handling for `script` and `style`
//! - Namespaces
//!
//! ```
//! use wombat_dom::NodeId;
//! use wombat_html::parse_document;
//!
//! let tree = parse_document("<div><p>One<p>Two</div>");
//! let div = tree.find_by_tag(NodeId::ROOT, "div")[0];
//! assert_eq!(tree.children(div).len(), 2);
//! assert_eq!(tree.text_content(div), "OneTwo");
//! ```

/// Character reference decoding.
pub mod entities;
/// Tree construction.
pub mod parser;
/// Tokenizer for converting input into tokens.
pub mod tokenizer;

pub use entities::{decode_attribute_value, decode_entities};
pub use parser::{
    ParseIssue, ParseIssueKind, TreeBuilder, TreeDump, format_tree, parse_document,
};
pub use tokenizer::{Attribute, HTMLTokenizer, Token, TokenKind, tokenize};
