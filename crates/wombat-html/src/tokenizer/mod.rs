//! HTML tokenizer module.
//!
//! A forgiving, single-pass scanner that turns markup into [`Token`]s.

/// The tokenizer and its dispatch loop.
pub mod core;
/// Cursor and scanning helpers.
mod helpers;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::core::{HTMLTokenizer, tokenize};
pub use self::token::{Attribute, Token, TokenKind};
