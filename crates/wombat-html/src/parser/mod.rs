//! Tree construction from the token stream.

/// Tree builder and parse diagnostics.
mod core;
/// Void elements and the implicit-closing table.
mod rules;
/// Indented tree dump.
mod tree_format;

pub use self::core::{ParseIssue, ParseIssueKind, TreeBuilder, parse_document};
pub use self::rules::{VOID_ELEMENTS, is_implicitly_closed_by, is_void_element};
pub use self::tree_format::{TreeDump, format_tree};
