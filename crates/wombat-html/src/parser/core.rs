use strum_macros::Display;
use tracing::{debug, trace};

use wombat_common::WarningLog;
use wombat_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use super::rules::{is_implicitly_closed_by, is_void_element};
use crate::entities::{decode_attribute_value, decode_entities};
use crate::tokenizer::{Attribute, HTMLTokenizer, Token};

/// What kind of recovery the builder had to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ParseIssueKind {
    /// An end tag matched no open element and was ignored.
    UnmatchedEndTag,
    /// An end tag closed open elements above its match that had no end tag
    /// of their own.
    ImplicitlyClosed,
    /// Elements were still open when the input ended.
    UnclosedAtEndOfInput,
}

/// A recoverable anomaly noticed while building the tree.
///
/// Issues are diagnostics only. Every input still produces a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human-readable description.
    pub message: String,
    /// Index of the token being processed when the issue was found.
    pub token_index: usize,
    /// The recovery that was applied.
    pub kind: ParseIssueKind,
}

/// Single-pass, stack-based tree builder.
///
/// Pulls tokens one at a time from an [`HTMLTokenizer`] and maintains a stack
/// of open elements. The synthetic root sits at the bottom of the stack and is
/// never popped, so there is always a current node to insert into.
pub struct TreeBuilder {
    tokenizer: HTMLTokenizer,

    /// Open elements, innermost last. Index 0 is always `NodeId::ROOT`.
    stack_of_open_elements: Vec<NodeId>,

    /// The tree under construction. `NodeId::ROOT` is the synthetic root.
    tree: DomTree,

    /// Number of tokens processed so far.
    token_index: usize,

    /// Recoveries made so far.
    issues: Vec<ParseIssue>,

    /// Warnings already logged for this document.
    warnings: WarningLog,
}

impl TreeBuilder {
    /// Create a builder over `input`.
    #[must_use]
    pub fn new(input: String) -> Self {
        Self::from_tokenizer(HTMLTokenizer::new(input))
    }

    /// Create a builder that pulls tokens from an existing tokenizer.
    #[must_use]
    pub fn from_tokenizer(tokenizer: HTMLTokenizer) -> Self {
        Self {
            tokenizer,
            stack_of_open_elements: vec![NodeId::ROOT],
            tree: DomTree::new(),
            token_index: 0,
            issues: Vec::new(),
            warnings: WarningLog::new(),
        }
    }

    /// Consume every token and return the finished tree.
    ///
    /// The document's top-level nodes are children of `NodeId::ROOT`.
    #[must_use]
    pub fn parse(self) -> DomTree {
        self.parse_with_issues().0
    }

    /// Consume every token and return the finished tree together with the
    /// recoveries that were needed to build it.
    #[must_use]
    pub fn parse_with_issues(mut self) -> (DomTree, Vec<ParseIssue>) {
        loop {
            let token = self.tokenizer.next_token();
            trace!(index = self.token_index, kind = %token.kind(), "processing token");
            if token.is_end_of_input() {
                self.close_remaining_elements();
                break;
            }
            self.process_token(token);
            self.token_index += 1;
        }

        debug!(
            nodes = self.tree.len(),
            issues = self.issues.len(),
            warnings = self.warnings.len() + self.tokenizer.warnings().len(),
            "tree construction complete"
        );
        (self.tree, self.issues)
    }

    fn process_token(&mut self, token: Token) {
        match token {
            Token::StartTag { name, attributes } => self.handle_start_tag(name, &attributes),
            Token::SelfClosingTag { name, attributes } => {
                // Appended, never pushed: even a non-void tag written as
                // `<div/>` stays empty.
                let element_id = self.create_element(name, &attributes);
                let parent = self.current_node();
                self.tree.append_child(parent, element_id);
            }
            Token::EndTag { name } => self.handle_end_tag(&name),
            Token::Text { data } => self.insert_text(&data),
            Token::Comment { data } => self.insert_comment(data),
            Token::EndOfInput => {}
        }
    }

    /// Innermost open element. Falls back to the root, which is never popped.
    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    fn get_tag_name(&self, id: NodeId) -> Option<&str> {
        self.tree.as_element(id).map(|data| data.tag_name.as_str())
    }

    /// Create an element node for a tag token, decoding attribute values.
    /// The node is not yet attached.
    fn create_element(&mut self, name: String, attributes: &[Attribute]) -> NodeId {
        let mut attrs = AttributesMap::with_capacity(attributes.len());
        for attr in attributes {
            let _ = attrs
                .entry(attr.name.clone())
                .or_insert_with(|| decode_attribute_value(&attr.value));
        }
        self.tree
            .alloc(NodeType::Element(ElementData::new(name, attrs)))
    }

    fn handle_start_tag(&mut self, name: String, attributes: &[Attribute]) {
        // Close elements the new tag cannot nest inside, never the root.
        while self.stack_of_open_elements.len() > 1
            && self
                .get_tag_name(self.current_node())
                .is_some_and(|current| is_implicitly_closed_by(current, &name))
        {
            let _ = self.stack_of_open_elements.pop();
        }

        let is_void = is_void_element(&name);
        let element_id = self.create_element(name, attributes);
        let parent = self.current_node();
        self.tree.append_child(parent, element_id);

        if !is_void {
            self.stack_of_open_elements.push(element_id);
        }
    }

    /// Pop up to and including the innermost open element named `name`.
    /// If nothing above the root matches, the tag is ignored.
    fn handle_end_tag(&mut self, name: &str) {
        let matched = self.stack_of_open_elements[1..].iter().rposition(|&id| {
            self.tree
                .as_element(id)
                .is_some_and(|data| data.is(name))
        });

        let Some(offset) = matched else {
            let message = format!("unmatched end tag </{name}> ignored");
            let _ = self
                .warnings
                .warn_once("HTML Parser", &message, self.token_index);
            self.record_issue(ParseIssueKind::UnmatchedEndTag, message);
            return;
        };

        let match_position = offset + 1;
        if match_position + 1 < self.stack_of_open_elements.len() {
            let closed = self.open_tag_names(match_position + 1);
            self.record_issue(
                ParseIssueKind::ImplicitlyClosed,
                format!("</{name}> implicitly closed {closed}"),
            );
        }
        self.stack_of_open_elements.truncate(match_position);
    }

    fn insert_text(&mut self, raw: &str) {
        let content = decode_entities(raw);
        if content.is_empty() {
            return;
        }
        let text_id = self.tree.alloc(NodeType::Text(content));
        let parent = self.current_node();
        self.tree.append_child(parent, text_id);
    }

    /// Comment data is stored raw; entities are not decoded.
    fn insert_comment(&mut self, data: String) {
        let comment_id = self.tree.alloc(NodeType::Comment(data));
        let parent = self.current_node();
        self.tree.append_child(parent, comment_id);
    }

    /// End of input closes whatever is still open.
    fn close_remaining_elements(&mut self) {
        if self.stack_of_open_elements.len() > 1 {
            let unclosed = self.open_tag_names(1);
            self.record_issue(
                ParseIssueKind::UnclosedAtEndOfInput,
                format!("end of input with open elements {unclosed}"),
            );
            self.stack_of_open_elements.truncate(1);
        }
    }

    /// Tag names of the open elements from `from` to the top of the stack,
    /// formatted as `<a>, <b>`.
    fn open_tag_names(&self, from: usize) -> String {
        self.stack_of_open_elements[from..]
            .iter()
            .filter_map(|&id| self.get_tag_name(id))
            .map(|tag| format!("<{tag}>"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn record_issue(&mut self, kind: ParseIssueKind, message: String) {
        trace!(%kind, %message, "parse issue");
        self.issues.push(ParseIssue {
            message,
            token_index: self.token_index,
            kind,
        });
    }
}

/// Parse `input` into a tree.
///
/// ```
/// use wombat_dom::NodeId;
/// use wombat_html::parse_document;
///
/// let tree = parse_document("<ul><li>one<li>two</ul>");
/// let ul = tree.first_child(NodeId::ROOT).unwrap();
/// assert_eq!(tree.children(ul).len(), 2);
/// ```
#[must_use]
pub fn parse_document(input: &str) -> DomTree {
    TreeBuilder::new(input.to_string()).parse()
}
