//! Side-effect-free, indented dump of a tree.

use core::fmt;

use wombat_dom::{DomTree, NodeId, NodeType};

/// Displays the subtree rooted at a node, one node per line, indented by two
/// spaces per level.
///
/// - elements print as `<tag a="1" b>`, attributes sorted by name, with
///   empty values shown as a bare name
/// - text prints quoted, with control characters escaped
/// - comments print as `<!-- data -->`
pub struct TreeDump<'a> {
    tree: &'a DomTree,
    node: NodeId,
}

impl<'a> TreeDump<'a> {
    /// Dump the subtree rooted at `node`, `node` included.
    #[must_use]
    pub const fn new(tree: &'a DomTree, node: NodeId) -> Self {
        Self { tree, node }
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Explicit stack so deep documents cannot overflow the call stack.
        let mut stack = vec![(self.node, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            write!(f, "{}", "  ".repeat(depth))?;
            match &node.node_type {
                NodeType::Element(data) => {
                    write!(f, "<{}", data.tag_name)?;
                    let mut attrs: Vec<_> = data.attrs.iter().collect();
                    attrs.sort_unstable();
                    for (name, value) in attrs {
                        if value.is_empty() {
                            write!(f, " {name}")?;
                        } else {
                            write!(f, " {name}=\"{value}\"")?;
                        }
                    }
                    writeln!(f, ">")?;
                }
                NodeType::Text(data) => writeln!(f, "{data:?}")?,
                NodeType::Comment(data) => writeln!(f, "<!-- {data} -->")?,
            }
            stack.extend(
                self.tree
                    .children(id)
                    .iter()
                    .rev()
                    .map(|&child| (child, depth + 1)),
            );
        }
        Ok(())
    }
}

/// Format the subtree rooted at `node` as a string. See [`TreeDump`].
///
/// ```
/// use wombat_dom::NodeId;
/// use wombat_html::{format_tree, parse_document};
///
/// let tree = parse_document("<p class=\"x\">Hi</p>");
/// assert_eq!(format_tree(&tree, NodeId::ROOT), "<root>\n  <p class=\"x\">\n    \"Hi\"\n");
/// ```
#[must_use]
pub fn format_tree(tree: &DomTree, node: NodeId) -> String {
    TreeDump::new(tree, node).to_string()
}
