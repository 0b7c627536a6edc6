//! JSON output for parsed trees.
//!
//! Nodes are streamed through a `serde_json` [`Formatter`] while walking the
//! tree with an explicit stack, so arbitrarily deep documents neither recurse
//! nor build a nested `serde_json::Value`.
//!
//! Each node is an object with `type` (`element`, `text` or `comment`),
//! then `tagName` and `attributes` for elements or `content` otherwise, and
//! a `children` array when it has any.

use std::io::{self, Write};

use serde_json::Value;
use serde_json::ser::Formatter;
use wombat_dom::{DomTree, NodeId, NodeType};

/// Pending work for the walk.
enum Step {
    /// Write a node. `in_array` is `Some(first)` when it is an array element.
    Open { id: NodeId, in_array: Option<bool> },
    /// Close a node's `children` array and then the node itself.
    Close { in_array: bool },
}

/// Write the subtree rooted at `id` as one JSON object.
pub fn write_node<W, F>(dom: &DomTree, id: NodeId, writer: &mut W, formatter: &mut F) -> io::Result<()>
where
    W: Write,
    F: Formatter,
{
    walk(dom, id, None, writer, formatter)
}

/// Write the subtrees rooted at `ids` as a JSON array of objects.
pub fn write_nodes<W, F>(dom: &DomTree, ids: &[NodeId], writer: &mut W, formatter: &mut F) -> io::Result<()>
where
    W: Write,
    F: Formatter,
{
    formatter.begin_array(writer)?;
    for (i, &id) in ids.iter().enumerate() {
        walk(dom, id, Some(i == 0), writer, formatter)?;
    }
    formatter.end_array(writer)
}

fn walk<W, F>(
    dom: &DomTree,
    id: NodeId,
    in_array: Option<bool>,
    writer: &mut W,
    formatter: &mut F,
) -> io::Result<()>
where
    W: Write,
    F: Formatter,
{
    let mut stack = vec![Step::Open { id, in_array }];

    while let Some(step) = stack.pop() {
        match step {
            Step::Open { id, in_array } => {
                if let Some(first) = in_array {
                    formatter.begin_array_value(writer, first)?;
                }
                formatter.begin_object(writer)?;
                write_fields(dom, id, writer, formatter)?;

                let children = dom.children(id);
                if children.is_empty() {
                    formatter.end_object(writer)?;
                    if in_array.is_some() {
                        formatter.end_array_value(writer)?;
                    }
                    continue;
                }

                write_key(writer, formatter, false, "children")?;
                formatter.begin_array(writer)?;
                stack.push(Step::Close {
                    in_array: in_array.is_some(),
                });
                // Reversed so the first child is written first.
                for (i, &child) in children.iter().enumerate().rev() {
                    stack.push(Step::Open {
                        id: child,
                        in_array: Some(i == 0),
                    });
                }
            }
            Step::Close { in_array } => {
                formatter.end_array(writer)?;
                formatter.end_object_value(writer)?;
                formatter.end_object(writer)?;
                if in_array {
                    formatter.end_array_value(writer)?;
                }
            }
        }
    }

    Ok(())
}

/// Every field of a node except `children`.
fn write_fields<W, F>(dom: &DomTree, id: NodeId, writer: &mut W, formatter: &mut F) -> io::Result<()>
where
    W: Write,
    F: Formatter,
{
    let Some(node) = dom.get(id) else {
        return Ok(());
    };

    match &node.node_type {
        NodeType::Element(data) => {
            write_field(writer, formatter, true, "type", "element")?;
            write_field(writer, formatter, false, "tagName", &data.tag_name)?;

            // Sorted so output is stable across runs.
            let mut attrs: Vec<(&String, &String)> = data.attrs.iter().collect();
            attrs.sort();
            write_key(writer, formatter, false, "attributes")?;
            formatter.begin_object(writer)?;
            for (i, (name, value)) in attrs.into_iter().enumerate() {
                write_field(writer, formatter, i == 0, name, value)?;
            }
            formatter.end_object(writer)?;
            formatter.end_object_value(writer)
        }
        NodeType::Text(text) => {
            write_field(writer, formatter, true, "type", "text")?;
            write_field(writer, formatter, false, "content", text)
        }
        NodeType::Comment(text) => {
            write_field(writer, formatter, true, "type", "comment")?;
            write_field(writer, formatter, false, "content", text)
        }
    }
}

/// Write `"key": ` and leave the formatter ready for the value.
fn write_key<W, F>(writer: &mut W, formatter: &mut F, first: bool, key: &str) -> io::Result<()>
where
    W: Write,
    F: Formatter,
{
    formatter.begin_object_key(writer, first)?;
    write_string(writer, key)?;
    formatter.end_object_key(writer)?;
    formatter.begin_object_value(writer)
}

fn write_field<W, F>(writer: &mut W, formatter: &mut F, first: bool, key: &str, value: &str) -> io::Result<()>
where
    W: Write,
    F: Formatter,
{
    write_key(writer, formatter, first, key)?;
    write_string(writer, value)?;
    formatter.end_object_value(writer)
}

/// A quoted, escaped JSON string.
fn write_string<W: Write>(writer: &mut W, value: &str) -> io::Result<()> {
    writer.write_all(Value::from(value).to_string().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::ser::{CompactFormatter, PrettyFormatter};
    use wombat_scraper::parse_html_string;

    fn to_value(dom: &DomTree, id: NodeId) -> Value {
        let mut out = Vec::new();
        write_node(dom, id, &mut out, &mut PrettyFormatter::new()).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_node_fields() {
        let doc = parse_html_string(r#"<p id="a" class="b">Hi<!-- c --></p><br>"#);
        let value = to_value(&doc.dom, doc.dom.root());
        assert_eq!(value["tagName"], "root");
        assert_eq!(value["attributes"], serde_json::json!({}));

        let p = &value["children"][0];
        assert_eq!(p["type"], "element");
        assert_eq!(p["attributes"]["id"], "a");
        assert_eq!(p["attributes"]["class"], "b");
        assert_eq!(p["children"][0]["type"], "text");
        assert_eq!(p["children"][0]["content"], "Hi");
        assert_eq!(p["children"][1]["type"], "comment");
        assert_eq!(p["children"][1]["content"], "c");

        let br = &value["children"][1];
        assert_eq!(br["tagName"], "br");
        assert!(br.get("children").is_none());
    }

    #[test]
    fn test_strings_are_escaped() {
        let doc = parse_html_string("<p title='say \"hi\"'>a\\b\u{1}</p>");
        let value = to_value(&doc.dom, doc.dom.root());
        let p = &value["children"][0];
        assert_eq!(p["attributes"]["title"], "say \"hi\"");
        assert_eq!(p["children"][0]["content"], "a\\b\u{1}");
    }

    #[test]
    fn test_array_of_nodes() {
        let doc = parse_html_string(r#"<a href="/1">one</a><a href="/2">two</a>"#);
        let links = doc.dom.find_by_tag(doc.dom.root(), "a");

        let mut out = Vec::new();
        write_nodes(&doc.dom, &links, &mut out, &mut CompactFormatter).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["attributes"]["href"], "/2");
        assert_eq!(value[1]["children"][0]["content"], "two");

        let mut empty = Vec::new();
        write_nodes(&doc.dom, &[], &mut empty, &mut PrettyFormatter::new()).unwrap();
        assert_eq!(empty, b"[]");
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let depth = 200_000;
        let doc = parse_html_string(&"<div>".repeat(depth));

        let mut out = Vec::new();
        write_node(&doc.dom, doc.dom.root(), &mut out, &mut CompactFormatter).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(r#"{"type":"element","tagName":"root""#));
        assert_eq!(text.matches(r#""tagName":"div""#).count(), depth);
        assert_eq!(text.matches('[').count(), depth);
        assert_eq!(text.matches(']').count(), depth);
        // The innermost div has no children array.
        assert!(text.contains(r#""tagName":"div","attributes":{}}"#));
    }
}
