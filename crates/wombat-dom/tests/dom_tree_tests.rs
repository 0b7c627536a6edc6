//! Tests for tree construction primitives and navigation.

use wombat_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeKind, NodeType, ROOT_TAG_NAME};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag, AttributesMap::new())))
}

fn alloc_text(tree: &mut DomTree, text: &str) -> NodeId {
    tree.alloc(NodeType::Text(text.to_string()))
}

#[test]
fn test_new_tree_has_synthetic_root() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root(), NodeId::ROOT);

    let root = tree.as_element(NodeId::ROOT).unwrap();
    assert_eq!(root.tag_name, ROOT_TAG_NAME);
    assert!(root.attrs.is_empty());
    assert_eq!(tree.parent(NodeId::ROOT), None);
    assert!(tree.children(NodeId::ROOT).is_empty());
}

#[test]
fn test_append_child_wires_parent_and_siblings() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "ul");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "li");
    let b = alloc_element(&mut tree, "li");
    let c = alloc_element(&mut tree, "li");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    assert_eq!(tree.children(parent), &[a, b, c]);
    assert_eq!(tree.first_child(parent), Some(a));
    assert_eq!(tree.last_child(parent), Some(c));

    for child in [a, b, c] {
        assert_eq!(tree.parent(child), Some(parent));
    }

    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(b), Some(a));
    assert_eq!(tree.next_sibling(b), Some(c));
    assert_eq!(tree.prev_sibling(c), Some(b));
    assert_eq!(tree.next_sibling(c), None);
}

#[test]
fn test_append_to_text_node_is_ignored() {
    let mut tree = DomTree::new();
    let text = alloc_text(&mut tree, "leaf");
    tree.append_child(NodeId::ROOT, text);

    let child = alloc_element(&mut tree, "b");
    tree.append_child(text, child);

    assert!(tree.children(text).is_empty());
    assert_eq!(tree.parent(child), None);
}

#[test]
fn test_ancestors_run_from_parent_to_root() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    let body = alloc_element(&mut tree, "body");
    let p = alloc_element(&mut tree, "p");
    tree.append_child(NodeId::ROOT, html);
    tree.append_child(html, body);
    tree.append_child(body, p);

    let ancestors: Vec<NodeId> = tree.ancestors(p).collect();
    assert_eq!(ancestors, vec![body, html, NodeId::ROOT]);
    assert_eq!(tree.ancestors(NodeId::ROOT).count(), 0);
}

#[test]
fn test_descendants_in_document_order() {
    // <div><p>one</p><p>two<b>three</b></p></div><span/>
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");
    let p1 = alloc_element(&mut tree, "p");
    let t1 = alloc_text(&mut tree, "one");
    let p2 = alloc_element(&mut tree, "p");
    let t2 = alloc_text(&mut tree, "two");
    let b = alloc_element(&mut tree, "b");
    let t3 = alloc_text(&mut tree, "three");
    let span = alloc_element(&mut tree, "span");

    tree.append_child(NodeId::ROOT, div);
    tree.append_child(div, p1);
    tree.append_child(p1, t1);
    tree.append_child(div, p2);
    tree.append_child(p2, t2);
    tree.append_child(p2, b);
    tree.append_child(b, t3);
    tree.append_child(NodeId::ROOT, span);

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![div, p1, t1, p2, t2, b, t3, span]);

    let under_p2: Vec<NodeId> = tree.descendants(p2).collect();
    assert_eq!(under_p2, vec![t2, b, t3]);

    assert_eq!(tree.text_content(div), "onetwothree");
    assert_eq!(tree.text_content(t3), "three");
}

#[test]
fn test_node_accessors() {
    let mut tree = DomTree::new();
    let text = alloc_text(&mut tree, "hello");
    let comment = tree.alloc(NodeType::Comment("note".to_string()));
    tree.append_child(NodeId::ROOT, text);
    tree.append_child(NodeId::ROOT, comment);

    assert_eq!(tree.as_text(text), Some("hello"));
    assert_eq!(tree.as_comment(comment), Some("note"));
    assert_eq!(tree.as_element(text), None);
    assert_eq!(tree.as_text(comment), None);

    assert_eq!(tree.get(text).unwrap().kind(), NodeKind::Text);
    assert_eq!(tree.get(comment).unwrap().kind(), NodeKind::Comment);
    assert_eq!(tree.get(NodeId::ROOT).unwrap().kind(), NodeKind::Element);
    assert_eq!(NodeKind::Comment.to_string(), "Comment");

    // Comments do not contribute to text content.
    assert_eq!(tree.text_content(NodeId::ROOT), "hello");
    assert!(tree.get(NodeId(99)).is_none());
    assert!(tree.children(NodeId(99)).is_empty());
}

#[test]
fn test_element_data_helpers() {
    let mut attrs = AttributesMap::new();
    let _ = attrs.insert("id".to_string(), "main".to_string());
    let _ = attrs.insert("class".to_string(), " card\tfeatured\nwide ".to_string());
    let element = ElementData::new("DIV", attrs);

    assert_eq!(element.id(), Some("main"));
    assert_eq!(
        element.classes().collect::<Vec<_>>(),
        vec!["card", "featured", "wide"]
    );
    assert!(element.has_class("featured"));
    assert!(!element.has_class("feat"));
    assert!(element.is("div"));
    assert!(!element.is("span"));

    let bare = ElementData::new("p", AttributesMap::new());
    assert_eq!(bare.id(), None);
    assert_eq!(bare.classes().count(), 0);
}
