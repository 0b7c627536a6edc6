//! Read-only lookups over a finished tree.
//!
//! All queries walk the descendants of a starting node in document order and
//! never match the starting node itself, so searching from
//! [`NodeId::ROOT`] can not return the synthetic root.

use crate::{DomTree, ElementData, NodeId};

impl DomTree {
    fn matching_elements<'a, F>(&'a self, from: NodeId, predicate: F) -> impl Iterator<Item = NodeId> + 'a
    where
        F: Fn(&ElementData) -> bool + 'a,
    {
        self.descendants(from)
            .filter(move |&id| self.as_element(id).is_some_and(&predicate))
    }

    /// All descendant elements of `from` whose tag name is `tag`, compared
    /// ignoring ASCII case.
    #[must_use]
    pub fn find_by_tag(&self, from: NodeId, tag: &str) -> Vec<NodeId> {
        self.matching_elements(from, |element| element.is(tag))
            .collect()
    }

    /// The first descendant element of `from` whose `id` attribute is
    /// exactly `id`.
    #[must_use]
    pub fn find_by_id(&self, from: NodeId, id: &str) -> Option<NodeId> {
        self.matching_elements(from, |element| element.id() == Some(id))
            .next()
    }

    /// All descendant elements of `from` whose `class` attribute contains
    /// `class` as one of its whitespace-separated words.
    #[must_use]
    pub fn find_by_class(&self, from: NodeId, class: &str) -> Vec<NodeId> {
        self.matching_elements(from, |element| element.has_class(class))
            .collect()
    }
}
