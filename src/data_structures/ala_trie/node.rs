// Copyright (c) 2025 Mauka Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Ala route trie.
//!
//! Nodes live in a single arena owned by the trie and refer to each other by
//! [`NodeId`]. A parent owns its children through the arena; the `parent`
//! index is a plain back-reference used for upward walks.

use std::cmp::Ordering;
use std::fmt;

use fnv::FnvHashMap;
use serde_json::Value;

use super::payload::Payload;
use super::segment::{Segment, PATH_SEPARATOR};

/// Orders the keys returned by [`NodeRef::keys`].
pub type KeysSorter = fn(&str, &str) -> Ordering;

/// Shallowest routes first, ties broken alphabetically.
pub fn by_segment_count(a: &str, b: &str) -> Ordering {
    let depth = |key: &str| key.split(PATH_SEPARATOR).count();
    depth(a).cmp(&depth(b)).then_with(|| a.cmp(b))
}

/// The sorter used when callers ask for the default ordering.
pub const DEFAULT_KEYS_SORTER: KeysSorter = by_segment_count;

/// Index of a node inside its trie's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A vertex of the route trie.
#[derive(Debug)]
pub(crate) struct AlaNode<H> {
    /// Back-reference to the owning node; `None` only for the root
    pub(crate) parent: Option<NodeId>,

    /// Literal children keyed by segment text, allocated on first use
    pub(crate) children: Option<FnvHashMap<String, NodeId>>,

    /// Single-segment parameter slot
    pub(crate) named_child: Option<NodeId>,

    /// Multi-segment wildcard slot
    pub(crate) wildcard_child: Option<NodeId>,

    /// Whether a registered pattern ends here
    pub(crate) end: bool,

    /// The registered pattern, meaningful only when `end` is set
    pub(crate) key: String,

    /// Length of the literal prefix of `key` before its first parameter
    pub(crate) static_key_len: usize,

    /// Parameter names declared along the pattern, in order
    pub(crate) param_keys: Vec<String>,

    /// Handler, tag and data attached at registration
    pub(crate) payload: Payload<H>,
}

impl<H> AlaNode<H> {
    pub(crate) fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            children: None,
            named_child: None,
            wildcard_child: None,
            end: false,
            key: String::new(),
            static_key_len: 0,
            param_keys: Vec::new(),
            payload: Payload::new(),
        }
    }

    /// Literal child registered under `segment`.
    pub(crate) fn literal_child(&self, segment: &str) -> Option<NodeId> {
        self.children.as_ref()?.get(segment).copied()
    }

    /// The child an edge of kind `segment` leads to, if present.
    pub(crate) fn child_for(&self, segment: Segment<'_>) -> Option<NodeId> {
        match segment {
            Segment::Static(literal) => self.literal_child(literal),
            Segment::Named(_) => self.named_child,
            Segment::Wildcard(_) => self.wildcard_child,
        }
    }

    /// Registers `child` under `segment` unless that edge is already taken,
    /// in which case the existing child is kept.
    pub(crate) fn add_child(&mut self, segment: Segment<'_>, child: NodeId) -> NodeId {
        match segment {
            Segment::Static(literal) => *self
                .children
                .get_or_insert_with(FnvHashMap::default)
                .entry(literal.to_owned())
                .or_insert(child),
            Segment::Named(_) => *self.named_child.get_or_insert(child),
            Segment::Wildcard(_) => *self.wildcard_child.get_or_insert(child),
        }
    }

    /// Ids of every child, literal ones first.
    pub(crate) fn child_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children
            .iter()
            .flat_map(|children| children.values().copied())
            .chain(self.named_child)
            .chain(self.wildcard_child)
    }
}

/// A borrowed view of one node, tied to the trie it came from.
///
/// Handles are cheap to copy and only read the tree.
pub struct NodeRef<'t, H> {
    nodes: &'t [AlaNode<H>],
    id: NodeId,
}

impl<'t, H> Clone for NodeRef<'t, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, H> Copy for NodeRef<'t, H> {}

impl<'t, H> NodeRef<'t, H> {
    pub(crate) fn new(nodes: &'t [AlaNode<H>], id: NodeId) -> Self {
        Self { nodes, id }
    }

    fn node(&self) -> &'t AlaNode<H> {
        &self.nodes[self.id.index()]
    }

    fn at(&self, id: NodeId) -> Self {
        Self::new(self.nodes, id)
    }

    /// Arena id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The registered pattern; empty unless [`is_end`](Self::is_end).
    pub fn key(&self) -> &'t str {
        &self.node().key
    }

    /// Whether a registered pattern ends at this node.
    pub fn is_end(&self) -> bool {
        self.node().end
    }

    /// Literal prefix of the pattern before its first parameter.
    pub fn static_key(&self) -> &'t str {
        let node = self.node();
        &node.key[..node.static_key_len]
    }

    /// Parameter names declared along the pattern, in declaration order.
    pub fn param_keys(&self) -> &'t [String] {
        &self.node().param_keys
    }

    /// Everything attached to this route.
    pub fn payload(&self) -> &'t Payload<H> {
        &self.node().payload
    }

    /// Attached handler, if any.
    pub fn handler(&self) -> Option<&'t H> {
        self.payload().handler()
    }

    /// Attached tag, if any.
    pub fn tag(&self) -> Option<&'t str> {
        self.payload().tag()
    }

    /// Attached data, if any.
    pub fn data(&self) -> Option<&'t Value> {
        self.payload().data()
    }

    /// The parent node; `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|id| self.at(id))
    }

    /// Literal child registered under `segment`.
    pub fn child(&self, segment: &str) -> Option<Self> {
        self.node().literal_child(segment).map(|id| self.at(id))
    }

    /// Child in the named parameter slot.
    pub fn named_child(&self) -> Option<Self> {
        self.node().named_child.map(|id| self.at(id))
    }

    /// Child in the wildcard slot.
    pub fn wildcard_child(&self) -> Option<Self> {
        self.node().wildcard_child.map(|id| self.at(id))
    }

    /// Whether either dynamic slot is occupied.
    pub fn has_dynamic_child(&self) -> bool {
        let node = self.node();
        node.named_child.is_some() || node.wildcard_child.is_some()
    }

    /// Walks up from the parent and returns the wildcard child of the first
    /// ancestor that has one.
    pub fn find_closest_parent_wildcard(&self) -> Option<Self> {
        self.ancestors().find_map(|ancestor| ancestor.wildcard_child())
    }

    /// Strict ancestors of this node, nearest first, ending at the root.
    pub fn ancestors(&self) -> Ancestors<'t, H> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Registered patterns that enclose this node, nearest first.
    pub fn enclosing_keys(&self) -> Vec<&'t str> {
        self.ancestors()
            .filter(|ancestor| ancestor.is_end())
            .map(|ancestor| ancestor.key())
            .collect()
    }

    /// Every registered pattern in this subtree, this node included.
    ///
    /// Without a sorter the order is unspecified.
    pub fn keys(&self, sorter: Option<KeysSorter>) -> Vec<&'t str> {
        let mut list = Vec::new();
        let mut stack = vec![self.id];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.index()];
            if node.end {
                list.push(node.key.as_str());
            }
            stack.extend(node.child_ids());
        }

        if let Some(sorter) = sorter {
            list.sort_by(|a, b| sorter(a, b));
        }
        list
    }
}

impl<H> fmt::Display for NodeRef<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl<H> fmt::Debug for NodeRef<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", &self.key())
            .field("end", &self.is_end())
            .field("param_keys", &self.param_keys())
            .finish()
    }
}

/// Iterator over a node's ancestors. See [`NodeRef::ancestors`].
pub struct Ancestors<'t, H> {
    next: Option<NodeRef<'t, H>>,
}

impl<'t, H> Iterator for Ancestors<'t, H> {
    type Item = NodeRef<'t, H>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_first_writer_wins() {
        let mut node: AlaNode<()> = AlaNode::new(None);

        assert_eq!(node.add_child(Segment::Static("a"), NodeId::new(1)), NodeId::new(1));
        assert_eq!(node.add_child(Segment::Static("a"), NodeId::new(2)), NodeId::new(1));

        assert_eq!(node.add_child(Segment::Named("x"), NodeId::new(3)), NodeId::new(3));
        assert_eq!(node.add_child(Segment::Named("y"), NodeId::new(4)), NodeId::new(3));

        assert_eq!(node.add_child(Segment::Wildcard("w"), NodeId::new(5)), NodeId::new(5));
        assert_eq!(node.child_for(Segment::Wildcard("other")), Some(NodeId::new(5)));
        assert_eq!(node.child_ids().count(), 3);
    }

    #[test]
    fn test_literal_child_without_children() {
        let node: AlaNode<()> = AlaNode::new(None);
        assert_eq!(node.literal_child("anything"), None);
        assert_eq!(node.child_ids().count(), 0);
    }

    #[test]
    fn test_by_segment_count() {
        let mut keys = vec!["/a/b/c", "/b", "/a/b", "/a"];
        keys.sort_by(|a, b| by_segment_count(a, b));
        assert_eq!(keys, vec!["/a", "/b", "/a/b", "/a/b/c"]);
    }
}
