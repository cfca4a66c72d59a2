//! Hash-consing node cache.
//!
//! All node construction funnels through this cache: [leaf] and [inner] are
//! the only factories, and both return the canonical id for the requested
//! structure, inserting a new arena entry only when the structure has never
//! been seen before. Repeated spatial patterns therefore share one node, and
//! the memoized evolution results attached to that node are shared with
//! them.
//!
//! The cache grows monotonically for its lifetime; there is no eviction.
//! Nodes are destroyed only when the cache itself is dropped.
//!
//! [leaf]: NodeCache::leaf
//! [inner]: NodeCache::inner

use std::collections::HashMap;

use super::height::Height;
use super::node::{Node, NodeId, NodeKey};

const BUG: &str = "[Bug in node cache]";

/// Arena plus intern table for canonical nodes.
///
/// The arena gives every node a stable dense index ([NodeId]); the intern
/// table maps a node's structural key to that index. Every child id stored
/// inside the arena points back into the arena, so the set of reachable
/// nodes is closed.
pub struct NodeCache {
    nodes: Vec<Node>,
    interned: HashMap<NodeKey, NodeId>,
}

impl NodeCache {
    pub fn new() -> Self {
        NodeCache {
            nodes: Vec::new(),
            interned: HashMap::new(),
        }
    }

    /// Canonical leaf for the given cell state.
    pub fn leaf(&mut self, alive: bool) -> NodeId {
        let key = NodeKey::Leaf { alive };
        if let Some(&id) = self.interned.get(&key) {
            return id;
        }
        self.insert(key, Node::new_leaf(alive))
    }

    /// Canonical inner node over four existing canonical children.
    ///
    /// The derived fields are computed here: height is one above the
    /// children (which must all agree) and population is the sum of child
    /// populations. A population overflow means the tree is corrupted, which
    /// is not recoverable.
    pub fn inner(&mut self, nw: NodeId, ne: NodeId, sw: NodeId, se: NodeId) -> NodeId {
        let key = NodeKey::Inner { nw, ne, sw, se };
        if let Some(&id) = self.interned.get(&key) {
            return id;
        }

        let child_height = self.node(nw).height();
        for child in [ne, sw, se] {
            assert_eq!(
                self.node(child).height(),
                child_height,
                "{} Child heights disagree",
                BUG
            );
        }

        let population = [nw, ne, sw, se]
            .iter()
            .map(|&child| self.node(child).population())
            .try_fold(0u64, u64::checked_add)
            .unwrap_or_else(|| panic!("{} Population overflow", BUG));

        let node = Node::new_inner(nw, ne, sw, se, child_height.parent(), population);
        self.insert(key, node)
    }

    /// Canonical all-dead node at the given height, built leaf-up.
    ///
    /// Interning makes this cheap: after the first call per height every
    /// level is a table hit.
    pub fn empty_at_height(&mut self, height: Height) -> NodeId {
        if height.is_leaf() {
            return self.leaf(false);
        }
        let child = self.empty_at_height(height.child());
        self.inner(child, child, child, child)
    }

    /// The node value behind an id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of canonical nodes interned so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn memoized_next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next()
    }

    pub(crate) fn memoize_next(&mut self, id: NodeId, next: NodeId) {
        self.nodes[id.index()].set_next(next);
    }

    fn insert(&mut self, key: NodeKey, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        self.interned.insert(key, id);
        id
    }
}

impl Default for NodeCache {
    fn default() -> Self {
        Self::new()
    }
}

// -------------------------------------------------------------------------------------------------
// Unit tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_are_interned_once() {
        let mut cache = NodeCache::new();
        let alive1 = cache.leaf(true);
        let dead = cache.leaf(false);
        let alive2 = cache.leaf(true);

        assert_eq!(alive1, alive2);
        assert_ne!(alive1, dead);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn equal_structures_intern_to_the_same_id() {
        let mut cache = NodeCache::new();
        let alive = cache.leaf(true);
        let dead = cache.leaf(false);

        let first = cache.inner(alive, dead, dead, dead);
        let second = cache.inner(alive, dead, dead, dead);
        let different = cache.inner(dead, alive, dead, dead);

        assert_eq!(first, second);
        assert_ne!(first, different);
    }

    #[test]
    fn inner_derives_height_and_population() {
        let mut cache = NodeCache::new();
        let alive = cache.leaf(true);
        let dead = cache.leaf(false);
        let quad = cache.inner(alive, dead, alive, alive);

        let node = cache.node(quad);
        assert_eq!(node.height(), Height::new(1));
        assert_eq!(node.population(), 3);
        assert!(node.alive());
    }

    #[test]
    fn empty_at_height_has_zero_population_at_every_level() {
        let mut cache = NodeCache::new();
        let empty = cache.empty_at_height(Height::new(6));

        let node = cache.node(empty);
        assert_eq!(node.height(), Height::new(6));
        assert_eq!(node.population(), 0);
        assert!(!node.alive());

        // All four quadrants collapse onto the same canonical empty child.
        let (nw, ne, sw, se) = node.children();
        assert_eq!(nw, ne);
        assert_eq!(ne, sw);
        assert_eq!(sw, se);
    }

    #[test]
    fn empty_at_height_is_stable_across_calls() {
        let mut cache = NodeCache::new();
        let first = cache.empty_at_height(Height::new(4));
        let nodes_after_first = cache.len();
        let second = cache.empty_at_height(Height::new(4));

        assert_eq!(first, second);
        assert_eq!(cache.len(), nodes_after_first);
    }

    #[test]
    #[should_panic]
    fn mismatched_child_heights_panic() {
        let mut cache = NodeCache::new();
        let leaf = cache.leaf(false);
        let quad = cache.inner(leaf, leaf, leaf, leaf);
        // One child at height 1, three at height 0.
        cache.inner(quad, leaf, leaf, leaf);
    }
}
