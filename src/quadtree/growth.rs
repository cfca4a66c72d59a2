//! Growing and compacting nodes.
//!
//! Growth wraps a node in empty quadrants so that the original contents sit
//! at the center of a node one height up; compaction is the inverse,
//! repeatedly taking the center while the surrounding border is all dead.
//! Together they keep the root tightly bounding the live population while
//! giving the evolution engine the empty margin it needs.

use super::cache::NodeCache;
use super::height::{MAX_HEIGHT, MIN_GROWABLE};
use super::node::NodeId;

impl NodeCache {
    /// Node one height up with `id` at its center.
    ///
    /// Each original quadrant becomes the diagonally-inward child of a new
    /// quadrant padded with empty nodes, e.g. the old NW quadrant lands in
    /// the SE corner of the new NW quadrant. Requires height >= 1.
    pub fn grow(&mut self, id: NodeId) -> NodeId {
        let (nw, ne, sw, se) = self.node(id).children();
        let empty = {
            let child_height = self.node(id).height().child();
            self.empty_at_height(child_height)
        };

        let new_nw = self.inner(empty, empty, empty, nw);
        let new_ne = self.inner(empty, empty, ne, empty);
        let new_sw = self.inner(empty, sw, empty, empty);
        let new_se = self.inner(se, empty, empty, empty);

        self.inner(new_nw, new_ne, new_sw, new_se)
    }

    /// Node one height down composed of the children's centers.
    pub fn centered_inner(&mut self, id: NodeId) -> NodeId {
        let (nw, ne, sw, se) = self.node(id).children();
        let center_nw = self.node(nw).se();
        let center_ne = self.node(ne).sw();
        let center_sw = self.node(sw).ne();
        let center_se = self.node(se).nw();
        self.inner(center_nw, center_ne, center_sw, center_se)
    }

    /// Shrink a node to the smallest center that still holds every live
    /// cell.
    ///
    /// While the twelve outer grandchildren (everything except the four that
    /// touch the center point) are dead, the node is replaced by its center.
    /// The loop also fires unconditionally while the height exceeds
    /// [MAX_HEIGHT], which re-establishes the cap after the transient growth
    /// performed during an advance. Stops at height 1.
    pub fn compact(&mut self, id: NodeId) -> NodeId {
        let mut node = id;
        loop {
            let height = self.node(node).height();
            let compactable =
                height > MAX_HEIGHT || (height >= MIN_GROWABLE && self.borders_empty(node));
            if !compactable {
                return node;
            }
            node = self.centered_inner(node);
        }
    }

    /// True iff every grandchild outside the center 2x2 block is dead.
    fn borders_empty(&self, id: NodeId) -> bool {
        let (nw, ne, sw, se) = self.node(id).children();
        let nw = self.node(nw);
        let ne = self.node(ne);
        let sw = self.node(sw);
        let se = self.node(se);

        // Everything but nw.se
        !self.node(nw.nw()).alive()
            && !self.node(nw.ne()).alive()
            && !self.node(nw.sw()).alive()
            // everything but ne.sw
            && !self.node(ne.nw()).alive()
            && !self.node(ne.ne()).alive()
            && !self.node(ne.se()).alive()
            // everything but sw.ne
            && !self.node(sw.nw()).alive()
            && !self.node(sw.sw()).alive()
            && !self.node(sw.se()).alive()
            // everything but se.nw
            && !self.node(se.ne()).alive()
            && !self.node(se.sw()).alive()
            && !self.node(se.se()).alive()
    }
}

// -------------------------------------------------------------------------------------------------
// Unit tests.

#[cfg(test)]
mod tests {
    use super::super::height::Height;
    use super::*;

    #[test]
    fn grow_preserves_population_and_raises_height() {
        let mut cache = NodeCache::new();
        let mut node = cache.empty_at_height(Height::new(2));
        node = cache.set_cell_alive(node, -2, 1);
        node = cache.set_cell_alive(node, 1, -1);

        let grown = cache.grow(node);

        assert_eq!(cache.node(grown).height(), Height::new(3));
        assert_eq!(cache.node(grown).population(), 2);
        // Coordinates are unchanged by growth; the contents stay centered.
        assert!(cache.cell_alive(grown, -2, 1));
        assert!(cache.cell_alive(grown, 1, -1));
    }

    #[test]
    fn compact_undoes_grow() {
        let mut cache = NodeCache::new();
        let mut node = cache.empty_at_height(Height::new(2));
        // Fill a border cell so the node itself is not compactable.
        node = cache.set_cell_alive(node, -2, -2);
        assert_eq!(cache.compact(node), node);

        let grown = cache.grow(node);
        assert_eq!(cache.compact(grown), node);

        let grown_twice = cache.grow(grown);
        assert_eq!(cache.compact(grown_twice), node);
    }

    #[test]
    fn compact_is_idempotent() {
        let mut cache = NodeCache::new();
        let mut node = cache.empty_at_height(Height::new(6));
        node = cache.set_cell_alive(node, 0, 0);
        node = cache.set_cell_alive(node, -1, -1);

        let compacted = cache.compact(node);
        assert_eq!(cache.compact(compacted), compacted);
    }

    #[test]
    fn compacting_an_empty_node_floors_at_height_one() {
        let mut cache = NodeCache::new();
        let empty = cache.empty_at_height(Height::new(10));
        let compacted = cache.compact(empty);

        let floor = cache.empty_at_height(Height::new(1));
        assert_eq!(compacted, floor);
    }

    #[test]
    fn compaction_stops_at_a_live_border() {
        let mut cache = NodeCache::new();
        let empty = cache.empty_at_height(Height::new(4));
        let node = cache.set_cell_alive(empty, -7, 8);

        // (-7, 8) sits in an outer grandchild, so nothing can be trimmed.
        assert_eq!(cache.compact(node), node);
    }

    #[test]
    fn compaction_trims_to_the_live_center() {
        let mut cache = NodeCache::new();
        let empty = cache.empty_at_height(Height::new(8));
        let node = cache.set_cell_alive(empty, 0, 0);

        let compacted = cache.compact(node);
        assert_eq!(cache.node(compacted).height(), Height::new(1));
        assert!(cache.cell_alive(compacted, 0, 0));
        assert_eq!(cache.node(compacted).population(), 1);
    }
}
