//! The next-generation engine.
//!
//! [next_generation] takes a node of height >= 2 and returns the canonical
//! node of height h-1 holding the node's center square advanced one
//! generation under B3/S23. The result is memoized on the input node, and
//! because nodes are canonical the memo is shared by every occurrence of the
//! same pattern anywhere in the tree, at any time. Repeated structure is
//! evolved once.
//!
//! Three paths:
//! - a node with zero population evolves to an empty node, which its own NW
//!   child already is;
//! - at height 2 the sixteen leaf cells are evaluated directly, counting
//!   neighbors with population sums of the surrounding structural pieces;
//! - at height >= 3 the center is decomposed into nine overlapping
//!   sub-squares one height down, each is advanced recursively, and the four
//!   result quadrants are read off the centers of the assembled corner
//!   frames:
//!
//! ```text
//! n00 | n01 | n02
//! ----+-----+----
//! n10 | n11 | n12
//! ----+-----+----
//! n20 | n21 | n22
//! ```
//!
//! [next_generation]: NodeCache::next_generation

use super::cache::NodeCache;
use super::height::MIN_GROWABLE;
use super::node::NodeId;

const BUG: &str = "[Bug in evolution engine]";

impl NodeCache {
    /// Center of `id` advanced one generation, one height down. Memoized.
    ///
    /// Requires height >= 2; the tree facade guarantees this by growing the
    /// root before advancing.
    pub fn next_generation(&mut self, id: NodeId) -> NodeId {
        if let Some(next) = self.memoized_next(id) {
            return next;
        }

        let (height, population) = {
            let node = self.node(id);
            (node.height(), node.population())
        };
        debug_assert!(
            height >= MIN_GROWABLE,
            "{} Cannot evolve a node below height 2",
            BUG
        );

        // Empty regions stay empty; any empty node one height down will do
        // and the NW child is already canonical.
        if population == 0 {
            let next = self.node(id).nw();
            self.memoize_next(id, next);
            return next;
        }

        let next = if height == MIN_GROWABLE {
            self.step_leaf_square(id)
        } else {
            self.step_composite(id)
        };
        self.memoize_next(id, next);
        next
    }

    /// Base case: evaluate B3/S23 on the sixteen cells of a height-2 node.
    ///
    /// Each center cell's eight neighbors are counted from population sums
    /// rather than by visiting leaves: start with the whole quadrant the
    /// cell sits in, subtract the cell itself, and add the adjacent halves
    /// of the other three quadrants.
    fn step_leaf_square(&mut self, id: NodeId) -> NodeId {
        let (nw, ne, sw, se) = self.node(id).children();

        let nw_se = self.node(nw).se();
        let ne_sw = self.node(ne).sw();
        let sw_ne = self.node(sw).ne();
        let se_nw = self.node(se).nw();

        let nw_neighbors = self.population(nw) - self.population(nw_se)
            + self.population_west(ne)
            + self.population_north(sw)
            + self.population(se_nw);

        let ne_neighbors = self.population(ne) - self.population(ne_sw)
            + self.population_east(nw)
            + self.population_north(se)
            + self.population(sw_ne);

        let sw_neighbors = self.population(sw) - self.population(sw_ne)
            + self.population_west(se)
            + self.population_south(nw)
            + self.population(ne_sw);

        let se_neighbors = self.population(se) - self.population(se_nw)
            + self.population_east(sw)
            + self.population_south(ne)
            + self.population(nw_se);

        // A dead cell with 3 neighbors is born; a live cell with 2 or 3
        // survives. The neighbor counts above exclude the cell itself.
        let nw_lives = nw_neighbors == 3 || (nw_neighbors == 2 && self.population(nw_se) > 0);
        let ne_lives = ne_neighbors == 3 || (ne_neighbors == 2 && self.population(ne_sw) > 0);
        let sw_lives = sw_neighbors == 3 || (sw_neighbors == 2 && self.population(sw_ne) > 0);
        let se_lives = se_neighbors == 3 || (se_neighbors == 2 && self.population(se_nw) > 0);

        let new_nw = self.leaf(nw_lives);
        let new_ne = self.leaf(ne_lives);
        let new_sw = self.leaf(sw_lives);
        let new_se = self.leaf(se_lives);

        self.inner(new_nw, new_ne, new_sw, new_se)
    }

    /// Recursive case: nine overlapping sub-squares, advanced and
    /// re-assembled.
    fn step_composite(&mut self, id: NodeId) -> NodeId {
        let (nw, ne, sw, se) = self.node(id).children();

        let n00 = self.next_generation(nw);
        let n01 = self.next_horizontal(nw, ne);
        let n02 = self.next_generation(ne);
        let n10 = self.next_vertical(nw, sw);
        let n11 = self.next_center(id);
        let n12 = self.next_vertical(ne, se);
        let n20 = self.next_generation(sw);
        let n21 = self.next_horizontal(sw, se);
        let n22 = self.next_generation(se);

        // Each result quadrant is the center of the frame spanning the
        // matching 2x2 block of the grid above.
        let frame = self.inner(n00, n01, n10, n11);
        let new_nw = self.centered_inner(frame);
        let frame = self.inner(n01, n02, n11, n12);
        let new_ne = self.centered_inner(frame);
        let frame = self.inner(n10, n11, n20, n21);
        let new_sw = self.centered_inner(frame);
        let frame = self.inner(n11, n12, n21, n22);
        let new_se = self.centered_inner(frame);

        self.inner(new_nw, new_ne, new_sw, new_se)
    }

    /// Advance the merged center straddling a west/east pair.
    fn next_horizontal(&mut self, west: NodeId, east: NodeId) -> NodeId {
        let west_ne = self.node(west).ne();
        let west_se = self.node(west).se();
        let east_nw = self.node(east).nw();
        let east_sw = self.node(east).sw();
        let merged = self.inner(west_ne, east_nw, west_se, east_sw);
        self.next_generation(merged)
    }

    /// Advance the merged center straddling a north/south pair.
    fn next_vertical(&mut self, north: NodeId, south: NodeId) -> NodeId {
        let north_sw = self.node(north).sw();
        let north_se = self.node(north).se();
        let south_nw = self.node(south).nw();
        let south_ne = self.node(south).ne();
        let merged = self.inner(north_sw, north_se, south_nw, south_ne);
        self.next_generation(merged)
    }

    /// Advance the true center of the node.
    fn next_center(&mut self, id: NodeId) -> NodeId {
        let center = self.centered_inner(id);
        self.next_generation(center)
    }

    fn population(&self, id: NodeId) -> u64 {
        self.node(id).population()
    }

    /// Combined population of the two western quadrants.
    fn population_west(&self, id: NodeId) -> u64 {
        let node = self.node(id);
        self.population(node.nw()) + self.population(node.sw())
    }

    fn population_east(&self, id: NodeId) -> u64 {
        let node = self.node(id);
        self.population(node.ne()) + self.population(node.se())
    }

    fn population_north(&self, id: NodeId) -> u64 {
        let node = self.node(id);
        self.population(node.nw()) + self.population(node.ne())
    }

    fn population_south(&self, id: NodeId) -> u64 {
        let node = self.node(id);
        self.population(node.sw()) + self.population(node.se())
    }
}

// -------------------------------------------------------------------------------------------------
// Unit tests.
