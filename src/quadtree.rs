//! Hash-consed quadtree over the signed 64-bit plane.
//!
//! The grid is represented as a quadtree of canonical, immutable nodes. A
//! node at height h covers a 2^h x 2^h square of cells; leaves sit at height
//! 0 and cover a single cell. A node centered on the origin covers the
//! half-open box `[-2^(h-1), 2^(h-1))` on both axes: the NW quadrant covers
//! strictly-negative x and y, and the SE quadrant non-negative x and y.
//!
//! Every node is interned in a [NodeCache], so structurally equal subtrees
//! are one physical node. Mutation is therefore impossible and unnecessary:
//! "changing" a tree means building the handful of nodes along the changed
//! path and swapping the root pointer. The payoff is Hashlife-style
//! evolution, where results memoized on a node apply to every occurrence of
//! that pattern across space and time.
//!
//! [QuadTree] is the facade clients use: it owns the cache, tracks the
//! current root and its coordinate bounds, and exposes seeding, querying and
//! generation advancement. The node algebra underneath is available through
//! [NodeCache] for callers that want to drive it directly.

use std::fmt;

use logging_timer::stime;

mod access;
mod cache;
mod generation;
mod growth;
mod height;
mod node;

pub use cache::NodeCache;
pub use height::{Height, MAX_HEIGHT, MIN_GROWABLE};
pub use node::{Node, NodeId, NodeKind};

// -------------------------------------------------------------------------------------------------
// Main structs.

/// Conway's Game of Life on an effectively unbounded grid.
///
/// Holds the current root node plus the inclusive coordinate bounds derived
/// from its height. The root is replaced wholesale by seeding and advancing;
/// old roots simply stop being referenced while their nodes stay interned
/// for reuse.
pub struct QuadTree {
    cache: NodeCache,
    root: NodeId,
    min: i64,
    max: i64,
}

// -------------------------------------------------------------------------------------------------
// Implementations.

impl QuadTree {
    /// Empty universe. The root starts at height 1 and grows on demand.
    pub fn new() -> Self {
        let mut cache = NodeCache::new();
        let root = cache.empty_at_height(Height::new(1));
        let mut tree = QuadTree {
            cache,
            root,
            min: 0,
            max: 0,
        };
        tree.update_bounds();
        tree
    }

    /// Universe seeded with the given live cells.
    ///
    /// The root is grown until each cell fits, then the cell is written. An
    /// error is returned if a coordinate cannot be represented even at the
    /// height cap.
    #[stime("info", "QuadTree::{}")]
    pub fn from_cells(cells: impl IntoIterator<Item = (i64, i64)>) -> Result<Self, QuadTreeError> {
        let mut tree = QuadTree::new();
        for (x, y) in cells {
            tree.set_alive(x, y)?;
        }
        Ok(tree)
    }

    /// Life state of the cell at `(x, y)`.
    ///
    /// Coordinates outside the current bounds are dead by definition; the
    /// root only ever covers a box containing every live cell.
    pub fn get(&self, x: i64, y: i64) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.cache.cell_alive(self.root, x, y)
    }

    /// Bring the cell at `(x, y)` to life, growing the root as needed.
    pub fn set_alive(&mut self, x: i64, y: i64) -> Result<(), QuadTreeError> {
        while !self.contains(x, y) {
            if self.height() >= MAX_HEIGHT {
                return Err(QuadTreeError::CoordinateOutOfRange { x, y });
            }
            self.grow_tree(1);
        }
        self.root = self.cache.set_cell_alive(self.root, x, y);
        Ok(())
    }

    /// Advance the whole universe by one generation.
    ///
    /// Growing twice beforehand guarantees the root's center has two layers
    /// of empty padding on every side, so the step cannot escape the result
    /// node's coverage. The result is compacted to keep the root tight (and
    /// to restore the height cap, which the transient growth may exceed).
    #[stime("debug", "QuadTree::{}")]
    pub fn advance(&mut self) {
        self.grow_tree(2);
        let next = self.cache.next_generation(self.root);
        self.root = self.cache.compact(next);
        self.update_bounds();
    }

    /// Grow the root the given number of levels, re-deriving the bounds.
    pub fn grow_tree(&mut self, amount: u32) {
        for _ in 0..amount {
            self.root = self.cache.grow(self.root);
        }
        self.update_bounds();
    }

    /// Height of the current root.
    pub fn height(&self) -> Height {
        self.cache.node(self.root).height()
    }

    /// Number of live cells in the universe.
    pub fn population(&self) -> u64 {
        self.cache.node(self.root).population()
    }

    /// Inclusive coordinate bounds `(min, max)` of the current root, equal
    /// on both axes.
    pub fn bounds(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    /// Number of canonical nodes interned so far. Grows monotonically; the
    /// cache is never evicted within a run.
    pub fn cached_nodes(&self) -> usize {
        self.cache.len()
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        self.min <= x && x <= self.max && self.min <= y && y <= self.max
    }

    fn update_bounds(&mut self) {
        let (min, max) = self.height().coverage();
        self.min = min;
        self.max = max;
    }
}

impl Default for QuadTree {
    fn default() -> Self {
        QuadTree::new()
    }
}

impl fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "QuadTree {{ height: {}, population: {}, bounds: [{}, {}] }}",
            self.height(),
            self.population(),
            self.min,
            self.max
        )
    }
}

// -------------------------------------------------------------------------------------------------
// Errors.

#[derive(thiserror::Error, Debug)]
pub enum QuadTreeError {
    #[error("Coordinate ({x}, {y}) cannot be represented within the height cap")]
    CoordinateOutOfRange { x: i64, y: i64 },
}

// -------------------------------------------------------------------------------------------------
// Unit tests.
