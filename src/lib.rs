// Licensed under the MIT license
// (see LICENSE or <http://opensource.org/licenses/MIT>) All files in the project carrying such
// notice may not be copied, modified, or distributed except according to those terms.

//! # Hashlife engine for Conway's Game of Life
//!
//! Conway's Game of Life on an effectively unbounded grid: cell coordinates
//! span the full signed 64-bit plane. The universe is stored as a quadtree
//! of hash-consed, immutable nodes, and generation advancement is memoized
//! per node, so repeated spatial and temporal patterns are computed once and
//! reused indefinitely. Structured or periodic patterns evolve dramatically
//! faster than their cell count suggests.
//!
//! ## What is contained in this code
//!
//! - [QuadTree]: the engine facade. Seed it with live cells, advance it one
//!   generation at a time, query any coordinate.
//! - [NodeCache]: the hash-consing node store and the node algebra (cell
//!   access, growth, compaction, next-generation evaluation) for callers who
//!   want to drive the quadtree directly.
//! - [CellsParser] / [SimulationConfig]: input adapters for seeding a
//!   universe from files, raw tokens, random soup, or a TOML config.
//! - A CLI binary that wires the above into a driver loop and prints an
//!   ASCII viewport.
//!
//! Only the standard B3/S23 rule is supported. The node cache lives as long
//! as its tree and grows monotonically; there is no eviction and no
//! persistence.
//!
//! ## Rust API
//!
//! ```
//! use hashlife::QuadTree;
//!
//! fn main() {
//!     // Seed a vertical blinker.
//!     let mut tree = QuadTree::from_cells([(0, -1), (0, 0), (0, 1)]).unwrap();
//!     assert_eq!(tree.population(), 3);
//!
//!     // One generation flips it horizontal.
//!     tree.advance();
//!     assert!(tree.get(-1, 0) && tree.get(0, 0) && tree.get(1, 0));
//!     assert!(!tree.get(0, -1) && !tree.get(0, 1));
//!
//!     // Cells can live anywhere in the signed 64-bit plane.
//!     tree.set_alive(20_000_000_000, -5).unwrap();
//!     assert!(tree.get(20_000_000_000, -5));
//! }
//! ```

pub mod cli;
pub mod utils;

mod quadtree;
pub use quadtree::{
    Height, Node, NodeCache, NodeId, NodeKind, QuadTree, QuadTreeError, MAX_HEIGHT, MIN_GROWABLE,
};

mod cells_parser;
pub use cells_parser::{
    generate_random_cells, CellsParser, CellsParserError, RANDOM_CELL_SPREAD,
};

mod simulation_config;
pub use simulation_config::{
    SimulationConfig, SimulationConfigBuilder, SimulationConfigError, DEFAULT_GENERATIONS,
    DEFAULT_RANDOM_CELLS, DEFAULT_VIEWPORT_RADIUS,
};

#[cfg(test)]
mod test_utils;
