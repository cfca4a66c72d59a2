//! Command Line Interface.
//!
//! Output of `--help`:
//! ```ignore
//! Hash-consed quadtree (Hashlife) engine for Conway's Game of Life
//!
//!     Usage: hashlife [OPTIONS]
//!
//!     Options:
//!         -f, --cells-file <CELLS_FILE>
//!             Path to file containing live-cell coordinates (.cells/.life/.txt text or .csv)
//!         -p, --points <POINTS>...
//!             Inline live-cell coordinates, e.g. "0,-1 0,0 0,1"
//!         -r, --random-cells <RANDOM_CELLS>
//!             Randomly generate a number of live cells
//!         -g, --generations <GENERATIONS>
//!             Number of generations to advance
//!         --viewport-radius <VIEWPORT_RADIUS>
//!             Half-width of the square viewport printed after the run
//!         -c, --config <CONFIG>
//!             TOML file containing simulation config (see module docs for the format)
//!         -v, --verbose...
//!             More output per occurrence
//!         -q, --quiet...
//!             Less output per occurrence
//!         -h, --help
//!             Print help
//!         -V, --version
//!             Print version
//! ```

use clap::{Args, Parser};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use patharg::InputArg;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub cell_source: CellSource,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// Number of generations to advance.
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Half-width of the square viewport printed after the run.
    #[arg(long)]
    pub viewport_radius: Option<i64>,

    /// TOML file containing simulation config (CLI options take precedence).
    #[clap(short, long, value_parser)]
    pub config: Option<InputArg>,
}

#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
pub struct CellSource {
    /// Path to file containing live-cell coordinates (.cells/.life/.txt text
    /// or .csv).
    #[arg(short = 'f', long)]
    pub cells_file: Option<InputArg>,

    /// Inline live-cell coordinates, e.g. "0,-1 0,0 0,1".
    #[arg(short, long, num_args = 1.., value_name = "POINTS")]
    pub points: Option<Vec<String>>,

    /// Randomly generate a number of live cells.
    #[arg(short, long)]
    pub random_cells: Option<u64>,
}
