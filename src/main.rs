//! Command line driver for the Hashlife engine.
//!
//! Seeds a universe from the chosen cell source, advances it the requested
//! number of generations (logging per-generation timing), and finally prints
//! an ASCII viewport centered on the origin.

use std::time::Instant;

use clap::Parser;
use log::info;
use patharg::InputArg;

use hashlife::cli::Cli;
use hashlife::utils::{activate_logging, LogOnErrUnwrap};
use hashlife::{
    CellsParser, QuadTree, SimulationConfig, DEFAULT_GENERATIONS, DEFAULT_RANDOM_CELLS,
    DEFAULT_VIEWPORT_RADIUS,
};

fn main() {
    let cli = Cli::parse();
    activate_logging(cli.verbose.log_level_filter());

    let config = match cli.config {
        Some(InputArg::Path(ref path)) => {
            Some(SimulationConfig::deserialize(path.to_path_buf()).log_on_err_unwrap())
        }
        Some(InputArg::Stdin) => {
            let content = InputArg::Stdin.read_to_string().log_on_err_unwrap();
            Some(toml::from_str(&content).log_on_err_unwrap())
        }
        None => None,
    };

    let generations = cli
        .generations
        .or_else(|| config.as_ref().map(SimulationConfig::generations))
        .unwrap_or(DEFAULT_GENERATIONS);
    let viewport_radius = cli
        .viewport_radius
        .or_else(|| config.as_ref().map(SimulationConfig::viewport_radius))
        .unwrap_or(DEFAULT_VIEWPORT_RADIUS);

    let cells = seed_cells(&cli, config.as_ref());

    let mut tree = QuadTree::from_cells(cells).log_on_err_unwrap();
    info!("Seeded universe: {:?}", tree);

    for generation in 1..=generations {
        let start = Instant::now();
        tree.advance();
        info!(
            "Generation {} at height {} population {} took {:?}",
            generation,
            tree.height(),
            tree.population(),
            start.elapsed()
        );
    }

    render_viewport(&tree, viewport_radius);
    info!("Done: {} canonical nodes interned", tree.cached_nodes());
}

/// Resolve the seed cells, preferring CLI sources over the config file.
fn seed_cells(cli: &Cli, config: Option<&SimulationConfig>) -> Vec<(i64, i64)> {
    let has_cli_source = cli.cell_source.cells_file.is_some()
        || cli.cell_source.points.is_some()
        || cli.cell_source.random_cells.is_some();

    if !has_cli_source {
        if let Some(config) = config {
            return config.seed_cells().log_on_err_unwrap();
        }
    }

    // A cells file on stdin is read here and handed over as raw tokens.
    let (path, tokens) = match &cli.cell_source.cells_file {
        Some(InputArg::Path(path)) => (Some(path.clone()), cli.cell_source.points.clone()),
        Some(InputArg::Stdin) => {
            let content = InputArg::Stdin.read_to_string().log_on_err_unwrap();
            let tokens = content.split_whitespace().map(str::to_string).collect();
            (None, Some(tokens))
        }
        None => (None, cli.cell_source.points.clone()),
    };

    CellsParser::new()
        .with_path(path)
        .with_tokens(tokens)
        .with_num_cells(Some(
            cli.cell_source.random_cells.unwrap_or(DEFAULT_RANDOM_CELLS),
        ))
        .parse_or_generate_random()
        .log_on_err_unwrap()
}

/// Poll the tree over a square window around the origin and print it, one
/// row per line, north first.
fn render_viewport(tree: &QuadTree, radius: i64) {
    let radius = radius.max(0);
    for y in -radius..=radius {
        let row: String = (-radius..=radius)
            .map(|x| if tree.get(x, y) { '#' } else { '.' })
            .collect();
        println!("{}", row);
    }
}
