//! Parser for live-cell coordinate input.
//!
//! Supported sources:
//! - a file containing whitespace-separated coordinate values, optionally
//!   decorated with parentheses and commas (extensions: `cells`, `life`,
//!   `txt`);
//! - a csv file with an `x,y` header and one cell per record;
//! - raw tokens, e.g. straight from the command line;
//! - randomly generated cells for quick demos.
//!
//! Note that the file type is inferred from its path extension.

use std::ffi::OsString;
use std::fs::File;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use rand::distributions::{Distribution, Uniform};
use rand::thread_rng;
use serde::Deserialize;

/// Half-width of the square in which random cells are scattered.
///
/// Chosen so that a few hundred random cells form a dense enough soup to
/// evolve interestingly for a while.
pub const RANDOM_CELL_SPREAD: i64 = 64;

/// Builder-style collector of cell sources.
///
/// At most one of the sources is used: a file path takes priority over raw
/// tokens. [parse_or_generate_random] falls back to random generation when
/// neither is present.
///
/// [parse_or_generate_random]: CellsParser::parse_or_generate_random
pub struct CellsParser {
    path: Option<PathBuf>,
    tokens: Option<Vec<String>>,
    num_cells: Option<u64>,
}

/// A single live cell record, as found in csv files.
#[derive(Deserialize, Debug)]
struct CellRecord {
    x: i64,
    y: i64,
}

/// Supported file types for the parser.
enum FileType {
    Csv,
    Text,
}

impl CellsParser {
    pub fn new() -> Self {
        CellsParser {
            path: None,
            tokens: None,
            num_cells: None,
        }
    }

    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.path = path;
        self
    }

    pub fn with_tokens(mut self, tokens: Option<Vec<String>>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_num_cells(mut self, num_cells: Option<u64>) -> Self {
        self.num_cells = num_cells;
        self
    }

    /// Produce the list of live cells from the configured source.
    ///
    /// An error is returned if:
    /// a) neither a file nor raw tokens were provided
    /// b) the file cannot be opened or its type is not supported
    /// c) any coordinate fails to parse, or an odd number is given
    pub fn parse(self) -> Result<Vec<(i64, i64)>, CellsParserError> {
        if let Some(path) = self.path {
            info!(
                "Attempting to parse {:?} as a file containing live-cell coordinates",
                &path
            );

            let ext = path.extension().and_then(|s| s.to_str()).ok_or(
                CellsParserError::UnknownFileType(path.clone().into_os_string()),
            )?;

            match FileType::from_str(ext)? {
                FileType::Csv => parse_csv(File::open(path)?),
                FileType::Text => {
                    let content = std::fs::read_to_string(path)?;
                    parse_tokens(content.split_whitespace())
                }
            }
        } else if let Some(tokens) = self.tokens {
            parse_tokens(tokens.iter().map(String::as_str))
        } else {
            Err(CellsParserError::NoSourceProvided)
        }
    }

    /// If a source is present then parse it, otherwise generate cells
    /// randomly. The number of cells to generate must be provided in the
    /// random case.
    pub fn parse_or_generate_random(self) -> Result<Vec<(i64, i64)>, CellsParserError> {
        match (&self.path, &self.tokens) {
            (None, None) => {
                info!("No cell source provided, defaulting to generating random cells");
                let num_cells = self.num_cells.ok_or(CellsParserError::NumCellsNotSet)?;
                Ok(generate_random_cells(num_cells))
            }
            _ => self.parse(),
        }
    }
}

impl Default for CellsParser {
    fn default() -> Self {
        CellsParser::new()
    }
}

impl FromStr for FileType {
    type Err = CellsParserError;

    fn from_str(ext: &str) -> Result<FileType, Self::Err> {
        match ext {
            "csv" => Ok(FileType::Csv),
            "cells" | "life" | "txt" => Ok(FileType::Text),
            _ => Err(CellsParserError::UnsupportedFileType { ext: ext.into() }),
        }
    }
}

fn parse_csv<R: std::io::Read>(input: R) -> Result<Vec<(i64, i64)>, CellsParserError> {
    let mut cells = Vec::new();
    let mut reader = csv::Reader::from_reader(input);
    for record in reader.deserialize() {
        let cell: CellRecord = record?;
        cells.push((cell.x, cell.y));
    }
    Ok(cells)
}

/// Turn free-form coordinate tokens into cells.
///
/// Tokens may carry `(`, `)` and `,` decoration, so `(3, -4)` works whether
/// it arrives as one token or two. Values pair up in reading order.
fn parse_tokens<'a>(
    tokens: impl Iterator<Item = &'a str>,
) -> Result<Vec<(i64, i64)>, CellsParserError> {
    let mut values = Vec::new();

    for token in tokens {
        for piece in token.split(',') {
            let cleaned: String = piece.chars().filter(|c| !matches!(c, '(' | ')')).collect();
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                continue;
            }
            let value =
                cleaned
                    .parse::<i64>()
                    .map_err(|source| CellsParserError::MalformedCoordinate {
                        token: token.to_string(),
                        source,
                    })?;
            values.push(value);
        }
    }

    if values.len() % 2 != 0 {
        return Err(CellsParserError::OddCoordinateCount {
            count: values.len(),
        });
    }

    Ok(values.chunks(2).map(|pair| (pair[0], pair[1])).collect())
}

/// Scatter `num_cells` cells uniformly over a square around the origin.
///
/// Duplicates are possible and harmless; setting an alive cell alive again
/// is a no-op.
pub fn generate_random_cells(num_cells: u64) -> Vec<(i64, i64)> {
    let mut rng = thread_rng();
    let range = Uniform::new_inclusive(-RANDOM_CELL_SPREAD, RANDOM_CELL_SPREAD);

    (0..num_cells)
        .map(|_| (range.sample(&mut rng), range.sample(&mut rng)))
        .collect()
}

// -------------------------------------------------------------------------------------------------
// Errors.

#[derive(thiserror::Error, Debug)]
pub enum CellsParserError {
    #[error("Expected a file path or raw tokens but found neither")]
    NoSourceProvided,
    #[error("Expected num_cells to be set but found none")]
    NumCellsNotSet,
    #[error("Unable to find file extension for path {0:?}")]
    UnknownFileType(OsString),
    #[error("The file type with extension {ext:?} is not supported")]
    UnsupportedFileType { ext: String },
    #[error("Error opening or reading cells file")]
    IoError(#[from] std::io::Error),
    #[error("Error reading CSV file")]
    CsvError(#[from] csv::Error),
    #[error("Coordinates come in pairs but {count} values were given")]
    OddCoordinateCount { count: usize },
    #[error("Cannot parse {token:?} as a coordinate")]
    MalformedCoordinate {
        token: String,
        source: ParseIntError,
    },
}

// -------------------------------------------------------------------------------------------------
// Unit tests.
