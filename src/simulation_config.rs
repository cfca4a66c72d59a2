//! Configuration for a simulation run.
//!
//! Currently only TOML files are supported for config files. All fields are
//! optional and fall back to defaults, so an empty config is valid:
//!
//! ```toml,ignore
//! generations = 100
//! viewport_radius = 20
//!
//! [cells]
//! file_path = "patterns/glider.cells"
//! # generate_random = 256
//! ```
//!
//! The config can also be built programmatically:
//! ```
//! use hashlife::SimulationConfigBuilder;
//!
//! let config = SimulationConfigBuilder::default()
//!     .generations_opt(Some(100))
//!     .num_random_cells(256)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.generations(), 100);
//! ```

use std::ffi::OsString;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use derive_builder::Builder;
use log::debug;
use serde::Deserialize;

use crate::cells_parser::{CellsParser, CellsParserError};

pub const DEFAULT_GENERATIONS: u64 = 10;
pub const DEFAULT_VIEWPORT_RADIUS: i64 = 16;
pub const DEFAULT_RANDOM_CELLS: u64 = 256;

/// Parameters of a simulation run.
///
/// `generations` is how many times the universe is advanced,
/// `viewport_radius` the half-width of the square printed afterwards, and
/// `cells` the seed source (file, or randomly generated).
#[derive(Deserialize, Debug, Builder)]
pub struct SimulationConfig {
    #[builder(setter(name = "generations_opt"), default)]
    generations: Option<u64>,
    #[builder(setter(name = "viewport_radius_opt"), default)]
    viewport_radius: Option<i64>,
    #[builder(private, default)]
    #[serde(default)]
    cells: CellSourceConfig,
}

/// Where the seed cells come from.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CellSourceConfig {
    file_path: Option<PathBuf>,
    generate_random: Option<u64>,
}

/// Supported file types for deserialization.
enum FileType {
    Toml,
}

impl SimulationConfig {
    /// Open and parse the config file.
    ///
    /// An error is returned if:
    /// 1. The file cannot be opened.
    /// 2. The file cannot be read.
    /// 3. The file type is not supported.
    pub fn deserialize(config_file_path: PathBuf) -> Result<Self, SimulationConfigError> {
        debug!(
            "Attempting to parse {:?} as a file containing simulation config",
            config_file_path.clone().into_os_string()
        );

        let ext = config_file_path.extension().and_then(|s| s.to_str()).ok_or(
            SimulationConfigError::UnknownFileType(config_file_path.clone().into_os_string()),
        )?;

        let config = match FileType::from_str(ext)? {
            FileType::Toml => {
                let mut buf = String::new();
                File::open(config_file_path)?.read_to_string(&mut buf)?;
                let config: SimulationConfig = toml::from_str(&buf)?;
                config
            }
        };

        debug!("Successfully parsed simulation config file");

        Ok(config)
    }

    pub fn generations(&self) -> u64 {
        self.generations.unwrap_or(DEFAULT_GENERATIONS)
    }

    pub fn viewport_radius(&self) -> i64 {
        self.viewport_radius.unwrap_or(DEFAULT_VIEWPORT_RADIUS)
    }

    /// Resolve the seed source into a list of live cells.
    pub fn seed_cells(&self) -> Result<Vec<(i64, i64)>, CellsParserError> {
        CellsParser::new()
            .with_path(self.cells.file_path.clone())
            .with_num_cells(Some(
                self.cells.generate_random.unwrap_or(DEFAULT_RANDOM_CELLS),
            ))
            .parse_or_generate_random()
    }
}

impl SimulationConfigBuilder {
    pub fn cells_file_path(&mut self, file_path: PathBuf) -> &mut Self {
        let mut cells = self.cells.clone().unwrap_or_default();
        cells.file_path = Some(file_path);
        self.cells = Some(cells);
        self
    }

    pub fn num_random_cells(&mut self, num_cells: u64) -> &mut Self {
        let mut cells = self.cells.clone().unwrap_or_default();
        cells.generate_random = Some(num_cells);
        self.cells = Some(cells);
        self
    }
}

impl FromStr for FileType {
    type Err = SimulationConfigError;

    fn from_str(ext: &str) -> Result<FileType, Self::Err> {
        match ext {
            "toml" => Ok(FileType::Toml),
            _ => Err(SimulationConfigError::UnsupportedFileType { ext: ext.into() }),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Errors.

#[derive(thiserror::Error, Debug)]
pub enum SimulationConfigError {
    #[error("Unable to find file extension for path {0:?}")]
    UnknownFileType(OsString),
    #[error("The file type with extension {ext:?} is not supported")]
    UnsupportedFileType { ext: String },
    #[error("Error opening or reading config file")]
    IoError(#[from] std::io::Error),
    #[error("Error parsing TOML file")]
    TomlError(#[from] toml::de::Error),
}

// -------------------------------------------------------------------------------------------------
// Unit tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_err, assert_err_simple};

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let config: SimulationConfig = toml::from_str("").unwrap();
        assert_eq!(config.generations(), DEFAULT_GENERATIONS);
        assert_eq!(config.viewport_radius(), DEFAULT_VIEWPORT_RADIUS);
    }

    #[test]
    fn full_config_parses() {
        let input = r#"
            generations = 42
            viewport_radius = 8

            [cells]
            file_path = "patterns/glider.cells"
        "#;
        let config: SimulationConfig = toml::from_str(input).unwrap();
        assert_eq!(config.generations(), 42);
        assert_eq!(config.viewport_radius(), 8);
        assert_eq!(
            config.cells.file_path,
            Some(PathBuf::from("patterns/glider.cells"))
        );
    }

    #[test]
    fn builder_produces_working_defaults() {
        let config = SimulationConfigBuilder::default().build().unwrap();
        assert_eq!(config.generations(), DEFAULT_GENERATIONS);
        assert_eq!(config.viewport_radius(), DEFAULT_VIEWPORT_RADIUS);
    }

    #[test]
    fn builder_setters_compose() {
        let config = SimulationConfigBuilder::default()
            .generations_opt(Some(7))
            .viewport_radius_opt(Some(3))
            .num_random_cells(99)
            .build()
            .unwrap();
        assert_eq!(config.generations(), 7);
        assert_eq!(config.viewport_radius(), 3);
        assert_eq!(config.cells.generate_random, Some(99));
    }

    #[test]
    fn random_seed_cells_resolve() {
        let config = SimulationConfigBuilder::default()
            .num_random_cells(10)
            .build()
            .unwrap();
        let cells = config.seed_cells().unwrap();
        assert_eq!(cells.len(), 10);
    }

    #[test]
    fn unsupported_config_extension_is_rejected() {
        let res = SimulationConfig::deserialize(PathBuf::from("config.json"));
        assert_err_simple!(res, Err(SimulationConfigError::UnsupportedFileType { .. }));
    }

    #[test]
    fn missing_config_extension_is_rejected() {
        let res = SimulationConfig::deserialize(PathBuf::from("config"));
        assert_err!(res, Err(SimulationConfigError::UnknownFileType(_)));
    }
}
