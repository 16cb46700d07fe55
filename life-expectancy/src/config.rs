//! Run configuration.
//!
//! Defaults reproduce the historical Portugal extract. Only the region code is
//! exposed on the command line; the data directory can be moved with
//! `LIFE_EXPECTANCY_DATA_DIR` (also read from a `.env` file by the binary).

use std::path::PathBuf;

use crate::models::DEFAULT_ID_COLUMN;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LIFE_EXPECTANCY_DATA_DIR";

/// Directory holding input and output files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Raw Eurostat export.
pub const DEFAULT_INPUT_FILENAME: &str = "eu_life_expectancy_raw.tsv";

/// Cleaned extract.
pub const DEFAULT_OUTPUT_FILENAME: &str = "pt_life_expectancy.csv";

/// Region kept when none is given.
pub const DEFAULT_COUNTRY: &str = "PT";

/// Configuration for one cleaning run
#[derive(Debug, Clone, PartialEq)]
pub struct CleaningConfig {
    /// Directory both file names are resolved against
    pub data_dir: PathBuf,

    pub input_filename: String,

    pub output_filename: String,

    /// Region code to keep, matched exactly against the fourth identifier field
    pub country: String,

    /// Field separator of the input file
    pub separator: char,

    /// Header of the compound identifier column
    pub id_column: String,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            input_filename: DEFAULT_INPUT_FILENAME.to_string(),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            separator: '\t',
            id_column: DEFAULT_ID_COLUMN.to_string(),
        }
    }
}

impl CleaningConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_files(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.input_filename = input.into();
        self.output_filename = output.into();
        self
    }

    pub fn input_path(&self) -> PathBuf {
        self.data_dir.join(&self.input_filename)
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_filename)
    }
}
