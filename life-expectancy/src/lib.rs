//! # Life Expectancy - Eurostat life expectancy cleaning
//!
//! Turns the wide Eurostat life expectancy export into a long CSV extract for
//! a single region.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌────────────┐
//! │  TSV file  │───▶│  Loader  │───▶│ Reshaper │───▶│ Cleaner  │───▶│ Splitter │───▶│  CSV file  │
//! │   (wide)   │    │ (parser) │    │  (melt)  │    │ (coerce) │    │ (filter) │    │   (long)   │
//! └────────────┘    └──────────┘    └──────────┘    └──────────┘    └──────────┘    └────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use life_expectancy::{clean_data, CleaningConfig};
//!
//! let report = clean_data(&CleaningConfig::default()).unwrap();
//! println!("Wrote {} rows", report.output_rows);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`models`] - Row types for each table shape
//! - [`parser`] - Raw table loading with encoding detection
//! - [`transform`] - Reshape, clean, split and the pipeline
//! - [`writer`] - CSV output
//! - [`config`] - Run configuration
//! - [`logs`] - Progress logging

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Loading
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod writer;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    LoadError, LoadResult, PipelineError, PipelineResult, ReshapeError, ReshapeResult,
    WriteError, WriteResult,
};

// =============================================================================
// Re-exports - Models and configuration
// =============================================================================

pub use config::CleaningConfig;
pub use models::{
    CleanRecord, LifeExpectancyRecord, LongRecord, RawTable, DEFAULT_ID_COLUMN, OUTPUT_COLUMNS,
};

// =============================================================================
// Re-exports - Stages
// =============================================================================

pub use parser::{decode_content, detect_encoding, load_raw_table, parse_table};
pub use transform::{
    clean_data, clean_records, clean_value, melt, split_identifier, transform_records,
    transform_table, PipelineReport, RegionFilter,
};
pub use writer::{to_csv_string, write_csv, write_records};
