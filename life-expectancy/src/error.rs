//! Error types for the life expectancy cleaning pipeline.
//!
//! One error type per stage that can fail:
//!
//! - [`LoadError`] - reading and decoding the raw TSV
//! - [`ReshapeError`] - melting the wide table into long form
//! - [`WriteError`] - writing the final CSV
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Cleaning and splitting never fail: malformed cells become missing values.
//! Conversion into [`PipelineError`] is automatic via `From`, so `?` works
//! across stage boundaries.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Loader Errors
// =============================================================================

/// Errors while loading the raw wide table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to read the input file.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Content could not be decoded as text.
    #[error("Failed to decode input: {0}")]
    Encoding(String),

    /// Separator cannot be used as a single-byte field delimiter.
    #[error("Unsupported separator: {0:?}")]
    InvalidSeparator(char),

    /// Content is not a rectangular delimited table.
    #[error("Malformed table at line {line}: {message}")]
    Malformed { line: u64, message: String },

    /// No header row.
    #[error("Input file is empty")]
    EmptyFile,
}

// =============================================================================
// Reshape Errors
// =============================================================================

/// Errors while reshaping wide data into long form.
#[derive(Debug, Error)]
pub enum ReshapeError {
    /// The identifier column is absent from the header.
    #[error("Identifier column not found: '{0}'")]
    MissingIdColumn(String),
}

// =============================================================================
// Writer Errors
// =============================================================================

/// Errors while writing the output CSV.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create or flush the output file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("Failed to serialize CSV: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error returned by [`crate::transform::pipeline::clean_data`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Loading error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Reshape error.
    #[error("Reshape error: {0}")]
    Reshape(#[from] ReshapeError),

    /// Writing error.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for reshape operations.
pub type ReshapeResult<T> = Result<T, ReshapeError>;

/// Result type for writer operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
