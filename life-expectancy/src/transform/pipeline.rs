//! End-to-end cleaning pipeline.
//!
//! ```text
//! load (TSV) → melt → clean → split + filter → write (CSV)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use life_expectancy::{clean_data, CleaningConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = clean_data(&CleaningConfig::default().with_country("ES"))?;
//!     println!("{} rows written", report.output_rows);
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use crate::config::CleaningConfig;
use crate::error::{PipelineResult, ReshapeResult};
use crate::logs::{log_info, log_success, log_warning};
use crate::models::{LifeExpectancyRecord, RawTable};
use crate::parser::load_raw_table_with_encoding;
use crate::writer::write_csv;

use super::clean::clean_records;
use super::reshape::{melt, year_column_count};
use super::split::{transform_records, RegionFilter};

/// Row counts of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub raw_rows: usize,
    pub year_columns: usize,
    pub long_rows: usize,
    pub cleaned_rows: usize,
    /// Cells dropped because their value was not numeric
    pub dropped_cells: usize,
    /// Kept cells whose year label was not an integer
    pub missing_years: usize,
    pub output_rows: usize,
    pub output_path: Option<PathBuf>,
}

/// Output of the in-memory stages
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub records: Vec<LifeExpectancyRecord>,
    pub report: PipelineReport,
}

/// Run melt, clean and split on an already-loaded table.
pub fn transform_table(
    table: &RawTable,
    id_column: &str,
    country: &str,
) -> ReshapeResult<TransformOutput> {
    let long = melt(table, id_column)?;
    let long_rows = long.len();
    log_success(format!("Reshaped to {} long rows", long_rows));

    let cleaned = clean_records(long);
    log_success(format!(
        "Cleaned: {} rows kept, {} dropped",
        cleaned.records.len(),
        cleaned.dropped
    ));
    if cleaned.missing_years > 0 {
        log_warning(format!(
            "{} rows kept with a non-integer year",
            cleaned.missing_years
        ));
    }
    let cleaned_rows = cleaned.records.len();

    let filter = RegionFilter::new(country);
    let records = transform_records(cleaned.records, &filter);
    log_success(format!("{} rows for region '{}'", records.len(), filter.code()));

    let report = PipelineReport {
        raw_rows: table.row_count(),
        year_columns: year_column_count(table),
        long_rows,
        cleaned_rows,
        dropped_cells: cleaned.dropped,
        missing_years: cleaned.missing_years,
        output_rows: records.len(),
        output_path: None,
    };

    Ok(TransformOutput { records, report })
}

/// Read, clean and filter the configured input, writing the CSV extract.
pub fn clean_data(config: &CleaningConfig) -> PipelineResult<PipelineReport> {
    let input_path = config.input_path();
    let output_path = config.output_path();

    log_info(format!("Reading {}", input_path.display()));
    let (table, encoding) = load_raw_table_with_encoding(&input_path, config.separator)?;
    log_success(format!("Detected encoding: {}", encoding));
    log_success(format!(
        "Read {} rows × {} columns",
        table.row_count(),
        table.headers.len()
    ));

    let TransformOutput { records, mut report } =
        transform_table(&table, &config.id_column, &config.country)?;

    if records.is_empty() {
        log_warning(format!(
            "No rows matched region '{}'; writing header only",
            config.country
        ));
    }

    write_csv(&output_path, &records)?;
    log_success(format!(
        "Wrote {} rows to {}",
        records.len(),
        output_path.display()
    ));

    report.output_path = Some(output_path);
    Ok(report)
}
