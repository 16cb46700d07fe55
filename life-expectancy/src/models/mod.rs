//! Row types for each table shape the pipeline moves through.
//!
//! ```text
//! RawTable ──reshape──▶ Vec<LongRecord> ──clean──▶ Vec<CleanRecord> ──split──▶ Vec<LifeExpectancyRecord>
//! (wide TSV)            (id, year, value)          (id, year?, value)          (unit, sex, age, region, year?, value)
//! ```

use serde::Serialize;

/// Header of the compound identifier column in Eurostat exports.
pub const DEFAULT_ID_COLUMN: &str = "unit,sex,age,geo\\time";

/// Column order of the final table.
pub const OUTPUT_COLUMNS: [&str; 6] = ["unit", "sex", "age", "region", "year", "value"];

// =============================================================================
// Raw wide table
// =============================================================================

/// The raw table as read from disk: a header row and rectangular string rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Header cells, identifier column first, then one label per year.
    pub headers: Vec<String>,
    /// Data rows; each has exactly `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// =============================================================================
// Long table
// =============================================================================

/// One (identifier, year column) cell of the wide table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRecord {
    pub identifier: String,
    /// Former column label, untouched.
    pub year: String,
    /// Former cell, possibly noisy.
    pub value: String,
}

// =============================================================================
// Cleaned table
// =============================================================================

/// A long record whose value parsed as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub identifier: String,
    /// `None` when the year label is not an integer. Such rows are kept.
    pub year: Option<i64>,
    pub value: f64,
}

// =============================================================================
// Final table
// =============================================================================

/// A row of the output CSV.
///
/// Field order is the output column order. `None` fields are written as
/// empty cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeExpectancyRecord {
    pub unit: Option<String>,
    pub sex: Option<String>,
    pub age: Option<String>,
    pub region: Option<String>,
    pub year: Option<i64>,
    pub value: f64,
}
