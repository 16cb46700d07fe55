//! Wide to long reshaping.
//!
//! ```text
//! id          │ 2020 │ 2021            id          │ year │ value
//! ────────────┼──────┼──────    →      ────────────┼──────┼──────
//! YR,F,Y10,PT │ 81.2 │ 81.5            YR,F,Y10,PT │ 2020 │ 81.2
//! YR,M,Y10,PT │ 75.9 │ 76.0            YR,M,Y10,PT │ 2020 │ 75.9
//!                                      YR,F,Y10,PT │ 2021 │ 81.5
//!                                      YR,M,Y10,PT │ 2021 │ 76.0
//! ```
//!
//! Output is year-column-major: every row for the first year column, then
//! every row for the second, and so on.

use crate::error::{ReshapeError, ReshapeResult};
use crate::models::{LongRecord, RawTable};

/// Melt a wide table into `(identifier, year, value)` records.
///
/// Every column other than `id_column` is treated as a year column. The
/// result always has `rows × year_columns` records; nothing is dropped or
/// deduplicated.
pub fn melt(table: &RawTable, id_column: &str) -> ReshapeResult<Vec<LongRecord>> {
    let id_idx = table
        .column_index(id_column)
        .ok_or_else(|| ReshapeError::MissingIdColumn(id_column.to_string()))?;

    let year_columns: Vec<(usize, &String)> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != id_idx)
        .collect();

    let mut records = Vec::with_capacity(table.rows.len() * year_columns.len());

    for (col_idx, year) in &year_columns {
        for row in &table.rows {
            records.push(LongRecord {
                identifier: cell(row, id_idx),
                year: (*year).clone(),
                value: cell(row, *col_idx),
            });
        }
    }

    Ok(records)
}

/// Number of value columns `melt` produces per row.
pub fn year_column_count(table: &RawTable) -> usize {
    table.headers.len().saturating_sub(1)
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}
