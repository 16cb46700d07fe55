//! CSV output.
//!
//! The header row is always written, so a run that matches nothing still
//! produces a valid file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::WriteResult;
use crate::models::{LifeExpectancyRecord, OUTPUT_COLUMNS};

/// Write records as CSV to any writer.
pub fn write_records<W: Write>(writer: W, records: &[LifeExpectancyRecord]) -> WriteResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write records to a CSV file, replacing it if present.
pub fn write_csv(path: &Path, records: &[LifeExpectancyRecord]) -> WriteResult<()> {
    let file = File::create(path)?;
    write_records(file, records)
}

/// Render records as a CSV string.
pub fn to_csv_string(records: &[LifeExpectancyRecord]) -> WriteResult<String> {
    let mut buf = Vec::new();
    write_records(&mut buf, records)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
