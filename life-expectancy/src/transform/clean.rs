//! Numeric cleaning of long records.
//!
//! Two coercions with deliberately different failure handling:
//!
//! - `year`: integer parse; a failure becomes `None` and the row is **kept**.
//! - `value`: noise stripped, then float parse; a failure drops the row.
//!
//! Dropping on `value` alone is the only filter later stages rely on.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{CleanRecord, LongRecord};

/// Anything that is not an ASCII digit, a period or a minus sign.
static NON_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.\-]").expect("NON_NUMERIC pattern is valid"));

/// Result of cleaning a long table
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Rows whose value parsed
    pub records: Vec<CleanRecord>,
    /// Rows dropped because their value did not parse
    pub dropped: usize,
    /// Kept rows whose year did not parse
    pub missing_years: usize,
}

/// Strip annotation flags, footnote markers, whitespace and units.
///
/// ```ignore
/// assert_eq!(clean_value("81.2 b"), "81.2");
/// assert_eq!(clean_value(":"), "");
/// ```
pub fn clean_value(value: &str) -> String {
    NON_NUMERIC.replace_all(value, "").into_owned()
}

/// Parse a cleaned value. Empty strings, a lone `-` or `.`, and anything
/// else that is not a float are `None`.
pub fn parse_value(value: &str) -> Option<f64> {
    let cleaned = clean_value(value);
    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Parse a year label, tolerating surrounding whitespace.
pub fn parse_year(year: &str) -> Option<i64> {
    year.trim().parse::<i64>().ok()
}

/// Coerce years and values, dropping rows whose value is not numeric.
pub fn clean_records(records: Vec<LongRecord>) -> CleanResult {
    let mut result = CleanResult::default();

    for record in records {
        let Some(value) = parse_value(&record.value) else {
            result.dropped += 1;
            continue;
        };

        let year = parse_year(&record.year);
        if year.is_none() {
            result.missing_years += 1;
        }

        result.records.push(CleanRecord {
            identifier: record.identifier,
            year,
            value,
        });
    }

    result
}
