//! Identifier splitting and region filtering.
//!
//! The compound identifier `unit,sex,age,geo` is split positionally. Short
//! identifiers leave trailing fields as `None`; extra fields are ignored.

use crate::models::{CleanRecord, LifeExpectancyRecord};

/// The four attributes packed into a compound identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierParts {
    pub unit: Option<String>,
    pub sex: Option<String>,
    pub age: Option<String>,
    pub region: Option<String>,
}

/// Split `unit,sex,age,region` on commas.
pub fn split_identifier(identifier: &str) -> IdentifierParts {
    let mut parts = identifier.split(',').map(String::from);
    IdentifierParts {
        unit: parts.next(),
        sex: parts.next(),
        age: parts.next(),
        region: parts.next(),
    }
}

/// Exact, case-sensitive match on the region field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFilter {
    code: String,
}

impl RegionFilter {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// A missing region never matches.
    pub fn matches(&self, region: Option<&str>) -> bool {
        region == Some(self.code.as_str())
    }
}

/// Split identifiers and keep the rows of one region.
///
/// An empty result is valid, not an error.
pub fn transform_records(
    records: Vec<CleanRecord>,
    filter: &RegionFilter,
) -> Vec<LifeExpectancyRecord> {
    records
        .into_iter()
        .filter_map(|record| {
            let parts = split_identifier(&record.identifier);
            filter
                .matches(parts.region.as_deref())
                .then(|| LifeExpectancyRecord {
                    unit: parts.unit,
                    sex: parts.sex,
                    age: parts.age,
                    region: parts.region,
                    year: record.year,
                    value: record.value,
                })
        })
        .collect()
}
