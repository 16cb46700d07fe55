//! Transformation module.
//!
//! The stages between loading and writing:
//! - Reshape: wide table to long records
//! - Clean: numeric coercion and the value drop filter
//! - Split: identifier split and region filter
//! - Pipeline: the whole run, end to end

pub mod clean;
pub mod pipeline;
pub mod reshape;
pub mod split;

pub use clean::{clean_records, clean_value, parse_value, parse_year, CleanResult};
pub use pipeline::*;
pub use reshape::melt;
pub use split::{split_identifier, transform_records, IdentifierParts, RegionFilter};
