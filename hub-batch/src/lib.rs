//! Hub Batch - Many conversions at once
//!
//! List mode parses free-form text, range mode walks `start..=end` by `step`.
//! Both resolve their unit pair once and produce a `BatchReport` that can be
//! summarized and exported as CSV.

mod input;
mod range;
mod stats;
mod export;
mod processor;

pub use input::{parse_values, ParsedValues};
pub use range::{RangeSpec, STEP_EPSILON};
pub use stats::Summary;
pub use export::write_csv;
pub use processor::{
    BatchError, BatchOptions, BatchProcessor, BatchReport, BatchRow, DEFAULT_MAX_ENTRIES,
};
