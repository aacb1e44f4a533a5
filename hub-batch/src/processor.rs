//! Batch conversion over one unit pair

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use hub_core::{HubError, DEFAULT_PRECISION};
use hub_units::{CategoryRegistry, ConversionError, UnitPair};
use crate::export::write_csv;
use crate::input::parse_values;
use crate::range::RangeSpec;
use crate::stats::Summary;

/// Default cap on entries per batch
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("batch of {requested} entries exceeds the limit of {max}")]
    TooManyEntries { requested: usize, max: usize },

    #[error("CSV export failed: {0}")]
    Export(String),
}

impl From<csv::Error> for BatchError {
    fn from(err: csv::Error) -> Self {
        BatchError::Export(err.to_string())
    }
}

impl From<BatchError> for HubError {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::Conversion(e) => e.into(),
            BatchError::TooManyEntries { requested, max } => {
                HubError::too_many_entries(requested, max)
            }
            BatchError::Export(msg) => HubError::internal(msg),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchOptions {
    pub max_entries: usize,
    pub precision: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            max_entries: DEFAULT_MAX_ENTRIES,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// One converted entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchRow {
    pub input: f64,
    pub output: f64,
}

/// Converted rows plus what was left out
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub rows: Vec<BatchRow>,
    /// Entries whose conversion failed
    pub skipped: usize,
    /// List tokens that were not numbers
    pub rejected: Vec<String>,
    #[serde(skip)]
    pub precision: usize,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn inputs(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.input).collect()
    }

    pub fn outputs(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.output).collect()
    }

    /// Statistics over the converted inputs
    pub fn summary(&self) -> Option<Summary> {
        Summary::of(&self.inputs())
    }

    pub fn to_csv(&self) -> Result<String, BatchError> {
        write_csv(&self.from_unit, &self.to_unit, &self.rows, self.precision)
    }
}

/// Converts many values through a pair resolved once up front
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    pair: UnitPair,
    options: BatchOptions,
}

impl BatchProcessor {
    pub fn new(pair: UnitPair, options: BatchOptions) -> Self {
        BatchProcessor { pair, options }
    }

    /// Resolve the pair; unknown units fail here, before any value is touched
    pub fn resolve(
        registry: &CategoryRegistry,
        category: &str,
        from: &str,
        to: &str,
        options: BatchOptions,
    ) -> Result<Self, BatchError> {
        let pair = UnitPair::resolve(registry, category, from, to)?;
        Ok(BatchProcessor::new(pair, options))
    }

    pub fn pair(&self) -> &UnitPair {
        &self.pair
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    fn check_size(&self, requested: usize) -> Result<(), BatchError> {
        if requested > self.options.max_entries {
            warn!(requested, max = self.options.max_entries, "batch rejected");
            return Err(BatchError::TooManyEntries {
                requested,
                max: self.options.max_entries,
            });
        }
        Ok(())
    }

    fn report(&self) -> BatchReport {
        BatchReport {
            category: self.pair.category.clone(),
            from_unit: self.pair.from.id.clone(),
            to_unit: self.pair.to.id.clone(),
            rows: Vec::new(),
            skipped: 0,
            rejected: Vec::new(),
            precision: self.options.precision,
        }
    }

    fn convert_all(&self, values: impl Iterator<Item = f64>, report: &mut BatchReport) {
        for input in values {
            match self.pair.apply(input) {
                Ok(output) => report.rows.push(BatchRow { input, output }),
                Err(e) => {
                    debug!(input, error = %e, "batch entry skipped");
                    report.skipped += 1;
                }
            }
        }
    }

    /// Convert values in order
    pub fn run_values(&self, values: &[f64]) -> Result<BatchReport, BatchError> {
        self.check_size(values.len())?;
        let mut report = self.report();
        self.convert_all(values.iter().copied(), &mut report);
        Ok(report)
    }

    /// Parse a free-form list and convert the numbers in it
    pub fn run_list(&self, input: &str) -> Result<BatchReport, BatchError> {
        let parsed = parse_values(input);
        if !parsed.rejected.is_empty() {
            debug!(count = parsed.rejected.len(), "non-numeric tokens dropped");
        }
        let mut report = self.run_values(&parsed.values)?;
        report.rejected = parsed.rejected;
        Ok(report)
    }

    /// Convert every value of an inclusive range; an invalid range is empty
    pub fn run_range(&self, range: &RangeSpec) -> Result<BatchReport, BatchError> {
        if !range.is_valid() {
            debug!(?range, "invalid range, nothing to convert");
        }
        self.check_size(range.len())?;
        let mut report = self.report();
        self.convert_all(range.values(), &mut report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor(category: &str, from: &str, to: &str) -> BatchProcessor {
        BatchProcessor::resolve(
            CategoryRegistry::standard(),
            category,
            from,
            to,
            BatchOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_list_meters_to_feet() {
        let report = processor("length", "m", "ft").run_list("1, 2, 3").unwrap();
        let outputs = report.outputs();
        assert_eq!(outputs.len(), 3);
        assert!((outputs[0] - 3.280839895013123).abs() < 1e-12);
        assert!((outputs[1] - 6.561679790026246).abs() < 1e-12);
        assert!((outputs[2] - 9.842519685039370).abs() < 1e-12);
        assert_eq!(report.inputs(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_list_drops_malformed() {
        let report = processor("length", "m", "ft").run_list("1, abc, 3").unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.rejected, vec!["abc".to_string()]);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_range_celsius_to_fahrenheit() {
        let report = processor("temperature", "c", "f")
            .run_range(&RangeSpec::new(0.0, 100.0, 50.0))
            .unwrap();
        assert_eq!(report.outputs(), vec![32.0, 122.0, 212.0]);
    }

    #[test]
    fn test_invalid_range_is_empty() {
        let p = processor("length", "m", "ft");
        assert!(p.run_range(&RangeSpec::new(0.0, 10.0, 0.0)).unwrap().is_empty());
        assert!(p.run_range(&RangeSpec::new(0.0, 10.0, -2.0)).unwrap().is_empty());
        assert!(p.run_range(&RangeSpec::from_text("a", "10", "1")).unwrap().is_empty());
    }

    #[test]
    fn test_overflowing_entry_is_skipped() {
        let report = processor("length", "km", "nm").run_values(&[1.0, 1e300, 2.0]).unwrap();
        assert_eq!(report.inputs(), vec![1.0, 2.0]);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_overflowing_temperature_is_skipped() {
        let report = processor("temperature", "f", "c").run_values(&[1.0, 1.7e308]).unwrap();
        assert_eq!(report.inputs(), vec![1.0]);
        assert_eq!(report.skipped, 1);
        assert!(report.outputs().iter().all(|v| v.is_finite()));
        assert!(!report.to_csv().unwrap().contains("--"));
    }

    #[test]
    fn test_unknown_unit_fails_whole_batch() {
        let err = BatchProcessor::resolve(
            CategoryRegistry::standard(),
            "length",
            "m",
            "cubit",
            BatchOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BatchError::Conversion(ConversionError::UnitNotFound { .. })
        ));
    }

    #[test]
    fn test_too_many_entries() {
        let options = BatchOptions { max_entries: 5, ..BatchOptions::default() };
        let p = BatchProcessor::resolve(CategoryRegistry::standard(), "length", "m", "ft", options)
            .unwrap();
        assert!(p.run_range(&RangeSpec::new(0.0, 4.0, 1.0)).is_ok());
        assert!(matches!(
            p.run_range(&RangeSpec::new(0.0, 5.0, 1.0)),
            Err(BatchError::TooManyEntries { requested: 6, max: 5 })
        ));
        assert!(matches!(
            p.run_range(&RangeSpec::new(0.0, 1e12, 1e-6)),
            Err(BatchError::TooManyEntries { .. })
        ));
    }

    #[test]
    fn test_summary_and_csv() {
        let report = processor("length", "m", "ft").run_list("1 2.5").unwrap();
        let summary = report.summary().unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 1.75);
        assert_eq!(
            report.to_csv().unwrap(),
            "Input (m),Output (ft)\n1,3.28084\n2.5,8.2021\n"
        );
    }

    #[test]
    fn test_error_into_hub_error() {
        let err: HubError = BatchError::TooManyEntries { requested: 20, max: 10 }.into();
        assert_eq!(err.code, hub_core::codes::TOO_MANY_ENTRIES);

        let err: HubError =
            BatchError::Conversion(ConversionError::UnknownCategory("x".into())).into();
        assert_eq!(err.code, hub_core::codes::UNKNOWN_CATEGORY);
    }
}
