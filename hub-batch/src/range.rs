//! Range-mode input: start, end, step

use serde::{Deserialize, Serialize};
use hub_core::parse_number;

/// Slack, in units of `step`, for deciding whether `end` is reachable.
///
/// `(0.3 - 0.0) / 0.1` is `2.9999999999999996` in `f64`; without slack the
/// range 0..=0.3 step 0.1 would silently lose its last entry.
pub const STEP_EPSILON: f64 = 1e-9;

/// Inclusive arithmetic range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl RangeSpec {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        RangeSpec { start, end, step }
    }

    /// Build from text fields; a non-numeric field yields an empty range
    pub fn from_text(start: &str, end: &str, step: &str) -> Self {
        let field = |s: &str| parse_number(s).unwrap_or(f64::NAN);
        RangeSpec::new(field(start), field(end), field(step))
    }

    /// Finite bounds, positive step, start not past end
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.step.is_finite()
            && self.step > 0.0
            && self.start <= self.end
    }

    /// Number of entries the range produces (saturating for absurd spans)
    pub fn len(&self) -> usize {
        if !self.is_valid() {
            return 0;
        }
        let steps = ((self.end - self.start) / self.step + STEP_EPSILON).floor();
        if steps.is_finite() {
            // `as` saturates at usize::MAX
            (steps as usize).saturating_add(1)
        } else {
            usize::MAX
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values `start + i*step`, clamped so none exceeds `end`.
    ///
    /// Computed by index rather than by accumulation so error does not build
    /// up across the range.
    pub fn values(&self) -> impl Iterator<Item = f64> {
        let RangeSpec { start, end, step } = *self;
        (0..self.len()).map(move |i| (start + i as f64 * step).min(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_exact_end() {
        let values: Vec<f64> = RangeSpec::new(0.0, 10.0, 5.0).values().collect();
        assert_eq!(values, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_end_not_a_multiple_of_step() {
        let values: Vec<f64> = RangeSpec::new(0.0, 10.0, 4.0).values().collect();
        assert_eq!(values, vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn test_fractional_step_keeps_last_entry() {
        let values: Vec<f64> = RangeSpec::new(0.0, 0.3, 0.1).values().collect();
        assert_eq!(values.len(), 4);
        assert_eq!(values[3], 0.3);

        let range = RangeSpec::new(0.0, 1.0, 0.1);
        assert_eq!(range.len(), 11);
        assert_eq!(range.values().last(), Some(1.0));
    }

    #[test]
    fn test_single_point() {
        let values: Vec<f64> = RangeSpec::new(7.0, 7.0, 1.0).values().collect();
        assert_eq!(values, vec![7.0]);
    }

    #[test]
    fn test_invalid_step_is_empty() {
        assert!(RangeSpec::new(0.0, 10.0, 0.0).is_empty());
        assert!(RangeSpec::new(0.0, 10.0, -1.0).is_empty());
        assert!(RangeSpec::new(0.0, 10.0, f64::NAN).is_empty());
        assert_eq!(RangeSpec::new(0.0, 10.0, 0.0).values().count(), 0);
    }

    #[test]
    fn test_reversed_bounds_is_empty() {
        assert!(RangeSpec::new(10.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_from_text() {
        let range = RangeSpec::from_text("0", "10", "5");
        assert_eq!(range.len(), 3);

        assert!(RangeSpec::from_text("zero", "10", "5").is_empty());
        assert!(RangeSpec::from_text("0", "", "5").is_empty());
    }

    #[test]
    fn test_huge_span_saturates() {
        let range = RangeSpec::new(-1e308, 1e308, 1e-308);
        assert_eq!(range.len(), usize::MAX);
    }
}
