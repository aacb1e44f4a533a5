//! Summary statistics over batch inputs

use serde::{Deserialize, Serialize};

/// Count, min, max and mean of a set of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Summary {
    /// Summarize `values`; `None` when there is nothing to summarize
    pub fn of(values: &[f64]) -> Option<Summary> {
        let (&first, rest) = values.split_first()?;
        let mut summary = Summary {
            count: 1,
            min: first,
            max: first,
            mean: first,
        };
        for &v in rest {
            summary.count += 1;
            summary.min = summary.min.min(v);
            summary.max = summary.max.max(v);
            // Running mean: stays finite where a plain sum would overflow
            summary.mean += (v - summary.mean) / summary.count as f64;
        }
        Some(summary)
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
