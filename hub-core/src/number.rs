//! Number parsing and display formatting
//!
//! All conversion arithmetic is plain `f64`. This module owns the two edges
//! where numbers meet text: parsing user input and rendering results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of decimal places used when rendering results
pub const DEFAULT_PRECISION: usize = 6;

/// Rendered in place of a value that cannot be displayed (NaN, infinity)
pub const PLACEHOLDER: &str = "--";

/// Error type for number parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0:?}")]
    ParseError(String),

    #[error("Number is not finite: {0}")]
    NonFinite(f64),
}

/// Parse a finite number from text.
///
/// Accepts the usual decimal and scientific forms ("42", "-3.5", "1e3").
/// Rejects "NaN", "inf" and friends even though `f64::from_str` accepts them.
pub fn parse_number(s: &str) -> Result<f64, NumberError> {
    let trimmed = s.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| NumberError::ParseError(trimmed.to_string()))?;
    finite(value)
}

/// Pass a value through only if it is finite
pub fn finite(value: f64) -> Result<f64, NumberError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumberError::NonFinite(value))
    }
}

/// Render with a fixed number of decimal places, then strip trailing zeros.
///
/// `format_fixed(1.5, 6)` is `"1.5"`, `format_fixed(2.0, 6)` is `"2"`.
/// Negative zero (including values that round to it) renders as `"0"`.
pub fn format_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let mut s = format!("{:.prec$}", value, prec = places);
    if s.contains('.') {
        let trimmed_len = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed_len);
    }

    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Numeric input that arrives either as a number or as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Resolve to a finite `f64`
    pub fn resolve(&self) -> Result<f64, NumberError> {
        match self {
            NumericInput::Number(n) => finite(*n),
            NumericInput::Text(s) => parse_number(s),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        NumericInput::Number(n)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        NumericInput::Text(s)
    }
}
