//! Hub Core - Fundamental types
//!
//! This crate provides the core types shared by the converter hub:
//! - `parse_number` / `format_fixed`: the text edges of `f64` arithmetic
//! - `NumericInput`: a value that arrives as a number or as text
//! - `HubError`: structured errors for tool consumers

mod number;
mod error;

pub use number::{
    finite, format_fixed, parse_number, NumberError, NumericInput, DEFAULT_PRECISION, PLACEHOLDER,
};
pub use error::{codes, HubError, Severity};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{format_fixed, parse_number, HubError, NumericInput, Severity};
    pub use crate::error::codes;
}
