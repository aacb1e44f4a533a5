//! Hub Units - Unit tables and conversion
//!
//! Provides the validated conversion table and the converters built on it.
//!
//! Categories:
//! - Length (m, km, ft, mi, etc.)
//! - Weight (kg, g, lb, oz, etc.)
//! - Temperature (C, F, K, R)
//! - Volume (L, mL, gal, cup, etc.)
//! - Area (m², ha, acre, etc.)
//! - Speed (km/h, mph, knot, etc.)
//! - Time (s, min, h, d, etc.)
//! - Data storage (B, KB, MiB, etc.)
//! - Pressure (Pa, bar, psi, etc.)
//! - Energy (J, kcal, kWh, etc.)
//! - Currency (USD, EUR, GBP, etc.; static reference rates)
//!
//! Linear units convert as `value * from_factor / to_factor`; temperature
//! goes through Celsius.

mod temperature;
mod unit;
mod category;
mod registry;
mod tables;
mod convert;
mod query;
mod history;

pub use temperature::{convert_temperature, TemperatureScale, UnknownScale};
pub use unit::{validate_factor, ConversionError, Unit, UnitScale};
pub use category::{Category, CategoryKind, RegistryError};
pub use registry::{CategoryRegistry, RegistryBuilder, STANDARD};
pub use tables::standard_builder;
pub use convert::{
    convert, ConversionOutput, ConversionRequest, ConversionResult, Converter, UnitPair,
};
pub use query::{parse_quantity, parse_query, Query};
pub use history::ConversionHistory;
