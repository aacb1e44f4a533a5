//! Unit representation and conversion errors

use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use hub_core::{HubError, NumberError};
use crate::TemperatureScale;

/// How a unit relates to the rest of its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UnitScale {
    /// value_in_base = value * factor
    Linear { factor: f64 },
    /// Offset scale handled by the temperature converter
    Temperature { scale: TemperatureScale },
}

/// A convertible unit within one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Identifier used in requests (e.g. "m", "ft", "usd")
    pub id: String,
    /// Human-readable label (e.g. "Meter")
    pub label: String,
    /// Alternative spellings accepted by lookup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub scale: UnitScale,
}

impl Unit {
    /// Create a unit with a multiplicative factor relative to the category base unit
    pub fn linear(id: &str, label: &str, factor: f64) -> Self {
        Unit {
            id: id.to_string(),
            label: label.to_string(),
            aliases: Vec::new(),
            scale: UnitScale::Linear { factor },
        }
    }

    /// Create a temperature unit
    pub fn temperature(id: &str, label: &str, scale: TemperatureScale) -> Self {
        Unit {
            id: id.to_string(),
            label: label.to_string(),
            aliases: Vec::new(),
            scale: UnitScale::Temperature { scale },
        }
    }

    /// Builder: add lookup aliases
    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.to_string()));
        self
    }

    /// Factor relative to the base unit, if this is a linear unit
    pub fn factor(&self) -> Option<f64> {
        match self.scale {
            UnitScale::Linear { factor } => Some(factor),
            UnitScale::Temperature { .. } => None,
        }
    }

    pub fn is_base(&self) -> bool {
        self.factor() == Some(1.0)
    }

    /// Case-insensitive match against the id and every alias.
    ///
    /// Temperature units also answer to every spelling of their scale
    /// (`°F`, `ra`, `centigrade`).
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        if self.id.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
        {
            return true;
        }
        match self.scale {
            UnitScale::Temperature { scale } => name.parse::<TemperatureScale>() == Ok(scale),
            UnitScale::Linear { .. } => false,
        }
    }

    /// Every name this unit answers to
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str()).chain(self.aliases.iter().map(|a| a.as_str()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Check that a factor can be used as a divisor and multiplier
pub fn validate_factor(factor: f64) -> Result<f64, ConversionError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(ConversionError::InvalidFactor(factor))
    }
}

/// Errors that can occur during a single conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unit '{unit}' not found in category '{category}'")]
    UnitNotFound { category: String, unit: String },

    #[error("unit '{unit}' is ambiguous: found in {}", .categories.join(", "))]
    AmbiguousUnit { unit: String, categories: Vec<String> },

    #[error("cannot convert '{from}' to '{to}': units belong to different categories")]
    IncompatibleUnits { from: String, to: String },

    #[error("invalid conversion factor: {0}")]
    InvalidFactor(f64),

    #[error("input is not a finite number: {0}")]
    NonFiniteInput(f64),

    #[error("conversion result is not finite")]
    NonFiniteResult,

    #[error("cannot parse {0:?} as a number")]
    Parse(String),

    #[error("cannot parse conversion query {0:?}")]
    InvalidQuery(String),
}

impl From<NumberError> for ConversionError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => ConversionError::Parse(s),
            NumberError::NonFinite(v) => ConversionError::NonFiniteInput(v),
        }
    }
}

impl From<ConversionError> for HubError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnknownCategory(c) => HubError::unknown_category(&c),
            ConversionError::UnitNotFound { category, unit } => {
                HubError::unit_not_found(&category, &unit)
            }
            ConversionError::AmbiguousUnit { unit, categories } => {
                HubError::ambiguous_unit(&unit, &categories)
            }
            ConversionError::IncompatibleUnits { .. } => {
                HubError::new(hub_core::codes::UNIT_NOT_FOUND, err.to_string())
                    .with_suggestion("Pick two units from the same category")
            }
            ConversionError::InvalidFactor(f) => HubError::invalid_factor("?", f),
            ConversionError::NonFiniteInput(_) | ConversionError::NonFiniteResult => {
                HubError::non_finite(err.to_string())
            }
            ConversionError::Parse(s) => HubError::parse_error(format!("{:?} is not a number", s)),
            ConversionError::InvalidQuery(q) => HubError::parse_error(format!("query {:?}", q))
                .with_suggestion("Write queries like \"5 km to mi\" or \"100 F -> C\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foot() -> Unit {
        Unit::linear("ft", "Foot", 0.3048).with_aliases(&["feet", "foot"])
    }

    #[test]
    fn test_base_unit() {
        assert!(Unit::linear("m", "Meter", 1.0).is_base());
        assert!(!foot().is_base());
        assert!(!Unit::temperature("c", "Celsius", TemperatureScale::Celsius).is_base());
    }

    #[test]
    fn test_matches_id_and_aliases_case_insensitive() {
        let ft = foot();
        assert!(ft.matches("ft"));
        assert!(ft.matches("FT"));
        assert!(ft.matches(" Feet "));
        assert!(!ft.matches("m"));
    }

    #[test]
    fn test_temperature_unit_matches_scale_spellings() {
        let rankine = Unit::temperature("r", "Rankine", TemperatureScale::Rankine);
        assert!(rankine.matches("Ra"));
        assert!(rankine.matches("°R"));
        assert!(rankine.matches("rankine"));
        assert!(!rankine.matches("kelvin"));
        assert!(!foot().matches("celsius"));
    }

    #[test]
    fn test_names() {
        let ft = foot();
        let names: Vec<&str> = ft.names().collect();
        assert_eq!(names, vec!["ft", "feet", "foot"]);
    }

    #[test]
    fn test_validate_factor() {
        assert_eq!(validate_factor(0.3048), Ok(0.3048));
        assert_eq!(validate_factor(0.0), Err(ConversionError::InvalidFactor(0.0)));
        assert_eq!(validate_factor(-2.0), Err(ConversionError::InvalidFactor(-2.0)));
        assert!(validate_factor(f64::NAN).is_err());
        assert!(validate_factor(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_to_hub_error() {
        let err: HubError = ConversionError::UnitNotFound {
            category: "length".to_string(),
            unit: "furlongs".to_string(),
        }
        .into();
        assert_eq!(err.code, hub_core::codes::UNIT_NOT_FOUND);
        assert!(err.message.contains("furlongs"));
    }

    #[test]
    fn test_scale_serializes_tagged() {
        let json = serde_json::to_value(foot().scale).unwrap();
        assert_eq!(json["kind"], "linear");
        assert_eq!(json["factor"], 0.3048);
    }
}
