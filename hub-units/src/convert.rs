//! Scalar conversion and the request/response contract

use serde::{Deserialize, Serialize};
use hub_core::{format_fixed, NumericInput, DEFAULT_PRECISION};
use crate::category::Category;
use crate::registry::CategoryRegistry;
use crate::temperature::{convert_temperature, TemperatureScale};
use crate::unit::{validate_factor, ConversionError, Unit, UnitScale};

/// Convert by factors: `value * from_factor / to_factor`.
///
/// Both factors must be positive and finite. Equal factors return the input
/// unchanged.
pub fn convert(value: f64, from_factor: f64, to_factor: f64) -> Result<f64, ConversionError> {
    let from_factor = validate_factor(from_factor)?;
    let to_factor = validate_factor(to_factor)?;
    if !value.is_finite() {
        return Err(ConversionError::NonFiniteInput(value));
    }
    if from_factor == to_factor {
        return Ok(value);
    }

    finite_result(value * from_factor / to_factor)
}

fn finite_result(result: f64) -> Result<f64, ConversionError> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(ConversionError::NonFiniteResult)
    }
}

/// How a resolved pair maps values
#[derive(Debug, Clone, Copy, PartialEq)]
enum PairKind {
    Linear { from: f64, to: f64 },
    Temperature { from: TemperatureScale, to: TemperatureScale },
}

/// Two units of the same category, resolved once and applied many times
#[derive(Debug, Clone, PartialEq)]
pub struct UnitPair {
    pub category: String,
    pub from: Unit,
    pub to: Unit,
    kind: PairKind,
}

impl UnitPair {
    /// Resolve `from` and `to` inside `category`
    pub fn resolve(
        registry: &CategoryRegistry,
        category: &str,
        from: &str,
        to: &str,
    ) -> Result<Self, ConversionError> {
        let cat = registry.category(category)?;
        Self::within(cat, from, to)
    }

    /// Resolve within an already located category
    pub fn within(category: &Category, from: &str, to: &str) -> Result<Self, ConversionError> {
        let lookup = |name: &str| {
            category.get(name).cloned().ok_or_else(|| ConversionError::UnitNotFound {
                category: category.id.clone(),
                unit: name.to_string(),
            })
        };
        let from_unit = lookup(from)?;
        let to_unit = lookup(to)?;

        let kind = match (from_unit.scale, to_unit.scale) {
            (UnitScale::Linear { factor: a }, UnitScale::Linear { factor: b }) => {
                PairKind::Linear { from: a, to: b }
            }
            (UnitScale::Temperature { scale: a }, UnitScale::Temperature { scale: b }) => {
                PairKind::Temperature { from: a, to: b }
            }
            _ => {
                return Err(ConversionError::IncompatibleUnits {
                    from: from_unit.id,
                    to: to_unit.id,
                })
            }
        };

        Ok(UnitPair {
            category: category.id.clone(),
            from: from_unit,
            to: to_unit,
            kind,
        })
    }

    /// Convert one value
    pub fn apply(&self, value: f64) -> Result<f64, ConversionError> {
        match self.kind {
            PairKind::Linear { from, to } => convert(value, from, to),
            PairKind::Temperature { from, to } => {
                if !value.is_finite() {
                    return Err(ConversionError::NonFiniteInput(value));
                }
                finite_result(convert_temperature(value, from, to))
            }
        }
    }

    /// The same pair, reversed
    pub fn inverse(&self) -> UnitPair {
        let kind = match self.kind {
            PairKind::Linear { from, to } => PairKind::Linear { from: to, to: from },
            PairKind::Temperature { from, to } => PairKind::Temperature { from: to, to: from },
        };
        UnitPair {
            category: self.category.clone(),
            from: self.to.clone(),
            to: self.from.clone(),
            kind,
        }
    }
}

/// One conversion as requested by a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    pub value: NumericInput,
}

impl ConversionRequest {
    pub fn new(category: &str, from_unit: &str, to_unit: &str, value: impl Into<NumericInput>) -> Self {
        ConversionRequest {
            category: category.to_string(),
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            value: value.into(),
        }
    }
}

/// Outcome of a single conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub category: String,
    pub input_value: f64,
    pub output_value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// What the UI renders: a display string plus the raw number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOutput {
    pub formatted_value: String,
    pub raw_value: f64,
}

/// Registry-backed converter with a display precision
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    registry: &'a CategoryRegistry,
    precision: usize,
}

impl<'a> Converter<'a> {
    pub fn new(registry: &'a CategoryRegistry) -> Self {
        Converter {
            registry,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Converter over the built-in table
    pub fn standard() -> Converter<'static> {
        Converter::new(CategoryRegistry::standard())
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn registry(&self) -> &'a CategoryRegistry {
        self.registry
    }

    /// Resolve a unit pair against this converter's registry
    pub fn pair(&self, category: &str, from: &str, to: &str) -> Result<UnitPair, ConversionError> {
        UnitPair::resolve(self.registry, category, from, to)
    }

    /// Run a request through the table
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
        let input_value = request.value.resolve()?;
        let pair = self.pair(&request.category, &request.from_unit, &request.to_unit)?;
        let output_value = pair.apply(input_value)?;

        Ok(ConversionResult {
            category: pair.category,
            input_value,
            output_value,
            from_unit: pair.from.id,
            to_unit: pair.to.id,
        })
    }

    /// Run a request and render it for display
    pub fn convert_formatted(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionOutput, ConversionError> {
        let result = self.convert(request)?;
        Ok(self.format(result.output_value))
    }

    pub fn format(&self, value: f64) -> ConversionOutput {
        ConversionOutput {
            formatted_value: format_fixed(value, self.precision),
            raw_value: value,
        }
    }
}
