//! Categories: ordered unit lists with validated defaults

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::unit::{Unit, UnitScale};

/// Whether a category converts by factor or by temperature formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Linear,
    Temperature,
}

/// A measurement domain with its convertible units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub units: Vec<Unit>,
    pub default_from: String,
    pub default_to: String,
}

impl Category {
    pub fn new(id: &str, label: &str, default_from: &str, default_to: &str) -> Self {
        Category {
            id: id.to_string(),
            label: label.to_string(),
            units: Vec::new(),
            default_from: default_from.to_string(),
            default_to: default_to.to_string(),
        }
    }

    /// Builder: append a unit
    pub fn unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    /// Look up a unit by id or alias
    pub fn get(&self, name: &str) -> Option<&Unit> {
        // Exact id first so an alias in one unit cannot shadow another's id
        self.units
            .iter()
            .find(|u| u.id == name)
            .or_else(|| self.units.iter().find(|u| u.matches(name)))
    }

    /// The unit with factor 1, for linear categories
    pub fn base_unit(&self) -> Option<&Unit> {
        self.units.iter().find(|u| u.is_base())
    }

    /// The category's kind, judged from its first unit
    pub fn kind(&self) -> CategoryKind {
        match self.units.first().map(|u| u.scale) {
            Some(UnitScale::Temperature { .. }) => CategoryKind::Temperature,
            _ => CategoryKind::Linear,
        }
    }

    /// Default (from, to) units
    pub fn default_pair(&self) -> (&str, &str) {
        (&self.default_from, &self.default_to)
    }

    /// Check every table invariant.
    ///
    /// Linear categories need exactly one unit with factor 1 and only positive
    /// finite factors. Temperature categories may not mix in linear units.
    /// Both defaults must name units of this category.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.units.is_empty() {
            return Err(RegistryError::EmptyCategory(self.id.clone()));
        }

        let mut seen = HashSet::new();
        for unit in &self.units {
            for name in unit.names() {
                if !seen.insert(name.to_lowercase()) {
                    return Err(RegistryError::DuplicateUnit {
                        category: self.id.clone(),
                        unit: name.to_string(),
                    });
                }
            }
        }

        match self.kind() {
            CategoryKind::Linear => {
                let mut base_count = 0;
                for unit in &self.units {
                    let factor = match unit.scale {
                        UnitScale::Linear { factor } => factor,
                        UnitScale::Temperature { .. } => {
                            return Err(RegistryError::MixedScales(self.id.clone()));
                        }
                    };
                    if !(factor.is_finite() && factor > 0.0) {
                        return Err(RegistryError::InvalidFactor {
                            category: self.id.clone(),
                            unit: unit.id.clone(),
                            factor,
                        });
                    }
                    if factor == 1.0 {
                        base_count += 1;
                    }
                }
                match base_count {
                    0 => return Err(RegistryError::MissingBaseUnit(self.id.clone())),
                    1 => {}
                    n => {
                        return Err(RegistryError::MultipleBaseUnits {
                            category: self.id.clone(),
                            count: n,
                        })
                    }
                }
            }
            CategoryKind::Temperature => {
                if self
                    .units
                    .iter()
                    .any(|u| matches!(u.scale, UnitScale::Linear { .. }))
                {
                    return Err(RegistryError::MixedScales(self.id.clone()));
                }
            }
        }

        for default in [&self.default_from, &self.default_to] {
            if !self.units.iter().any(|u| &u.id == default) {
                return Err(RegistryError::UnknownDefaultUnit {
                    category: self.id.clone(),
                    unit: default.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Errors raised while building a registry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("category '{0}' is registered twice")]
    DuplicateCategory(String),

    #[error("category '{0}' has no units")]
    EmptyCategory(String),

    #[error("unit name '{unit}' is used twice in category '{category}'")]
    DuplicateUnit { category: String, unit: String },

    #[error("unit '{unit}' in category '{category}' has invalid factor {factor}")]
    InvalidFactor { category: String, unit: String, factor: f64 },

    #[error("category '{0}' has no base unit (factor 1)")]
    MissingBaseUnit(String),

    #[error("category '{category}' has {count} base units, expected exactly one")]
    MultipleBaseUnits { category: String, count: usize },

    #[error("default unit '{unit}' is not part of category '{category}'")]
    UnknownDefaultUnit { category: String, unit: String },

    #[error("category '{0}' mixes linear and temperature units")]
    MixedScales(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TemperatureScale;

    fn length() -> Category {
        Category::new("length", "Length", "m", "ft")
            .unit(Unit::linear("m", "Meter", 1.0).with_aliases(&["meter", "meters"]))
            .unit(Unit::linear("km", "Kilometer", 1000.0))
            .unit(Unit::linear("ft", "Foot", 0.3048).with_aliases(&["feet"]))
    }

    #[test]
    fn test_valid_category() {
        assert_eq!(length().validate(), Ok(()));
        assert_eq!(length().kind(), CategoryKind::Linear);
        assert_eq!(length().base_unit().map(|u| u.id.as_str()), Some("m"));
    }

    #[test]
    fn test_get_by_alias() {
        let cat = length();
        assert_eq!(cat.get("feet").map(|u| u.id.as_str()), Some("ft"));
        assert_eq!(cat.get("Meters").map(|u| u.id.as_str()), Some("m"));
        assert!(cat.get("furlong").is_none());
    }

    #[test]
    fn test_rejects_empty() {
        let cat = Category::new("empty", "Empty", "a", "b");
        assert_eq!(cat.validate(), Err(RegistryError::EmptyCategory("empty".to_string())));
    }

    #[test]
    fn test_rejects_unknown_default() {
        let mut cat = length();
        cat.default_to = "mi".to_string();
        assert!(matches!(
            cat.validate(),
            Err(RegistryError::UnknownDefaultUnit { ref unit, .. }) if unit == "mi"
        ));
    }

    #[test]
    fn test_rejects_zero_and_non_finite_factor() {
        let cat = length().unit(Unit::linear("bad", "Bad", 0.0));
        assert!(matches!(cat.validate(), Err(RegistryError::InvalidFactor { .. })));

        let cat = length().unit(Unit::linear("nan", "NaN", f64::NAN));
        assert!(matches!(cat.validate(), Err(RegistryError::InvalidFactor { .. })));

        let cat = length().unit(Unit::linear("neg", "Negative", -1.0));
        assert!(matches!(cat.validate(), Err(RegistryError::InvalidFactor { .. })));
    }

    #[test]
    fn test_rejects_missing_and_multiple_base() {
        let cat = Category::new("x", "X", "a", "b")
            .unit(Unit::linear("a", "A", 2.0))
            .unit(Unit::linear("b", "B", 3.0));
        assert_eq!(cat.validate(), Err(RegistryError::MissingBaseUnit("x".to_string())));

        let cat = length().unit(Unit::linear("m2", "Other meter", 1.0));
        assert!(matches!(
            cat.validate(),
            Err(RegistryError::MultipleBaseUnits { count: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let cat = length().unit(Unit::linear("yd", "Yard", 0.9144).with_aliases(&["FEET"]));
        assert!(matches!(cat.validate(), Err(RegistryError::DuplicateUnit { .. })));
    }

    #[test]
    fn test_rejects_mixed_scales() {
        let cat = length().unit(Unit::temperature("c", "Celsius", TemperatureScale::Celsius));
        assert_eq!(cat.validate(), Err(RegistryError::MixedScales("length".to_string())));

        let cat = Category::new("temperature", "Temperature", "c", "f")
            .unit(Unit::temperature("c", "Celsius", TemperatureScale::Celsius))
            .unit(Unit::temperature("f", "Fahrenheit", TemperatureScale::Fahrenheit))
            .unit(Unit::linear("m", "Meter", 1.0));
        assert_eq!(cat.validate(), Err(RegistryError::MixedScales("temperature".to_string())));
    }

    #[test]
    fn test_temperature_category_has_no_base_requirement() {
        let cat = Category::new("temperature", "Temperature", "c", "f")
            .unit(Unit::temperature("c", "Celsius", TemperatureScale::Celsius))
            .unit(Unit::temperature("f", "Fahrenheit", TemperatureScale::Fahrenheit));
        assert_eq!(cat.validate(), Ok(()));
        assert_eq!(cat.kind(), CategoryKind::Temperature);
    }
}
