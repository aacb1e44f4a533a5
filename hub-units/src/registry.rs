//! Category registry
//!
//! Built once, validated once, then shared read-only. Lookups never fall back
//! to a default unit: an unknown name is an error.

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;
use crate::category::{Category, RegistryError};
use crate::unit::{ConversionError, Unit};
use crate::tables;

/// The built-in conversion table
pub static STANDARD: LazyLock<CategoryRegistry> = LazyLock::new(|| {
    tables::standard_builder()
        .build()
        .unwrap_or_else(|e| panic!("built-in conversion table is invalid: {}", e))
});

/// Validated set of categories, in registration order
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The built-in registry
    pub fn standard() -> &'static CategoryRegistry {
        &STANDARD
    }

    /// Get a category by id (case-insensitive)
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.index
            .get(&id.trim().to_lowercase())
            .map(|&i| &self.categories[i])
    }

    /// Get a category or fail with `UnknownCategory`
    pub fn category(&self, id: &str) -> Result<&Category, ConversionError> {
        self.get(id)
            .ok_or_else(|| ConversionError::UnknownCategory(id.to_string()))
    }

    /// Get a unit of a category or fail with `UnitNotFound`
    pub fn unit(&self, category: &str, unit: &str) -> Result<&Unit, ConversionError> {
        let cat = self.category(category)?;
        cat.get(unit).ok_or_else(|| ConversionError::UnitNotFound {
            category: cat.id.clone(),
            unit: unit.to_string(),
        })
    }

    /// Find every category that has a unit answering to `name`
    pub fn find_unit(&self, name: &str) -> Vec<(&Category, &Unit)> {
        self.categories
            .iter()
            .filter_map(|c| c.get(name).map(|u| (c, u)))
            .collect()
    }

    /// Find the one category holding both `from` and `to`.
    ///
    /// Fails with `UnitNotFound` when a name is unknown everywhere,
    /// `IncompatibleUnits` when no category has both, and `AmbiguousUnit`
    /// when several categories do.
    pub fn locate_pair(&self, from: &str, to: &str) -> Result<&Category, ConversionError> {
        let mut shared: Vec<&Category> = self
            .categories
            .iter()
            .filter(|c| c.get(from).is_some() && c.get(to).is_some())
            .collect();

        match shared.len() {
            1 => Ok(shared.remove(0)),
            0 => {
                for name in [from, to] {
                    if self.find_unit(name).is_empty() {
                        return Err(ConversionError::UnitNotFound {
                            category: "*".to_string(),
                            unit: name.to_string(),
                        });
                    }
                }
                Err(ConversionError::IncompatibleUnits {
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
            _ => Err(ConversionError::AmbiguousUnit {
                unit: format!("{} -> {}", from, to),
                categories: shared.iter().map(|c| c.id.clone()).collect(),
            }),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Collects categories and validates them on `build`
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    categories: Vec<Category>,
}

impl RegistryBuilder {
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn build(self) -> Result<CategoryRegistry, RegistryError> {
        let mut index = HashMap::new();

        for (i, category) in self.categories.iter().enumerate() {
            category.validate()?;
            if index.insert(category.id.to_lowercase(), i).is_some() {
                return Err(RegistryError::DuplicateCategory(category.id.clone()));
            }
            debug!(
                category = %category.id,
                units = category.units.len(),
                "registered category"
            );
        }

        Ok(CategoryRegistry {
            categories: self.categories,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TemperatureScale;

    fn small_registry() -> CategoryRegistry {
        CategoryRegistry::builder()
            .with_category(
                Category::new("length", "Length", "m", "ft")
                    .unit(Unit::linear("m", "Meter", 1.0))
                    .unit(Unit::linear("ft", "Foot", 0.3048))
                    .unit(Unit::linear("t", "Twip", 0.0000176389)),
            )
            .with_category(
                Category::new("weight", "Weight", "kg", "lb")
                    .unit(Unit::linear("kg", "Kilogram", 1.0))
                    .unit(Unit::linear("lb", "Pound", 0.45359237))
                    .unit(Unit::linear("t", "Tonne", 1000.0)),
            )
            .with_category(
                Category::new("temperature", "Temperature", "c", "f")
                    .unit(Unit::temperature("c", "Celsius", TemperatureScale::Celsius))
                    .unit(Unit::temperature("f", "Fahrenheit", TemperatureScale::Fahrenheit)),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup() {
        let reg = small_registry();
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.ids(), vec!["length", "weight", "temperature"]);
        assert!(reg.get("LENGTH").is_some());
        assert_eq!(reg.unit("weight", "lb").unwrap().label, "Pound");
    }

    #[test]
    fn test_unknown_category_and_unit_fail_loudly() {
        let reg = small_registry();
        assert_eq!(
            reg.category("volume").unwrap_err(),
            ConversionError::UnknownCategory("volume".to_string())
        );
        assert!(matches!(
            reg.unit("length", "lb"),
            Err(ConversionError::UnitNotFound { .. })
        ));
    }

    #[test]
    fn test_find_unit_across_categories() {
        let reg = small_registry();
        let found = reg.find_unit("t");
        let ids: Vec<&str> = found.iter().map(|(c, _)| c.id.as_str()).collect();
        assert_eq!(ids, vec!["length", "weight"]);
        assert!(reg.find_unit("parsec").is_empty());
    }

    #[test]
    fn test_locate_pair() {
        let reg = small_registry();
        assert_eq!(reg.locate_pair("ft", "m").unwrap().id, "length");
        // "t" alone is ambiguous, but only weight has both "t" and "lb"
        assert_eq!(reg.locate_pair("t", "lb").unwrap().id, "weight");

        assert!(matches!(
            reg.locate_pair("ft", "parsec"),
            Err(ConversionError::UnitNotFound { ref unit, .. }) if unit == "parsec"
        ));
        assert!(matches!(
            reg.locate_pair("ft", "lb"),
            Err(ConversionError::IncompatibleUnits { .. })
        ));
        match reg.locate_pair("t", "t") {
            Err(ConversionError::AmbiguousUnit { categories, .. }) => {
                assert_eq!(categories, vec!["length".to_string(), "weight".to_string()]);
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let cat = Category::new("length", "Length", "m", "m").unit(Unit::linear("m", "Meter", 1.0));
        let result = CategoryRegistry::builder()
            .with_category(cat.clone())
            .with_category(cat)
            .build();
        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateCategory("length".to_string())
        );
    }

    #[test]
    fn test_build_propagates_category_errors() {
        let result = CategoryRegistry::builder()
            .with_category(
                Category::new("length", "Length", "m", "yd").unit(Unit::linear("m", "Meter", 1.0)),
            )
            .build();
        assert!(matches!(result, Err(RegistryError::UnknownDefaultUnit { .. })));
    }
}
