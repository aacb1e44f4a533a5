//! Temperature scales
//!
//! Temperature is the one category that is not a pure multiplication:
//! every scale has its own zero point. Values are normalized to Celsius and
//! then mapped to the target scale.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Offset between Celsius and Kelvin
pub const KELVIN_OFFSET: f64 = 273.15;

/// Freezing point of water on the Rankine scale
pub const RANKINE_FREEZING: f64 = 491.67;

/// Freezing point of water on the Fahrenheit scale
pub const FAHRENHEIT_FREEZING: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 4] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
        TemperatureScale::Rankine,
    ];

    /// Short symbol used in tables and exports
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
            TemperatureScale::Kelvin => "K",
            TemperatureScale::Rankine => "°R",
        }
    }

    /// Normalize a reading on this scale to Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - FAHRENHEIT_FREEZING) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - KELVIN_OFFSET,
            TemperatureScale::Rankine => (value - RANKINE_FREEZING) * 5.0 / 9.0,
        }
    }

    /// Map a Celsius reading onto this scale
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + FAHRENHEIT_FREEZING,
            TemperatureScale::Kelvin => celsius + KELVIN_OFFSET,
            TemperatureScale::Rankine => (celsius + KELVIN_OFFSET) * 9.0 / 5.0,
        }
    }
}

/// Convert a temperature between two scales.
///
/// Same-scale conversion returns the input untouched, so it never picks up
/// drift from the Celsius round trip.
pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    if from == to {
        return value;
    }
    to.from_celsius(from.to_celsius(value))
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returned when text does not name a temperature scale
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown temperature scale: {0}")]
pub struct UnknownScale(pub String);

impl FromStr for TemperatureScale {
    type Err = UnknownScale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('°').to_lowercase();
        match normalized.as_str() {
            "c" | "celsius" | "centigrade" => Ok(TemperatureScale::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureScale::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureScale::Kelvin),
            "r" | "ra" | "rankine" => Ok(TemperatureScale::Rankine),
            _ => Err(UnknownScale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureScale::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fahrenheit_celsius_anchors_exact() {
        assert_eq!(convert_temperature(32.0, Fahrenheit, Celsius), 0.0);
        assert_eq!(convert_temperature(212.0, Fahrenheit, Celsius), 100.0);
        assert_eq!(convert_temperature(-40.0, Fahrenheit, Celsius), -40.0);

        assert_eq!(convert_temperature(0.0, Celsius, Fahrenheit), 32.0);
        assert_eq!(convert_temperature(100.0, Celsius, Fahrenheit), 212.0);
        assert_eq!(convert_temperature(-40.0, Celsius, Fahrenheit), -40.0);
    }

    #[test]
    fn test_fahrenheit_round_trip_exact() {
        for v in [32.0, 212.0, -40.0] {
            let c = Fahrenheit.to_celsius(v);
            assert_eq!(Fahrenheit.from_celsius(c), v, "round trip of {}", v);
        }
    }

    #[test]
    fn test_kelvin() {
        assert!(approx(convert_temperature(0.0, Celsius, Kelvin), 273.15));
        assert!(approx(convert_temperature(0.0, Kelvin, Celsius), -273.15));
        assert!(approx(convert_temperature(373.15, Kelvin, Fahrenheit), 212.0));
    }

    #[test]
    fn test_rankine() {
        assert!(approx(convert_temperature(0.0, Celsius, Rankine), 491.67));
        assert!(approx(convert_temperature(491.67, Rankine, Celsius), 0.0));
        assert!(approx(convert_temperature(0.0, Kelvin, Rankine), 0.0));
        assert!(approx(convert_temperature(671.67, Rankine, Fahrenheit), 212.0));
    }

    #[test]
    fn test_self_conversion_is_identity() {
        for scale in TemperatureScale::ALL {
            for v in [-459.67, -40.0, 0.0, 0.1, 36.6, 1e6] {
                assert_eq!(convert_temperature(v, scale, scale), v);
            }
        }
    }

    #[test]
    fn test_all_pairs_round_trip() {
        for from in TemperatureScale::ALL {
            for to in TemperatureScale::ALL {
                for v in [-100.0, 0.0, 25.5, 1000.0] {
                    let there = convert_temperature(v, from, to);
                    let back = convert_temperature(there, to, from);
                    assert!((back - v).abs() < 1e-9, "{:?}->{:?}->{:?} for {}", from, to, from, v);
                }
            }
        }
    }

    #[test]
    fn test_below_absolute_zero_still_converts() {
        let k = convert_temperature(-300.0, Celsius, Kelvin);
        assert!(k < 0.0);
    }

    #[test]
    fn test_parse_scales() {
        assert_eq!("C".parse::<TemperatureScale>(), Ok(Celsius));
        assert_eq!("°F".parse::<TemperatureScale>(), Ok(Fahrenheit));
        assert_eq!("kelvin".parse::<TemperatureScale>(), Ok(Kelvin));
        assert_eq!(" Rankine ".parse::<TemperatureScale>(), Ok(Rankine));
        assert!("gas mark".parse::<TemperatureScale>().is_err());
    }

    #[test]
    fn test_unknown_scale_message() {
        let err = "gas mark".parse::<TemperatureScale>().unwrap_err();
        assert_eq!(err.to_string(), "unknown temperature scale: gas mark");
    }
}
