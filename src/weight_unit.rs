use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::calculator_error::CalculatorError;

pub const POUNDS_TO_KILOGRAMS: f64 = 0.453_592;
pub const KILOGRAMS_TO_POUNDS: f64 = 2.204_62;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "kg")]
    Kilogram,
}

impl WeightUnit {
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            WeightUnit::Pound => "lb",
            WeightUnit::Kilogram => "kg",
        }
    }
}

/// Snaps `value` to the nearest multiple of `increment`, halves rounding away from zero.
#[must_use]
pub fn round_to_increment(value: f64, increment: f64) -> f64 {
    (value / increment).round() * increment
}

#[must_use]
pub fn pounds_to_kilograms(pounds: f64) -> f64 {
    pounds * POUNDS_TO_KILOGRAMS
}

#[must_use]
pub fn kilograms_to_pounds(kilograms: f64) -> f64 {
    kilograms * KILOGRAMS_TO_POUNDS
}

impl Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for WeightUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pound),
            "kg" | "kgs" | "kilo" | "kilos" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilogram),
            _ => Err(CalculatorError::InvalidUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_increment() {
        assert_eq!(round_to_increment(54.0, 5.0), 55.0);
        assert_eq!(round_to_increment(45.359_2, 2.5), 45.0);
        assert_eq!(round_to_increment(20.411_64, 1.25), 20.0);
    }

    #[test]
    fn rounds_halves_away_from_zero() {
        assert_eq!(round_to_increment(52.5, 5.0), 55.0);
        assert_eq!(round_to_increment(1.875, 1.25), 2.5);
    }

    #[test]
    fn parses_unit_aliases() {
        assert_eq!("LB".parse::<WeightUnit>().unwrap(), WeightUnit::Pound);
        assert_eq!("kgs".parse::<WeightUnit>().unwrap(), WeightUnit::Kilogram);
        assert!("stone".parse::<WeightUnit>().is_err());
    }

    #[test]
    fn converts_between_units() {
        assert!((pounds_to_kilograms(100.0) - 45.3592).abs() < 1e-9);
        assert!((kilograms_to_pounds(20.0) - 44.0924).abs() < 1e-9);
    }
}
