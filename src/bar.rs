use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    calculator_error::CalculatorError,
    weight_unit::{WeightUnit, pounds_to_kilograms, round_to_increment},
};

/// Bar weight held canonically in pounds, with the kilogram weight it is sold as.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub pounds: f64,
    pub kilograms: f64,
}

impl Bar {
    #[must_use]
    pub fn new(pounds: f64, kilograms: f64) -> Self {
        Bar { pounds, kilograms }
    }

    /// The 45 lb / 20 kg bar.
    #[must_use]
    pub fn standard() -> Self {
        Bar::new(45.0, 20.0)
    }

    /// The 35 lb / 15 kg bar.
    #[must_use]
    pub fn womens() -> Self {
        Bar::new(35.0, 15.0)
    }

    /// A bar known only by its pound weight; the kilogram weight is the conversion
    /// snapped to `kilogram_increment`.
    #[must_use]
    pub fn from_pounds(pounds: f64, kilogram_increment: f64) -> Self {
        Bar::new(
            pounds,
            round_to_increment(pounds_to_kilograms(pounds), kilogram_increment),
        )
    }

    /// Parses `standard`, `womens` or a weight in pounds. A bar given in pounds gets
    /// its kilogram weight from [`Bar::from_pounds`].
    ///
    /// # Errors
    /// If `s` names no bar and is not a positive weight.
    pub fn parse(s: &str, kilogram_increment: f64) -> Result<Self, CalculatorError> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "men" | "mens" | "45" | "45lb" | "20kg" => Ok(Bar::standard()),
            "womens" | "women" | "35" | "35lb" | "15kg" => Ok(Bar::womens()),
            other => other
                .trim_end_matches("lb")
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w > 0.0)
                .map(|w| Bar::from_pounds(w, kilogram_increment))
                .ok_or_else(|| CalculatorError::InvalidBar(s.to_string())),
        }
    }

    #[must_use]
    pub fn weight(&self, unit: WeightUnit) -> f64 {
        match unit {
            WeightUnit::Pound => self.pounds,
            WeightUnit::Kilogram => self.kilograms,
        }
    }
}

impl Default for Bar {
    fn default() -> Self {
        Bar::standard()
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}lb / {}kg bar", self.pounds, self.kilograms)
    }
}
