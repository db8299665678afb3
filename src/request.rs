use std::str::FromStr;

use serde::Serialize;

use crate::{bar::Bar, calculator_error::CalculatorError, weight_unit::WeightUnit};

/// A weight as typed, e.g. `135`, `135lb` or `60 kg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Load {
    pub weight: f64,
    pub unit: Option<WeightUnit>,
}

impl FromStr for Load {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s.find(|c: char| c.is_alphabetic()).unwrap_or(s.len());
        let (weight, unit) = s.split_at(split);

        let weight = weight
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| CalculatorError::InvalidLoad(s.to_string()))?;

        let unit = match unit.trim() {
            "" => None,
            unit => Some(
                WeightUnit::from_str(unit)
                    .map_err(|_| CalculatorError::InvalidLoad(s.to_string()))?,
            ),
        };

        Ok(Load { weight, unit })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationRequest {
    /// Target as entered.
    pub target: f64,
    /// Unit `target` was entered in.
    pub target_unit: WeightUnit,
    pub bar: Bar,
    /// Unit results are shown and loaded in.
    pub unit: WeightUnit,
}

impl CalculationRequest {
    #[must_use]
    pub fn new(target: f64, target_unit: WeightUnit, bar: Bar, unit: WeightUnit) -> Self {
        CalculationRequest {
            target,
            target_unit,
            bar,
            unit,
        }
    }

    /// A load without its own unit is read in the active unit.
    #[must_use]
    pub fn from_load(load: Load, bar: Bar, unit: WeightUnit) -> Self {
        CalculationRequest::new(load.weight, load.unit.unwrap_or(unit), bar, unit)
    }
}
