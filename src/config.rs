//! Calculator policy: plate sets, rounding increments and warm-up defaults.
//!
//! Everything the calculator needs beyond its inputs lives in [`CalculatorConfig`],
//! which is passed in explicitly. A JSON file may override any field, as long as
//! every increment and factor stays a positive number.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    calculator_error::CalculatorError,
    plate::PlateSet,
    warmup::WarmupPercentages,
    weight_unit::{KILOGRAMS_TO_POUNDS, POUNDS_TO_KILOGRAMS, WeightUnit},
};

pub const WARMUP_INCREMENT_LB: f64 = 5.0;
pub const WARMUP_INCREMENT_KG: f64 = 1.25;
pub const TARGET_INCREMENT_KG: f64 = 2.5;
pub const BAR_INCREMENT_KG: f64 = 1.25;
pub const PLATE_EPSILON: f64 = 0.0001;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub pound_plates: PlateSet,
    pub kilogram_plates: PlateSet,
    /// Warm-up weights are snapped to this many pounds before clamping.
    pub warmup_increment_lb: f64,
    /// Warm-up weights shown in kilograms are snapped to this increment.
    pub warmup_increment_kg: f64,
    pub target_increment_kg: f64,
    pub bar_increment_kg: f64,
    pub pounds_to_kilograms: f64,
    pub kilograms_to_pounds: f64,
    /// Slack when comparing the remaining per-side load against a plate.
    pub epsilon: f64,
    pub default_percentages: WarmupPercentages,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            pound_plates: PlateSet::pounds(),
            kilogram_plates: PlateSet::kilograms(),
            warmup_increment_lb: WARMUP_INCREMENT_LB,
            warmup_increment_kg: WARMUP_INCREMENT_KG,
            target_increment_kg: TARGET_INCREMENT_KG,
            bar_increment_kg: BAR_INCREMENT_KG,
            pounds_to_kilograms: POUNDS_TO_KILOGRAMS,
            kilograms_to_pounds: KILOGRAMS_TO_POUNDS,
            epsilon: PLATE_EPSILON,
            default_percentages: WarmupPercentages::default(),
        }
    }
}

impl CalculatorConfig {
    #[must_use]
    pub fn plates(&self, unit: WeightUnit) -> &PlateSet {
        match unit {
            WeightUnit::Pound => &self.pound_plates,
            WeightUnit::Kilogram => &self.kilogram_plates,
        }
    }

    ///
    /// # Errors
    /// If the file cannot be read, is not valid JSON, leaves a unit without plates, or
    /// sets an increment, factor or epsilon that is not a positive number. Unlike warm-up
    /// preferences, an explicitly requested config never falls back silently.
    ///
    pub fn load(path: &Path) -> Result<Self, CalculatorError> {
        let content = std::fs::read_to_string(path).map_err(|source| CalculatorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: CalculatorConfig = serde_json::from_str(&content)?;

        if !config.is_valid() {
            return Err(CalculatorError::InvalidConfig(path.to_path_buf()));
        }

        Ok(config)
    }

    fn is_valid(&self) -> bool {
        let positive = [
            self.warmup_increment_lb,
            self.warmup_increment_kg,
            self.target_increment_kg,
            self.bar_increment_kg,
            self.pounds_to_kilograms,
            self.kilograms_to_pounds,
            self.epsilon,
        ];

        !self.pound_plates.is_empty()
            && !self.kilogram_plates.is_empty()
            && positive.iter().all(|v| v.is_finite() && *v > 0.0)
    }
}
