use serde::{Deserialize, Serialize};

use crate::weight_unit::WeightUnit;

/// Plate denominations available for one unit system, heaviest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPlateSet")]
pub struct PlateSet {
    unit: WeightUnit,
    denominations: Vec<f64>,
}

#[derive(Deserialize)]
struct RawPlateSet {
    unit: WeightUnit,
    denominations: Vec<f64>,
}

impl From<RawPlateSet> for PlateSet {
    fn from(raw: RawPlateSet) -> Self {
        PlateSet::new(raw.unit, raw.denominations)
    }
}

impl PlateSet {
    /// Builds a set from arbitrary weights. Non-positive and non-finite entries are
    /// discarded and the rest sorted descending without duplicates.
    #[must_use]
    pub fn new(unit: WeightUnit, weights: Vec<f64>) -> Self {
        let mut denominations = weights
            .into_iter()
            .filter(|w| w.is_finite() && *w > 0.0)
            .collect::<Vec<_>>();
        denominations.sort_by(|a, b| b.total_cmp(a));
        denominations.dedup();

        PlateSet {
            unit,
            denominations,
        }
    }

    #[must_use]
    pub fn pounds() -> Self {
        PlateSet::new(WeightUnit::Pound, vec![45.0, 35.0, 25.0, 15.0, 10.0, 5.0, 2.5])
    }

    #[must_use]
    pub fn kilograms() -> Self {
        PlateSet::new(
            WeightUnit::Kilogram,
            vec![25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25],
        )
    }

    #[must_use]
    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    #[must_use]
    pub fn denominations(&self) -> &[f64] {
        &self.denominations
    }

    #[must_use]
    pub fn smallest(&self) -> Option<f64> {
        self.denominations.last().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }
}
