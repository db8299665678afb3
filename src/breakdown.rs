use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;
use tracing::trace;

use crate::{config::PLATE_EPSILON, plate::PlateSet, weight_unit::WeightUnit};

/// Plates for one side of the bar, heaviest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlateBreakdown {
    pub plates: Vec<f64>,
    pub unit: WeightUnit,
}

impl PlateBreakdown {
    #[must_use]
    pub fn new(plates: Vec<f64>, unit: WeightUnit) -> Self {
        PlateBreakdown { plates, unit }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    #[must_use]
    pub fn per_side(&self) -> f64 {
        self.plates.iter().sum()
    }

    /// Total on the bar once both sides are loaded.
    #[must_use]
    pub fn loaded(&self, bar_weight: f64) -> f64 {
        bar_weight + self.per_side() * 2.0
    }

    /// Consecutive identical plates as `(plate, count)`.
    #[must_use]
    pub fn grouped(&self) -> Vec<(f64, usize)> {
        self.plates
            .iter()
            .dedup_with_count()
            .map(|(count, plate)| (*plate, count))
            .collect()
    }
}

impl Display for PlateBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "empty bar");
        }

        let groups = self
            .grouped()
            .into_iter()
            .map(|(plate, count)| match count {
                1 => format!("{plate}"),
                _ => format!("{count} × {plate}"),
            })
            .join(", ");

        write!(f, "{groups} {} per side", self.unit)
    }
}

impl IntoIterator for PlateBreakdown {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.plates.into_iter()
    }
}

/// Greedy per-side decomposition of `target - bar` using `plates` heaviest first.
///
/// Targets at or below the bar give an empty breakdown. Whatever remains below the
/// smallest plate is dropped. A plate is taken when the remainder is within `epsilon`
/// of it, so the loaded bar can exceed the target by at most `2 × epsilon` per plate.
#[must_use]
pub fn compute_plate_breakdown(target: f64, bar: f64, plates: &PlateSet) -> PlateBreakdown {
    compute_plate_breakdown_with_epsilon(target, bar, plates, PLATE_EPSILON)
}

#[must_use]
pub fn compute_plate_breakdown_with_epsilon(
    target: f64,
    bar: f64,
    plates: &PlateSet,
    epsilon: f64,
) -> PlateBreakdown {
    let mut breakdown = PlateBreakdown::new(Vec::new(), plates.unit());

    if target.is_nan() || target <= bar {
        return breakdown;
    }

    let mut remaining = (target - bar) / 2.0;

    for &plate in plates.denominations() {
        while remaining >= plate - epsilon {
            breakdown.plates.push(plate);
            remaining -= plate;
        }
    }

    trace!(target, bar, leftover = remaining, plates = ?breakdown.plates, "plate breakdown");

    breakdown
}

/// Loads `from`, `from + step`, ... up to and including `to`. Each load is computed
/// from its index, so float error does not build up across the range.
pub fn load_range(from: f64, to: f64, step: f64) -> impl Iterator<Item = f64> {
    (0_u32..)
        .map(move |i| from + f64::from(i) * step)
        .take_while(move |load| *load <= to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_load_at_or_below_bar() {
        let plates = PlateSet::pounds();
        assert!(compute_plate_breakdown(45.0, 45.0, &plates).is_empty());
        assert!(compute_plate_breakdown(30.0, 45.0, &plates).is_empty());
        assert!(compute_plate_breakdown(-100.0, 45.0, &plates).is_empty());
        assert!(compute_plate_breakdown(f64::NAN, 45.0, &plates).is_empty());
    }

    #[test]
    fn single_and_double_plates() {
        let plates = PlateSet::pounds();
        assert_eq!(compute_plate_breakdown(135.0, 45.0, &plates).plates, vec![45.0]);
        assert_eq!(
            compute_plate_breakdown(225.0, 45.0, &plates).plates,
            vec![45.0, 45.0]
        );
    }

    #[test]
    fn mixes_denominations_heaviest_first() {
        let plates = PlateSet::pounds();
        // (185 - 45) / 2 = 70
        assert_eq!(
            compute_plate_breakdown(185.0, 45.0, &plates).plates,
            vec![45.0, 25.0]
        );
        // (100 - 45) / 2 = 27.5
        assert_eq!(
            compute_plate_breakdown(100.0, 45.0, &plates).plates,
            vec![25.0, 2.5]
        );
    }

    #[test]
    fn drops_leftover_below_smallest_plate() {
        let plates = PlateSet::pounds();
        // (52 - 45) / 2 = 3.5, one 2.5 and 1 lb left unloaded
        let breakdown = compute_plate_breakdown(52.0, 45.0, &plates);
        assert_eq!(breakdown.plates, vec![2.5]);
        assert_eq!(breakdown.loaded(45.0), 50.0);
    }

    #[test]
    fn epsilon_absorbs_float_error() {
        let plates = PlateSet::kilograms();
        // 0.1 + 0.2 style error: per side is a hair under 1.25
        let target = 20.0 + 2.0 * (1.25 - 0.000_01);
        let breakdown = compute_plate_breakdown(target, 20.0, &plates);
        assert_eq!(breakdown.plates, vec![1.25]);

        let overshoot = breakdown.loaded(20.0) - target;
        assert!(overshoot > 0.0 && overshoot <= 2.0 * PLATE_EPSILON);
    }

    #[test]
    fn kilogram_breakdown() {
        let plates = PlateSet::kilograms();
        assert_eq!(
            compute_plate_breakdown(45.0, 20.0, &plates).plates,
            vec![10.0, 2.5]
        );
    }

    #[test]
    fn groups_for_display() {
        let breakdown = PlateBreakdown::new(vec![45.0, 45.0, 10.0, 2.5], WeightUnit::Pound);
        assert_eq!(breakdown.grouped(), vec![(45.0, 2), (10.0, 1), (2.5, 1)]);
        assert_eq!(breakdown.to_string(), "2 × 45, 10, 2.5 lb per side");
        assert_eq!(
            PlateBreakdown::new(Vec::new(), WeightUnit::Kilogram).to_string(),
            "empty bar"
        );
    }

    #[test]
    fn load_range_does_not_accumulate_error() {
        let loads = load_range(45.0, 46.0, 0.1).collect::<Vec<_>>();
        assert_eq!(loads.len(), 11);
        assert_eq!(loads[3], 45.0 + 3.0 * 0.1);
        assert_eq!(loads[10], 46.0);
    }

    #[test]
    fn load_range_is_empty_when_from_exceeds_to() {
        assert_eq!(load_range(50.0, 45.0, 5.0).count(), 0);
    }
}
