use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    bar::Bar,
    breakdown::{PlateBreakdown, compute_plate_breakdown_with_epsilon},
    calculator_error::CalculatorError,
    config::CalculatorConfig,
    weight_unit::{WeightUnit, round_to_increment},
};

/// Ordered warm-up fractions of the working weight, each in `(0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WarmupPercentages(Vec<f64>);

impl WarmupPercentages {
    ///
    /// # Errors
    /// If the list is empty or any fraction is not a finite number in `(0, 1]`.
    ///
    pub fn new(fractions: Vec<f64>) -> Result<Self, CalculatorError> {
        if fractions.is_empty() {
            return Err(CalculatorError::InvalidPercentages(
                "at least one percentage is required".to_string(),
            ));
        }

        if let Some(bad) = fractions
            .iter()
            .find(|p| !p.is_finite() || **p <= 0.0 || **p > 1.0)
        {
            return Err(CalculatorError::InvalidPercentages(format!(
                "{bad} is outside (0, 1]"
            )));
        }

        Ok(WarmupPercentages(fractions))
    }

    #[must_use]
    pub fn fractions(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for WarmupPercentages {
    fn default() -> Self {
        WarmupPercentages(vec![0.40, 0.55, 0.70, 0.80, 0.90])
    }
}

impl TryFrom<Vec<f64>> for WarmupPercentages {
    type Error = CalculatorError;

    fn try_from(fractions: Vec<f64>) -> Result<Self, Self::Error> {
        WarmupPercentages::new(fractions)
    }
}

impl From<WarmupPercentages> for Vec<f64> {
    fn from(percentages: WarmupPercentages) -> Self {
        percentages.0
    }
}

/// Parses `40,55,70` or `0.4,0.55,0.7`; entries above 1 are whole percents.
impl FromStr for WarmupPercentages {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fractions = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                let value = part.trim_end_matches('%').parse::<f64>().map_err(|_| {
                    CalculatorError::InvalidPercentages(format!("{part:?} is not a number"))
                })?;
                Ok(if value > 1.0 { value / 100.0 } else { value })
            })
            .collect::<Result<Vec<_>, CalculatorError>>()?;

        WarmupPercentages::new(fractions)
    }
}

impl Display for WarmupPercentages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0.iter().map(|p| format!("{}%", (p * 100.0).round())).join(", ")
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WarmupSet {
    pub set_number: usize,
    pub percentage: f64,
    pub weight: f64,
    pub plates: PlateBreakdown,
}

impl Display for WarmupSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Set {} ({}%): {}{} [{}]",
            self.set_number,
            (self.percentage * 100.0).round(),
            self.weight,
            self.plates.unit,
            self.plates
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WarmupProtocol {
    sets: Vec<WarmupSet>,
}

impl WarmupProtocol {
    #[must_use]
    pub fn new(sets: Vec<WarmupSet>) -> Self {
        WarmupProtocol { sets }
    }

    #[must_use]
    pub fn sets(&self) -> &[WarmupSet] {
        &self.sets
    }

    #[must_use]
    pub fn get(&self, set_number: usize) -> Option<&WarmupSet> {
        self.sets.iter().find(|set| set.set_number == set_number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl IntoIterator for WarmupProtocol {
    type Item = WarmupSet;
    type IntoIter = std::vec::IntoIter<WarmupSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_iter()
    }
}

/// Builds one warm-up set per percentage, in the order given.
///
/// Weights are worked out from the canonical pound target, snapped to the pound
/// warm-up increment and floored at the bar. For kilograms the result is converted
/// and snapped again to the kilogram increment before plates are chosen.
#[must_use]
pub fn compute_warmup_protocol(
    target_lb: f64,
    bar: &Bar,
    percentages: &WarmupPercentages,
    unit: WeightUnit,
    config: &CalculatorConfig,
) -> WarmupProtocol {
    let plates = config.plates(unit);
    let bar_weight = bar.weight(unit);

    let sets = percentages
        .fractions()
        .iter()
        .enumerate()
        .map(|(i, &percentage)| {
            let raw_lb = round_to_increment(target_lb * percentage, config.warmup_increment_lb)
                .max(bar.pounds);

            let weight = match unit {
                WeightUnit::Pound => raw_lb,
                WeightUnit::Kilogram => round_to_increment(
                    raw_lb * config.pounds_to_kilograms,
                    config.warmup_increment_kg,
                )
                .max(bar_weight),
            };

            WarmupSet {
                set_number: i + 1,
                percentage,
                weight,
                plates: compute_plate_breakdown_with_epsilon(
                    weight,
                    bar_weight,
                    plates,
                    config.epsilon,
                ),
            }
        })
        .collect::<Vec<_>>();

    debug!(target_lb, %unit, sets = sets.len(), "computed warm-up protocol");

    WarmupProtocol::new(sets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protocol(target_lb: f64, unit: WeightUnit) -> WarmupProtocol {
        compute_warmup_protocol(
            target_lb,
            &Bar::standard(),
            &WarmupPercentages::default(),
            unit,
            &CalculatorConfig::default(),
        )
    }

    #[test]
    fn first_set_of_135_is_55_pounds() {
        let protocol = protocol(135.0, WeightUnit::Pound);
        let first = protocol.get(1).unwrap();

        // 135 × 0.4 = 54 -> 55
        assert_eq!(first.weight, 55.0);
        assert_eq!(first.plates.plates, vec![5.0]);
    }

    #[test]
    fn pound_protocol_for_225() {
        let weights = protocol(225.0, WeightUnit::Pound)
            .into_iter()
            .map(|set| set.weight)
            .collect::<Vec<_>>();

        // 90, 123.75, 157.5, 180, 202.5 snapped to 5 lb
        assert_eq!(weights, vec![90.0, 125.0, 160.0, 180.0, 205.0]);
    }

    #[test]
    fn sets_are_numbered_in_caller_order() {
        let percentages = WarmupPercentages::new(vec![0.9, 0.5]).unwrap();
        let protocol = compute_warmup_protocol(
            200.0,
            &Bar::standard(),
            &percentages,
            WeightUnit::Pound,
            &CalculatorConfig::default(),
        );

        let numbered = protocol
            .sets()
            .iter()
            .map(|set| (set.set_number, set.weight))
            .collect::<Vec<_>>();
        assert_eq!(numbered, vec![(1, 180.0), (2, 100.0)]);
    }

    #[test]
    fn light_targets_floor_at_the_bar() {
        for set in protocol(65.0, WeightUnit::Pound) {
            assert!(set.weight >= 45.0);
        }
        let first = protocol(65.0, WeightUnit::Pound).get(1).cloned().unwrap();
        assert_eq!(first.weight, 45.0);
        assert!(first.plates.is_empty());
    }

    #[test]
    fn kilogram_protocol_converts_and_snaps() {
        let protocol = protocol(225.0, WeightUnit::Kilogram);
        let first = protocol.get(1).unwrap();

        // 90 lb = 40.82 kg -> 41.25
        assert_eq!(first.weight, 41.25);
        assert_eq!(first.plates.unit, WeightUnit::Kilogram);
        // (41.25 - 20) / 2 = 10.625 -> 10 with 0.625 dropped
        assert_eq!(first.plates.plates, vec![10.0]);
    }

    #[test]
    fn womens_bar_floor_in_kilograms() {
        let protocol = compute_warmup_protocol(
            45.0,
            &Bar::womens(),
            &WarmupPercentages::default(),
            WeightUnit::Kilogram,
            &CalculatorConfig::default(),
        );
        for set in protocol.sets() {
            assert!(set.weight >= 15.0);
        }
    }

    #[test]
    fn parses_whole_percents_and_fractions() {
        assert_eq!(
            "40, 55,70%,80,90".parse::<WarmupPercentages>().unwrap(),
            WarmupPercentages::default()
        );
        assert_eq!(
            "0.5,0.75".parse::<WarmupPercentages>().unwrap().fractions(),
            &[0.5, 0.75]
        );
    }

    #[test]
    fn rejects_bad_percentages() {
        assert!("".parse::<WarmupPercentages>().is_err());
        assert!("40,abc".parse::<WarmupPercentages>().is_err());
        assert!("150".parse::<WarmupPercentages>().is_err());
        assert!(WarmupPercentages::new(vec![0.0]).is_err());
        assert!(WarmupPercentages::new(vec![f64::NAN]).is_err());
    }

    #[test]
    fn json_round_trips_as_plain_list() {
        let json = serde_json::to_string(&WarmupPercentages::default()).unwrap();
        assert_eq!(json, "[0.4,0.55,0.7,0.8,0.9]");
        assert!(serde_json::from_str::<WarmupPercentages>("[1.5]").is_err());
    }

    #[test]
    fn displays_sets() {
        let first = protocol(135.0, WeightUnit::Pound).get(1).cloned().unwrap();
        assert_eq!(first.to_string(), "Set 1 (40%): 55lb [5 lb per side]");
        assert_eq!(
            WarmupPercentages::default().to_string(),
            "40%, 55%, 70%, 80%, 90%"
        );
    }
}
