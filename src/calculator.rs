use serde::Serialize;
use tracing::debug;

use crate::{
    bar::Bar,
    breakdown::{PlateBreakdown, compute_plate_breakdown_with_epsilon},
    calculator_error::CalculatorError,
    config::CalculatorConfig,
    request::CalculationRequest,
    warmup::{WarmupPercentages, WarmupProtocol, compute_warmup_protocol},
    weight_unit::{WeightUnit, round_to_increment},
};

/// Everything shown for one request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Calculation {
    pub unit: WeightUnit,
    pub target: f64,
    pub bar: f64,
    pub plates: PlateBreakdown,
    pub loaded: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warmup: Option<WarmupProtocol>,
}

#[derive(Clone, Debug, Default)]
pub struct PlateCalculator {
    config: CalculatorConfig,
}

impl PlateCalculator {
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        PlateCalculator { config }
    }

    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Converts `weight` between units without snapping.
    #[must_use]
    pub fn convert(&self, weight: f64, from: WeightUnit, to: WeightUnit) -> f64 {
        match (from, to) {
            (WeightUnit::Pound, WeightUnit::Kilogram) => weight * self.config.pounds_to_kilograms,
            (WeightUnit::Kilogram, WeightUnit::Pound) => weight * self.config.kilograms_to_pounds,
            _ => weight,
        }
    }

    /// The target in pounds, the unit warm-ups are worked out in.
    #[must_use]
    pub fn target_pounds(&self, request: &CalculationRequest) -> f64 {
        self.convert(request.target, request.target_unit, WeightUnit::Pound)
    }

    /// The target as loaded in the active unit. A target entered in the other unit
    /// is converted and snapped: 2.5 kg going to kilograms, the pound warm-up
    /// increment going to pounds.
    #[must_use]
    pub fn target_display(&self, request: &CalculationRequest) -> f64 {
        if request.target_unit == request.unit {
            return request.target;
        }

        let converted = self.convert(request.target, request.target_unit, request.unit);
        match request.unit {
            WeightUnit::Kilogram => round_to_increment(converted, self.config.target_increment_kg),
            WeightUnit::Pound => round_to_increment(converted, self.config.warmup_increment_lb),
        }
    }

    #[must_use]
    pub fn bar_display(&self, request: &CalculationRequest) -> f64 {
        request.bar.weight(request.unit)
    }

    /// Parses a bar selection. Bars given in pounds snap to the configured bar increment.
    ///
    /// # Errors
    /// If `s` names no bar and is not a positive weight.
    pub fn parse_bar(&self, s: &str) -> Result<Bar, CalculatorError> {
        Bar::parse(s, self.config.bar_increment_kg)
    }

    #[must_use]
    pub fn breakdown(&self, request: &CalculationRequest) -> PlateBreakdown {
        compute_plate_breakdown_with_epsilon(
            self.target_display(request),
            self.bar_display(request),
            self.config.plates(request.unit),
            self.config.epsilon,
        )
    }

    #[must_use]
    pub fn warmup(
        &self,
        request: &CalculationRequest,
        percentages: &WarmupPercentages,
    ) -> WarmupProtocol {
        compute_warmup_protocol(
            self.target_pounds(request),
            &request.bar,
            percentages,
            request.unit,
            &self.config,
        )
    }

    #[must_use]
    pub fn calculate(
        &self,
        request: &CalculationRequest,
        percentages: Option<&WarmupPercentages>,
    ) -> Calculation {
        let target = self.target_display(request);
        let bar = self.bar_display(request);
        let plates = self.breakdown(request);
        let loaded = plates.loaded(bar);

        debug!(target, bar, loaded, unit = %request.unit, "calculated plates");

        Calculation {
            unit: request.unit,
            target,
            bar,
            loaded,
            plates,
            warmup: percentages.map(|percentages| self.warmup(request, percentages)),
        }
    }
}
