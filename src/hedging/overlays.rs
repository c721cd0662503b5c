//! Optional risk-management overlays and their parameters.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An optional rule that conditionally modifies the hedged amount.
///
/// Variants are declared in pipeline order; see [`Overlay::PIPELINE`].
/// Serialized names match [`Overlay::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Overlay {
    /// Zeroes the position when the current rate is at or below the level.
    StopLoss,
    /// Resets the position to the risk tolerance when the current rate is at
    /// or above the level.
    TakeProfit,
    /// Zeroes the position when the current rate falls to the trailing level.
    TrailingStop,
    /// Keeps the part of the position left after carving out a percentage.
    #[cfg_attr(feature = "serde", serde(rename = "partialHedgingPercentage"))]
    PartialHedging,
    /// Keeps the part of the position left after a diversification carve-out.
    #[cfg_attr(feature = "serde", serde(rename = "diversificationFactor"))]
    Diversification,
    /// Subtracts a percentage of the position.
    #[cfg_attr(feature = "serde", serde(rename = "rebalancingPercentage"))]
    Rebalancing,
    /// Dampens (negative threshold) or amplifies (non-negative) the position.
    #[cfg_attr(feature = "serde", serde(rename = "correlationThreshold"))]
    CorrelationAdjustment,
    /// Zeroes the position on a volatility-based stop.
    #[cfg_attr(feature = "serde", serde(rename = "volatilityStopLoss"))]
    VolatilityStop,
    /// Resets the position to the risk tolerance at the profit target.
    ProfitTarget,
    /// Zeroes the position when the rate breaches the drawdown floor.
    MaxDrawdown,
    /// Caps the position at a cost-averaged fraction of itself.
    #[cfg_attr(feature = "serde", serde(rename = "costAverageFactor"))]
    CostAveraging,
    /// Caps the position at a multiple of itself.
    #[cfg_attr(feature = "serde", serde(rename = "dynamicPositionMultiplier"))]
    DynamicPositionSizing,
    /// Subtracts the cost of options used for hedging.
    OptionCost,
    /// Caps the position at its stress-tested size.
    StressTesting,
    /// Caps the position at its scenario-adjusted size.
    ScenarioAnalysis,
}

impl Overlay {
    /// Every overlay in the order the pipeline applies them.
    pub const PIPELINE: [Overlay; 15] = [
        Overlay::StopLoss,
        Overlay::TakeProfit,
        Overlay::TrailingStop,
        Overlay::PartialHedging,
        Overlay::Diversification,
        Overlay::Rebalancing,
        Overlay::CorrelationAdjustment,
        Overlay::VolatilityStop,
        Overlay::ProfitTarget,
        Overlay::MaxDrawdown,
        Overlay::CostAveraging,
        Overlay::DynamicPositionSizing,
        Overlay::OptionCost,
        Overlay::StressTesting,
        Overlay::ScenarioAnalysis,
    ];

    /// Returns the parameter name of this overlay.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Overlay::StopLoss => "stopLoss",
            Overlay::TakeProfit => "takeProfit",
            Overlay::TrailingStop => "trailingStop",
            Overlay::PartialHedging => "partialHedgingPercentage",
            Overlay::Diversification => "diversificationFactor",
            Overlay::Rebalancing => "rebalancingPercentage",
            Overlay::CorrelationAdjustment => "correlationThreshold",
            Overlay::VolatilityStop => "volatilityStopLoss",
            Overlay::ProfitTarget => "profitTarget",
            Overlay::MaxDrawdown => "maxDrawdown",
            Overlay::CostAveraging => "costAverageFactor",
            Overlay::DynamicPositionSizing => "dynamicPositionMultiplier",
            Overlay::OptionCost => "optionCost",
            Overlay::StressTesting => "stressTesting",
            Overlay::ScenarioAnalysis => "scenarioAnalysis",
        }
    }

    /// Looks up an overlay by its parameter name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::PIPELINE.into_iter().find(|o| o.name() == name)
    }

    /// Reads this overlay's parameter from `overlays`.
    #[must_use]
    pub fn parameter(self, overlays: &OverlayParameters) -> Option<f64> {
        overlays.get(self)
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of the optional overlays.
///
/// Each field is `None` when the overlay is absent, which is distinct from a
/// value of zero. Absent overlays are skipped by the pipeline.
///
/// # Example
///
/// ```rust
/// use fx_hedge_rs::hedging::{Overlay, OverlayParameters};
///
/// let overlays = OverlayParameters::new()
///     .with_stop_loss(1.15)
///     .with_option_cost(500.0);
///
/// assert_eq!(overlays.get(Overlay::StopLoss), Some(1.15));
/// assert_eq!(overlays.get(Overlay::TakeProfit), None);
/// assert_eq!(overlays.active().count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", default, deny_unknown_fields)
)]
pub struct OverlayParameters {
    /// Stop loss rate level.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub stop_loss: Option<f64>,

    /// Take profit rate level.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub take_profit: Option<f64>,

    /// Trailing stop distance below the current rate.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub trailing_stop: Option<f64>,

    /// Fraction of the position carved out by partial hedging.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub partial_hedging_percentage: Option<f64>,

    /// Fraction of the remaining position allocated for diversification.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub diversification_factor: Option<f64>,

    /// Fraction of the position rebalanced away.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rebalancing_percentage: Option<f64>,

    /// Correlation threshold used to scale the position.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub correlation_threshold: Option<f64>,

    /// Volatility-based stop distance.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub volatility_stop_loss: Option<f64>,

    /// Profit target rate level.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub profit_target: Option<f64>,

    /// Maximum allowed drawdown as a fraction.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_drawdown: Option<f64>,

    /// Fraction of the position kept by cost averaging.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cost_average_factor: Option<f64>,

    /// Multiplier for dynamic position sizing.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dynamic_position_multiplier: Option<f64>,

    /// Cost of options used for hedging.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub option_cost: Option<f64>,

    /// Fraction of the position kept under stress testing.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub stress_testing: Option<f64>,

    /// Fraction of the position kept under scenario analysis.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub scenario_analysis: Option<f64>,
}

impl OverlayParameters {
    /// Creates a parameter set with every overlay absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parameter of `overlay`, or `None` if it is absent.
    #[must_use]
    pub fn get(&self, overlay: Overlay) -> Option<f64> {
        match overlay {
            Overlay::StopLoss => self.stop_loss,
            Overlay::TakeProfit => self.take_profit,
            Overlay::TrailingStop => self.trailing_stop,
            Overlay::PartialHedging => self.partial_hedging_percentage,
            Overlay::Diversification => self.diversification_factor,
            Overlay::Rebalancing => self.rebalancing_percentage,
            Overlay::CorrelationAdjustment => self.correlation_threshold,
            Overlay::VolatilityStop => self.volatility_stop_loss,
            Overlay::ProfitTarget => self.profit_target,
            Overlay::MaxDrawdown => self.max_drawdown,
            Overlay::CostAveraging => self.cost_average_factor,
            Overlay::DynamicPositionSizing => self.dynamic_position_multiplier,
            Overlay::OptionCost => self.option_cost,
            Overlay::StressTesting => self.stress_testing,
            Overlay::ScenarioAnalysis => self.scenario_analysis,
        }
    }

    /// Sets (or clears, with `None`) the parameter of `overlay`.
    pub fn set(&mut self, overlay: Overlay, value: Option<f64>) {
        let slot = match overlay {
            Overlay::StopLoss => &mut self.stop_loss,
            Overlay::TakeProfit => &mut self.take_profit,
            Overlay::TrailingStop => &mut self.trailing_stop,
            Overlay::PartialHedging => &mut self.partial_hedging_percentage,
            Overlay::Diversification => &mut self.diversification_factor,
            Overlay::Rebalancing => &mut self.rebalancing_percentage,
            Overlay::CorrelationAdjustment => &mut self.correlation_threshold,
            Overlay::VolatilityStop => &mut self.volatility_stop_loss,
            Overlay::ProfitTarget => &mut self.profit_target,
            Overlay::MaxDrawdown => &mut self.max_drawdown,
            Overlay::CostAveraging => &mut self.cost_average_factor,
            Overlay::DynamicPositionSizing => &mut self.dynamic_position_multiplier,
            Overlay::OptionCost => &mut self.option_cost,
            Overlay::StressTesting => &mut self.stress_testing,
            Overlay::ScenarioAnalysis => &mut self.scenario_analysis,
        };
        *slot = value;
    }

    /// Sets the parameter of `overlay`, builder style.
    #[must_use]
    pub fn with(mut self, overlay: Overlay, value: f64) -> Self {
        self.set(overlay, Some(value));
        self
    }

    /// Iterates over present overlays, in pipeline order.
    pub fn active(&self) -> impl Iterator<Item = (Overlay, f64)> + '_ {
        Overlay::PIPELINE
            .into_iter()
            .filter_map(|overlay| self.get(overlay).map(|value| (overlay, value)))
    }

    /// Returns `true` when no overlay is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Sets the stop loss level.
    #[must_use]
    pub fn with_stop_loss(self, value: f64) -> Self {
        self.with(Overlay::StopLoss, value)
    }

    /// Sets the take profit level.
    #[must_use]
    pub fn with_take_profit(self, value: f64) -> Self {
        self.with(Overlay::TakeProfit, value)
    }

    /// Sets the trailing stop distance.
    #[must_use]
    pub fn with_trailing_stop(self, value: f64) -> Self {
        self.with(Overlay::TrailingStop, value)
    }

    /// Sets the partial hedging percentage.
    #[must_use]
    pub fn with_partial_hedging_percentage(self, value: f64) -> Self {
        self.with(Overlay::PartialHedging, value)
    }

    /// Sets the diversification factor.
    #[must_use]
    pub fn with_diversification_factor(self, value: f64) -> Self {
        self.with(Overlay::Diversification, value)
    }

    /// Sets the rebalancing percentage.
    #[must_use]
    pub fn with_rebalancing_percentage(self, value: f64) -> Self {
        self.with(Overlay::Rebalancing, value)
    }

    /// Sets the correlation threshold.
    #[must_use]
    pub fn with_correlation_threshold(self, value: f64) -> Self {
        self.with(Overlay::CorrelationAdjustment, value)
    }

    /// Sets the volatility stop distance.
    #[must_use]
    pub fn with_volatility_stop_loss(self, value: f64) -> Self {
        self.with(Overlay::VolatilityStop, value)
    }

    /// Sets the profit target level.
    #[must_use]
    pub fn with_profit_target(self, value: f64) -> Self {
        self.with(Overlay::ProfitTarget, value)
    }

    /// Sets the maximum drawdown fraction.
    #[must_use]
    pub fn with_max_drawdown(self, value: f64) -> Self {
        self.with(Overlay::MaxDrawdown, value)
    }

    /// Sets the cost average factor.
    #[must_use]
    pub fn with_cost_average_factor(self, value: f64) -> Self {
        self.with(Overlay::CostAveraging, value)
    }

    /// Sets the dynamic position multiplier.
    #[must_use]
    pub fn with_dynamic_position_multiplier(self, value: f64) -> Self {
        self.with(Overlay::DynamicPositionSizing, value)
    }

    /// Sets the option cost.
    #[must_use]
    pub fn with_option_cost(self, value: f64) -> Self {
        self.with(Overlay::OptionCost, value)
    }

    /// Sets the stress testing fraction.
    #[must_use]
    pub fn with_stress_testing(self, value: f64) -> Self {
        self.with(Overlay::StressTesting, value)
    }

    /// Sets the scenario analysis fraction.
    #[must_use]
    pub fn with_scenario_analysis(self, value: f64) -> Self {
        self.with(Overlay::ScenarioAnalysis, value)
    }
}
