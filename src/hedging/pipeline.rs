//! Overlay rules and the shared reduction helpers.
//!
//! Every rule takes the running hedged amount and returns the new one. A rule
//! whose parameter is absent returns `None` and leaves the amount untouched.
//!
//! # Rules
//!
//! | Overlay | Effect when present |
//! |---|---|
//! | stop loss | `0` if `current <= stop_loss` |
//! | take profit | `risk_tolerance` if `current >= take_profit` |
//! | trailing stop (`> 0`) | `0` if `current <= max(current - trail, stop_loss or -inf)` |
//! | partial hedging | `min(h, h - h * pct)` |
//! | diversification | `min(h, h - h * factor)` |
//! | rebalancing | `h - h * pct` |
//! | correlation | `h * abs(c)` if `c < 0`, else `h * (1 + c)` |
//! | volatility stop | `0` if `current - vol >= (stop_loss or -inf)` |
//! | profit target | `risk_tolerance` if `current >= target` |
//! | max drawdown (`> 0`) | `0` if `current <= (1 - dd) * settlement` |
//! | cost averaging | `min(h, h * factor)` |
//! | dynamic sizing | `min(h, h * multiplier)` |
//! | option cost | `h - cost` |
//! | stress testing (`> 0`) | `min(h, h * factor)` |
//! | scenario analysis (`> 0`) | `min(h, h * factor)` |

use super::input::HedgeInput;
use super::overlays::{Overlay, OverlayParameters};

/// Values every rule may read. Only the hedged amount changes between rules.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleContext<'a> {
    pub(crate) input: &'a HedgeInput,
    pub(crate) overlays: &'a OverlayParameters,
    pub(crate) settlement_amount: f64,
}

impl RuleContext<'_> {
    /// Stop loss level, or negative infinity when absent.
    fn stop_loss_floor(&self) -> f64 {
        self.overlays.stop_loss.unwrap_or(f64::NEG_INFINITY)
    }
}

impl Overlay {
    /// Applies this overlay to `hedged`.
    ///
    /// Returns `None` when the overlay's parameter is absent. A present overlay
    /// whose condition does not hold returns `Some(hedged)`.
    pub(crate) fn apply(self, ctx: &RuleContext<'_>, hedged: f64) -> Option<f64> {
        let value = self.parameter(ctx.overlays)?;
        let current = ctx.input.current_rate;

        let next = match self {
            Overlay::StopLoss => {
                if current <= value {
                    0.0
                } else {
                    hedged
                }
            }
            Overlay::TakeProfit | Overlay::ProfitTarget => {
                if current >= value {
                    ctx.input.risk_tolerance
                } else {
                    hedged
                }
            }
            Overlay::TrailingStop => {
                if value > 0.0 && current <= greater(current - value, ctx.stop_loss_floor()) {
                    0.0
                } else {
                    hedged
                }
            }
            Overlay::PartialHedging | Overlay::Diversification => carve_out(hedged, value),
            Overlay::Rebalancing => hedged - hedged * value,
            Overlay::CorrelationAdjustment => {
                if value < 0.0 {
                    hedged * value.abs()
                } else {
                    hedged * (1.0 + value)
                }
            }
            // Compares a rate difference with a rate level; kept as-is.
            Overlay::VolatilityStop => {
                if current - value >= ctx.stop_loss_floor() {
                    0.0
                } else {
                    hedged
                }
            }
            Overlay::MaxDrawdown => {
                if value > 0.0 && current <= (1.0 - value) * ctx.settlement_amount {
                    0.0
                } else {
                    hedged
                }
            }
            Overlay::CostAveraging | Overlay::DynamicPositionSizing => scaled_cap(hedged, value),
            Overlay::OptionCost => hedged - value,
            Overlay::StressTesting | Overlay::ScenarioAnalysis => {
                if value > 0.0 {
                    scaled_cap(hedged, value)
                } else {
                    hedged
                }
            }
        };

        Some(next)
    }
}

/// Keeps what remains of `hedged` after carving out `fraction` of it, never
/// exceeding `hedged`.
#[must_use]
pub(crate) fn carve_out(hedged: f64, fraction: f64) -> f64 {
    let carved = hedged * fraction;
    let remaining = hedged - carved;
    lesser(hedged, remaining)
}

/// Caps `hedged` at `hedged * factor`.
#[must_use]
pub(crate) fn scaled_cap(hedged: f64, factor: f64) -> f64 {
    lesser(hedged, hedged * factor)
}

/// Minimum that propagates NaN from either operand and orders `-0.0` below
/// `0.0`.
#[must_use]
fn lesser(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == b {
        if b.is_sign_negative() { b } else { a }
    } else if b < a {
        b
    } else {
        a
    }
}

/// Maximum that propagates NaN from either operand and orders `0.0` above
/// `-0.0`.
#[must_use]
fn greater(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == b {
        if b.is_sign_positive() { b } else { a }
    } else if b > a {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> HedgeInput {
        HedgeInput::new(100_000.0, 1.20, 1.10, 1_000.0, 0.1, 50_000.0)
    }

    fn run(overlay: Overlay, overlays: &OverlayParameters, hedged: f64) -> Option<f64> {
        let input = input();
        let ctx = RuleContext {
            input: &input,
            overlays,
            settlement_amount: 109_000.0,
        };
        overlay.apply(&ctx, hedged)
    }

    #[test]
    fn test_absent_overlay_is_skipped() {
        let overlays = OverlayParameters::new();
        for overlay in Overlay::PIPELINE {
            assert_eq!(run(overlay, &overlays, 1_234.0), None);
        }
    }

    #[test]
    fn test_stop_loss_triggers_at_level() {
        let overlays = OverlayParameters::new().with_stop_loss(1.20);
        assert_eq!(run(Overlay::StopLoss, &overlays, 80_000.0), Some(0.0));

        let overlays = OverlayParameters::new().with_stop_loss(1.15);
        assert_eq!(run(Overlay::StopLoss, &overlays, 80_000.0), Some(80_000.0));
    }

    #[test]
    fn test_take_profit_resets_to_risk_tolerance() {
        let overlays = OverlayParameters::new().with_take_profit(1.05);
        assert_eq!(run(Overlay::TakeProfit, &overlays, 0.0), Some(50_000.0));

        let overlays = OverlayParameters::new().with_take_profit(1.25);
        assert_eq!(run(Overlay::TakeProfit, &overlays, 10.0), Some(10.0));
    }

    #[test]
    fn test_trailing_stop_without_stop_loss_never_triggers() {
        // current - trail is always below current for a positive trail.
        let overlays = OverlayParameters::new().with_trailing_stop(0.05);
        assert_eq!(run(Overlay::TrailingStop, &overlays, 100.0), Some(100.0));
    }

    #[test]
    fn test_trailing_stop_uses_stop_loss_floor() {
        let overlays = OverlayParameters::new()
            .with_trailing_stop(0.05)
            .with_stop_loss(1.30);
        assert_eq!(run(Overlay::TrailingStop, &overlays, 100.0), Some(0.0));
    }

    #[test]
    fn test_trailing_stop_non_positive_is_inert() {
        let overlays = OverlayParameters::new()
            .with_trailing_stop(0.0)
            .with_stop_loss(1.30);
        assert_eq!(run(Overlay::TrailingStop, &overlays, 100.0), Some(100.0));
    }

    #[test]
    fn test_partial_hedging_and_diversification() {
        let overlays = OverlayParameters::new()
            .with_partial_hedging_percentage(0.5)
            .with_diversification_factor(0.3);
        assert_eq!(run(Overlay::PartialHedging, &overlays, 50_000.0), Some(25_000.0));
        assert_eq!(run(Overlay::Diversification, &overlays, 25_000.0), Some(17_500.0));
    }

    #[test]
    fn test_carve_out_negative_fraction_keeps_amount() {
        // remaining would exceed hedged, so the min keeps hedged.
        assert_eq!(carve_out(100.0, -0.5), 100.0);
    }

    #[test]
    fn test_rebalancing_direct_subtraction() {
        let overlays = OverlayParameters::new().with_rebalancing_percentage(-0.5);
        assert_eq!(run(Overlay::Rebalancing, &overlays, 100.0), Some(150.0));
    }

    #[test]
    fn test_correlation_dampens_and_amplifies() {
        let overlays = OverlayParameters::new().with_correlation_threshold(-0.5);
        assert_eq!(run(Overlay::CorrelationAdjustment, &overlays, 100.0), Some(50.0));

        let overlays = OverlayParameters::new().with_correlation_threshold(0.5);
        assert_eq!(run(Overlay::CorrelationAdjustment, &overlays, 100.0), Some(150.0));

        let overlays = OverlayParameters::new().with_correlation_threshold(0.0);
        assert_eq!(run(Overlay::CorrelationAdjustment, &overlays, 100.0), Some(100.0));
    }

    #[test]
    fn test_volatility_stop_without_stop_loss_triggers() {
        let overlays = OverlayParameters::new().with_volatility_stop_loss(1.1);
        assert_eq!(run(Overlay::VolatilityStop, &overlays, 100.0), Some(0.0));
    }

    #[test]
    fn test_volatility_stop_without_stop_loss_triggers_below_distance() {
        // current - vol is negative; only a -inf floor makes this trigger.
        let input = HedgeInput::new(100_000.0, 1.00, 1.10, 1_000.0, 0.1, 50_000.0);
        let overlays = OverlayParameters::new().with_volatility_stop_loss(1.5);
        let ctx = RuleContext {
            input: &input,
            overlays: &overlays,
            settlement_amount: 109_000.0,
        };
        assert_eq!(Overlay::VolatilityStop.apply(&ctx, 100.0), Some(0.0));
    }

    #[test]
    fn test_volatility_stop_compared_with_stop_loss() {
        let overlays = OverlayParameters::new()
            .with_volatility_stop_loss(1.1)
            .with_stop_loss(1.15);
        assert_eq!(run(Overlay::VolatilityStop, &overlays, 100.0), Some(100.0));

        let overlays = OverlayParameters::new()
            .with_volatility_stop_loss(0.1)
            .with_stop_loss(0.5);
        assert_eq!(run(Overlay::VolatilityStop, &overlays, 100.0), Some(0.0));
    }

    #[test]
    fn test_max_drawdown_against_settlement() {
        let overlays = OverlayParameters::new().with_max_drawdown(0.2);
        assert_eq!(run(Overlay::MaxDrawdown, &overlays, 100.0), Some(0.0));

        let overlays = OverlayParameters::new().with_max_drawdown(0.0);
        assert_eq!(run(Overlay::MaxDrawdown, &overlays, 100.0), Some(100.0));

        // (1 - 1.5) * settlement is negative, below the current rate.
        let overlays = OverlayParameters::new().with_max_drawdown(1.5);
        assert_eq!(run(Overlay::MaxDrawdown, &overlays, 100.0), Some(100.0));
    }

    #[test]
    fn test_scaled_caps() {
        let overlays = OverlayParameters::new()
            .with_cost_average_factor(0.8)
            .with_dynamic_position_multiplier(1.2);
        assert_eq!(run(Overlay::CostAveraging, &overlays, 100.0), Some(80.0));
        assert_eq!(run(Overlay::DynamicPositionSizing, &overlays, 100.0), Some(100.0));
        // Negative amounts: the larger magnitude is the minimum.
        assert_eq!(run(Overlay::DynamicPositionSizing, &overlays, -100.0), Some(-120.0));
    }

    #[test]
    fn test_option_cost_can_go_negative() {
        let overlays = OverlayParameters::new().with_option_cost(500.0);
        assert_eq!(run(Overlay::OptionCost, &overlays, 0.0), Some(-500.0));
    }

    #[test]
    fn test_stress_and_scenario_require_positive() {
        let overlays = OverlayParameters::new()
            .with_stress_testing(0.0)
            .with_scenario_analysis(-0.5);
        assert_eq!(run(Overlay::StressTesting, &overlays, 100.0), Some(100.0));
        assert_eq!(run(Overlay::ScenarioAnalysis, &overlays, 100.0), Some(100.0));

        let overlays = OverlayParameters::new()
            .with_stress_testing(0.8)
            .with_scenario_analysis(0.9);
        assert_eq!(run(Overlay::StressTesting, &overlays, 100.0), Some(80.0));
        assert_eq!(run(Overlay::ScenarioAnalysis, &overlays, 100.0), Some(90.0));
    }

    #[test]
    fn test_reductions_never_increase_for_unit_factors() {
        for &h in &[0.0, 1.0, 123.45, 80_000.0] {
            for &f in &[0.0, 0.25, 0.5, 0.75, 1.0] {
                assert!(carve_out(h, f) <= h);
                assert!(scaled_cap(h, f) <= h);
            }
        }
    }

    #[test]
    fn test_nan_propagates_through_min_and_max() {
        assert!(carve_out(f64::NAN, 0.5).is_nan());
        assert!(scaled_cap(100.0, f64::NAN).is_nan());
        assert!(greater(f64::NAN, 1.0).is_nan());
        assert_eq!(greater(1.0, f64::NEG_INFINITY), 1.0);
    }

    #[test]
    fn test_signed_zero_ordering() {
        assert!(lesser(0.0, -0.0).is_sign_negative());
        assert!(lesser(-0.0, 0.0).is_sign_negative());
        assert!(greater(-0.0, 0.0).is_sign_positive());
        assert!(greater(0.0, -0.0).is_sign_positive());
    }

    #[test]
    fn test_negative_multiplier_on_zeroed_position_yields_negative_zero() {
        // 0.0 * -1.0 is -0.0, which is the lesser of the two zeros.
        let overlays = OverlayParameters::new().with_dynamic_position_multiplier(-1.0);
        let after = run(Overlay::DynamicPositionSizing, &overlays, 0.0).unwrap();
        assert_eq!(after, 0.0);
        assert!(after.is_sign_negative());
    }
}
