//! The hedge calculator.

use tracing::{debug, trace};

use super::input::HedgeInput;
use super::overlays::{Overlay, OverlayParameters};
use super::pipeline::RuleContext;
use super::result::{HedgeBreakdown, HedgeResult, OverlayStep};

/// Stateless currency-hedge calculator.
///
/// All operations are pure and total: they never fail, never panic and keep
/// no state between calls. Malformed inputs such as NaN propagate through the
/// arithmetic.
///
/// # Example
///
/// ```rust
/// use fx_hedge_rs::hedging::{HedgeCalculator, HedgeInput, OverlayParameters};
///
/// let input = HedgeInput::new(100_000.0, 1.20, 1.10, 1_000.0, 0.1, 50_000.0);
/// let result = HedgeCalculator::apply_hedging_strategy(&input, &OverlayParameters::new());
///
/// assert_eq!(result.settlement_amount, 100_000.0 * 1.10 - 1_000.0);
/// assert_eq!(result.hedged_amount, input.initial_hedged_amount());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HedgeCalculator;

impl HedgeCalculator {
    /// Converts `amount` at `exchange_rate`.
    ///
    /// ```rust
    /// use fx_hedge_rs::hedging::HedgeCalculator;
    ///
    /// assert_eq!(HedgeCalculator::settle(100.0, 1.5), 150.0);
    /// ```
    #[must_use]
    pub fn settle(amount: f64, exchange_rate: f64) -> f64 {
        amount * exchange_rate
    }

    /// Settlement amount: `amount` at the forward rate, net of transaction cost.
    #[must_use]
    pub fn settlement_amount(input: &HedgeInput) -> f64 {
        Self::settle(input.amount, input.forward_rate) - input.transaction_cost
    }

    /// Runs the overlay pipeline and returns the settlement and hedged amounts.
    ///
    /// Overlays are applied in [`Overlay::PIPELINE`] order; each one reads the
    /// running hedged amount and may replace it. Absent overlays are skipped.
    #[must_use]
    pub fn apply_hedging_strategy(
        input: &HedgeInput,
        overlays: &OverlayParameters,
    ) -> HedgeResult {
        let settlement_amount = Self::settlement_amount(input);
        let ctx = RuleContext {
            input,
            overlays,
            settlement_amount,
        };

        let hedged_amount = Overlay::PIPELINE
            .into_iter()
            .fold(input.initial_hedged_amount(), |hedged, overlay| {
                match overlay.apply(&ctx, hedged) {
                    Some(next) => {
                        debug!(%overlay, before = hedged, after = next, "overlay applied");
                        next
                    }
                    None => {
                        trace!(%overlay, "overlay absent, skipped");
                        hedged
                    }
                }
            });

        debug!(settlement_amount, hedged_amount, "hedging strategy evaluated");
        HedgeResult::new(settlement_amount, hedged_amount)
    }

    /// Runs the same pipeline as [`apply_hedging_strategy`](Self::apply_hedging_strategy)
    /// and records every overlay's effect.
    ///
    /// ```rust
    /// use fx_hedge_rs::hedging::{HedgeCalculator, HedgeInput, Overlay, OverlayParameters};
    ///
    /// let input = HedgeInput::new(100_000.0, 1.20, 1.10, 1_000.0, 0.1, 50_000.0);
    /// let overlays = OverlayParameters::new().with_option_cost(500.0);
    ///
    /// let breakdown = HedgeCalculator::explain(&input, &overlays);
    /// let step = breakdown.step(Overlay::OptionCost).unwrap();
    /// assert_eq!(step.after, step.before - 500.0);
    /// assert_eq!(breakdown.result(), HedgeCalculator::apply_hedging_strategy(&input, &overlays));
    /// ```
    #[must_use]
    pub fn explain(input: &HedgeInput, overlays: &OverlayParameters) -> HedgeBreakdown {
        let mut breakdown = HedgeBreakdown::start(input, Self::settlement_amount(input));
        let ctx = RuleContext {
            input,
            overlays,
            settlement_amount: breakdown.settlement_amount,
        };

        let mut hedged = breakdown.initial_hedged_amount;
        for overlay in Overlay::PIPELINE {
            let after = overlay.apply(&ctx, hedged).unwrap_or(hedged);
            breakdown.steps.push(OverlayStep {
                overlay,
                parameter: overlay.parameter(overlays),
                before: hedged,
                after,
            });
            hedged = after;
        }

        breakdown
    }
}
