//! Hedge calculation results.

use std::fmt;

use rust_decimal::prelude::FromPrimitive;

use super::input::HedgeInput;
use super::overlays::Overlay;
use crate::Decimal;
use crate::types::error::{FxError, FxResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output of a hedge calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HedgeResult {
    /// Amount converted at the forward rate, net of transaction cost.
    pub settlement_amount: f64,

    /// Risk-adjusted position size after every overlay.
    pub hedged_amount: f64,
}

impl HedgeResult {
    /// Creates a new result.
    #[must_use]
    pub fn new(settlement_amount: f64, hedged_amount: f64) -> Self {
        Self {
            settlement_amount,
            hedged_amount,
        }
    }

    /// Returns the result as a `(settlement_amount, hedged_amount)` pair.
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.settlement_amount, self.hedged_amount)
    }

    /// Converts both amounts to decimals rounded to `dp` places.
    ///
    /// # Errors
    ///
    /// Returns `FxError::NonFiniteValue` if either amount is NaN or infinite,
    /// and `FxError::OutOfRange` if it is finite but beyond the decimal range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fx_hedge_rs::hedging::HedgeResult;
    /// use fx_hedge_rs::dec;
    ///
    /// let result = HedgeResult::new(109_000.000_000_01, -500.0);
    /// let rounded = result.to_decimal(2).unwrap();
    /// assert_eq!(rounded.settlement_amount, dec!(109000.00));
    /// assert_eq!(rounded.hedged_amount, dec!(-500.00));
    /// ```
    pub fn to_decimal(&self, dp: u32) -> FxResult<DecimalHedgeResult> {
        Ok(DecimalHedgeResult {
            settlement_amount: decimal_from("settlement_amount", self.settlement_amount)?
                .round_dp(dp),
            hedged_amount: decimal_from("hedged_amount", self.hedged_amount)?.round_dp(dp),
        })
    }
}

impl From<HedgeResult> for (f64, f64) {
    fn from(result: HedgeResult) -> Self {
        result.as_tuple()
    }
}

impl fmt::Display for HedgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Settlement Amount: {}", self.settlement_amount)?;
        write!(f, "Hedged Amount: {}", self.hedged_amount)
    }
}

fn decimal_from(field: &str, value: f64) -> FxResult<Decimal> {
    if !value.is_finite() {
        return Err(FxError::NonFiniteValue(format!("{field} is {value}")));
    }
    Decimal::from_f64(value).ok_or_else(|| FxError::OutOfRange(format!("{field} is {value:e}")))
}

/// A [`HedgeResult`] rounded to a fixed number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DecimalHedgeResult {
    /// Settlement amount.
    pub settlement_amount: Decimal,
    /// Hedged amount.
    pub hedged_amount: Decimal,
}

/// One overlay's effect within a [`HedgeBreakdown`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OverlayStep {
    /// The overlay.
    pub overlay: Overlay,
    /// Its parameter, `None` if it was skipped.
    pub parameter: Option<f64>,
    /// Hedged amount entering the overlay.
    pub before: f64,
    /// Hedged amount leaving the overlay.
    pub after: f64,
}

impl OverlayStep {
    /// Returns `true` if the overlay's parameter was present.
    #[must_use]
    pub fn applied(&self) -> bool {
        self.parameter.is_some()
    }

    /// Returns `true` if the overlay changed the hedged amount.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.before.to_bits() != self.after.to_bits()
    }
}

/// Step-by-step record of a hedge calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HedgeBreakdown {
    /// `forward_rate - current_rate`.
    pub rate_difference: f64,
    /// Margin reserved against the amount.
    pub margin_required: f64,
    /// Settlement amount.
    pub settlement_amount: f64,
    /// Hedged amount before the first overlay.
    pub initial_hedged_amount: f64,
    /// One entry per overlay, in pipeline order.
    pub steps: Vec<OverlayStep>,
}

impl HedgeBreakdown {
    pub(crate) fn start(input: &HedgeInput, settlement_amount: f64) -> Self {
        Self {
            rate_difference: input.rate_difference(),
            margin_required: input.margin_required(),
            settlement_amount,
            initial_hedged_amount: input.initial_hedged_amount(),
            steps: Vec::with_capacity(Overlay::PIPELINE.len()),
        }
    }

    /// Final hedged amount.
    #[must_use]
    pub fn hedged_amount(&self) -> f64 {
        self.steps
            .last()
            .map_or(self.initial_hedged_amount, |step| step.after)
    }

    /// The calculation result.
    #[must_use]
    pub fn result(&self) -> HedgeResult {
        HedgeResult::new(self.settlement_amount, self.hedged_amount())
    }

    /// Returns the step recorded for `overlay`.
    #[must_use]
    pub fn step(&self, overlay: Overlay) -> Option<&OverlayStep> {
        self.steps.iter().find(|step| step.overlay == overlay)
    }

    /// Iterates over the overlays that changed the hedged amount.
    pub fn effective_steps(&self) -> impl Iterator<Item = &OverlayStep> {
        self.steps.iter().filter(|step| step.changed())
    }
}
