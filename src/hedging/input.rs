//! Required inputs of a hedge calculation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six required inputs of a hedge calculation.
///
/// No field is validated. `margin_requirement` is a fraction in `[0, 1]` by
/// convention only, and NaN or infinite values propagate through the
/// calculation arithmetically.
///
/// # Example
///
/// ```rust
/// use fx_hedge_rs::hedging::HedgeInput;
///
/// let input = HedgeInput::new(100_000.0, 1.20, 1.10, 1_000.0, 0.1, 50_000.0);
/// assert_eq!(input.margin_required(), 100_000.0 * 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct HedgeInput {
    /// Amount to hedge, in the base currency.
    pub amount: f64,

    /// Current (spot) exchange rate between base and target currency.
    pub current_rate: f64,

    /// Forward exchange rate between base and target currency.
    pub forward_rate: f64,

    /// Transaction cost, in the target currency.
    pub transaction_cost: f64,

    /// Fraction of the amount reserved as margin (e.g. `0.1` = 10%).
    pub margin_requirement: f64,

    /// Amount the position is reset to when a take-profit or profit-target
    /// overlay triggers, in the target currency.
    pub risk_tolerance: f64,
}

impl HedgeInput {
    /// Creates a new `HedgeInput`.
    ///
    /// # Arguments
    ///
    /// * `amount` - Amount to hedge in the base currency
    /// * `current_rate` - Current exchange rate
    /// * `forward_rate` - Forward exchange rate
    /// * `transaction_cost` - Transaction cost in the target currency
    /// * `margin_requirement` - Margin requirement as a fraction
    /// * `risk_tolerance` - Risk tolerance in the target currency
    #[must_use]
    pub fn new(
        amount: f64,
        current_rate: f64,
        forward_rate: f64,
        transaction_cost: f64,
        margin_requirement: f64,
        risk_tolerance: f64,
    ) -> Self {
        Self {
            amount,
            current_rate,
            forward_rate,
            transaction_cost,
            margin_requirement,
            risk_tolerance,
        }
    }

    /// Returns `forward_rate - current_rate`.
    #[must_use]
    pub fn rate_difference(&self) -> f64 {
        self.forward_rate - self.current_rate
    }

    /// Returns the margin reserved against the amount.
    #[must_use]
    pub fn margin_required(&self) -> f64 {
        self.amount * self.margin_requirement
    }

    /// Returns the hedged amount before any overlay is applied.
    ///
    /// ```text
    /// hedged = amount + amount * (forward - current) - amount * margin
    /// ```
    #[must_use]
    pub fn initial_hedged_amount(&self) -> f64 {
        self.amount + self.amount * self.rate_difference() - self.margin_required()
    }
}
