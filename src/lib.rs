//! # fx-hedge-rs
//!
//! A deterministic currency-hedge calculator.
//!
//! Given a base transaction amount, a spot/forward exchange-rate pair and a set
//! of optional risk-management overlays, the library computes:
//!
//! - the **settlement amount**: the amount converted at the forward rate, net of
//!   transaction cost;
//! - the **hedged amount**: the risk-adjusted position size after every overlay
//!   has been applied, in order.
//!
//! # Pipeline
//!
//! ```text
//! settlement = amount * forward - transaction_cost
//! hedged     = amount + amount * (forward - current) - amount * margin
//! hedged     = fold(Overlay::PIPELINE, hedged)
//! ```
//!
//! Overlays are independently optional. An absent overlay is skipped; a present
//! one may overwrite, scale or reduce the running hedged amount. The order is
//! fixed and later overlays may override the effect of earlier ones.
//!
//! # Example
//!
//! ```rust
//! use fx_hedge_rs::hedging::{HedgeCalculator, HedgeInput, OverlayParameters};
//!
//! let input = HedgeInput::new(100_000.0, 1.20, 1.10, 1_000.0, 0.1, 50_000.0);
//! let overlays = OverlayParameters::new()
//!     .with_stop_loss(1.15)
//!     .with_partial_hedging_percentage(0.5);
//!
//! let result = HedgeCalculator::apply_hedging_strategy(&input, &overlays);
//! assert_eq!(result.settlement_amount, 100_000.0 * 1.10 - 1_000.0);
//! ```
//!
//! # Features
//!
//! - `serde`: serialization of inputs, overlays and results, plus loading of a
//!   full [`hedging::HedgeScenario`] from JSON.

/// Hedge calculator, inputs, overlays and results.
pub mod hedging;

/// Shared types: errors and result aliases.
pub mod types;

pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Commonly used items.
pub mod prelude {
    pub use crate::hedging::{
        HedgeBreakdown, HedgeCalculator, HedgeInput, HedgeResult, Overlay, OverlayParameters,
        OverlayStep,
    };
    pub use crate::types::error::{FxError, FxResult};
    pub use crate::{Decimal, dec};
}
