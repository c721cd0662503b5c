//! Currency-hedge calculation.
//!
//! This module computes the settlement amount and the risk-adjusted hedged
//! amount of a currency hedge.
//!
//! # Overview
//!
//! - **Settlement**: `amount * forward_rate - transaction_cost`
//! - **Initial hedge**: `amount + amount * (forward - current) - amount * margin`
//! - **Overlays**: fifteen optional rules applied in a fixed order
//!   ([`Overlay::PIPELINE`]), each reading and possibly replacing the running
//!   hedged amount
//!
//! Order matters. Stop-type overlays zero the position, and take-profit and
//! profit-target reset it to the risk tolerance, so a later reset can undo an
//! earlier stop. Reductions such as partial hedging never lift a zeroed
//! position back up.
//!
//! # Example
//!
//! ```rust
//! use fx_hedge_rs::hedging::{HedgeCalculator, HedgeInput, OverlayParameters};
//!
//! let input = HedgeInput::new(100_000.0, 1.20, 1.10, 1_000.0, 0.1, 50_000.0);
//! let overlays = OverlayParameters::new()
//!     .with_stop_loss(1.25)
//!     .with_partial_hedging_percentage(0.5);
//!
//! let result = HedgeCalculator::apply_hedging_strategy(&input, &overlays);
//! assert_eq!(result.hedged_amount, 0.0);
//! ```

mod calculator;
mod input;
mod overlays;
mod pipeline;
mod result;
mod scenario;

pub use calculator::HedgeCalculator;
pub use input::HedgeInput;
pub use overlays::{Overlay, OverlayParameters};
pub use result::{DecimalHedgeResult, HedgeBreakdown, HedgeResult, OverlayStep};
pub use scenario::HedgeScenario;
