//! A complete hedge calculation request: required inputs plus overlays.

use super::calculator::HedgeCalculator;
use super::input::HedgeInput;
use super::overlays::OverlayParameters;
use super::result::{HedgeBreakdown, HedgeResult};

#[cfg(feature = "serde")]
use crate::types::error::FxResult;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Required inputs and overlay parameters of one calculation.
///
/// With the `serde` feature a scenario loads from JSON. Required inputs go
/// under `"input"` and overlay parameters under `"overlays"`; absent overlays
/// may be left out. Unknown keys are rejected at every level:
///
/// ```json
/// {
///   "input": {
///     "amount": 100000, "currentRate": 1.2, "forwardRate": 1.1,
///     "transactionCost": 1000, "marginRequirement": 0.1, "riskTolerance": 50000
///   },
///   "overlays": { "stopLoss": 1.15, "optionCost": 500 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct HedgeScenario {
    /// Required inputs.
    pub input: HedgeInput,

    /// Overlay parameters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overlays: OverlayParameters,
}

impl HedgeScenario {
    /// Creates a new scenario.
    #[must_use]
    pub fn new(input: HedgeInput, overlays: OverlayParameters) -> Self {
        Self { input, overlays }
    }

    /// Evaluates the scenario.
    #[must_use]
    pub fn evaluate(&self) -> HedgeResult {
        HedgeCalculator::apply_hedging_strategy(&self.input, &self.overlays)
    }

    /// Evaluates the scenario, recording every overlay's effect.
    #[must_use]
    pub fn explain(&self) -> HedgeBreakdown {
        HedgeCalculator::explain(&self.input, &self.overlays)
    }

    /// Parses a scenario from JSON.
    ///
    /// # Errors
    ///
    /// Returns `FxError::InvalidConfiguration` if a required input is missing,
    /// a value has the wrong type or any key is unknown (including an overlay
    /// placed outside `"overlays"`), and
    /// `FxError::Serialization` if the document is not valid JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> FxResult<Self> {
        let scenario = serde_json::from_str(json)?;
        Ok(scenario)
    }

    /// Serializes the scenario to JSON.
    ///
    /// # Errors
    ///
    /// Returns `FxError::Serialization` if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> FxResult<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "serde")]
    use crate::types::error::FxError;

    #[test]
    fn test_evaluate_matches_calculator() {
        let scenario = HedgeScenario::new(
            HedgeInput::new(100_000.0, 1.20, 1.10, 1_000.0, 0.1, 50_000.0),
            OverlayParameters::new().with_option_cost(500.0),
        );
        let expected = HedgeCalculator::apply_hedging_strategy(&scenario.input, &scenario.overlays);
        assert_eq!(scenario.evaluate(), expected);
        assert_eq!(scenario.explain().result(), expected);
    }

    #[cfg(feature = "serde")]
    const REQUIRED: &str = r#""input": {
            "amount": 100000, "currentRate": 1.2, "forwardRate": 1.1,
            "transactionCost": 1000, "marginRequirement": 0.1, "riskTolerance": 50000
        }"#;

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let json = format!(r#"{{ {REQUIRED}, "overlays": {{ "stopLoss": 1.15, "optionCost": 500 }} }}"#);
        let scenario = HedgeScenario::from_json(&json).unwrap();
        assert_eq!(scenario.input.amount, 100_000.0);
        assert_eq!(scenario.overlays.stop_loss, Some(1.15));
        assert_eq!(scenario.overlays.option_cost, Some(500.0));
        assert_eq!(scenario.overlays.take_profit, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_without_overlays() {
        let json = r#"{
            "input": {
                "amount": 1000, "currentRate": 1.0, "forwardRate": 1.0,
                "transactionCost": 0, "marginRequirement": 0, "riskTolerance": 0
            }
        }"#;
        let scenario = HedgeScenario::from_json(json).unwrap();
        assert!(scenario.overlays.is_empty());
        assert_eq!(scenario.evaluate().hedged_amount, 1_000.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_missing_input() {
        let json = r#"{ "input": { "amount": 1000 } }"#;
        assert!(matches!(
            HedgeScenario::from_json(json),
            Err(FxError::InvalidConfiguration(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_unknown_overlay() {
        let json = format!(r#"{{ {REQUIRED}, "overlays": {{ "leverage": 3 }} }}"#);
        assert!(matches!(
            HedgeScenario::from_json(&json),
            Err(FxError::InvalidConfiguration(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_overlay_outside_overlays() {
        let json = format!(r#"{{ {REQUIRED}, "stopLoss": 1.25 }}"#);
        assert!(matches!(
            HedgeScenario::from_json(&json),
            Err(FxError::InvalidConfiguration(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_overlay_among_inputs() {
        let json = r#"{
            "input": {
                "amount": 100000, "currentRate": 1.2, "forwardRate": 1.1,
                "transactionCost": 1000, "marginRequirement": 0.1, "riskTolerance": 50000,
                "stopLoss": 1.25
            }
        }"#;
        assert!(matches!(
            HedgeScenario::from_json(json),
            Err(FxError::InvalidConfiguration(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let scenario = HedgeScenario::new(
            HedgeInput::new(100_000.0, 1.20, 1.10, 1_000.0, 0.1, 50_000.0),
            OverlayParameters::new().with_stop_loss(1.15),
        );
        let json = scenario.to_json().unwrap();
        assert_eq!(HedgeScenario::from_json(&json).unwrap(), scenario);
    }
}
