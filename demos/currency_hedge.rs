//! Currency Hedge Example
//!
//! This example runs the hedging pipeline on a sample EUR/USD hedge with every
//! overlay enabled and prints the result and the per-overlay breakdown.
//!
//! Features demonstrated:
//! - Building required inputs and overlay parameters
//! - Evaluating the hedging strategy
//! - Inspecting each overlay's effect
//! - Rounding results for reporting
//!
//! Run with: `RUST_LOG=fx_hedge_rs=debug cargo run --example currency_hedge`

use fx_hedge_rs::hedging::{HedgeCalculator, HedgeInput, OverlayParameters};
use fx_hedge_rs::types::error::FxResult;
use tracing_subscriber::EnvFilter;

fn main() -> FxResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Currency Hedge Example ===\n");

    // 100,000 EUR at 1.20 spot, 1.10 forward, $1,000 cost, 10% margin,
    // $50,000 risk tolerance.
    let input = HedgeInput::new(100_000.0, 1.20, 1.10, 1_000.0, 0.1, 50_000.0);
    let overlays = sample_overlays();

    let result = HedgeCalculator::apply_hedging_strategy(&input, &overlays);
    println!("Settlement Amount (USD): {}", result.settlement_amount);
    println!("Hedged Amount (USD): {}", result.hedged_amount);

    display_breakdown(&input, &overlays);

    let rounded = result.to_decimal(2)?;
    println!("\n--- Rounded for Reporting ---\n");
    println!("Settlement Amount (USD): {}", rounded.settlement_amount);
    println!("Hedged Amount (USD): {}", rounded.hedged_amount);

    println!("\n=== Example Complete ===");
    Ok(())
}

/// Enables every overlay with the sample parameters.
fn sample_overlays() -> OverlayParameters {
    OverlayParameters::new()
        .with_stop_loss(1.15)
        .with_take_profit(1.05)
        .with_trailing_stop(0.05)
        .with_partial_hedging_percentage(0.5)
        .with_diversification_factor(0.3)
        .with_rebalancing_percentage(0.2)
        .with_correlation_threshold(-0.1)
        .with_volatility_stop_loss(1.1)
        .with_profit_target(1.3)
        .with_max_drawdown(0.2)
        .with_cost_average_factor(0.8)
        .with_dynamic_position_multiplier(1.2)
        .with_option_cost(500.0)
        .with_stress_testing(0.8)
        .with_scenario_analysis(0.9)
}

/// Prints how each overlay moved the hedged amount.
fn display_breakdown(input: &HedgeInput, overlays: &OverlayParameters) {
    println!("\n--- Overlay Breakdown ---\n");

    let breakdown = HedgeCalculator::explain(input, overlays);
    println!("Rate difference: {:.4}", breakdown.rate_difference);
    println!("Margin required: {:.2}", breakdown.margin_required);
    println!("Initial hedged amount: {:.2}\n", breakdown.initial_hedged_amount);

    for step in &breakdown.steps {
        let parameter = step
            .parameter
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        let marker = if step.changed() { "*" } else { " " };
        println!(
            "{marker} {:<28} {:>10} {:>14.2} -> {:>14.2}",
            step.overlay.name(),
            parameter,
            step.before,
            step.after
        );
    }
}
