//! Derived calculators built on the estimator and the model catalog.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`calculate_cost`] | USD cost of a token count; `0.0` for unpriced models |
//! | [`analyze_text`] | Estimate plus input/output cost for one text |
//! | [`calculate_total_time`] | First-token latency plus streaming time |
//! | [`generation_curve`] | Tokens produced over time, for plotting |
//! | [`estimate_energy`] | Inference energy, CO2 and everyday equivalents |

mod cost;
mod energy;
mod timing;

pub use cost::{analyze_text, calculate_cost, calculate_cost_in, CostEstimate, TextAnalysis};
pub use energy::{
    compare_providers, estimate_energy, EnergyEstimate, EnergyProfile, LED_BULB_HOUR_KWH,
    SMARTPHONE_CHARGE_KWH,
};
pub use timing::{
    calculate_total_time, generation_curve, tokens_generated_at, CurvePoint, SpeedProfile,
    TimingEstimate, DEFAULT_FIRST_TOKEN_LATENCY_MS, DEFAULT_TOKENS_PER_SECOND,
};
