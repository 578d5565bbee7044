//! Model pricing and cost estimation.

use serde::{Deserialize, Serialize};

use crate::catalog::ModelCatalog;
use crate::tokens::{estimate_tokens, tokenization_info, TokenizationInfo};

/// Cost in USD of `token_count` tokens on the built-in catalog.
///
/// Returns `0.0` for a model without pricing; a zero therefore means
/// "unknown model" as often as "free".
pub fn calculate_cost(token_count: u64, model: &str, is_output: bool) -> f64 {
    calculate_cost_in(ModelCatalog::builtin(), token_count, model, is_output)
}

/// [`calculate_cost`] against an explicit (possibly overridden) catalog.
pub fn calculate_cost_in(
    catalog: &ModelCatalog,
    token_count: u64,
    model: &str,
    is_output: bool,
) -> f64 {
    let Some((input, output)) = catalog.pricing(model) else {
        tracing::warn!(model, "no pricing data for model, reporting zero cost");
        return 0.0;
    };
    let rate = if is_output { output } else { input };
    token_count as f64 * rate / 1000.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub model: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
    pub currency: String,
}

impl CostEstimate {
    /// `None` when the catalog has no pricing for `model`.
    pub fn calculate(
        model: &str,
        input_tokens: u64,
        output_tokens: u64,
        catalog: &ModelCatalog,
    ) -> Option<Self> {
        let (input, output) = catalog.pricing(model)?;
        let ic = (input_tokens as f64 / 1000.0) * input;
        let oc = (output_tokens as f64 / 1000.0) * output;
        Some(CostEstimate {
            model: model.to_string(),
            input_tokens,
            output_tokens,
            input_cost: ic,
            output_cost: oc,
            total_cost: ic + oc,
            currency: "USD".to_string(),
        })
    }

    pub fn format(&self) -> String {
        format!("{} {:.6}", self.currency, self.total_cost)
    }

    pub fn format_detailed(&self) -> String {
        if self.total_cost < 0.01 {
            format!("{:.4}¢", self.total_cost * 100.0)
        } else {
            format!("${:.4}", self.total_cost)
        }
    }
}

/// One analysed text: token estimate plus what it would cost either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub model: String,
    pub tokens: usize,
    pub chars: usize,
    pub chars_per_token: f64,
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
    pub tokenization: TokenizationInfo,
}

/// Estimate `text` under `model` and price it as both input and output.
pub fn analyze_text(text: &str, model: &str, catalog: &ModelCatalog) -> TextAnalysis {
    let tokens = estimate_tokens(text, model);
    let chars = text.chars().count();
    let input_cost = calculate_cost_in(catalog, tokens as u64, model, false);
    let output_cost = calculate_cost_in(catalog, tokens as u64, model, true);
    TextAnalysis {
        model: model.to_string(),
        tokens,
        chars,
        chars_per_token: if tokens == 0 {
            0.0
        } else {
            chars as f64 / tokens as f64
        },
        input_cost,
        output_cost,
        total_cost: input_cost + output_cost,
        tokenization: tokenization_info(model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogOverrides, CUSTOM_MODEL_ID};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_calculate_cost() {
        assert!(approx(calculate_cost(1000, "gpt-4o", false), 0.005));
        assert!(approx(calculate_cost(1000, "gpt-4o", true), 0.020));
        assert!(approx(calculate_cost(2000, "claude-3-opus", true), 0.15));
    }

    #[test]
    fn test_unknown_model_costs_zero() {
        assert_eq!(calculate_cost(500, "unknown-model-xyz", false), 0.0);
        // speed-only entries have no price either
        assert_eq!(calculate_cost(500, "grok-1", true), 0.0);
    }

    #[test]
    fn test_custom_model_pricing() {
        let catalog = ModelCatalog::builtin().with_overrides(&CatalogOverrides::custom_model(250, 40.0));
        assert!(approx(calculate_cost_in(&catalog, 1000, CUSTOM_MODEL_ID, true), 0.0005));
        assert_eq!(calculate_cost(1000, CUSTOM_MODEL_ID, true), 0.0);
    }

    #[test]
    fn test_cost_estimate() {
        let est = CostEstimate::calculate("gpt-4o", 1000, 500, ModelCatalog::builtin()).unwrap();
        assert!(approx(est.input_cost, 0.005));
        assert!(approx(est.output_cost, 0.010));
        assert!(approx(est.total_cost, 0.015));
        assert_eq!(est.format(), "USD 0.015000");
        assert_eq!(est.format_detailed(), "$0.0150");
        assert!(CostEstimate::calculate("nope", 1, 1, ModelCatalog::builtin()).is_none());
    }

    #[test]
    fn test_format_detailed_cents() {
        let est = CostEstimate::calculate("claude-3-haiku", 1000, 0, ModelCatalog::builtin()).unwrap();
        assert_eq!(est.format_detailed(), "0.0250¢");
    }

    #[test]
    fn test_analyze_text() {
        let a = analyze_text("Hi", "gpt-4o", ModelCatalog::builtin());
        assert_eq!(a.tokens, 4);
        assert_eq!(a.chars, 2);
        assert!(approx(a.chars_per_token, 0.5));
        assert!(approx(a.input_cost, 4.0 * 0.005 / 1000.0));
        assert_eq!(a.tokenization.scheme, "cl100k_base");

        let empty = analyze_text("", "gpt-4o", ModelCatalog::builtin());
        assert_eq!(empty.tokens, 0);
        assert_eq!(empty.chars_per_token, 0.0);
    }
}
