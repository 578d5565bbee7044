//! Model catalog: pricing, latency and throughput per model id.
//!
//! The built-in catalog is constructed once and never mutated. Callers that
//! need extra or adjusted models build [`CatalogOverrides`] and derive an
//! effective catalog with [`ModelCatalog::with_overrides`].

mod builtin;
mod overrides;
mod provider;

pub use overrides::{CatalogOverrides, ModelOverride, CUSTOM_MODEL_ID};
pub use provider::provider_for_model;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static data about one model. Fields are optional because the source
/// tables only cover overlapping subsets of models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCatalogEntry {
    pub id: String,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_cost_per_1k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_cost_per_1k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_token_latency_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_per_second: Option<f64>,
}

impl ModelCatalogEntry {
    /// `(input, output)` USD per 1K tokens, if both are known.
    pub fn pricing(&self) -> Option<(f64, f64)> {
        Some((self.input_cost_per_1k?, self.output_cost_per_1k?))
    }

    pub fn has_timing(&self) -> bool {
        self.first_token_latency_ms.is_some() || self.tokens_per_second.is_some()
    }
}

static BUILTIN: Lazy<ModelCatalog> = Lazy::new(|| ModelCatalog::from_entries(builtin::entries()));

/// Immutable lookup table keyed by model id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelCatalog {
    entries: BTreeMap<String, ModelCatalogEntry>,
}

impl ModelCatalog {
    /// The built-in catalog shared by the whole process.
    pub fn builtin() -> &'static ModelCatalog {
        &BUILTIN
    }

    /// Later entries with the same id replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = ModelCatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    /// Effective catalog: this one with `overrides` applied field by field.
    /// `self` is left untouched.
    pub fn with_overrides(&self, overrides: &CatalogOverrides) -> ModelCatalog {
        let mut merged = self.clone();
        for o in &overrides.models {
            let entry = merged
                .entries
                .entry(o.id.clone())
                .or_insert_with(|| ModelCatalogEntry {
                    id: o.id.clone(),
                    provider: provider_for_model(&o.id).to_string(),
                    input_cost_per_1k: None,
                    output_cost_per_1k: None,
                    first_token_latency_ms: None,
                    tokens_per_second: None,
                });
            o.apply_to(entry);
        }
        merged
    }

    pub fn get(&self, model: &str) -> Option<&ModelCatalogEntry> {
        self.entries.get(model)
    }

    pub fn contains(&self, model: &str) -> bool {
        self.entries.contains_key(model)
    }

    pub fn pricing(&self, model: &str) -> Option<(f64, f64)> {
        self.get(model)?.pricing()
    }

    pub fn first_token_latency_ms(&self, model: &str) -> Option<u32> {
        self.get(model)?.first_token_latency_ms
    }

    pub fn tokens_per_second(&self, model: &str) -> Option<f64> {
        self.get(model)?.tokens_per_second
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &ModelCatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Priced model ids grouped by provider.
    pub fn categories(&self) -> BTreeMap<String, Vec<String>> {
        let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for e in self.entries.values().filter(|e| e.pricing().is_some()) {
            out.entry(e.provider.clone()).or_default().push(e.id.clone());
        }
        out
    }

    /// Models a speed comparison can offer: priced, with both latency and
    /// throughput data.
    pub fn speed_models(&self) -> Vec<&str> {
        self.entries
            .values()
            .filter(|e| {
                e.pricing().is_some()
                    && e.first_token_latency_ms.is_some()
                    && e.tokens_per_second.is_some()
            })
            .map(|e| e.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pricing() {
        let catalog = ModelCatalog::builtin();
        assert_eq!(catalog.pricing("gpt-4o"), Some((0.005, 0.020)));
        assert_eq!(catalog.pricing("claude-3-haiku"), Some((0.00025, 0.00125)));
        assert_eq!(catalog.pricing("unknown-model-xyz"), None);
        // speed-only rows carry no pricing
        assert_eq!(catalog.pricing("grok-1"), None);
    }

    #[test]
    fn test_builtin_merges_speed_rows() {
        let gpt4 = ModelCatalog::builtin().get("gpt-4").unwrap();
        assert_eq!(gpt4.pricing(), Some((0.002, 0.008)));
        assert_eq!(gpt4.first_token_latency_ms, Some(750));
        assert_eq!(gpt4.tokens_per_second, Some(15.0));
    }

    #[test]
    fn test_categories() {
        let cats = ModelCatalog::builtin().categories();
        assert_eq!(cats["Meta"], vec!["llama-3-70b", "llama-3-8b"]);
        assert!(cats["Amazon"].contains(&"claude-3-5-sonnet".to_string()));
        assert!(!cats.contains_key("X.AI"));
    }

    #[test]
    fn test_speed_models() {
        let speed = ModelCatalog::builtin().speed_models();
        assert_eq!(
            speed,
            vec![
                "claude-3-haiku",
                "claude-3-opus",
                "claude-3-sonnet",
                "gemini-1.5-pro",
                "gpt-3.5-turbo",
                "gpt-4",
                "gpt-4-turbo",
            ]
        );
        // timed but unpriced, or priced but untimed
        assert!(!speed.contains(&"ernie-bot"));
        assert!(!speed.contains(&"grok-1"));
        assert!(!speed.contains(&"gpt-4o"));
    }

    #[test]
    fn test_custom_model_joins_speed_models() {
        let catalog = ModelCatalog::builtin().with_overrides(&CatalogOverrides::custom_model(250, 40.0));
        assert!(catalog.speed_models().contains(&CUSTOM_MODEL_ID));
    }

    #[test]
    fn test_overrides_do_not_touch_base() {
        let base = ModelCatalog::builtin();
        let overrides = CatalogOverrides::new().with_model(
            ModelOverride::new("gpt-4o").with_pricing(0.001, 0.002),
        );
        let effective = base.with_overrides(&overrides);
        assert_eq!(effective.pricing("gpt-4o"), Some((0.001, 0.002)));
        assert_eq!(base.pricing("gpt-4o"), Some((0.005, 0.020)));
        assert_eq!(effective.len(), base.len());
    }

    #[test]
    fn test_override_merges_per_field() {
        let overrides = CatalogOverrides::new()
            .with_model(ModelOverride::new("gpt-4").with_tokens_per_second(60.0));
        let effective = ModelCatalog::builtin().with_overrides(&overrides);
        let e = effective.get("gpt-4").unwrap();
        assert_eq!(e.tokens_per_second, Some(60.0));
        assert_eq!(e.first_token_latency_ms, Some(750));
        assert_eq!(e.pricing(), Some((0.002, 0.008)));
    }

    #[test]
    fn test_override_adds_new_model() {
        let overrides = CatalogOverrides::new().with_model(ModelOverride::new("qwen-plus"));
        let effective = ModelCatalog::builtin().with_overrides(&overrides);
        assert_eq!(effective.get("qwen-plus").unwrap().provider, "Alibaba");
        assert_eq!(effective.len(), ModelCatalog::builtin().len() + 1);
    }
}
