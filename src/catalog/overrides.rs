//! Caller-supplied catalog adjustments.

use serde::{Deserialize, Serialize};

use super::ModelCatalogEntry;
use crate::{Error, ErrorContext, Result};

/// Id used by [`CatalogOverrides::custom_model`].
pub const CUSTOM_MODEL_ID: &str = "custom-model";

/// Partial entry; `None` fields leave the base value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelOverride {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_cost_per_1k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_cost_per_1k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_token_latency_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_per_second: Option<f64>,
}

impl ModelOverride {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_pricing(mut self, input_per_1k: f64, output_per_1k: f64) -> Self {
        self.input_cost_per_1k = Some(input_per_1k);
        self.output_cost_per_1k = Some(output_per_1k);
        self
    }

    pub fn with_first_token_latency_ms(mut self, ms: u32) -> Self {
        self.first_token_latency_ms = Some(ms);
        self
    }

    pub fn with_tokens_per_second(mut self, tps: f64) -> Self {
        self.tokens_per_second = Some(tps);
        self
    }

    pub(super) fn apply_to(&self, entry: &mut ModelCatalogEntry) {
        if let Some(ref p) = self.provider {
            entry.provider = p.clone();
        }
        if self.input_cost_per_1k.is_some() {
            entry.input_cost_per_1k = self.input_cost_per_1k;
        }
        if self.output_cost_per_1k.is_some() {
            entry.output_cost_per_1k = self.output_cost_per_1k;
        }
        if self.first_token_latency_ms.is_some() {
            entry.first_token_latency_ms = self.first_token_latency_ms;
        }
        if self.tokens_per_second.is_some() {
            entry.tokens_per_second = self.tokens_per_second;
        }
    }
}

/// A set of model overrides, typically loaded from a YAML or JSON file.
///
/// ```yaml
/// models:
///   - id: custom-model
///     input_cost_per_1k: 0.0001
///     output_cost_per_1k: 0.0005
///     first_token_latency_ms: 250
///     tokens_per_second: 40
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogOverrides {
    #[serde(default)]
    pub models: Vec<ModelOverride>,
}

impl CatalogOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: ModelOverride) -> Self {
        self.models.push(model);
        self
    }

    /// The simulator's user-defined model: fixed pricing, caller-chosen speed.
    pub fn custom_model(first_token_latency_ms: u32, tokens_per_second: f64) -> Self {
        Self::new().with_model(
            ModelOverride::new(CUSTOM_MODEL_ID)
                .with_provider("Other")
                .with_pricing(0.0001, 0.0005)
                .with_first_token_latency_ms(first_token_latency_ms)
                .with_tokens_per_second(tokens_per_second),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let overrides: Self = serde_yaml::from_str(s)?;
        overrides.validate()?;
        Ok(overrides)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let overrides: Self = serde_json::from_str(s)?;
        overrides.validate()?;
        Ok(overrides)
    }

    /// Reject ids that are empty and numbers no calculator can use.
    pub fn validate(&self) -> Result<()> {
        for (i, m) in self.models.iter().enumerate() {
            let field = |name: &str| format!("models[{}].{}", i, name);
            if m.id.trim().is_empty() {
                return Err(Error::validation_with_context(
                    "model id must not be empty",
                    ErrorContext::new()
                        .with_field_path(field("id"))
                        .with_source("catalog_overrides"),
                ));
            }
            for (name, value) in [
                ("input_cost_per_1k", m.input_cost_per_1k),
                ("output_cost_per_1k", m.output_cost_per_1k),
            ] {
                if let Some(v) = value {
                    if !v.is_finite() || v < 0.0 {
                        return Err(Error::validation_with_context(
                            format!("price for '{}' must be a non-negative number", m.id),
                            ErrorContext::new()
                                .with_field_path(field(name))
                                .with_details(format!("got {}", v))
                                .with_source("catalog_overrides"),
                        ));
                    }
                }
            }
            if let Some(tps) = m.tokens_per_second {
                if !tps.is_finite() || tps <= 0.0 {
                    return Err(Error::validation_with_context(
                        format!("throughput for '{}' must be positive", m.id),
                        ErrorContext::new()
                            .with_field_path(field("tokens_per_second"))
                            .with_details(format!("got {}", tps))
                            .with_source("catalog_overrides"),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
models:
  - id: custom-model
    input_cost_per_1k: 0.0001
    output_cost_per_1k: 0.0005
    first_token_latency_ms: 250
    tokens_per_second: 40
  - id: gpt-4o
    tokens_per_second: 80
"#;
        let o = CatalogOverrides::from_yaml_str(yaml).unwrap();
        assert_eq!(o.models.len(), 2);
        assert_eq!(o.models[0].first_token_latency_ms, Some(250));
        assert_eq!(o.models[1].input_cost_per_1k, None);
        assert_eq!(o.models[1].tokens_per_second, Some(80.0));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"models":[{"id":"grok-2","provider":"X.AI","tokens_per_second":50.0}]}"#;
        let o = CatalogOverrides::from_json_str(json).unwrap();
        assert_eq!(o.models[0].provider.as_deref(), Some("X.AI"));
    }

    #[test]
    fn test_empty_document() {
        let o = CatalogOverrides::from_yaml_str("{}").unwrap();
        assert!(o.is_empty());
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = CatalogOverrides::new()
            .with_model(ModelOverride::new("x").with_pricing(-1.0, 0.0))
            .validate()
            .unwrap_err();
        let ctx = err.context().unwrap();
        assert_eq!(ctx.field_path.as_deref(), Some("models[0].input_cost_per_1k"));
    }

    #[test]
    fn test_rejects_zero_throughput_and_empty_id() {
        assert!(CatalogOverrides::new()
            .with_model(ModelOverride::new("x").with_tokens_per_second(0.0))
            .validate()
            .is_err());
        assert!(CatalogOverrides::new()
            .with_model(ModelOverride::new("  "))
            .validate()
            .is_err());
    }

    #[test]
    fn test_custom_model() {
        let o = CatalogOverrides::custom_model(250, 42.0);
        let m = &o.models[0];
        assert_eq!(m.id, CUSTOM_MODEL_ID);
        assert_eq!(m.input_cost_per_1k, Some(0.0001));
        assert_eq!(m.output_cost_per_1k, Some(0.0005));
        assert_eq!(m.tokens_per_second, Some(42.0));
    }
}
