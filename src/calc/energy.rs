//! Inference energy and carbon estimates per provider.
//!
//! Figures are rough per-provider averages. Providers without their own row
//! use the industry-average default.

use serde::{Deserialize, Serialize};

use crate::catalog::provider_for_model;

/// Energy of one full smartphone charge, in kWh.
pub const SMARTPHONE_CHARGE_KWH: f64 = 0.0125;
/// Energy of one hour of a 10 W LED bulb, in kWh.
pub const LED_BULB_HOUR_KWH: f64 = 0.01;

/// Energy characteristics of one provider's infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyProfile {
    pub provider: &'static str,
    /// Training energy attributed per token, kWh.
    pub training_kwh_per_token: f64,
    /// Inference energy per token, kWh.
    pub inference_kwh_per_token: f64,
    /// Grams of CO2 emitted per kWh.
    pub carbon_g_per_kwh: f64,
    pub description: &'static str,
}

impl EnergyProfile {
    pub const DEFAULT: EnergyProfile = EnergyProfile {
        provider: "default",
        training_kwh_per_token: 0.025,
        inference_kwh_per_token: 0.0009,
        carbon_g_per_kwh: 3.5,
        description: "Average energy consumption based on industry standards",
    };

    /// Providers with their own row, in display order.
    pub fn known() -> &'static [EnergyProfile] {
        PROFILES
    }

    /// Row for `provider`, or [`EnergyProfile::DEFAULT`].
    pub fn for_provider(provider: &str) -> &'static EnergyProfile {
        PROFILES
            .iter()
            .find(|p| p.provider == provider)
            .unwrap_or(&Self::DEFAULT)
    }

    pub fn for_model(model: &str) -> &'static EnergyProfile {
        Self::for_provider(provider_for_model(model))
    }

    pub fn is_default(&self) -> bool {
        self.provider == Self::DEFAULT.provider
    }

    pub fn inference_kwh(&self, tokens: u64) -> f64 {
        self.inference_kwh_per_token * tokens as f64
    }
}

const PROFILES: &[EnergyProfile] = &[
    EnergyProfile {
        provider: "OpenAI",
        training_kwh_per_token: 0.025,
        inference_kwh_per_token: 0.0009,
        carbon_g_per_kwh: 3.5,
        description: "Uses a mix of GPUs and TPUs with optimized datacenter efficiency",
    },
    EnergyProfile {
        provider: "Anthropic",
        training_kwh_per_token: 0.029,
        inference_kwh_per_token: 0.0011,
        carbon_g_per_kwh: 3.8,
        description: "Focuses on sustainable AI training with significant efficiency improvements",
    },
    EnergyProfile {
        provider: "Meta",
        training_kwh_per_token: 0.018,
        inference_kwh_per_token: 0.0006,
        carbon_g_per_kwh: 2.8,
        description: "Open source models with optimized inference on consumer hardware",
    },
    EnergyProfile {
        provider: "Google",
        training_kwh_per_token: 0.021,
        inference_kwh_per_token: 0.0008,
        carbon_g_per_kwh: 3.2,
        description: "Uses efficient TPUs and carbon-neutral data centers",
    },
    EnergyProfile {
        provider: "Microsoft",
        training_kwh_per_token: 0.027,
        inference_kwh_per_token: 0.0010,
        carbon_g_per_kwh: 3.6,
        description: "Mixed hardware infrastructure with cloud optimization",
    },
    EnergyProfile {
        provider: "Amazon",
        training_kwh_per_token: 0.028,
        inference_kwh_per_token: 0.0011,
        carbon_g_per_kwh: 3.7,
        description: "AWS infrastructure with variable renewable energy percentages",
    },
    EnergyProfile {
        provider: "Mistral",
        training_kwh_per_token: 0.020,
        inference_kwh_per_token: 0.0007,
        carbon_g_per_kwh: 3.0,
        description: "European cloud infrastructure with higher renewable percentage",
    },
];

/// Energy used to process `tokens` tokens, with everyday equivalents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub model: String,
    /// Provider the model id classifies as.
    pub provider: String,
    /// `true` when the provider has no row and the default figures were used.
    pub default_profile: bool,
    pub tokens: u64,
    pub kwh: f64,
    pub co2_grams: f64,
    pub smartphone_charges: f64,
    pub led_bulb_hours: f64,
}

impl EnergyEstimate {
    fn from_profile(model: &str, provider: &str, profile: &EnergyProfile, tokens: u64) -> Self {
        let kwh = profile.inference_kwh(tokens);
        Self {
            model: model.to_string(),
            provider: provider.to_string(),
            default_profile: profile.is_default(),
            tokens,
            kwh,
            co2_grams: kwh * profile.carbon_g_per_kwh,
            smartphone_charges: kwh / SMARTPHONE_CHARGE_KWH,
            led_bulb_hours: kwh / LED_BULB_HOUR_KWH,
        }
    }

    pub fn format(&self) -> String {
        format!("{:.6} kWh, {:.6} g CO2", self.kwh, self.co2_grams)
    }
}

/// Inference energy for `tokens` tokens on `model`. Never fails: unknown
/// providers use [`EnergyProfile::DEFAULT`].
pub fn estimate_energy(tokens: u64, model: &str) -> EnergyEstimate {
    let provider = provider_for_model(model);
    let profile = EnergyProfile::for_provider(provider);
    if profile.is_default() {
        tracing::debug!(model, provider, "no energy profile for provider, using default");
    }
    EnergyEstimate::from_profile(model, provider, profile, tokens)
}

/// The same token count on every known provider, in table order.
pub fn compare_providers(tokens: u64) -> Vec<EnergyEstimate> {
    PROFILES
        .iter()
        .map(|p| EnergyEstimate::from_profile(p.provider, p.provider, p, tokens))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_known_provider() {
        // Anthropic: 0.0011 kWh per token, 3.8 g/kWh
        let e = estimate_energy(1000, "claude-3-haiku");
        assert_eq!(e.provider, "Anthropic");
        assert!(!e.default_profile);
        assert!(approx(e.kwh, 1.1));
        assert!(approx(e.co2_grams, 4.18));
        assert!(approx(e.smartphone_charges, 88.0));
        assert!(approx(e.led_bulb_hours, 110.0));
    }

    #[test]
    fn test_unlisted_provider_uses_default() {
        let e = estimate_energy(2000, "grok-1");
        assert_eq!(e.provider, "X.AI");
        assert!(e.default_profile);
        assert!(approx(e.kwh, 1.8));
        assert!(approx(e.co2_grams, 6.3));

        let unknown = EnergyProfile::for_model("custom-model");
        assert!(unknown.is_default());
        assert_eq!(unknown.description, EnergyProfile::DEFAULT.description);
    }

    #[test]
    fn test_zero_tokens() {
        let e = estimate_energy(0, "llama-3-8b");
        assert_eq!(e.kwh, 0.0);
        assert_eq!(e.co2_grams, 0.0);
        assert_eq!(e.smartphone_charges, 0.0);
    }

    #[test]
    fn test_compare_providers() {
        let all = compare_providers(100);
        assert_eq!(all.len(), EnergyProfile::known().len());
        assert!(all.iter().all(|e| !e.default_profile));
        let meta = all.iter().find(|e| e.provider == "Meta").unwrap();
        assert!(approx(meta.kwh, 0.06));
        assert_eq!(meta.format(), "0.060000 kWh, 0.168000 g CO2");
    }
}
