//! Tokenization profiles: per-family heuristic constants.

use serde::{Deserialize, Serialize};

/// Heuristic constants approximating one family of real tokenizers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TokenizationProfile {
    /// Average characters per token for long words.
    pub chars_per_token: f64,
    /// Scale applied to the summed counts.
    pub token_multiplier: f64,
    /// Fixed tokens added per call (BOS/EOS and similar markers).
    pub overhead: u32,
    /// Name of the tokenizer scheme the family resembles.
    pub scheme: &'static str,
}

impl TokenizationProfile {
    const fn new(
        chars_per_token: f64,
        token_multiplier: f64,
        overhead: u32,
        scheme: &'static str,
    ) -> Self {
        Self {
            chars_per_token,
            token_multiplier,
            overhead,
            scheme,
        }
    }

    /// Profile used for model ids no family rule recognises.
    pub const DEFAULT: TokenizationProfile = TokenizationProfile::new(4.0, 1.0, 3, "Default");

    /// Scheme and overhead only, for display purposes.
    pub fn info(&self) -> TokenizationInfo {
        TokenizationInfo {
            scheme: self.scheme.to_string(),
            overhead: self.overhead,
        }
    }
}

impl Default for TokenizationProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Public summary of how a model tokenizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizationInfo {
    pub scheme: String,
    pub overhead: u32,
}

/// A family rule: first matching rule wins.
struct FamilyRule {
    matches: fn(&str) -> bool,
    profile: TokenizationProfile,
}

// Order matters: "azure-gpt-..." and "gpt-..." must be claimed before any later family.
const FAMILY_RULES: &[FamilyRule] = &[
    FamilyRule {
        matches: |m| m.contains("gpt-") || m.starts_with("azure-gpt"),
        profile: TokenizationProfile::new(4.0, 1.0, 3, "cl100k_base"),
    },
    FamilyRule {
        matches: |m| m.contains("claude"),
        profile: TokenizationProfile::new(3.8, 1.05, 5, "Claude"),
    },
    FamilyRule {
        matches: |m| m.contains("llama"),
        profile: TokenizationProfile::new(4.2, 0.98, 2, "Llama"),
    },
    FamilyRule {
        matches: |m| m.contains("gemini"),
        profile: TokenizationProfile::new(3.7, 1.08, 4, "SentencePiece"),
    },
    FamilyRule {
        matches: |m| m.contains("phi"),
        profile: TokenizationProfile::new(4.1, 0.95, 2, "phi3"),
    },
    FamilyRule {
        matches: |m| m.contains("mistral"),
        profile: TokenizationProfile::new(4.0, 1.0, 3, "Mistral"),
    },
    FamilyRule {
        matches: |m| m.contains("titan"),
        profile: TokenizationProfile::new(4.1, 1.0, 2, "Amazon"),
    },
    FamilyRule {
        matches: |m| m.contains("grok"),
        profile: TokenizationProfile::new(4.0, 1.02, 3, "Grok"),
    },
    FamilyRule {
        matches: |m| m.contains("deepseek"),
        profile: TokenizationProfile::new(3.9, 1.03, 2, "DeepSeek"),
    },
    FamilyRule {
        matches: |m| m.contains("qwen"),
        profile: TokenizationProfile::new(3.8, 1.05, 3, "Qwen"),
    },
    FamilyRule {
        matches: |m| m.contains("ernie"),
        profile: TokenizationProfile::new(3.9, 1.02, 3, "ERNIE"),
    },
];

/// Resolve the tokenization profile for a model identifier.
///
/// Matching is case-sensitive substring matching in a fixed priority order;
/// unknown identifiers get [`TokenizationProfile::DEFAULT`].
pub fn resolve_profile(model_id: &str) -> TokenizationProfile {
    let profile = FAMILY_RULES
        .iter()
        .find(|rule| (rule.matches)(model_id))
        .map(|rule| rule.profile)
        .unwrap_or(TokenizationProfile::DEFAULT);
    tracing::debug!(model = model_id, scheme = profile.scheme, "resolved tokenization profile");
    profile
}

/// Scheme name and overhead for a model.
pub fn tokenization_info(model_id: &str) -> TokenizationInfo {
    resolve_profile(model_id).info()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_schemes() {
        let cases = [
            ("gpt-4o", "cl100k_base"),
            ("azure-gpt-4o", "cl100k_base"),
            ("azure-gpt4", "cl100k_base"),
            ("claude-3-5-sonnet", "Claude"),
            ("llama-3-70b", "Llama"),
            ("gemini-1.5-pro", "SentencePiece"),
            ("phi-3-mini", "phi3"),
            ("mistral-large", "Mistral"),
            ("titan-text-express", "Amazon"),
            ("grok-1", "Grok"),
            ("deepseek-coder", "DeepSeek"),
            ("qwen-max", "Qwen"),
            ("ernie-bot", "ERNIE"),
            ("custom-model", "Default"),
            ("", "Default"),
        ];
        for (model, scheme) in cases {
            assert_eq!(resolve_profile(model).scheme, scheme, "model {model}");
        }
    }

    #[test]
    fn test_priority_order() {
        // "gpt-" wins over a later family name in the same id
        assert_eq!(resolve_profile("gpt-4-claude-distill").scheme, "cl100k_base");
        // claude is checked before llama
        assert_eq!(resolve_profile("claude-llama-merge").scheme, "Claude");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(resolve_profile("Claude-3"), TokenizationProfile::DEFAULT);
    }

    #[test]
    fn test_profile_invariants() {
        for rule in FAMILY_RULES {
            assert!(rule.profile.chars_per_token > 0.0);
            assert!(rule.profile.token_multiplier > 0.0);
        }
    }

    #[test]
    fn test_tokenization_info() {
        let info = tokenization_info("claude-3-opus");
        assert_eq!(info.scheme, "Claude");
        assert_eq!(info.overhead, 5);
        assert_eq!(tokenization_info("unknown").overhead, 3);
    }
}
