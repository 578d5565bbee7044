//! # token-economics
//!
//! Heuristic token estimation and the calculators built on it: cost per
//! model, time to generate, energy use, and a static model catalog.
//!
//! ## Overview
//!
//! Estimation does not run any real tokenizer. It counts word pieces,
//! punctuation, symbols and digits, then scales the result with constants
//! picked per model family and per script (CJK text is denser than Latin
//! text). Everything is pure and synchronous; the only shared data are
//! constant lookup tables.
//!
//! ## Quick Start
//!
//! ```rust
//! use token_economics::{calculate_cost, estimate_tokens, tokenization_info};
//!
//! let tokens = estimate_tokens("Hi", "gpt-4o");
//! assert_eq!(tokens, 4);
//!
//! let cost = calculate_cost(1000, "gpt-4o", false);
//! assert!((cost - 0.005).abs() < 1e-12);
//!
//! assert_eq!(tokenization_info("gemini-1.5-pro").scheme, "SentencePiece");
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tokens`] | Tokenization profiles, script detection, the estimator |
//! | [`catalog`] | Model pricing, latency and throughput tables with overrides |
//! | [`calc`] | Cost, generation-time and energy calculators |
//! | [`config`] | Environment and override-file configuration |

pub mod calc;
pub mod catalog;
pub mod config;
pub mod tokens;

pub use calc::{
    analyze_text, calculate_cost, calculate_total_time, estimate_energy, CostEstimate,
    EnergyEstimate, TimingEstimate,
};
pub use catalog::{CatalogOverrides, ModelCatalog, ModelCatalogEntry};
pub use config::EstimatorConfig;
pub use tokens::{
    detect_language_multiplier, estimate_tokens, resolve_profile, tokenization_info,
    TokenizationInfo, TokenizationProfile,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
