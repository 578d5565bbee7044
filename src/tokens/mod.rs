//! # Token Estimation Module
//!
//! Heuristic, tokenizer-free token estimation for LLM models.
//!
//! ## Overview
//!
//! No real tokenizer is run. Each model family gets a [`TokenizationProfile`]
//! (characters per token, a scale factor and a fixed overhead), and the text is
//! classified by script so that CJK and other non-Latin text estimate denser.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`resolve_profile`] | Model id to tokenization profile, first matching family wins |
//! | [`detect_language_multiplier`] | 1.5 for CJK-heavy text, 1.2 for other non-Latin, else 1.0 |
//! | [`estimate_tokens`] | The counting pass; `0` for empty text, otherwise `>= 1` |
//! | [`TokenCounter`] | Trait for counters, with budget truncation |
//! | [`CachingCounter`] | LRU-memoised wrapper around any counter |
//!
//! ## Example
//!
//! ```rust
//! use token_economics::tokens::{estimate_tokens, tokenization_info};
//!
//! assert_eq!(estimate_tokens("Hi", "gpt-4o"), 4);
//! assert_eq!(tokenization_info("claude-3-5-sonnet").scheme, "Claude");
//! ```

mod counter;
mod estimator;
mod language;
mod profile;

pub use counter::{CachingCounter, HeuristicCounter, TokenCounter};
pub use estimator::{
    estimate_breakdown, estimate_tokens, estimate_tokens_default, estimate_with_profile,
    TokenBreakdown, DEFAULT_MODEL,
};
pub use language::{detect_language_multiplier, detect_script, ScriptClass};
pub use profile::{resolve_profile, tokenization_info, TokenizationInfo, TokenizationProfile};
