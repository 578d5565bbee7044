//! Heuristic text-to-token estimation.
//!
//! The estimate combines four counts taken over the text (word pieces,
//! punctuation, other symbols and digits), scales them by the model family's
//! multiplier and the detected script density, then adds the family's fixed
//! overhead.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::language::detect_language_multiplier;
use super::profile::{resolve_profile, TokenizationProfile};

/// Model assumed when the caller does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.,!?;:()\[\]{}'"]"#).expect("punctuation pattern is valid")
});

static SPECIAL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[^a-zA-Z0-9\s.,!?;:()\[\]{}'"]"#).expect("special character pattern is valid")
});

static DIGIT_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Intermediate counts behind a token estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBreakdown {
    pub words: usize,
    pub word_tokens: usize,
    pub punctuation_tokens: usize,
    pub special_char_tokens: usize,
    pub numeric_chars: usize,
    pub numeric_tokens: usize,
    pub token_multiplier: f64,
    pub language_multiplier: f64,
    pub overhead: u32,
    pub total: usize,
}

fn word_piece_tokens(word: &str, chars_per_token: f64) -> usize {
    let len = word.chars().count();
    match len {
        0..=2 => 1,
        3..=6 => {
            if word.chars().all(|c| c.is_ascii_alphanumeric()) {
                1
            } else {
                len.div_ceil(3)
            }
        }
        _ => (len as f64 / chars_per_token).ceil() as usize,
    }
}

/// Run the counting pass with an explicit profile.
///
/// Returns `None` for empty input, which always estimates to zero tokens.
pub fn estimate_with_profile(text: &str, profile: &TokenizationProfile) -> Option<TokenBreakdown> {
    if text.is_empty() {
        return None;
    }

    // Script detection looks at the untrimmed text.
    let language_multiplier = detect_language_multiplier(text);

    let words: Vec<&str> = text.split_whitespace().collect();
    let punctuation_tokens = PUNCTUATION.find_iter(text).count();
    let special_char_tokens = SPECIAL_CHARS.find_iter(text).count();
    let numeric_chars: usize = DIGIT_RUNS.find_iter(text).map(|m| m.as_str().len()).sum();
    let numeric_tokens = numeric_chars.div_ceil(2);

    let word_tokens: usize = words
        .iter()
        .map(|w| word_piece_tokens(w, profile.chars_per_token))
        .sum();

    let raw_total = (word_tokens + special_char_tokens + punctuation_tokens + numeric_tokens) as f64
        * profile.token_multiplier;
    let scaled_total = raw_total * language_multiplier;
    let final_total = scaled_total + profile.overhead as f64;
    let total = (final_total.ceil() as usize).max(1);

    Some(TokenBreakdown {
        words: words.len(),
        word_tokens,
        punctuation_tokens,
        special_char_tokens,
        numeric_chars,
        numeric_tokens,
        token_multiplier: profile.token_multiplier,
        language_multiplier,
        overhead: profile.overhead,
        total,
    })
}

/// Detailed estimate for `text` under `model_id`'s tokenization profile.
pub fn estimate_breakdown(text: &str, model_id: &str) -> Option<TokenBreakdown> {
    let profile = resolve_profile(model_id);
    let breakdown = estimate_with_profile(text, &profile)?;
    tracing::debug!(
        model = model_id,
        words = breakdown.words,
        word_tokens = breakdown.word_tokens,
        punctuation = breakdown.punctuation_tokens,
        special = breakdown.special_char_tokens,
        numeric = breakdown.numeric_tokens,
        total = breakdown.total,
        "estimated tokens"
    );
    Some(breakdown)
}

/// Estimate how many tokens `model_id` would use for `text`.
///
/// Returns `0` for empty text and at least `1` otherwise. Never fails.
pub fn estimate_tokens(text: &str, model_id: &str) -> usize {
    estimate_breakdown(text, model_id).map_or(0, |b| b.total)
}

/// [`estimate_tokens`] with [`DEFAULT_MODEL`].
pub fn estimate_tokens_default(text: &str) -> usize {
    estimate_tokens(text, DEFAULT_MODEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(estimate_tokens("", "gpt-4o"), 0);
        assert_eq!(estimate_tokens("", "claude-3-opus"), 0);
        assert!(estimate_breakdown("", "gpt-4o").is_none());
    }

    #[test]
    fn test_short_word() {
        // 1 word token * 1.0 * 1.0 + 3 overhead
        assert_eq!(estimate_tokens("Hi", "gpt-4o"), 4);
        assert_eq!(estimate_tokens_default("Hi"), 4);
    }

    #[test]
    fn test_whitespace_only_still_counts_overhead() {
        // no words, no symbols; overhead alone
        assert_eq!(estimate_tokens("   ", "gpt-4o"), 3);
    }

    #[test]
    fn test_word_length_buckets() {
        assert_eq!(word_piece_tokens("a", 4.0), 1);
        assert_eq!(word_piece_tokens("hello", 4.0), 1);
        assert_eq!(word_piece_tokens("it's", 4.0), 2); // non-alphanumeric, ceil(4/3)
        assert_eq!(word_piece_tokens("abcdef", 4.0), 1);
        assert_eq!(word_piece_tokens("abcdefg", 4.0), 2);
        assert_eq!(word_piece_tokens("tokenization", 4.0), 3);
        assert_eq!(word_piece_tokens("tokenization", 3.7), 4);
    }

    #[test]
    fn test_breakdown_counts() {
        let b = estimate_breakdown("Hello, world! 12345 @home", "gpt-4o").unwrap();
        assert_eq!(b.words, 4);
        // "Hello," -> ceil(6/3)=2, "world!" -> 2, "12345" -> 1, "@home" -> 2
        assert_eq!(b.word_tokens, 7);
        assert_eq!(b.punctuation_tokens, 2);
        assert_eq!(b.special_char_tokens, 1);
        assert_eq!(b.numeric_chars, 5);
        assert_eq!(b.numeric_tokens, 3);
        // (7 + 1 + 2 + 3) * 1.0 * 1.0 + 3
        assert_eq!(b.total, 16);
    }

    #[test]
    fn test_digit_runs_sum_characters() {
        let b = estimate_breakdown("1 22 333", "gpt-4o").unwrap();
        assert_eq!(b.numeric_chars, 6);
        assert_eq!(b.numeric_tokens, 3);
    }

    #[test]
    fn test_cjk_text() {
        // one 7-char word -> 2, seven special chars -> 7; (9 * 1.5) + 3 = 16.5
        let b = estimate_breakdown("こんにちは世界", "gpt-4o").unwrap();
        assert_eq!(b.language_multiplier, 1.5);
        assert_eq!(b.special_char_tokens, 7);
        assert_eq!(b.total, 17);
    }

    #[test]
    fn test_emoji_counts_as_special() {
        let b = estimate_breakdown("ok 👍", "gpt-4o").unwrap();
        assert_eq!(b.special_char_tokens, 1);
    }
}
