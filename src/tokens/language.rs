//! Script detection for language-sensitive token density.

use serde::{Deserialize, Serialize};

/// Share of characters above which a script class is considered dominant.
const SCRIPT_RATIO_THRESHOLD: f64 = 0.15;

/// Coarse script classification of a text sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptClass {
    /// Latin-script text (the default).
    Latin,
    /// Significant share of non-ASCII, non-CJK characters.
    NonLatin,
    /// Significant share of Chinese/Japanese/Korean characters.
    Cjk,
}

impl ScriptClass {
    /// Multiplier applied to the raw estimate.
    pub fn multiplier(self) -> f64 {
        match self {
            ScriptClass::Latin => 1.0,
            ScriptClass::NonLatin => 1.2,
            ScriptClass::Cjk => 1.5,
        }
    }
}

#[inline]
fn is_cjk_char(c: char) -> bool {
    let code = c as u32;
    (0x3040..=0x30FF).contains(&code) || // Hiragana, Katakana
    (0x3400..=0x4DBF).contains(&code) || // CJK Extension A
    (0x4E00..=0x9FFF).contains(&code) || // CJK Unified Ideographs
    (0xF900..=0xFAFF).contains(&code) || // CJK Compatibility Ideographs
    (0xFF66..=0xFF9F).contains(&code) // Halfwidth Katakana
}

#[inline]
fn is_non_latin_char(c: char) -> bool {
    !c.is_ascii() && !c.is_whitespace()
}

/// Classify a text sample. CJK is checked first and takes priority.
pub fn detect_script(text: &str) -> ScriptClass {
    let mut len = 0usize;
    let mut cjk = 0usize;
    let mut non_latin = 0usize;
    for c in text.chars() {
        len += 1;
        if is_cjk_char(c) {
            cjk += 1;
        }
        if is_non_latin_char(c) {
            non_latin += 1;
        }
    }

    let denom = len.max(1) as f64;
    if cjk as f64 / denom > SCRIPT_RATIO_THRESHOLD {
        ScriptClass::Cjk
    } else if non_latin as f64 / denom > SCRIPT_RATIO_THRESHOLD {
        ScriptClass::NonLatin
    } else {
        ScriptClass::Latin
    }
}

/// Token-density multiplier for a text sample: 1.5 (CJK), 1.2 (other non-Latin) or 1.0.
pub fn detect_language_multiplier(text: &str) -> f64 {
    detect_script(text).multiplier()
}
