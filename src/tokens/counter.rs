//! Token counter implementations.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use super::estimator::{estimate_tokens, DEFAULT_MODEL};

pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;

    /// Whether `text` fits within `max_tokens`.
    fn fits(&self, text: &str, max_tokens: usize) -> bool {
        self.count(text) <= max_tokens
    }

    /// Cut `text` (on char boundaries) until it plus `suffix` fits in `max_tokens`.
    fn truncate_to_limit(&self, text: &str, max_tokens: usize, suffix: &str) -> String {
        let current = self.count(text);
        if current <= max_tokens {
            return text.to_string();
        }
        let suffix_tokens = if suffix.is_empty() {
            0
        } else {
            self.count(suffix)
        };
        let target = max_tokens.saturating_sub(suffix_tokens);
        if target == 0 {
            return suffix.to_string();
        }

        let chars: Vec<char> = text.chars().collect();
        let chars_per_token = chars.len() as f64 / current as f64;
        let mut keep = ((target as f64 * chars_per_token) as usize).min(chars.len());
        loop {
            let candidate: String = chars[..keep].iter().collect();
            if keep == 0 || self.count(&candidate) <= target {
                return format!("{}{}", candidate, suffix);
            }
            keep = ((keep as f64 * 0.9) as usize).min(keep - 1);
        }
    }
}

/// Counts tokens with the heuristic estimator for a fixed model.
#[derive(Debug, Clone)]
pub struct HeuristicCounter {
    model: String,
}

impl HeuristicCounter {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Default for HeuristicCounter {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

impl TokenCounter for HeuristicCounter {
    fn count(&self, text: &str) -> usize {
        estimate_tokens(text, &self.model)
    }
}

/// Memoises another counter's results in a bounded LRU.
pub struct CachingCounter {
    inner: Box<dyn TokenCounter>,
    cache: Mutex<LruCache<String, usize>>,
}

impl CachingCounter {
    /// A zero capacity is treated as one.
    pub fn new(inner: Box<dyn TokenCounter>, max_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }

    pub fn cached_entries(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl TokenCounter for CachingCounter {
    fn count(&self, text: &str) -> usize {
        if let Ok(mut cache) = self.cache.lock() {
            if let Some(&n) = cache.get(text) {
                return n;
            }
        }
        let n = self.inner.count(text);
        // A poisoned lock only costs us the memoisation.
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(text.to_string(), n);
        }
        n
    }
}
