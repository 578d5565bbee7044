//! Generation-time estimates from first-token latency and throughput.

use serde::{Deserialize, Serialize};

use crate::catalog::ModelCatalog;
use crate::{Error, ErrorContext, Result};

/// Throughput assumed when a model has latency data but no throughput.
pub const DEFAULT_TOKENS_PER_SECOND: f64 = 30.0;
/// Latency assumed when a model has throughput data but no latency.
pub const DEFAULT_FIRST_TOKEN_LATENCY_MS: u32 = 300;

/// Resolved speed figures for one model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedProfile {
    pub first_token_latency_ms: u32,
    pub tokens_per_second: f64,
}

impl SpeedProfile {
    /// Look up speed data, filling a single missing figure with its default.
    ///
    /// A model with no timing data at all is an error rather than a guess.
    pub fn for_model(model: &str, catalog: &ModelCatalog) -> Result<Self> {
        let entry = catalog
            .get(model)
            .filter(|e| e.has_timing())
            .ok_or_else(|| {
                Error::unknown_model(
                    model,
                    ErrorContext::new()
                        .with_details("no latency or throughput data")
                        .with_source("timing"),
                )
            })?;
        let tokens_per_second = entry.tokens_per_second.unwrap_or(DEFAULT_TOKENS_PER_SECOND);
        // Catalogs built in code never pass through override validation.
        if !tokens_per_second.is_finite() || tokens_per_second <= 0.0 {
            return Err(Error::validation_with_context(
                format!("tokens_per_second must be a positive number for '{}'", model),
                ErrorContext::new()
                    .with_field_path(format!("models.{}.tokens_per_second", model))
                    .with_details(format!("got {}", tokens_per_second))
                    .with_source("timing"),
            ));
        }
        Ok(Self {
            first_token_latency_ms: entry
                .first_token_latency_ms
                .unwrap_or(DEFAULT_FIRST_TOKEN_LATENCY_MS),
            tokens_per_second,
        })
    }

    pub fn first_token_secs(&self) -> f64 {
        self.first_token_latency_ms as f64 / 1000.0
    }

    pub fn total_time(&self, output_tokens: u64) -> f64 {
        self.first_token_secs() + output_tokens as f64 / self.tokens_per_second
    }

    /// Tokens emitted after `elapsed_secs`, capped at `output_tokens`.
    pub fn tokens_generated_at(&self, elapsed_secs: f64, output_tokens: u64) -> u64 {
        let first = self.first_token_secs();
        if elapsed_secs <= first {
            return 0;
        }
        let produced = ((elapsed_secs - first) * self.tokens_per_second).floor();
        (produced.max(0.0) as u64).min(output_tokens)
    }
}

/// Seconds to produce `output_tokens` tokens: latency plus streaming time.
pub fn calculate_total_time(output_tokens: u64, model: &str, catalog: &ModelCatalog) -> Result<f64> {
    Ok(SpeedProfile::for_model(model, catalog)?.total_time(output_tokens))
}

/// Tokens `model` has produced `elapsed_secs` into a response of `output_tokens`.
pub fn tokens_generated_at(
    elapsed_secs: f64,
    output_tokens: u64,
    model: &str,
    catalog: &ModelCatalog,
) -> Result<u64> {
    Ok(SpeedProfile::for_model(model, catalog)?.tokens_generated_at(elapsed_secs, output_tokens))
}

/// Timing summary for comparing models side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingEstimate {
    pub model: String,
    pub output_tokens: u64,
    pub first_token_secs: f64,
    pub generation_secs: f64,
    pub total_secs: f64,
    pub secs_per_token: f64,
    pub tokens_per_second: f64,
}

impl TimingEstimate {
    pub fn for_model(model: &str, output_tokens: u64, catalog: &ModelCatalog) -> Result<Self> {
        let speed = SpeedProfile::for_model(model, catalog)?;
        let first_token_secs = speed.first_token_secs();
        let generation_secs = output_tokens as f64 / speed.tokens_per_second;
        Ok(Self {
            model: model.to_string(),
            output_tokens,
            first_token_secs,
            generation_secs,
            total_secs: first_token_secs + generation_secs,
            secs_per_token: 1.0 / speed.tokens_per_second,
            tokens_per_second: speed.tokens_per_second,
        })
    }

    /// Estimates for several models, fastest first. Unknown models are skipped
    /// with a warning.
    pub fn compare<'a>(
        models: impl IntoIterator<Item = &'a str>,
        output_tokens: u64,
        catalog: &ModelCatalog,
    ) -> Vec<Self> {
        let mut out: Vec<Self> = models
            .into_iter()
            .filter_map(|m| match Self::for_model(m, output_tokens, catalog) {
                Ok(t) => Some(t),
                Err(e) => {
                    tracing::warn!(model = m, error = %e, "skipping model in timing comparison");
                    None
                }
            })
            .collect();
        out.sort_by(|a, b| a.total_secs.total_cmp(&b.total_secs));
        out
    }
}

/// One sample of a generation curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub elapsed_secs: f64,
    pub tokens: u64,
}

/// Sample `points + 1` evenly spaced instants from 0 to the model's total time.
pub fn generation_curve(
    model: &str,
    output_tokens: u64,
    points: usize,
    catalog: &ModelCatalog,
) -> Result<Vec<CurvePoint>> {
    let speed = SpeedProfile::for_model(model, catalog)?;
    let total = speed.total_time(output_tokens);
    let steps = points.max(1);
    Ok((0..=steps)
        .map(|i| {
            let elapsed_secs = total * i as f64 / steps as f64;
            CurvePoint {
                elapsed_secs,
                tokens: speed.tokens_generated_at(elapsed_secs, output_tokens),
            }
        })
        .collect())
}
