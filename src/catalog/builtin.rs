//! Built-in model tables.
//!
//! Prices are USD per 1K tokens (input, output). Latency is time to first
//! token in milliseconds, throughput is output tokens per second. Both are
//! approximate published figures.

use super::ModelCatalogEntry;

// (id, provider, input per 1K, output per 1K)
const PRICING: &[(&str, &str, f64, f64)] = &[
    // OpenAI
    ("gpt-4o", "OpenAI", 0.005, 0.020),
    ("gpt-4o-mini", "OpenAI", 0.0006, 0.0024),
    ("gpt-4-turbo", "OpenAI", 0.0004, 0.0016),
    ("gpt-4", "OpenAI", 0.002, 0.008),
    ("gpt-3.5-turbo", "OpenAI", 0.0005, 0.0015),
    // Anthropic
    ("claude-3-opus", "Anthropic", 0.015, 0.075),
    ("claude-3-sonnet", "Anthropic", 0.003, 0.015),
    ("claude-3-haiku", "Anthropic", 0.00025, 0.00125),
    // Meta
    ("llama-3-70b", "Meta", 0.00072, 0.00072),
    ("llama-3-8b", "Meta", 0.00006, 0.00014),
    // Google
    ("gemini-1.5-pro", "Google", 0.0003125, 0.00125),
    ("gemini-1.5-flash", "Google", 0.0000188, 0.000075),
    ("gemini-ultra-2", "Google", 0.00125, 0.01000),
    // Microsoft (Azure OpenAI + Phi-3)
    ("azure-gpt-4o", "Microsoft", 0.005, 0.015),
    ("azure-embedding-ada", "Microsoft", 0.00002, 0.00002),
    ("phi-3-mini", "Microsoft", 0.00013, 0.00052),
    ("phi-3-medium", "Microsoft", 0.00017, 0.00068),
    // Amazon (Bedrock)
    ("titan-text-express", "Amazon", 0.0002, 0.0006),
    ("titan-text-lite", "Amazon", 0.0003, 0.0004),
    ("titan-embedding", "Amazon", 0.0001, 0.0001),
    ("claude-3-5-sonnet", "Amazon", 0.003, 0.015),
    // Mistral
    ("mistral-large", "Mistral", 0.002, 0.006),
    ("mistral-medium", "Mistral", 0.00027, 0.00081),
    ("mistral-small", "Mistral", 0.00010, 0.00030),
];

// (id, provider, first token latency ms, tokens per second)
const SPEED: &[(&str, &str, u32, f64)] = &[
    ("gpt-4", "OpenAI", 750, 15.0),
    ("gpt-4-turbo", "OpenAI", 380, 27.0),
    ("gpt-3.5-turbo", "OpenAI", 230, 40.0),
    ("claude-3-opus", "Anthropic", 600, 20.0),
    ("claude-3-sonnet", "Anthropic", 300, 32.0),
    ("claude-3-haiku", "Anthropic", 200, 45.0),
    ("gemini-1.0-pro", "Google", 450, 25.0),
    ("gemini-1.5-pro", "Google", 350, 30.0),
    ("llama-2-70b", "Meta", 550, 18.0),
    ("llama-2-13b", "Meta", 280, 35.0),
    ("llama-2-7b", "Meta", 180, 50.0),
    ("grok-1", "X.AI", 300, 33.0),
    ("deepseek-coder", "DeepSeek", 280, 38.0),
    ("qwen-max", "Alibaba", 500, 22.0),
    ("ernie-bot", "Baidu", 400, 28.0),
];

/// All built-in entries; pricing and speed rows for the same id are merged.
pub(super) fn entries() -> Vec<ModelCatalogEntry> {
    let mut out: Vec<ModelCatalogEntry> = PRICING
        .iter()
        .map(|&(id, provider, input, output)| ModelCatalogEntry {
            id: id.to_string(),
            provider: provider.to_string(),
            input_cost_per_1k: Some(input),
            output_cost_per_1k: Some(output),
            first_token_latency_ms: None,
            tokens_per_second: None,
        })
        .collect();

    for &(id, provider, latency, tps) in SPEED {
        match out.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.first_token_latency_ms = Some(latency);
                entry.tokens_per_second = Some(tps);
            }
            None => out.push(ModelCatalogEntry {
                id: id.to_string(),
                provider: provider.to_string(),
                input_cost_per_1k: None,
                output_cost_per_1k: None,
                first_token_latency_ms: Some(latency),
                tokens_per_second: Some(tps),
            }),
        }
    }
    out
}
