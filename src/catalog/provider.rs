//! Provider (company) classification by model id.

/// Best-effort provider name for a model id. Unrecognised ids map to `"Other"`.
pub fn provider_for_model(model: &str) -> &'static str {
    let m = model.to_lowercase();
    if m.contains("gpt") || m.contains("openai") {
        "OpenAI"
    } else if m.contains("claude") {
        "Anthropic"
    } else if m.contains("llama") {
        "Meta"
    } else if m.contains("gemini") {
        "Google"
    } else if m.contains("phi") || m.contains("azure") {
        "Microsoft"
    } else if m.contains("titan") {
        "Amazon"
    } else if m.contains("mistral") {
        "Mistral"
    } else if m.contains("grok") {
        "X.AI"
    } else if m.contains("deepseek") {
        "DeepSeek"
    } else if m.contains("qwen") {
        "Alibaba"
    } else if m.contains("ernie") {
        "Baidu"
    } else {
        "Other"
    }
}
