//! Loading catalog overrides from files and using the effective catalog

use std::io::Write;

use token_economics::calc::{calculate_cost_in, calculate_total_time, TimingEstimate};
use token_economics::catalog::CUSTOM_MODEL_ID;
use token_economics::{calculate_cost, CatalogOverrides, Error, EstimatorConfig, ModelCatalog};

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_builtin_cost_scenarios() {
    assert!((calculate_cost(1000, "gpt-4o", false) - 0.005).abs() < 1e-12);
    assert_eq!(calculate_cost(500, "unknown-model-xyz", false), 0.0);
}

#[test]
fn test_yaml_overrides_file() {
    let file = write_temp(
        ".yaml",
        r#"
models:
  - id: my-finetune
    provider: OpenAI
    input_cost_per_1k: 0.01
    output_cost_per_1k: 0.03
    first_token_latency_ms: 400
    tokens_per_second: 20
  - id: gpt-4
    tokens_per_second: 30
"#,
    );
    let catalog = EstimatorConfig::new()
        .with_catalog_path(file.path())
        .catalog()
        .unwrap();

    assert!((calculate_cost_in(&catalog, 1000, "my-finetune", true) - 0.03).abs() < 1e-12);
    // 0.4 + 100 / 20
    let t = calculate_total_time(100, "my-finetune", &catalog).unwrap();
    assert!((t - 5.4).abs() < 1e-9);
    // gpt-4 keeps its latency, gets the new throughput
    let t = calculate_total_time(300, "gpt-4", &catalog).unwrap();
    assert!((t - 10.75).abs() < 1e-9);
    // base catalog is unchanged
    let t = calculate_total_time(300, "gpt-4", ModelCatalog::builtin()).unwrap();
    assert!((t - 20.75).abs() < 1e-9);
}

#[test]
fn test_json_overrides_file() {
    let file = write_temp(
        ".json",
        r#"{"models": [{"id": "custom-model", "input_cost_per_1k": 0.0001, "output_cost_per_1k": 0.0005}]}"#,
    );
    let catalog = EstimatorConfig::new()
        .with_catalog_path(file.path())
        .catalog()
        .unwrap();
    assert!(catalog.pricing(CUSTOM_MODEL_ID).is_some());
    assert_eq!(catalog.get(CUSTOM_MODEL_ID).unwrap().provider, "Other");
}

#[test]
fn test_invalid_overrides_file() {
    let file = write_temp(".yaml", "models:\n  - id: bad\n    tokens_per_second: -5\n");
    let err = EstimatorConfig::new()
        .with_catalog_path(file.path())
        .catalog()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));

    let file = write_temp(".json", "{ not json");
    let err = EstimatorConfig::new()
        .with_catalog_path(file.path())
        .catalog()
        .unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_custom_model_in_speed_comparison() {
    let catalog = ModelCatalog::builtin().with_overrides(&CatalogOverrides::custom_model(100, 200.0));
    let ranked = TimingEstimate::compare(["gpt-4", CUSTOM_MODEL_ID, "claude-3-haiku"], 500, &catalog);
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].model, CUSTOM_MODEL_ID);
    assert_eq!(ranked[2].model, "gpt-4");
}
