//! Runtime configuration: default model and optional catalog override file.
//!
//! Environment variables:
//! - `TOKENOMICS_DEFAULT_MODEL`: model used when none is given (default `gpt-4o`)
//! - `TOKENOMICS_CATALOG`: path to a YAML or JSON override file

use std::path::{Path, PathBuf};

use crate::catalog::{CatalogOverrides, ModelCatalog};
use crate::tokens::DEFAULT_MODEL;
use crate::{Error, ErrorContext, Result};

pub const ENV_DEFAULT_MODEL: &str = "TOKENOMICS_DEFAULT_MODEL";
pub const ENV_CATALOG: &str = "TOKENOMICS_CATALOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    pub default_model: String,
    pub catalog_path: Option<PathBuf>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_string(),
            catalog_path: None,
        }
    }
}

impl EstimatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with the `TOKENOMICS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source. Empty
    /// values are ignored.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();
        if let Some(model) = get(ENV_DEFAULT_MODEL) {
            cfg.default_model = model.trim().to_string();
        }
        if let Some(path) = get(ENV_CATALOG) {
            cfg.catalog_path = Some(PathBuf::from(path));
        }
        cfg
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_catalog_path(mut self, path: impl AsRef<Path>) -> Self {
        self.catalog_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read the override file, if one is configured.
    pub fn load_overrides(&self) -> Result<CatalogOverrides> {
        match self.catalog_path {
            Some(ref path) => load_overrides_file(path),
            None => Ok(CatalogOverrides::default()),
        }
    }

    /// The built-in catalog with any configured overrides applied.
    pub fn catalog(&self) -> Result<ModelCatalog> {
        let overrides = self.load_overrides()?;
        Ok(ModelCatalog::builtin().with_overrides(&overrides))
    }
}

/// Parse an override file: `.json` as JSON, anything else as YAML.
pub fn load_overrides_file(path: &Path) -> Result<CatalogOverrides> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::configuration_with_context(
            format!("failed to read catalog overrides: {}", e),
            ErrorContext::new()
                .with_field_path(path.display().to_string())
                .with_source("catalog_loader"),
        )
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let overrides = if is_json {
        CatalogOverrides::from_json_str(&content)?
    } else {
        CatalogOverrides::from_yaml_str(&content)?
    };

    tracing::info!(
        path = %path.display(),
        models = overrides.models.len(),
        "loaded catalog overrides"
    );
    Ok(overrides)
}
