//! Configuration for the integration field registry.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Configuration for building a field registry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    /// Run the structural schema check in every pre-validate hook
    pub validate_schema: bool,
    /// Log every hook invocation with its timing
    pub log_hooks: bool,
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            validate_schema: true,
            log_hooks: false,
        }
    }
}

impl IntegrationsConfig {
    /// Parse a settings document. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a settings file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loaded integrations settings from {}", path.display());
        Self::from_json_str(&content)
    }
}
