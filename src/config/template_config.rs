//! Template configuration format
//!
//! Parsed from TOML text the caller has already obtained:
//!
//! ```toml
//! name = "report"
//! options = ["missingkey=error", "onpanic=nop"]
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tmpl_options::{apply_options, InvalidOption, PolicyStore};

use crate::template::Template;

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid template option: {0}")]
    InvalidOption(#[from] InvalidOption),
}

/// Template name and options, deserialized from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Template name
    #[serde(default)]
    pub name: String,

    /// Option strings, applied in order
    #[serde(default)]
    pub options: Vec<String>,
}

impl FromStr for TemplateConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: TemplateConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl TemplateConfig {
    /// Check every option resolves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Resolve the options against a fresh store.
    pub fn resolve(&self) -> Result<PolicyStore, ConfigError> {
        let mut store = PolicyStore::new();
        apply_options(&mut store, &self.options)?;
        Ok(store)
    }

    /// Build a template with this config's name and options.
    pub fn build_template(&self) -> Result<Template, ConfigError> {
        let mut template = Template::new(self.name.clone());
        template.option(&self.options)?;
        Ok(template)
    }
}
