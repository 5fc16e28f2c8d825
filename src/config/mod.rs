//! Configuration loading and management

use crate::core::NamingStrategy;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Path parameter standing for the parent identifier in nested paths
pub const DEFAULT_PARENT_ID_TOKEN: &str = "{parentId}";

/// Configuration of the resource resolver
///
/// ```yaml
/// naming: english
/// parent_id_token: "{id}"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// How resource names are derived when no path is declared
    #[serde(default)]
    pub naming: NamingStrategy,

    /// Path parameter inserted after the parent segment of nested paths
    #[serde(default = "default_parent_id_token")]
    pub parent_id_token: String,
}

fn default_parent_id_token() -> String {
    DEFAULT_PARENT_ID_TOKEN.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            naming: NamingStrategy::default(),
            parent_id_token: default_parent_id_token(),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn with_naming(mut self, naming: NamingStrategy) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_parent_id_token(mut self, token: impl Into<String>) -> Self {
        self.parent_id_token = token.into();
        self
    }
}
