//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldResult;

use super::loader::{self, ConfigWarning};

/// Output document encoding
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of resources
    #[default]
    Json,
    /// YAML sequence of resources
    Yaml,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// What an empty input stream means
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EmptyInputPolicy {
    /// Treat it as an all-defaults document and let validation decide
    #[default]
    Defaults,
    /// Fail before validation
    Reject,
}

impl EmptyInputPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "defaults" => Some(Self::Defaults),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Indent JSON output
    #[serde(default)]
    pub pretty: bool,
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default)]
    pub empty: EmptyInputPolicy,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ScaffoldResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ScaffoldResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the user config and an optional explicit file, then apply env overrides
    pub fn load_layered(explicit: Option<&Path>) -> ScaffoldResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(loader::user_config_path().as_deref(), explicit)
            .map(|(config, warnings)| (super::with_env_overrides(config), warnings))
    }
}
