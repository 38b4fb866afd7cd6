//! Scaffold kind registration
//!
//! A defaults document is embedded in the binary and parsed once per process.
//! Merged with a kind it yields that kind's API identity. The engine only ever
//! sees the merged [`Registration`].

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ScaffoldKind;
use crate::error::{ScaffoldError, ScaffoldResult};

const DEFAULTS_YAML: &str = include_str!("registration.yaml");

/// Resource scope of a registered kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    Namespaced,
    Cluster,
}

/// Defaults shared by every kind
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationDefaults {
    pub group: String,
    pub version: String,
    pub scope: Scope,
}

impl RegistrationDefaults {
    /// `<group>/<version>`
    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }
}

/// Merged identity of one scaffold kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub api_version: String,
    pub kind: String,
    pub plural: String,
    pub singular: String,
    pub scope: Scope,
}

impl Registration {
    /// Merge the defaults document with a kind
    pub fn merge(defaults: &RegistrationDefaults, kind: ScaffoldKind) -> Self {
        let singular = kind.kind_name().to_lowercase();
        Self {
            api_version: defaults.api_version(),
            kind: kind.kind_name().to_string(),
            plural: pluralize(&singular),
            singular,
            scope: defaults.scope,
        }
    }
}

fn pluralize(singular: &str) -> String {
    if singular.ends_with('s') {
        format!("{}es", singular)
    } else {
        format!("{}s", singular)
    }
}

fn parse_defaults(yaml: &str) -> Result<RegistrationDefaults, String> {
    serde_yaml_ng::from_str(yaml).map_err(|e| e.to_string())
}

/// The embedded defaults, parsed on first use
pub fn defaults() -> ScaffoldResult<&'static RegistrationDefaults> {
    static DEFAULTS: OnceLock<Result<RegistrationDefaults, String>> = OnceLock::new();
    DEFAULTS
        .get_or_init(|| parse_defaults(DEFAULTS_YAML))
        .as_ref()
        .map_err(|message| ScaffoldError::Registration(message.clone()))
}

/// Registration for one kind
pub fn registration(kind: ScaffoldKind) -> ScaffoldResult<Registration> {
    Ok(Registration::merge(defaults()?, kind))
}
