//! ScaffoldKind value object - which application shape to render

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScaffoldError;

use super::profile::KindProfile;

/// Registered scaffold kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaffoldKind {
    /// Template scaffold emitting a single ConfigMap
    Base,
    /// Bare container Deployment
    ContainerDeployment,
    /// Container behind a Service and Ingress
    ContainerIngress,
    /// ContainerIngress plus a managed PostgreSQL cluster
    #[serde(rename = "ContainerIngressDB")]
    ContainerIngressDb,
    /// ContainerIngressDB plus a Redis/Valkey cache tier
    #[serde(rename = "ContainerIngressDBRedis")]
    ContainerIngressDbRedis,
    /// Backend, database, cache, and static frontend
    FullStack,
}

impl ScaffoldKind {
    /// Every registered kind, in registration order
    pub const ALL: [ScaffoldKind; 6] = [
        ScaffoldKind::Base,
        ScaffoldKind::ContainerDeployment,
        ScaffoldKind::ContainerIngress,
        ScaffoldKind::ContainerIngressDb,
        ScaffoldKind::ContainerIngressDbRedis,
        ScaffoldKind::FullStack,
    ];

    /// Kind name as it appears in the document envelope
    pub fn kind_name(&self) -> &'static str {
        match self {
            ScaffoldKind::Base => "Base",
            ScaffoldKind::ContainerDeployment => "ContainerDeployment",
            ScaffoldKind::ContainerIngress => "ContainerIngress",
            ScaffoldKind::ContainerIngressDb => "ContainerIngressDB",
            ScaffoldKind::ContainerIngressDbRedis => "ContainerIngressDBRedis",
            ScaffoldKind::FullStack => "FullStack",
        }
    }

    /// Kebab-case name used on the command line
    pub fn cli_name(&self) -> &'static str {
        match self {
            ScaffoldKind::Base => "base",
            ScaffoldKind::ContainerDeployment => "container-deployment",
            ScaffoldKind::ContainerIngress => "container-ingress",
            ScaffoldKind::ContainerIngressDb => "container-ingress-db",
            ScaffoldKind::ContainerIngressDbRedis => "container-ingress-db-redis",
            ScaffoldKind::FullStack => "full-stack",
        }
    }

    /// Declarative rendering profile for this kind
    pub fn profile(&self) -> &'static KindProfile {
        KindProfile::of(*self)
    }
}

impl std::fmt::Display for ScaffoldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind_name())
    }
}

impl FromStr for ScaffoldKind {
    type Err = ScaffoldError;

    /// Accepts either the envelope kind name or the CLI name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.kind_name() == trimmed || k.cli_name() == trimmed)
            .ok_or_else(|| ScaffoldError::UnknownKind {
                kind: trimmed.to_string(),
            })
    }
}
