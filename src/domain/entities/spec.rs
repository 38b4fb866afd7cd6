//! ScaffoldSpec entity - the normalized spec model
//!
//! Every scaffold kind decodes its own wire layout, then lands here: one
//! identity plus the typed sections the kind carries. Sections a kind does
//! not have stay `None`. The defaulter is the only code that mutates a spec;
//! derivers read it.

use crate::domain::value_objects::{ScaffoldKind, CACHE_PREFIX, DATABASE_PREFIX};
use crate::error::{ScaffoldError, ScaffoldResult};

/// Container workload settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkloadSection {
    pub image: String,
    pub replicas: i32,
    pub container_port: i32,
}

/// Host/path exposure settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkSection {
    pub host: String,
    pub path: String,
    /// Name of an externally managed TLS secret; empty means no TLS
    pub tls_secret_name: String,
}

impl NetworkSection {
    /// The TLS secret name, if one was given
    pub fn tls_secret(&self) -> Option<&str> {
        Some(self.tls_secret_name.as_str()).filter(|s| !s.is_empty())
    }
}

/// CloudNativePG cluster request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatabaseSection {
    pub cluster_name: String,
    pub database_name: String,
    pub instances: i32,
    pub storage_size: String,
    pub postgres_version: String,
}

/// Cache tier settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CacheSection {
    /// Free-form flavor, resolved case-insensitively at derivation time
    pub flavor: String,
    pub port: i32,
}

/// Static frontend tier (full-stack only)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrontendSection {
    pub network: NetworkSection,
    pub image: String,
    pub replicas: i32,
    pub static_content: String,
}

/// The base scaffold's single free-form property
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertySection {
    pub some_property: String,
}

/// Normalized input spec, independent of wire layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSpec {
    pub kind: ScaffoldKind,
    /// Scaffold name from the resource envelope
    pub name: String,
    /// Scaffold namespace from the resource envelope
    pub namespace: String,
    pub property: Option<PropertySection>,
    pub workload: Option<WorkloadSection>,
    pub network: Option<NetworkSection>,
    pub database: Option<DatabaseSection>,
    pub cache: Option<CacheSection>,
    pub frontend: Option<FrontendSection>,
}

impl ScaffoldSpec {
    /// Create an empty spec for a kind
    pub fn new(kind: ScaffoldKind, name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            namespace: namespace.into(),
            property: None,
            workload: None,
            network: None,
            database: None,
            cache: None,
            frontend: None,
        }
    }

    pub fn with_property(mut self, property: PropertySection) -> Self {
        self.property = Some(property);
        self
    }

    pub fn with_workload(mut self, workload: WorkloadSection) -> Self {
        self.workload = Some(workload);
        self
    }

    pub fn with_network(mut self, network: NetworkSection) -> Self {
        self.network = Some(network);
        self
    }

    pub fn with_database(mut self, database: DatabaseSection) -> Self {
        self.database = Some(database);
        self
    }

    pub fn with_cache(mut self, cache: CacheSection) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_frontend(mut self, frontend: FrontendSection) -> Self {
        self.frontend = Some(frontend);
        self
    }

    fn prefix_of_workload(&self) -> &'static str {
        self.kind.profile().workload.map(|w| w.prefix).unwrap_or("spec")
    }

    fn prefix_of_network(&self) -> &'static str {
        self.kind.profile().network.map(|n| n.prefix).unwrap_or("spec")
    }

    pub fn property_section(&self) -> ScaffoldResult<&PropertySection> {
        self.property
            .as_ref()
            .ok_or_else(|| ScaffoldError::missing("spec"))
    }

    pub fn workload_section(&self) -> ScaffoldResult<&WorkloadSection> {
        self.workload
            .as_ref()
            .ok_or_else(|| ScaffoldError::missing(self.prefix_of_workload()))
    }

    pub fn network_section(&self) -> ScaffoldResult<&NetworkSection> {
        self.network
            .as_ref()
            .ok_or_else(|| ScaffoldError::missing(self.prefix_of_network()))
    }

    pub fn database_section(&self) -> ScaffoldResult<&DatabaseSection> {
        self.database
            .as_ref()
            .ok_or_else(|| ScaffoldError::missing(DATABASE_PREFIX))
    }

    pub fn cache_section(&self) -> ScaffoldResult<&CacheSection> {
        self.cache
            .as_ref()
            .ok_or_else(|| ScaffoldError::missing(CACHE_PREFIX))
    }

    pub fn frontend_section(&self) -> ScaffoldResult<&FrontendSection> {
        self.frontend
            .as_ref()
            .ok_or_else(|| ScaffoldError::missing("spec.frontend"))
    }
}
