//! postgresql.cnpg.io/v1 types
//!
//! The CloudNativePG operator owns the cluster lifecycle. It exposes the
//! primary as a Service named `<cluster>-rw` on the standard PostgreSQL port.

use serde::{Deserialize, Serialize};

use super::{impl_api_defaults, HasApiResource, ObjectMeta};

/// Image repository the operator pulls PostgreSQL from
pub const POSTGRES_IMAGE_REPOSITORY: &str = "ghcr.io/cloudnative-pg/postgresql";

/// CloudNativePG Cluster request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(default = "Cluster::default_api_version")]
    pub api_version: String,
    #[serde(default = "Cluster::default_kind")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ClusterSpec,
}

impl HasApiResource for Cluster {
    const API_VERSION: &'static str = "postgresql.cnpg.io/v1";
    const KIND: &'static str = "Cluster";
}

impl_api_defaults!(Cluster);

impl Cluster {
    pub fn new(metadata: ObjectMeta, spec: ClusterSpec) -> Self {
        Self {
            api_version: Self::default_api_version(),
            kind: Self::default_kind(),
            metadata,
            spec,
        }
    }
}

/// Cluster spec
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    pub instances: i32,
    pub image_name: String,
    pub storage: StorageConfiguration,
    pub bootstrap: Bootstrap,
}

impl ClusterSpec {
    /// Image reference for a PostgreSQL major version
    pub fn image_for(version: &str) -> String {
        format!("{}:{}", POSTGRES_IMAGE_REPOSITORY, version)
    }
}

/// Persistent storage request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfiguration {
    pub size: String,
}

/// Bootstrap method
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bootstrap {
    pub initdb: InitDb,
}

/// `initdb` bootstrap: creates the application database
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitDb {
    pub database: String,
}
