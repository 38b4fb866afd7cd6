//! Wire payloads for each scaffold kind
//!
//! Defines the `spec` body of every input document:
//! - `BaseSpec`, `ContainerDeploymentSpec`, `ContainerIngressSpec`,
//!   `ContainerIngressDbSpec`, `ContainerIngressDbRedisSpec`, `FullStackSpec`
//! - Shared sections: `DatabaseSpec`, `CacheSpec`, `BackendSpec`, `FrontendSpec`
//!
//! Every field is optional on the wire; absence decodes to the zero value so
//! the defaulter can tell "unset" from "explicitly set".

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{
    CacheSection, DatabaseSection, FrontendSection, NetworkSection, PropertySection,
    ScaffoldSpec, WorkloadSection,
};
use crate::domain::value_objects::ScaffoldKind;

fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// Decode an explicit `null` as the zero value, same as an absent field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Payload carried in an envelope's `spec`
pub trait ScaffoldPayload: Serialize + DeserializeOwned + Default + Clone + Debug {
    /// The kind this payload belongs to
    const KIND: ScaffoldKind;

    /// Normalize into the engine's spec model
    fn into_spec(self, name: &str, namespace: &str) -> ScaffoldSpec;

    /// A minimal payload that passes validation
    fn example() -> Self;
}

// =============================================================================
// Shared sections
// =============================================================================

/// CloudNativePG inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub cluster_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub database_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub instances: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub storage_size: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub postgres_version: String,
}

impl DatabaseSpec {
    fn example(name: &str) -> Self {
        Self {
            cluster_name: format!("{}-db", name),
            database_name: name.to_string(),
            ..Self::default()
        }
    }
}

impl From<DatabaseSpec> for DatabaseSection {
    fn from(spec: DatabaseSpec) -> Self {
        DatabaseSection {
            cluster_name: spec.cluster_name,
            database_name: spec.database_name,
            instances: spec.instances,
            storage_size: spec.storage_size,
            postgres_version: spec.postgres_version,
        }
    }
}

/// Redis / Valkey options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheSpec {
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub flavor: String,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub port: i32,
}

impl From<CacheSpec> for CacheSection {
    fn from(spec: CacheSpec) -> Self {
        CacheSection {
            flavor: spec.flavor,
            port: spec.port,
        }
    }
}

/// Full-stack API deployment and ingress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub replicas: i32,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub container_port: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub tls_secret_name: String,
}

/// Full-stack static site deployment and ingress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrontendSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub tls_secret_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub replicas: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub static_content: String,
}

// =============================================================================
// Kind payloads
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub some_property: String,
}

impl ScaffoldPayload for BaseSpec {
    const KIND: ScaffoldKind = ScaffoldKind::Base;

    fn into_spec(self, name: &str, namespace: &str) -> ScaffoldSpec {
        ScaffoldSpec::new(Self::KIND, name, namespace).with_property(PropertySection {
            some_property: self.some_property,
        })
    }

    fn example() -> Self {
        Self {
            some_property: "world".to_string(),
        }
    }
}

/// Bare deployment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerDeploymentSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub replicas: i32,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub port: i32,
}

impl ScaffoldPayload for ContainerDeploymentSpec {
    const KIND: ScaffoldKind = ScaffoldKind::ContainerDeployment;

    fn into_spec(self, name: &str, namespace: &str) -> ScaffoldSpec {
        ScaffoldSpec::new(Self::KIND, name, namespace).with_workload(WorkloadSection {
            image: self.image,
            replicas: self.replicas,
            container_port: self.port,
        })
    }

    fn example() -> Self {
        Self {
            image: "nginx".to_string(),
            ..Self::default()
        }
    }
}

/// Deployment behind a service and ingress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerIngressSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub replicas: i32,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub container_port: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub tls_secret_name: String,
}

impl ContainerIngressSpec {
    fn sections(self) -> (WorkloadSection, NetworkSection) {
        (
            WorkloadSection {
                image: self.image,
                replicas: self.replicas,
                container_port: self.container_port,
            },
            NetworkSection {
                host: self.host,
                path: self.path,
                tls_secret_name: self.tls_secret_name,
            },
        )
    }
}

impl ScaffoldPayload for ContainerIngressSpec {
    const KIND: ScaffoldKind = ScaffoldKind::ContainerIngress;

    fn into_spec(self, name: &str, namespace: &str) -> ScaffoldSpec {
        let (workload, network) = self.sections();
        ScaffoldSpec::new(Self::KIND, name, namespace)
            .with_workload(workload)
            .with_network(network)
    }

    fn example() -> Self {
        Self {
            image: "nginx".to_string(),
            host: "example.local".to_string(),
            ..Self::default()
        }
    }
}

/// Ingress scaffold plus a PostgreSQL cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerIngressDbSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub replicas: i32,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub container_port: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub tls_secret_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub database: DatabaseSpec,
}

impl ScaffoldPayload for ContainerIngressDbSpec {
    const KIND: ScaffoldKind = ScaffoldKind::ContainerIngressDb;

    fn into_spec(self, name: &str, namespace: &str) -> ScaffoldSpec {
        let ingress = ContainerIngressSpec {
            image: self.image,
            replicas: self.replicas,
            container_port: self.container_port,
            host: self.host,
            path: self.path,
            tls_secret_name: self.tls_secret_name,
        };
        let (workload, network) = ingress.sections();
        ScaffoldSpec::new(Self::KIND, name, namespace)
            .with_workload(workload)
            .with_network(network)
            .with_database(self.database.into())
    }

    fn example() -> Self {
        Self {
            image: "nginx".to_string(),
            host: "example.local".to_string(),
            database: DatabaseSpec::example("example"),
            ..Self::default()
        }
    }
}

/// Ingress scaffold plus PostgreSQL and a cache tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerIngressDbRedisSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub replicas: i32,
    #[serde(skip_serializing_if = "is_zero")]
    #[serde(deserialize_with = "null_as_default")]
    pub container_port: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub tls_secret_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub database: DatabaseSpec,
    #[serde(deserialize_with = "null_as_default")]
    pub cache: CacheSpec,
}

impl ScaffoldPayload for ContainerIngressDbRedisSpec {
    const KIND: ScaffoldKind = ScaffoldKind::ContainerIngressDbRedis;

    fn into_spec(self, name: &str, namespace: &str) -> ScaffoldSpec {
        let ingress = ContainerIngressSpec {
            image: self.image,
            replicas: self.replicas,
            container_port: self.container_port,
            host: self.host,
            path: self.path,
            tls_secret_name: self.tls_secret_name,
        };
        let (workload, network) = ingress.sections();
        ScaffoldSpec::new(Self::KIND, name, namespace)
            .with_workload(workload)
            .with_network(network)
            .with_database(self.database.into())
            .with_cache(self.cache.into())
    }

    fn example() -> Self {
        Self {
            image: "nginx".to_string(),
            host: "example.local".to_string(),
            database: DatabaseSpec::example("example"),
            ..Self::default()
        }
    }
}

/// Backend, frontend, database and cache
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullStackSpec {
    #[serde(deserialize_with = "null_as_default")]
    pub backend: BackendSpec,
    #[serde(deserialize_with = "null_as_default")]
    pub frontend: FrontendSpec,
    #[serde(deserialize_with = "null_as_default")]
    pub database: DatabaseSpec,
    #[serde(deserialize_with = "null_as_default")]
    pub cache: CacheSpec,
}

impl ScaffoldPayload for FullStackSpec {
    const KIND: ScaffoldKind = ScaffoldKind::FullStack;

    fn into_spec(self, name: &str, namespace: &str) -> ScaffoldSpec {
        let backend = self.backend;
        let frontend = self.frontend;
        ScaffoldSpec::new(Self::KIND, name, namespace)
            .with_workload(WorkloadSection {
                image: backend.image,
                replicas: backend.replicas,
                container_port: backend.container_port,
            })
            .with_network(NetworkSection {
                host: backend.host,
                path: backend.path,
                tls_secret_name: backend.tls_secret_name,
            })
            .with_database(self.database.into())
            .with_cache(self.cache.into())
            .with_frontend(FrontendSection {
                network: NetworkSection {
                    host: frontend.host,
                    path: frontend.path,
                    tls_secret_name: frontend.tls_secret_name,
                },
                image: frontend.image,
                replicas: frontend.replicas,
                static_content: frontend.static_content,
            })
    }

    fn example() -> Self {
        Self {
            backend: BackendSpec {
                image: "ghcr.io/example/api:latest".to_string(),
                host: "api.example.local".to_string(),
                ..BackendSpec::default()
            },
            frontend: FrontendSpec {
                host: "example.local".to_string(),
                ..FrontendSpec::default()
            },
            database: DatabaseSpec::example("example"),
            cache: CacheSpec::default(),
        }
    }
}
