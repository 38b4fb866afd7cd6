//! networking.k8s.io/v1 types

use serde::{Deserialize, Serialize};

use super::{impl_api_defaults, HasApiResource, ObjectMeta};

/// Path type used for every route the scaffolds emit
pub const PATH_TYPE_PREFIX: &str = "Prefix";

/// Kubernetes Ingress
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ingress {
    #[serde(default = "Ingress::default_api_version")]
    pub api_version: String,
    #[serde(default = "Ingress::default_kind")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: IngressSpec,
}

impl HasApiResource for Ingress {
    const API_VERSION: &'static str = "networking.k8s.io/v1";
    const KIND: &'static str = "Ingress";
}

impl_api_defaults!(Ingress);

impl Ingress {
    pub fn new(metadata: ObjectMeta, spec: IngressSpec) -> Self {
        Self {
            api_version: Self::default_api_version(),
            kind: Self::default_kind(),
            metadata,
            spec,
        }
    }
}

/// Ingress spec
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngressSpec {
    pub rules: Vec<IngressRule>,
    /// Omitted entirely when no TLS secret is configured
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tls: Vec<IngressTls>,
}

/// Host rule
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngressRule {
    pub host: String,
    pub http: HttpIngressRuleValue,
}

/// HTTP paths for a host rule
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpIngressRuleValue {
    pub paths: Vec<HttpIngressPath>,
}

/// One routed path
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpIngressPath {
    pub path: String,
    pub path_type: String,
    pub backend: IngressBackend,
}

/// Route backend
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngressBackend {
    pub service: IngressServiceBackend,
}

/// Service reference in a route backend
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngressServiceBackend {
    pub name: String,
    pub port: ServiceBackendPort,
}

/// Numeric service port reference
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceBackendPort {
    pub number: i32,
}

/// TLS termination block
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngressTls {
    pub hosts: Vec<String>,
    pub secret_name: String,
}
