//! Kubernetes resource types emitted by the derivers
//!
//! These are the fixed collaborator schemas: only the fields the scaffolds
//! populate are modelled. All types serialize to the camelCase shapes the API
//! server (or the CloudNativePG operator) expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label map shared by workloads, their pod templates, and selectors
pub type Labels = BTreeMap<String, String>;

/// Static API identity for a resource type
pub trait HasApiResource {
    /// Full API version (e.g., "apps/v1", "v1")
    const API_VERSION: &'static str;
    /// Resource kind (e.g., "Deployment")
    const KIND: &'static str;
}

/// Implements serde default functions for `apiVersion`/`kind` from `HasApiResource`.
macro_rules! impl_api_defaults {
    ($type:ty) => {
        impl $type {
            fn default_api_version() -> String {
                <Self as $crate::k8s::HasApiResource>::API_VERSION.to_string()
            }
            fn default_kind() -> String {
                <Self as $crate::k8s::HasApiResource>::KIND.to_string()
            }
        }
    };
}
pub(crate) use impl_api_defaults;

mod apps;
mod cnpg;
mod core_v1;
mod networking;

pub use apps::{Deployment, DeploymentSpec, LabelSelector, PodTemplateMeta, PodTemplateSpec};
pub use cnpg::{
    Bootstrap, Cluster, ClusterSpec, InitDb, StorageConfiguration, POSTGRES_IMAGE_REPOSITORY,
};
pub use core_v1::{
    ConfigMap, ConfigMapVolumeSource, Container, ContainerPort, EnvVar, PodSpec, Service,
    ServicePort, ServiceSpec, Volume, VolumeMount,
};
pub use networking::{
    HttpIngressPath, HttpIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, IngressTls, ServiceBackendPort, PATH_TYPE_PREFIX,
};

/// Object metadata
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectMeta {
    /// Resource name
    pub name: String,
    /// Resource namespace
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// Labels
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: Labels,
}

impl ObjectMeta {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            labels: BTreeMap::new(),
        }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

/// One derived resource, serialized as its bare object
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Resource {
    Deployment(Deployment),
    Service(Service),
    Ingress(Ingress),
    ConfigMap(ConfigMap),
    Cluster(Cluster),
}

impl Resource {
    /// Resource kind
    pub fn kind(&self) -> &str {
        match self {
            Resource::Deployment(r) => &r.kind,
            Resource::Service(r) => &r.kind,
            Resource::Ingress(r) => &r.kind,
            Resource::ConfigMap(r) => &r.kind,
            Resource::Cluster(r) => &r.kind,
        }
    }

    /// Resource metadata
    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Resource::Deployment(r) => &r.metadata,
            Resource::Service(r) => &r.metadata,
            Resource::Ingress(r) => &r.metadata,
            Resource::ConfigMap(r) => &r.metadata,
            Resource::Cluster(r) => &r.metadata,
        }
    }

    /// Resource name
    pub fn name(&self) -> &str {
        &self.metadata().name
    }

    pub fn as_deployment(&self) -> Option<&Deployment> {
        match self {
            Resource::Deployment(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_service(&self) -> Option<&Service> {
        match self {
            Resource::Service(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ingress(&self) -> Option<&Ingress> {
        match self {
            Resource::Ingress(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_config_map(&self) -> Option<&ConfigMap> {
        match self {
            Resource::ConfigMap(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_cluster(&self) -> Option<&Cluster> {
        match self {
            Resource::Cluster(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Deployment> for Resource {
    fn from(value: Deployment) -> Self {
        Resource::Deployment(value)
    }
}

impl From<Service> for Resource {
    fn from(value: Service) -> Self {
        Resource::Service(value)
    }
}

impl From<Ingress> for Resource {
    fn from(value: Ingress) -> Self {
        Resource::Ingress(value)
    }
}

impl From<ConfigMap> for Resource {
    fn from(value: ConfigMap) -> Self {
        Resource::ConfigMap(value)
    }
}

impl From<Cluster> for Resource {
    fn from(value: Cluster) -> Self {
        Resource::Cluster(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_skips_empty_namespace_and_labels() {
        let meta = ObjectMeta::new("shop", "");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "shop" }));
    }

    #[test]
    fn resource_serializes_untagged() {
        let cm = ConfigMap::new(ObjectMeta::new("shop", "default")).with_data("k", "v");
        let json = serde_json::to_value(Resource::from(cm)).unwrap();
        assert_eq!(json["kind"], "ConfigMap");
        assert_eq!(json["apiVersion"], "v1");
        assert_eq!(json["data"]["k"], "v");
    }
}
