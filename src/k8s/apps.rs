//! apps/v1 types

use serde::{Deserialize, Serialize};

use super::{impl_api_defaults, HasApiResource, Labels, ObjectMeta, PodSpec};

/// Kubernetes Deployment
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    #[serde(default = "Deployment::default_api_version")]
    pub api_version: String,
    #[serde(default = "Deployment::default_kind")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: DeploymentSpec,
}

impl HasApiResource for Deployment {
    const API_VERSION: &'static str = "apps/v1";
    const KIND: &'static str = "Deployment";
}

impl_api_defaults!(Deployment);

impl Deployment {
    pub fn new(metadata: ObjectMeta, spec: DeploymentSpec) -> Self {
        Self {
            api_version: Self::default_api_version(),
            kind: Self::default_kind(),
            metadata,
            spec,
        }
    }

    /// Labels stamped on the pods this deployment creates
    pub fn pod_labels(&self) -> &Labels {
        &self.spec.template.metadata.labels
    }
}

/// Deployment spec
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeploymentSpec {
    pub replicas: i32,
    pub selector: LabelSelector,
    pub template: PodTemplateSpec,
}

impl DeploymentSpec {
    /// Spec whose selector and pod template share one label map
    pub fn selecting(labels: Labels, replicas: i32, pod: PodSpec) -> Self {
        Self {
            replicas,
            selector: LabelSelector {
                match_labels: labels.clone(),
            },
            template: PodTemplateSpec {
                metadata: PodTemplateMeta { labels },
                spec: pod,
            },
        }
    }
}

/// Label selector
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    pub match_labels: Labels,
}

/// Pod template
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PodTemplateSpec {
    pub metadata: PodTemplateMeta,
    pub spec: PodSpec,
}

/// Pod template metadata (labels only)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PodTemplateMeta {
    pub labels: Labels,
}
