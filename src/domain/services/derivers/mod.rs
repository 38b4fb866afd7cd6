//! Resource derivers
//!
//! One pure function per output resource. Each reads only the already
//! defaulted sections it is handed and has no failure path.

pub mod naming;

mod cache;
mod database;
mod frontend;
mod network;
mod property;
mod workload;

pub use cache::{cache_deployment, cache_service};
pub use database::database_cluster;
pub use frontend::{
    frontend_content, frontend_deployment, frontend_ingress, frontend_service, SITE_INDEX,
    SITE_MOUNT_PATH, SITE_VOLUME,
};
pub use network::{ingress, primary_service, service};
pub use property::{property_config_map, PROPERTY_KEY};
pub use workload::{backend_env, deployment, primary_deployment};

use crate::domain::entities::ScaffoldSpec;
use crate::k8s::ObjectMeta;

/// Scaffold identity from the resource envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
}

impl<'a> Identity<'a> {
    pub fn of(spec: &'a ScaffoldSpec) -> Self {
        Self {
            name: &spec.name,
            namespace: &spec.namespace,
        }
    }

    /// Metadata for a resource in the scaffold's namespace
    pub fn meta(&self, resource_name: impl Into<String>) -> ObjectMeta {
        ObjectMeta::new(resource_name, self.namespace)
    }
}
