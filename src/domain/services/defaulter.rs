//! Spec defaulting
//!
//! Fills zero-valued optional fields (empty string, zero number) from the
//! kind's profile. Defaulting is total and idempotent: a field that already
//! holds a value is never touched, so a second pass changes nothing.

use std::ops::Deref;

use tracing::debug;

use crate::domain::entities::{NetworkSection, ScaffoldSpec};
use crate::domain::value_objects::{DEFAULT_FLAVOR, FRONTEND_REPLICAS};

/// Default database instance count
pub const DEFAULT_INSTANCES: i32 = 1;
/// Default database volume size
pub const DEFAULT_STORAGE_SIZE: &str = "10Gi";
/// Default PostgreSQL major version
pub const DEFAULT_POSTGRES_VERSION: &str = "16";
/// Default cache port
pub const DEFAULT_CACHE_PORT: i32 = 6379;
/// Default static web server image
pub const DEFAULT_FRONTEND_IMAGE: &str = "nginx:stable-alpine";

/// A spec that has been through the defaulter
///
/// Derivers only accept this type, so they never observe an unset field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultedSpec(ScaffoldSpec);

impl DefaultedSpec {
    /// Apply defaults and seal the spec
    pub fn new(mut spec: ScaffoldSpec) -> Self {
        apply_defaults(&mut spec);
        Self(spec)
    }

    pub fn into_inner(self) -> ScaffoldSpec {
        self.0
    }
}

impl Deref for DefaultedSpec {
    type Target = ScaffoldSpec;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Fill omitted optional fields in place
pub fn apply_defaults(spec: &mut ScaffoldSpec) {
    let profile = spec.kind.profile();

    if let (Some(defaults), Some(workload)) = (profile.workload, spec.workload.as_mut()) {
        default_int(&mut workload.replicas, defaults.replicas);
        default_int(&mut workload.container_port, defaults.container_port);
    }

    if let (Some(defaults), Some(network)) = (profile.network, spec.network.as_mut()) {
        default_str(&mut network.path, defaults.path);
    }

    if let Some(database) = spec.database.as_mut() {
        default_int(&mut database.instances, DEFAULT_INSTANCES);
        default_str(&mut database.storage_size, DEFAULT_STORAGE_SIZE);
        default_str(&mut database.postgres_version, DEFAULT_POSTGRES_VERSION);
    }

    if let Some(cache) = spec.cache.as_mut() {
        default_str(&mut cache.flavor, DEFAULT_FLAVOR);
        default_int(&mut cache.port, DEFAULT_CACHE_PORT);
    }

    // Runs after the backend path is defaulted: the placeholder page links to it.
    if let (Some(defaults), Some(frontend)) = (profile.frontend, spec.frontend.as_mut()) {
        default_str(&mut frontend.network.path, defaults.path);
        default_str(&mut frontend.image, DEFAULT_FRONTEND_IMAGE);
        default_int(&mut frontend.replicas, FRONTEND_REPLICAS);
        if frontend.static_content.is_empty() {
            frontend.static_content = placeholder_page(&spec.name, spec.network.as_ref());
        }
    }

    debug!(kind = %spec.kind, name = %spec.name, "defaults applied");
}

/// Placeholder `index.html` pointing visitors at the backend API
pub fn placeholder_page(name: &str, backend: Option<&NetworkSection>) -> String {
    let (host, path) = backend
        .map(|n| (n.host.as_str(), n.path.as_str()))
        .unwrap_or_default();
    format!(
        r#"<!doctype html>
<html>
  <head>
    <title>{name}</title>
  </head>
  <body>
    <h1>{name}</h1>
    <p>Your backend API is available at https://{host}{path}</p>
  </body>
</html>"#
    )
}

fn default_int(value: &mut i32, default: i32) {
    if *value == 0 {
        *value = default;
    }
}

fn default_str(value: &mut String, default: &str) {
    if value.is_empty() {
        *value = default.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        CacheSection, DatabaseSection, FrontendSection, NetworkSection, WorkloadSection,
    };
    use crate::domain::value_objects::ScaffoldKind;

    fn required_only(kind: ScaffoldKind) -> ScaffoldSpec {
        ScaffoldSpec::new(kind, "shop", "default")
            .with_workload(WorkloadSection {
                image: "nginx".to_string(),
                ..WorkloadSection::default()
            })
            .with_network(NetworkSection {
                host: "shop.example.com".to_string(),
                ..NetworkSection::default()
            })
    }

    fn full_stack() -> ScaffoldSpec {
        required_only(ScaffoldKind::FullStack)
            .with_frontend(FrontendSection {
                network: NetworkSection {
                    host: "www.example.com".to_string(),
                    ..NetworkSection::default()
                },
                ..FrontendSection::default()
            })
            .with_database(DatabaseSection {
                cluster_name: "shop-db".to_string(),
                database_name: "shop".to_string(),
                ..DatabaseSection::default()
            })
            .with_cache(CacheSection::default())
    }

    #[test]
    fn container_ingress_defaults() {
        let spec = DefaultedSpec::new(required_only(ScaffoldKind::ContainerIngress));
        let workload = spec.workload.as_ref().unwrap();
        assert_eq!(workload.replicas, 1);
        assert_eq!(workload.container_port, 8080);
        assert_eq!(spec.network.as_ref().unwrap().path, "/");
    }

    #[test]
    fn multi_resource_kinds_default_to_two_replicas() {
        for kind in [
            ScaffoldKind::ContainerIngressDb,
            ScaffoldKind::ContainerIngressDbRedis,
            ScaffoldKind::FullStack,
        ] {
            let mut spec = required_only(kind);
            apply_defaults(&mut spec);
            assert_eq!(spec.workload.unwrap().replicas, 2, "{kind}");
        }
    }

    #[test]
    fn bare_deployment_defaults_to_port_80() {
        let mut spec = ScaffoldSpec::new(ScaffoldKind::ContainerDeployment, "api", "default")
            .with_workload(WorkloadSection {
                image: "nginx".to_string(),
                ..WorkloadSection::default()
            });
        apply_defaults(&mut spec);
        let workload = spec.workload.unwrap();
        assert_eq!(workload.replicas, 1);
        assert_eq!(workload.container_port, 80);
    }

    #[test]
    fn full_stack_defaults_every_section() {
        let spec = DefaultedSpec::new(full_stack());

        assert_eq!(spec.network.as_ref().unwrap().path, "/api");

        let database = spec.database.as_ref().unwrap();
        assert_eq!(database.instances, 1);
        assert_eq!(database.storage_size, "10Gi");
        assert_eq!(database.postgres_version, "16");

        let cache = spec.cache.as_ref().unwrap();
        assert_eq!(cache.flavor, "redis");
        assert_eq!(cache.port, 6379);

        let frontend = spec.frontend.as_ref().unwrap();
        assert_eq!(frontend.network.path, "/");
        assert_eq!(frontend.image, "nginx:stable-alpine");
        assert_eq!(frontend.replicas, 1);
        assert!(frontend
            .static_content
            .contains("Your backend API is available at https://shop.example.com/api"));
        assert!(frontend.static_content.contains("<title>shop</title>"));
    }

    #[test]
    fn explicit_values_are_kept() {
        let mut spec = full_stack();
        {
            let workload = spec.workload.as_mut().unwrap();
            workload.replicas = 5;
            workload.container_port = 3000;
        }
        spec.network.as_mut().unwrap().path = "/v2".to_string();
        spec.cache.as_mut().unwrap().flavor = "valkey".to_string();
        spec.frontend.as_mut().unwrap().static_content = "<p>hi</p>".to_string();

        let spec = DefaultedSpec::new(spec);
        let workload = spec.workload.as_ref().unwrap();
        assert_eq!(workload.replicas, 5);
        assert_eq!(workload.container_port, 3000);
        assert_eq!(spec.network.as_ref().unwrap().path, "/v2");
        assert_eq!(spec.cache.as_ref().unwrap().flavor, "valkey");
        assert_eq!(spec.frontend.as_ref().unwrap().static_content, "<p>hi</p>");
    }

    #[test]
    fn placeholder_page_links_to_custom_backend_path() {
        let mut spec = full_stack();
        spec.network.as_mut().unwrap().path = "/v2".to_string();
        let spec = DefaultedSpec::new(spec);
        assert!(spec
            .frontend
            .as_ref()
            .unwrap()
            .static_content
            .contains("https://shop.example.com/v2"));
    }

    #[test]
    fn defaulting_twice_changes_nothing() {
        let once = DefaultedSpec::new(full_stack());
        let twice = DefaultedSpec::new(once.clone().into_inner());
        assert_eq!(once, twice);
    }

    #[test]
    fn negative_values_are_left_for_the_validator() {
        let mut spec = required_only(ScaffoldKind::ContainerIngress);
        spec.workload.as_mut().unwrap().replicas = -1;
        apply_defaults(&mut spec);
        assert_eq!(spec.workload.unwrap().replicas, -1);
    }
}
