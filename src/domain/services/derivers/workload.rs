//! Workload derivers

use crate::domain::entities::{CacheSection, DatabaseSection, WorkloadSection};
use crate::k8s::{Container, Deployment, DeploymentSpec, EnvVar, PodSpec};

use super::naming::{app_labels, cache_name, database_host, workload_name, DATABASE_PORT};
use super::Identity;

/// Deployment whose labels, selector, and pod labels all equal `app_labels(target)`
pub fn deployment(id: &Identity<'_>, target: &str, replicas: i32, pod: PodSpec) -> Deployment {
    let labels = app_labels(target);
    Deployment::new(
        id.meta(target).with_labels(labels.clone()),
        DeploymentSpec::selecting(labels, replicas, pod),
    )
}

/// The scaffold's primary Deployment
pub fn primary_deployment(
    id: &Identity<'_>,
    workload: &WorkloadSection,
    database: Option<&DatabaseSection>,
    cache: Option<&CacheSection>,
) -> Deployment {
    let name = workload_name(id.name);
    let container = Container::new(name.clone(), workload.image.clone())
        .with_env(backend_env(id.name, database, cache))
        .with_port(workload.container_port);

    deployment(
        id,
        &name,
        workload.replicas,
        PodSpec {
            volumes: Vec::new(),
            containers: vec![container],
        },
    )
}

/// Connection settings injected into the primary container
pub fn backend_env(
    name: &str,
    database: Option<&DatabaseSection>,
    cache: Option<&CacheSection>,
) -> Vec<EnvVar> {
    let mut env = Vec::new();
    if let Some(database) = database {
        env.push(EnvVar::new(
            "DATABASE_HOST",
            database_host(&database.cluster_name),
        ));
        env.push(EnvVar::new("DATABASE_NAME", database.database_name.clone()));
        env.push(EnvVar::new("DATABASE_PORT", DATABASE_PORT.to_string()));
    }
    if let Some(cache) = cache {
        env.push(EnvVar::new("CACHE_HOST", cache_name(name)));
        env.push(EnvVar::new("CACHE_PORT", cache.port.to_string()));
    }
    env
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> Identity<'static> {
        Identity {
            name: "shop",
            namespace: "default",
        }
    }

    fn workload() -> WorkloadSection {
        WorkloadSection {
            image: "nginx".to_string(),
            replicas: 2,
            container_port: 8080,
        }
    }

    #[test]
    fn primary_deployment_without_dependencies_has_no_env() {
        let d = primary_deployment(&id(), &workload(), None, None);
        assert_eq!(d.metadata.name, "shop");
        assert_eq!(d.metadata.namespace, "default");
        assert_eq!(d.spec.replicas, 2);
        let container = &d.spec.template.spec.containers[0];
        assert_eq!(container.name, "shop");
        assert_eq!(container.image, "nginx");
        assert!(container.env.is_empty());
        assert_eq!(container.ports[0].container_port, 8080);
    }

    #[test]
    fn labels_selector_and_template_agree() {
        let d = primary_deployment(&id(), &workload(), None, None);
        assert_eq!(d.metadata.labels, d.spec.selector.match_labels);
        assert_eq!(d.metadata.labels, *d.pod_labels());
    }

    #[test]
    fn env_wires_database_then_cache() {
        let database = DatabaseSection {
            cluster_name: "shop-db".to_string(),
            database_name: "orders".to_string(),
            instances: 1,
            storage_size: "10Gi".to_string(),
            postgres_version: "16".to_string(),
        };
        let cache = CacheSection {
            flavor: "redis".to_string(),
            port: 6380,
        };
        let names: Vec<(String, String)> = backend_env("shop", Some(&database), Some(&cache))
            .into_iter()
            .map(|e| (e.name, e.value))
            .collect();
        assert_eq!(
            names,
            vec![
                ("DATABASE_HOST".to_string(), "shop-db-rw".to_string()),
                ("DATABASE_NAME".to_string(), "orders".to_string()),
                ("DATABASE_PORT".to_string(), "5432".to_string()),
                ("CACHE_HOST".to_string(), "shop-cache".to_string()),
                ("CACHE_PORT".to_string(), "6380".to_string()),
            ]
        );
    }
}
