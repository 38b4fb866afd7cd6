//! Cache tier derivers

use crate::domain::entities::CacheSection;
use crate::domain::value_objects::CacheFlavor;
use crate::k8s::{Container, Deployment, PodSpec, Service, ServicePort};

use super::naming::cache_name;
use super::network::service;
use super::workload::deployment;
use super::Identity;

/// Cache replicas are not configurable
const CACHE_REPLICAS: i32 = 1;

/// Single-replica Redis/Valkey deployment
pub fn cache_deployment(id: &Identity<'_>, cache: &CacheSection) -> Deployment {
    let image = CacheFlavor::resolve(&cache.flavor).image();
    let container = Container::new("cache", image).with_port(cache.port);
    deployment(
        id,
        &cache_name(id.name),
        CACHE_REPLICAS,
        PodSpec {
            volumes: Vec::new(),
            containers: vec![container],
        },
    )
}

/// Service exposing the cache port unchanged
pub fn cache_service(id: &Identity<'_>, cache: &CacheSection) -> Service {
    service(
        id,
        &cache_name(id.name),
        ServicePort::new(cache.port, cache.port),
    )
}
