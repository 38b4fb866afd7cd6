//! Shared input generators

use proptest::prelude::*;
use scaffolds::models::{
    BackendSpec, CacheSpec, ContainerIngressSpec, DatabaseSpec, FrontendSpec, FullStackSpec,
};

pub fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}[a-z0-9]"
}

pub fn host() -> impl Strategy<Value = String> {
    "[a-z]{1,10}\\.example\\.com"
}

pub fn image() -> impl Strategy<Value = String> {
    "[a-z]{1,12}(:[0-9]{1,3})?"
}

/// Zero means "use the default"
pub fn count() -> impl Strategy<Value = i32> {
    0..8i32
}

pub fn port() -> impl Strategy<Value = i32> {
    prop_oneof![Just(0), 1..=65535i32]
}

pub fn optional(inner: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), inner]
}

pub fn flavor() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("redis".to_string()),
        Just("VALKEY".to_string()),
        "[a-zA-Z]{1,8}",
    ]
}

pub fn container_ingress() -> impl Strategy<Value = ContainerIngressSpec> {
    (
        image(),
        count(),
        port(),
        host(),
        optional(Just("/api".to_string())),
        optional(name()),
    )
        .prop_map(
            |(image, replicas, container_port, host, path, tls_secret_name)| ContainerIngressSpec {
                image,
                replicas,
                container_port,
                host,
                path,
                tls_secret_name,
            },
        )
}

pub fn database() -> impl Strategy<Value = DatabaseSpec> {
    (name(), name(), count(), optional(Just("20Gi".to_string()))).prop_map(
        |(cluster_name, database_name, instances, storage_size)| DatabaseSpec {
            cluster_name,
            database_name,
            instances,
            storage_size,
            postgres_version: String::new(),
        },
    )
}

pub fn cache() -> impl Strategy<Value = CacheSpec> {
    (flavor(), port()).prop_map(|(flavor, port)| CacheSpec { flavor, port })
}

pub fn full_stack() -> impl Strategy<Value = FullStackSpec> {
    (
        container_ingress(),
        host(),
        optional(Just("<h1>hi</h1>".to_string())),
        count(),
        database(),
        cache(),
    )
        .prop_map(|(ingress, frontend_host, static_content, replicas, database, cache)| {
            FullStackSpec {
                backend: BackendSpec {
                    image: ingress.image,
                    replicas: ingress.replicas,
                    container_port: ingress.container_port,
                    host: ingress.host,
                    path: ingress.path,
                    tls_secret_name: ingress.tls_secret_name,
                },
                frontend: FrontendSpec {
                    host: frontend_host,
                    replicas,
                    static_content,
                    ..FrontendSpec::default()
                },
                database,
                cache,
            }
        })
}
