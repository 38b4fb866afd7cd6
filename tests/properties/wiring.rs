//! Cross-reference properties of composed resource lists

use proptest::prelude::*;
use scaffolds::k8s::Resource;
use scaffolds::models::ScaffoldPayload;
use scaffolds::render_spec;

use crate::strategies::{full_stack, name};

fn services(resources: &[Resource]) -> impl Iterator<Item = &scaffolds::k8s::Service> {
    resources.iter().filter_map(Resource::as_service)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]

    /// PROPERTY: every Service selects exactly the pods of a Deployment of the same name
    #[test]
    fn prop_services_select_their_deployment(payload in full_stack(), scaffold in name()) {
        let resources = render_spec(payload.into_spec(&scaffold, "default")).unwrap();

        for service in services(&resources) {
            let deployment = resources
                .iter()
                .filter_map(Resource::as_deployment)
                .find(|d| d.metadata.name == service.metadata.name);
            prop_assert!(deployment.is_some(), "no deployment for {}", service.metadata.name);
            let deployment = deployment.unwrap();
            prop_assert_eq!(&service.spec.selector, deployment.pod_labels());
            prop_assert_eq!(&deployment.spec.selector.match_labels, deployment.pod_labels());
        }
    }

    /// PROPERTY: every Ingress routes to an emitted Service on a port it exposes
    #[test]
    fn prop_ingresses_target_emitted_services(payload in full_stack(), scaffold in name()) {
        let resources = render_spec(payload.into_spec(&scaffold, "default")).unwrap();

        for ingress in resources.iter().filter_map(Resource::as_ingress) {
            let backend = &ingress.spec.rules[0].http.paths[0].backend.service;
            let service = services(&resources).find(|s| s.metadata.name == backend.name);
            prop_assert!(service.is_some(), "no service {}", backend.name);
            prop_assert!(service
                .unwrap()
                .spec
                .ports
                .iter()
                .any(|p| p.port == backend.port.number));
        }
    }

    /// PROPERTY: injected connection settings name the emitted cache and cluster
    #[test]
    fn prop_backend_env_points_at_siblings(payload in full_stack(), scaffold in name()) {
        let cluster_name = payload.database.cluster_name.clone();
        let resources = render_spec(payload.into_spec(&scaffold, "default")).unwrap();

        let backend = resources[0].as_deployment().unwrap();
        let container = &backend.spec.template.spec.containers[0];

        let cache_service = &resources[5];
        prop_assert_eq!(cache_service.kind(), "Service");
        prop_assert_eq!(container.env_value("CACHE_HOST"), Some(cache_service.name()));

        let cache_port = cache_service.as_service().unwrap().spec.ports[0].port.to_string();
        prop_assert_eq!(container.env_value("CACHE_PORT"), Some(cache_port.as_str()));

        let cluster = resources[3].as_cluster().unwrap();
        prop_assert_eq!(&cluster.metadata.name, &cluster_name);
        let host = format!("{}-rw", cluster_name);
        prop_assert_eq!(container.env_value("DATABASE_HOST"), Some(host.as_str()));
    }

    /// PROPERTY: every emitted resource lives in the scaffold's namespace
    #[test]
    fn prop_resources_share_namespace(
        payload in full_stack(),
        scaffold in name(),
        namespace in name(),
    ) {
        let resources = render_spec(payload.into_spec(&scaffold, &namespace)).unwrap();
        prop_assert_eq!(resources.len(), 10);
        for resource in &resources {
            prop_assert_eq!(&resource.metadata().namespace, &namespace);
        }
    }
}

/// Selector agreement for every registered kind, via its example document
#[test]
fn every_kind_pairs_services_with_deployments() {
    use scaffolds::{example_document, render, RenderOptions, ScaffoldKind};

    for kind in ScaffoldKind::ALL {
        let document = example_document(kind, "shop", "default").unwrap().to_string();
        let resources = render(kind, &document, RenderOptions::default())
            .unwrap()
            .resources;

        for service in services(&resources) {
            let deployment = resources
                .iter()
                .filter_map(Resource::as_deployment)
                .find(|d| d.metadata.name == service.metadata.name)
                .unwrap_or_else(|| panic!("{kind}: no deployment for {}", service.metadata.name));
            assert_eq!(&service.spec.selector, deployment.pod_labels(), "{kind}");
        }
    }
}
