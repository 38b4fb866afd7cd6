//! Network exposure derivers: Service and Ingress

use crate::domain::entities::{NetworkSection, WorkloadSection};
use crate::k8s::{
    HttpIngressPath, HttpIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, IngressTls, Service, ServiceBackendPort, ServicePort,
    ServiceSpec, PATH_TYPE_PREFIX,
};

use super::naming::{app_labels, workload_name, HTTP_SERVICE_PORT};
use super::Identity;

/// Service selecting the pods labelled `app_labels(target)`
pub fn service(id: &Identity<'_>, target: &str, port: ServicePort) -> Service {
    let labels = app_labels(target);
    Service::new(
        id.meta(target).with_labels(labels.clone()),
        ServiceSpec {
            selector: labels,
            ports: vec![port],
        },
    )
}

/// Port 80 in front of the primary container
pub fn primary_service(id: &Identity<'_>, workload: &WorkloadSection) -> Service {
    service(
        id,
        &workload_name(id.name),
        ServicePort::new(HTTP_SERVICE_PORT, workload.container_port).named("http"),
    )
}

/// Prefix route from `host` + `path` to port 80 of the `target` service.
///
/// The TLS block is emitted only when a secret name is configured.
pub fn ingress(id: &Identity<'_>, target: &str, network: &NetworkSection) -> Ingress {
    let rule = IngressRule {
        host: network.host.clone(),
        http: HttpIngressRuleValue {
            paths: vec![HttpIngressPath {
                path: network.path.clone(),
                path_type: PATH_TYPE_PREFIX.to_string(),
                backend: IngressBackend {
                    service: IngressServiceBackend {
                        name: target.to_string(),
                        port: ServiceBackendPort {
                            number: HTTP_SERVICE_PORT,
                        },
                    },
                },
            }],
        },
    };

    let tls = network
        .tls_secret()
        .map(|secret| IngressTls {
            hosts: vec![network.host.clone()],
            secret_name: secret.to_string(),
        })
        .into_iter()
        .collect();

    Ingress::new(
        id.meta(target),
        IngressSpec {
            rules: vec![rule],
            tls,
        },
    )
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

    fn network(tls: &str) -> NetworkSection {
        NetworkSection {
            host: "shop.example.com".to_string(),
            path: "/".to_string(),
            tls_secret_name: tls.to_string(),
        }
    }

    #[test]
    fn primary_service_maps_80_to_container_port() {
        let workload = WorkloadSection {
            image: "nginx".to_string(),
            replicas: 1,
            container_port: 8080,
        };
        let svc = primary_service(&id(), &workload);
        assert_eq!(svc.metadata.name, "shop");
        assert_eq!(svc.spec.ports, vec![ServicePort::new(80, 8080).named("http")]);
        assert_eq!(svc.spec.selector, app_labels("shop"));
    }

    #[test]
    fn ingress_without_secret_has_no_tls() {
        let ing = ingress(&id(), "shop", &network(""));
        assert!(ing.spec.tls.is_empty());
        let path = &ing.spec.rules[0].http.paths[0];
        assert_eq!(path.path, "/");
        assert_eq!(path.backend.service.name, "shop");
        assert_eq!(path.backend.service.port.number, 80);
    }

    #[test]
    fn ingress_with_secret_has_exactly_one_tls_block() {
        let ing = ingress(&id(), "shop", &network("shop-tls"));
        assert_eq!(
            ing.spec.tls,
            vec![IngressTls {
                hosts: vec!["shop.example.com".to_string()],
                secret_name: "shop-tls".to_string(),
            }]
        );
    }

    #[test]
    fn ingress_has_no_labels() {
        let ing = ingress(&id(), "shop", &network(""));
        assert!(ing.metadata.labels.is_empty());
    }
}
