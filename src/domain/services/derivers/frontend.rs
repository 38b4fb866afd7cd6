//! Static frontend tier derivers

use crate::domain::entities::FrontendSection;
use crate::k8s::{
    ConfigMap, Container, Deployment, Ingress, PodSpec, Service, ServicePort, Volume, VolumeMount,
};

use super::naming::{frontend_name, FRONTEND_CONTAINER_PORT, HTTP_SERVICE_PORT};
use super::network::{ingress, service};
use super::workload::deployment;
use super::Identity;

/// Key of the page inside the site config map
pub const SITE_INDEX: &str = "index.html";
/// Pod volume projecting the site config map
pub const SITE_VOLUME: &str = "site";
/// Document root of the web server image
pub const SITE_MOUNT_PATH: &str = "/usr/share/nginx/html";

const CONTAINER_NAME: &str = "frontend";

pub fn frontend_content(id: &Identity<'_>, frontend: &FrontendSection) -> ConfigMap {
    ConfigMap::new(id.meta(frontend_name(id.name)))
        .with_data(SITE_INDEX, frontend.static_content.clone())
}

/// Web server with the site config map mounted read-only at the document root
pub fn frontend_deployment(id: &Identity<'_>, frontend: &FrontendSection) -> Deployment {
    let name = frontend_name(id.name);
    let container = Container::new(CONTAINER_NAME, frontend.image.clone())
        .with_port(FRONTEND_CONTAINER_PORT)
        .with_volume_mount(VolumeMount {
            name: SITE_VOLUME.to_string(),
            mount_path: SITE_MOUNT_PATH.to_string(),
            read_only: true,
        });

    deployment(
        id,
        &name,
        frontend.replicas,
        PodSpec {
            volumes: vec![Volume::from_config_map(SITE_VOLUME, name.clone())],
            containers: vec![container],
        },
    )
}

pub fn frontend_service(id: &Identity<'_>, _frontend: &FrontendSection) -> Service {
    service(
        id,
        &frontend_name(id.name),
        ServicePort::new(HTTP_SERVICE_PORT, FRONTEND_CONTAINER_PORT),
    )
}

pub fn frontend_ingress(id: &Identity<'_>, frontend: &FrontendSection) -> Ingress {
    ingress(id, &frontend_name(id.name), &frontend.network)
}
