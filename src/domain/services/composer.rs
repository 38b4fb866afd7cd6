//! Resource composition
//!
//! Walks the kind's resource slots in order and runs the matching deriver.

use tracing::debug;

use crate::domain::value_objects::ResourceSlot;
use crate::error::ScaffoldResult;
use crate::k8s::Resource;

use super::defaulter::DefaultedSpec;
use super::derivers::{self, Identity};

/// Derive every resource for a defaulted spec, in output order
///
/// Section lookups only fail for a spec that skipped validation.
pub fn compose(spec: &DefaultedSpec) -> ScaffoldResult<Vec<Resource>> {
    let id = Identity::of(spec);
    let profile = spec.kind.profile();

    let mut resources = Vec::with_capacity(profile.resources.len());
    for slot in profile.resources {
        let resource = derive(spec, &id, *slot)?;
        debug!(
            slot = ?slot,
            kind = resource.kind(),
            name = resource.name(),
            "derived resource"
        );
        resources.push(resource);
    }
    Ok(resources)
}

fn derive(spec: &DefaultedSpec, id: &Identity<'_>, slot: ResourceSlot) -> ScaffoldResult<Resource> {
    let resource = match slot {
        ResourceSlot::PropertyConfigMap => {
            derivers::property_config_map(id, spec.property_section()?).into()
        }
        ResourceSlot::Workload => derivers::primary_deployment(
            id,
            spec.workload_section()?,
            spec.database.as_ref(),
            spec.cache.as_ref(),
        )
        .into(),
        ResourceSlot::Service => derivers::primary_service(id, spec.workload_section()?).into(),
        ResourceSlot::Ingress => {
            derivers::ingress(id, &derivers::naming::workload_name(id.name), spec.network_section()?)
                .into()
        }
        ResourceSlot::DatabaseCluster => {
            derivers::database_cluster(id, spec.database_section()?).into()
        }
        ResourceSlot::CacheWorkload => derivers::cache_deployment(id, spec.cache_section()?).into(),
        ResourceSlot::CacheService => derivers::cache_service(id, spec.cache_section()?).into(),
        ResourceSlot::FrontendContent => {
            derivers::frontend_content(id, spec.frontend_section()?).into()
        }
        ResourceSlot::FrontendWorkload => {
            derivers::frontend_deployment(id, spec.frontend_section()?).into()
        }
        ResourceSlot::FrontendService => {
            derivers::frontend_service(id, spec.frontend_section()?).into()
        }
        ResourceSlot::FrontendIngress => {
            derivers::frontend_ingress(id, spec.frontend_section()?).into()
        }
    };
    Ok(resource)
}
