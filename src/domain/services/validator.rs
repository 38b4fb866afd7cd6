//! Spec validation
//!
//! Two passes, both fail-fast:
//!
//! 1. Required fields, in a fixed order: workload image, exposure host,
//!    frontend host, database cluster name, database name.
//! 2. Constraints on explicitly set values (negative counts, port ranges).
//!
//! Validation never applies defaults and never looks at optional fields
//! beyond their numeric range.

use tracing::debug;

use crate::domain::entities::ScaffoldSpec;
use crate::domain::value_objects::{field_path, CACHE_PREFIX, DATABASE_PREFIX};
use crate::error::{ScaffoldError, ScaffoldResult};

/// Highest valid TCP port
pub const MAX_PORT: i32 = 65535;

/// Validate a decoded spec against its kind's profile
pub fn validate(spec: &ScaffoldSpec) -> ScaffoldResult<()> {
    check_required(spec)?;
    check_constraints(spec)?;
    debug!(kind = %spec.kind, name = %spec.name, "spec validated");
    Ok(())
}

fn check_required(spec: &ScaffoldSpec) -> ScaffoldResult<()> {
    let profile = spec.kind.profile();

    if profile.property {
        spec.property_section()?;
    }

    if let Some(workload_profile) = profile.workload {
        let workload = spec.workload_section()?;
        require(&workload.image, workload_profile.prefix, "image")?;
    }

    if let Some(network_profile) = profile.network {
        let network = spec.network_section()?;
        require(&network.host, network_profile.prefix, "host")?;
    }

    if let Some(frontend_profile) = profile.frontend {
        let frontend = spec.frontend_section()?;
        require(&frontend.network.host, frontend_profile.prefix, "host")?;
    }

    if profile.database {
        let database = spec.database_section()?;
        require(&database.cluster_name, DATABASE_PREFIX, "clusterName")?;
        require(&database.database_name, DATABASE_PREFIX, "databaseName")?;
    }

    if profile.cache {
        spec.cache_section()?;
    }

    Ok(())
}

fn check_constraints(spec: &ScaffoldSpec) -> ScaffoldResult<()> {
    let profile = spec.kind.profile();

    if let (Some(workload_profile), Some(workload)) = (profile.workload, spec.workload.as_ref()) {
        non_negative(workload.replicas, workload_profile.prefix, "replicas")?;
        port_in_range(
            workload.container_port,
            workload_profile.prefix,
            workload_profile.port_field,
        )?;
    }

    if let (Some(frontend_profile), Some(frontend)) = (profile.frontend, spec.frontend.as_ref()) {
        non_negative(frontend.replicas, frontend_profile.prefix, "replicas")?;
    }

    if let Some(database) = spec.database.as_ref().filter(|_| profile.database) {
        non_negative(database.instances, DATABASE_PREFIX, "instances")?;
    }

    if let Some(cache) = spec.cache.as_ref().filter(|_| profile.cache) {
        port_in_range(cache.port, CACHE_PREFIX, "port")?;
    }

    Ok(())
}

/// Only the empty string is missing; content is not inspected.
fn require(value: &str, prefix: &str, field: &str) -> ScaffoldResult<()> {
    if value.is_empty() {
        return Err(ScaffoldError::missing(field_path(prefix, field)));
    }
    Ok(())
}

fn non_negative(value: i32, prefix: &str, field: &str) -> ScaffoldResult<()> {
    if value < 0 {
        return Err(ScaffoldError::invalid(
            field_path(prefix, field),
            "cannot be negative",
        ));
    }
    Ok(())
}

/// Zero is allowed: it means "unset" and is defaulted later.
fn port_in_range(value: i32, prefix: &str, field: &str) -> ScaffoldResult<()> {
    non_negative(value, prefix, field)?;
    if value > MAX_PORT {
        return Err(ScaffoldError::invalid(
            field_path(prefix, field),
            format!("must be at most {}", MAX_PORT),
        ));
    }
    Ok(())
}
