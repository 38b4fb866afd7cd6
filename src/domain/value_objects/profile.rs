//! Per-kind rendering profiles
//!
//! One declarative table drives validation, defaulting, and composition for
//! every scaffold kind: which sections a spec carries, where their fields live
//! in the wire document, what the kind-specific defaults are, and which
//! resources are derived in which order.

use super::kind::ScaffoldKind;

/// Workload section layout and defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadProfile {
    /// Field path prefix (`spec` or `spec.backend`)
    pub prefix: &'static str,
    /// Wire name of the container port field
    pub port_field: &'static str,
    /// Default replica count
    pub replicas: i32,
    /// Default container port
    pub container_port: i32,
}

/// Network exposure layout and defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    /// Field path prefix (`spec`, `spec.backend` or `spec.frontend`)
    pub prefix: &'static str,
    /// Default route path prefix
    pub path: &'static str,
}

/// One derived resource, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceSlot {
    /// ConfigMap carrying the base scaffold's property
    PropertyConfigMap,
    /// Primary Deployment
    Workload,
    /// Primary Service
    Service,
    /// Primary Ingress
    Ingress,
    /// CloudNativePG Cluster
    DatabaseCluster,
    /// Cache Deployment
    CacheWorkload,
    /// Cache Service
    CacheService,
    /// ConfigMap carrying the static site
    FrontendContent,
    /// Static web server Deployment
    FrontendWorkload,
    /// Static web server Service
    FrontendService,
    /// Static web server Ingress
    FrontendIngress,
}

/// Declarative description of one scaffold kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindProfile {
    pub kind: ScaffoldKind,
    /// Carries a free-form property section (base scaffold only)
    pub property: bool,
    pub workload: Option<WorkloadProfile>,
    pub network: Option<NetworkProfile>,
    pub frontend: Option<NetworkProfile>,
    pub database: bool,
    pub cache: bool,
    /// Derived resources in output order
    pub resources: &'static [ResourceSlot],
}

/// Frontend replicas default
pub const FRONTEND_REPLICAS: i32 = 1;

const FLAT_INGRESS: NetworkProfile = NetworkProfile {
    prefix: "spec",
    path: "/",
};

const PROFILES: [KindProfile; 6] = [
    KindProfile {
        kind: ScaffoldKind::Base,
        property: true,
        workload: None,
        network: None,
        frontend: None,
        database: false,
        cache: false,
        resources: &[ResourceSlot::PropertyConfigMap],
    },
    KindProfile {
        kind: ScaffoldKind::ContainerDeployment,
        property: false,
        workload: Some(WorkloadProfile {
            prefix: "spec",
            port_field: "port",
            replicas: 1,
            container_port: 80,
        }),
        network: None,
        frontend: None,
        database: false,
        cache: false,
        resources: &[ResourceSlot::Workload],
    },
    KindProfile {
        kind: ScaffoldKind::ContainerIngress,
        property: false,
        workload: Some(WorkloadProfile {
            prefix: "spec",
            port_field: "containerPort",
            replicas: 1,
            container_port: 8080,
        }),
        network: Some(FLAT_INGRESS),
        frontend: None,
        database: false,
        cache: false,
        resources: &[
            ResourceSlot::Workload,
            ResourceSlot::Service,
            ResourceSlot::Ingress,
        ],
    },
    KindProfile {
        kind: ScaffoldKind::ContainerIngressDb,
        property: false,
        workload: Some(WorkloadProfile {
            prefix: "spec",
            port_field: "containerPort",
            replicas: 2,
            container_port: 8080,
        }),
        network: Some(FLAT_INGRESS),
        frontend: None,
        database: true,
        cache: false,
        resources: &[
            ResourceSlot::Workload,
            ResourceSlot::Service,
            ResourceSlot::Ingress,
            ResourceSlot::DatabaseCluster,
        ],
    },
    KindProfile {
        kind: ScaffoldKind::ContainerIngressDbRedis,
        property: false,
        workload: Some(WorkloadProfile {
            prefix: "spec",
            port_field: "containerPort",
            replicas: 2,
            container_port: 8080,
        }),
        network: Some(FLAT_INGRESS),
        frontend: None,
        database: true,
        cache: true,
        resources: &[
            ResourceSlot::Workload,
            ResourceSlot::Service,
            ResourceSlot::Ingress,
            ResourceSlot::DatabaseCluster,
            ResourceSlot::CacheWorkload,
            ResourceSlot::CacheService,
        ],
    },
    KindProfile {
        kind: ScaffoldKind::FullStack,
        property: false,
        workload: Some(WorkloadProfile {
            prefix: "spec.backend",
            port_field: "containerPort",
            replicas: 2,
            container_port: 8080,
        }),
        network: Some(NetworkProfile {
            prefix: "spec.backend",
            path: "/api",
        }),
        frontend: Some(NetworkProfile {
            prefix: "spec.frontend",
            path: "/",
        }),
        database: true,
        cache: true,
        resources: &[
            ResourceSlot::Workload,
            ResourceSlot::Service,
            ResourceSlot::Ingress,
            ResourceSlot::DatabaseCluster,
            ResourceSlot::CacheWorkload,
            ResourceSlot::CacheService,
            ResourceSlot::FrontendContent,
            ResourceSlot::FrontendWorkload,
            ResourceSlot::FrontendService,
            ResourceSlot::FrontendIngress,
        ],
    },
];

impl KindProfile {
    /// Look up the profile registered for a kind
    pub fn of(kind: ScaffoldKind) -> &'static KindProfile {
        match kind {
            ScaffoldKind::Base => &PROFILES[0],
            ScaffoldKind::ContainerDeployment => &PROFILES[1],
            ScaffoldKind::ContainerIngress => &PROFILES[2],
            ScaffoldKind::ContainerIngressDb => &PROFILES[3],
            ScaffoldKind::ContainerIngressDbRedis => &PROFILES[4],
            ScaffoldKind::FullStack => &PROFILES[5],
        }
    }
}

/// Join a section prefix and a field name into a reported path
pub fn field_path(prefix: &str, field: &str) -> String {
    format!("{}.{}", prefix, field)
}

/// Database fields always live under `spec.database`
pub const DATABASE_PREFIX: &str = "spec.database";

/// Cache fields always live under `spec.cache`
pub const CACHE_PREFIX: &str = "spec.cache";
