//! Naming rules shared by every deriver
//!
//! Any resource that addresses another one must build the name through these
//! functions, never by formatting strings locally.

use crate::k8s::Labels;

/// Label key carrying the application identity
pub const APP_LABEL: &str = "app";

/// Port exposed by the primary and frontend services
pub const HTTP_SERVICE_PORT: i32 = 80;

/// Port the static web server listens on
pub const FRONTEND_CONTAINER_PORT: i32 = 80;

/// PostgreSQL port behind the operator's read-write service
pub const DATABASE_PORT: i32 = 5432;

/// Suffix the database operator gives its read-write service
pub const READ_WRITE_SUFFIX: &str = "-rw";

/// Name of the primary workload, service, and ingress
pub fn workload_name(name: &str) -> String {
    name.to_string()
}

/// Name of the cache deployment and service
pub fn cache_name(name: &str) -> String {
    format!("{}-cache", name)
}

/// Name of the frontend config map, deployment, service, and ingress
pub fn frontend_name(name: &str) -> String {
    format!("{}-frontend", name)
}

/// Host of the database's read-write endpoint
pub fn database_host(cluster_name: &str) -> String {
    format!("{}{}", cluster_name, READ_WRITE_SUFFIX)
}

/// Selector/label map for a workload-shaped resource
pub fn app_labels(resource_name: &str) -> Labels {
    Labels::from([(APP_LABEL.to_string(), resource_name.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_names_use_fixed_suffixes() {
        assert_eq!(workload_name("shop"), "shop");
        assert_eq!(cache_name("shop"), "shop-cache");
        assert_eq!(frontend_name("shop"), "shop-frontend");
    }

    #[test]
    fn database_host_follows_operator_convention() {
        assert_eq!(database_host("shop-db"), "shop-db-rw");
    }

    #[test]
    fn app_labels_have_single_identity_key() {
        let labels = app_labels("shop-cache");
        assert_eq!(labels.len(), 1);
        assert_eq!(labels.get("app").map(String::as_str), Some("shop-cache"));
    }
}
