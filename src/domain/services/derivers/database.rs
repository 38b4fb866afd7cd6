//! Data-cluster deriver

use crate::domain::entities::DatabaseSection;
use crate::k8s::{Bootstrap, Cluster, ClusterSpec, InitDb, StorageConfiguration};

use super::Identity;

/// CloudNativePG cluster request named after `clusterName`
pub fn database_cluster(id: &Identity<'_>, database: &DatabaseSection) -> Cluster {
    Cluster::new(
        id.meta(database.cluster_name.clone()),
        ClusterSpec {
            instances: database.instances,
            image_name: ClusterSpec::image_for(&database.postgres_version),
            storage: StorageConfiguration {
                size: database.storage_size.clone(),
            },
            bootstrap: Bootstrap {
                initdb: InitDb {
                    database: database.database_name.clone(),
                },
            },
        },
    )
}
