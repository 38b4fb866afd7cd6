//! Base scaffold deriver

use crate::domain::entities::PropertySection;
use crate::k8s::ConfigMap;

use super::naming::workload_name;
use super::Identity;

/// Data key the base scaffold writes its property under
pub const PROPERTY_KEY: &str = "HelloWorld";

pub fn property_config_map(id: &Identity<'_>, property: &PropertySection) -> ConfigMap {
    ConfigMap::new(id.meta(workload_name(id.name)))
        .with_data(PROPERTY_KEY, property.some_property.clone())
}
