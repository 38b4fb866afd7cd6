//! Defaulting properties

use proptest::prelude::*;
use scaffolds::domain::services::apply_defaults;
use scaffolds::models::ScaffoldPayload;

use crate::strategies::{container_ingress, full_stack, name};

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]

    /// PROPERTY: defaulting an already defaulted spec changes nothing
    #[test]
    fn prop_defaulting_is_idempotent(payload in full_stack(), scaffold in name()) {
        let mut spec = payload.into_spec(&scaffold, "default");
        apply_defaults(&mut spec);
        let once = spec.clone();
        apply_defaults(&mut spec);
        prop_assert_eq!(once, spec);
    }

    /// PROPERTY: explicitly set values survive defaulting
    #[test]
    fn prop_explicit_values_are_kept(payload in container_ingress(), scaffold in name()) {
        let mut spec = payload.clone().into_spec(&scaffold, "default");
        apply_defaults(&mut spec);
        let workload = spec.workload.as_ref().unwrap();
        let network = spec.network.as_ref().unwrap();

        if payload.replicas != 0 {
            prop_assert_eq!(workload.replicas, payload.replicas);
        }
        if payload.container_port != 0 {
            prop_assert_eq!(workload.container_port, payload.container_port);
        }
        if !payload.path.is_empty() {
            prop_assert_eq!(&network.path, &payload.path);
        }
        prop_assert_eq!(&workload.image, &payload.image);
        prop_assert_eq!(&network.host, &payload.host);
    }

    /// PROPERTY: no defaultable field is left at its zero value
    #[test]
    fn prop_defaults_fill_every_zero(payload in full_stack(), scaffold in name()) {
        let mut spec = payload.into_spec(&scaffold, "default");
        apply_defaults(&mut spec);

        let workload = spec.workload.as_ref().unwrap();
        prop_assert!(workload.replicas > 0);
        prop_assert!(workload.container_port > 0);
        prop_assert!(!spec.network.as_ref().unwrap().path.is_empty());

        let database = spec.database.as_ref().unwrap();
        prop_assert!(database.instances > 0);
        prop_assert!(!database.storage_size.is_empty());
        prop_assert!(!database.postgres_version.is_empty());

        let cache = spec.cache.as_ref().unwrap();
        prop_assert!(!cache.flavor.is_empty());
        prop_assert!(cache.port > 0);

        let frontend = spec.frontend.as_ref().unwrap();
        prop_assert!(frontend.replicas > 0);
        prop_assert!(!frontend.image.is_empty());
        prop_assert!(!frontend.static_content.is_empty());
    }
}
