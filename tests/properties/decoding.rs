//! Decoder robustness properties

use proptest::prelude::*;
use scaffolds::models::{ContainerIngressSpec, FullStackSpec};
use scaffolds::parser::decode;
use scaffolds::{render, EmptyInputPolicy, RenderOptions, ScaffoldKind};

use crate::strategies::{container_ingress, name};

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]

    /// PROPERTY: arbitrary input yields a value or an error, never a panic
    #[test]
    fn prop_decode_never_panics(input in "\\PC{0,200}") {
        let _ = decode::<FullStackSpec>(&input, EmptyInputPolicy::Defaults);
        let _ = decode::<ContainerIngressSpec>(&input, EmptyInputPolicy::Reject);
    }

    /// PROPERTY: JSON and YAML spellings of one document render identically
    #[test]
    fn prop_json_and_yaml_agree(payload in container_ingress(), scaffold in name()) {
        let document = serde_json::json!({
            "metadata": { "name": scaffold, "namespace": "default" },
            "spec": payload,
        });
        let json = serde_json::to_string(&document).unwrap();
        let yaml = serde_yaml_ng::to_string(&document).unwrap();

        let from_json = render(ScaffoldKind::ContainerIngress, &json, RenderOptions::default());
        let from_yaml = render(ScaffoldKind::ContainerIngress, &yaml, RenderOptions::default());
        match (from_json, from_yaml) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.resources, b.resources),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            (a, b) => prop_assert!(false, "json {:?} vs yaml {:?}", a.is_ok(), b.is_ok()),
        }
    }

    /// PROPERTY: rendering is deterministic
    #[test]
    fn prop_render_is_deterministic(payload in container_ingress(), scaffold in name()) {
        let document = serde_json::json!({
            "metadata": { "name": scaffold },
            "spec": payload,
        })
        .to_string();
        let first = render(ScaffoldKind::ContainerIngress, &document, RenderOptions::default());
        let second = render(ScaffoldKind::ContainerIngress, &document, RenderOptions::default());
        prop_assert_eq!(
            first.map(|r| r.resources).map_err(|e| e.to_string()),
            second.map(|r| r.resources).map_err(|e| e.to_string())
        );
    }
}
