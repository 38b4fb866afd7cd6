//! Cache image selection properties

use proptest::prelude::*;
use scaffolds::domain::value_objects::{CacheFlavor, REDIS_IMAGE, VALKEY_IMAGE};

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]

    /// PROPERTY: only a case-insensitive "valkey" selects the Valkey image
    #[test]
    fn prop_unknown_flavors_fall_back_to_redis(flavor in "[a-zA-Z0-9-]{0,12}") {
        let image = CacheFlavor::resolve(&flavor).image();
        if flavor.eq_ignore_ascii_case("valkey") {
            prop_assert_eq!(image, VALKEY_IMAGE);
        } else {
            prop_assert_eq!(image, REDIS_IMAGE);
        }
    }

    /// PROPERTY: any casing of "valkey" is accepted
    #[test]
    fn prop_valkey_casing_is_ignored(mask in proptest::collection::vec(any::<bool>(), 6)) {
        let flavor: String = "valkey"
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(CacheFlavor::resolve(&flavor).image(), VALKEY_IMAGE);
    }
}
