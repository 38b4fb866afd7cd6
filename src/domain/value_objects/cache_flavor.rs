//! Cache flavor value object - resolves the cache tier's container image

/// Image used for Redis and for any flavor we don't recognize
pub const REDIS_IMAGE: &str = "docker.io/redis:7.2";

/// Image used for Valkey
pub const VALKEY_IMAGE: &str = "docker.io/valkey/valkey:1.7";

/// Default flavor written by the defaulter
pub const DEFAULT_FLAVOR: &str = "redis";

/// Known cache implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheFlavor {
    #[default]
    Redis,
    Valkey,
}

impl CacheFlavor {
    /// Resolve a free-form flavor string.
    ///
    /// Matching is case-insensitive. Unrecognized values, including the empty
    /// string, fall back to Redis instead of failing.
    pub fn resolve(flavor: &str) -> Self {
        if flavor.trim().eq_ignore_ascii_case("valkey") {
            CacheFlavor::Valkey
        } else {
            CacheFlavor::Redis
        }
    }

    /// Container image reference for this flavor
    pub fn image(&self) -> &'static str {
        match self {
            CacheFlavor::Redis => REDIS_IMAGE,
            CacheFlavor::Valkey => VALKEY_IMAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valkey_matches_any_case() {
        for flavor in ["valkey", "Valkey", "VALKEY", "vAlKeY"] {
            assert_eq!(CacheFlavor::resolve(flavor), CacheFlavor::Valkey);
        }
    }

    #[test]
    fn unknown_and_empty_fall_back_to_redis() {
        for flavor in ["", "redis", "memcached", "keydb"] {
            assert_eq!(CacheFlavor::resolve(flavor).image(), REDIS_IMAGE);
        }
    }

    #[test]
    fn valkey_uses_alternate_image() {
        assert_eq!(CacheFlavor::Valkey.image(), VALKEY_IMAGE);
    }
}
