//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cache_flavor;
mod kind;
mod profile;

pub use cache_flavor::{CacheFlavor, DEFAULT_FLAVOR, REDIS_IMAGE, VALKEY_IMAGE};
pub use kind::ScaffoldKind;
pub use profile::{
    field_path, KindProfile, NetworkProfile, ResourceSlot, WorkloadProfile, CACHE_PREFIX,
    DATABASE_PREFIX, FRONTEND_REPLICAS,
};
