//! Domain Entities
//!
//! - `ScaffoldSpec` - the normalized input spec and its sections

mod spec;

pub use spec::{
    CacheSection, DatabaseSection, FrontendSection, NetworkSection, PropertySection,
    ScaffoldSpec, WorkloadSection,
};
