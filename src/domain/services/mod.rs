//! Domain Services
//!
//! Pure scaffold pipeline stages. No I/O happens here.

mod composer;
mod defaulter;
pub mod derivers;
mod validator;

pub use composer::compose;
pub use defaulter::{
    apply_defaults, placeholder_page, DefaultedSpec, DEFAULT_CACHE_PORT, DEFAULT_FRONTEND_IMAGE,
    DEFAULT_INSTANCES, DEFAULT_POSTGRES_VERSION, DEFAULT_STORAGE_SIZE,
};
pub use validator::{validate, MAX_PORT};
