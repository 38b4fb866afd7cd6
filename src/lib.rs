//! Scaffolds - application scaffold renderer
//!
//! Expands high-level application specs (a bare container, a container behind
//! an ingress, a container with a managed database and cache, a full
//! front+back end stack) into consistent sets of Kubernetes resources whose
//! names, labels, selectors and environment wiring agree with each other.

pub mod application;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod infrastructure;
pub mod k8s;
pub mod models;
pub mod parser;
pub mod registration;

// Re-exports for convenience
pub use application::{example_document, render, render_spec, RenderOptions, Rendered};
pub use config::{Config, EmptyInputPolicy, OutputFormat};
pub use domain::entities::ScaffoldSpec;
pub use domain::value_objects::ScaffoldKind;
pub use envelope::Envelope;
pub use error::{ScaffoldError, ScaffoldResult};
pub use k8s::Resource;
pub use registration::{registration, Registration};
