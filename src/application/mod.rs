//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates decoding, the engine, and registration
//!
//! ## Use Cases
//!
//! - `render` - Decode one document and expand it into resources
//! - `example_document` - A stamped, minimal valid document for a kind

pub mod render;

pub use render::{example_document, render, render_as, render_spec, RenderOptions, Rendered};
