//! Domain Layer
//!
//! The scaffold pipeline itself, free of I/O.
//!
//! ## Structure
//!
//! - `entities/` - The normalized `ScaffoldSpec` and its sections
//! - `value_objects/` - Kinds, kind profiles, cache flavors
//! - `services/` - Validator, defaulter, derivers, composer
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Decoding and encoding live outside this layer
//! 2. **Pure Functions** - Every stage is a function of its input
//! 3. **Typed stages** - Derivers only see a `DefaultedSpec`

pub mod entities;
pub mod services;
pub mod value_objects;
