//! Infrastructure Layer
//!
//! I/O at the edges of a render: encoding the output document and writing it
//! to stdout or a file.

pub mod output;

pub use output::{encode, write_atomic, OutputTarget};
