//! Error types for scaffolds
//!
//! Uses `thiserror` for library errors. Every variant is terminal for a
//! render invocation: the pipeline never retries and never emits partial output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffold operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Main error type for scaffold operations
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// A mandatory spec field is empty
    #[error("{field} is required")]
    MissingField { field: String },

    /// An explicitly set field violates a constraint
    #[error("{field} {reason}")]
    InvalidValue { field: String, reason: String },

    /// The input document could not be parsed into the spec model
    #[error("invalid input document: {message}")]
    Decode {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// The document carries another API version
    #[error("unexpected api version: expected {expected} but got {actual}")]
    UnexpectedApiVersion { expected: String, actual: String },

    /// The document carries another kind
    #[error("unexpected kind: expected {expected} but got {actual}")]
    UnexpectedKind { expected: String, actual: String },

    /// No scaffold is registered under this kind name
    #[error("unknown scaffold kind '{kind}'")]
    UnknownKind { kind: String },

    /// Input was empty and the empty-input policy rejects it
    #[error("no input document provided")]
    EmptyInput,

    /// The embedded registration defaults could not be loaded
    #[error("invalid registration defaults: {0}")]
    Registration(String),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Output serialization failure
    #[error("failed to encode output: {0}")]
    Encode(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScaffoldError {
    /// Shorthand for a missing required field
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Shorthand for an invalid explicitly-set value
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Decode failure with an optional source position
    pub fn decode(message: impl Into<String>, position: Option<(usize, usize)>) -> Self {
        Self::Decode {
            message: message.into(),
            line: position.map(|(line, _)| line),
            column: position.map(|(_, column)| column),
        }
    }

    /// The offending field, for errors that name one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field } | Self::InvalidValue { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ScaffoldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}
