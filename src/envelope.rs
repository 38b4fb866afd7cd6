//! Typed resource envelope
//!
//! One wrapper shared by every scaffold kind: it carries the identity
//! (`apiVersion`, `kind`), the metadata naming the scaffold, and the
//! kind-specific payload. Identity is checked once on the way in and stamped
//! once on the way out.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ScaffoldSpec;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::k8s::Labels;
use crate::models::{null_as_default, ScaffoldPayload};
use crate::registration::Registration;

/// Envelope metadata; only the fields the engine reads are modelled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeMeta {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub name: String,
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub namespace: String,
    #[serde(
        skip_serializing_if = "Labels::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub labels: Labels,
}

/// A scaffold document: identity, metadata and payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "P: Deserialize<'de> + Default")
)]
pub struct Envelope<P> {
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub api_version: String,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: EnvelopeMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: P,
}

impl<P: ScaffoldPayload> Envelope<P> {
    /// A stamped envelope around `spec`
    pub fn new(
        registration: &Registration,
        name: impl Into<String>,
        namespace: impl Into<String>,
        spec: P,
    ) -> Self {
        Self {
            api_version: registration.api_version.clone(),
            kind: registration.kind.clone(),
            metadata: EnvelopeMeta {
                name: name.into(),
                namespace: namespace.into(),
                labels: Labels::new(),
            },
            spec,
        }
    }

    /// Reject a document whose identity belongs to another kind
    ///
    /// Absent `apiVersion` or `kind` is accepted.
    pub fn check_identity(&self, registration: &Registration) -> ScaffoldResult<()> {
        if !self.api_version.is_empty() && self.api_version != registration.api_version {
            return Err(ScaffoldError::UnexpectedApiVersion {
                expected: registration.api_version.clone(),
                actual: self.api_version.clone(),
            });
        }
        if !self.kind.is_empty() && self.kind != registration.kind {
            return Err(ScaffoldError::UnexpectedKind {
                expected: registration.kind.clone(),
                actual: self.kind.clone(),
            });
        }
        Ok(())
    }

    /// Normalize into the engine's spec model
    pub fn into_spec(self) -> ScaffoldSpec {
        self.spec.into_spec(&self.metadata.name, &self.metadata.namespace)
    }
}
