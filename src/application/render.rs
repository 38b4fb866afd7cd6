//! Render Use Case
//!
//! Orchestrates one invocation:
//! 1. Decode the input document into the kind's envelope
//! 2. Check the envelope identity against the kind's registration
//! 3. Validate, default, and compose
//!
//! Any failure aborts the invocation; no resources are returned.

use tracing::{info, warn};

use crate::config::EmptyInputPolicy;
use crate::domain::entities::ScaffoldSpec;
use crate::domain::services::{compose, validate, DefaultedSpec};
use crate::domain::value_objects::ScaffoldKind;
use crate::envelope::Envelope;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::k8s::Resource;
use crate::models::{
    BaseSpec, ContainerDeploymentSpec, ContainerIngressDbRedisSpec, ContainerIngressDbSpec,
    ContainerIngressSpec, FullStackSpec, ScaffoldPayload,
};
use crate::parser;
use crate::registration::registration;

/// Run `$body` with `$P` bound to the payload type of `$kind`
macro_rules! with_payload {
    ($kind:expr, $P:ident => $body:expr) => {
        match $kind {
            ScaffoldKind::Base => {
                type $P = BaseSpec;
                $body
            }
            ScaffoldKind::ContainerDeployment => {
                type $P = ContainerDeploymentSpec;
                $body
            }
            ScaffoldKind::ContainerIngress => {
                type $P = ContainerIngressSpec;
                $body
            }
            ScaffoldKind::ContainerIngressDb => {
                type $P = ContainerIngressDbSpec;
                $body
            }
            ScaffoldKind::ContainerIngressDbRedis => {
                type $P = ContainerIngressDbRedisSpec;
                $body
            }
            ScaffoldKind::FullStack => {
                type $P = FullStackSpec;
                $body
            }
        }
    };
}

/// Options for the render use case
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// What an empty input stream means
    pub empty_input: EmptyInputPolicy,
}

impl RenderOptions {
    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }
}

/// Result of a successful render
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub kind: ScaffoldKind,
    pub name: String,
    /// Resources in output order
    pub resources: Vec<Resource>,
    /// Input fields that were ignored
    pub ignored: Vec<String>,
}

/// Render one input document as `kind`
pub fn render(kind: ScaffoldKind, input: &str, options: RenderOptions) -> ScaffoldResult<Rendered> {
    with_payload!(kind, P => render_as::<P>(input, options))
}

/// Render with a statically known payload type
pub fn render_as<P: ScaffoldPayload>(
    input: &str,
    options: RenderOptions,
) -> ScaffoldResult<Rendered> {
    let registration = registration(P::KIND)?;
    let decoded = parser::decode::<P>(input, options.empty_input)?;
    decoded.envelope.check_identity(&registration)?;

    let spec = decoded.envelope.into_spec();
    let name = spec.name.clone();
    if name.is_empty() {
        warn!(kind = %P::KIND, "metadata.name is empty, derived resource names will be blank");
    }
    let resources = render_spec(spec)?;
    info!(
        kind = %P::KIND,
        name = %name,
        resources = resources.len(),
        "rendered scaffold"
    );

    Ok(Rendered {
        kind: P::KIND,
        name,
        resources,
        ignored: decoded.ignored,
    })
}

/// Validate, default, and compose an already decoded spec
pub fn render_spec(spec: ScaffoldSpec) -> ScaffoldResult<Vec<Resource>> {
    validate(&spec)?;
    compose(&DefaultedSpec::new(spec))
}

/// A minimal valid input document for `kind`, stamped with its identity
pub fn example_document(
    kind: ScaffoldKind,
    name: &str,
    namespace: &str,
) -> ScaffoldResult<serde_json::Value> {
    let registration = registration(kind)?;
    with_payload!(kind, P => {
        let envelope = Envelope::new(&registration, name, namespace, P::example());
        serde_json::to_value(&envelope).map_err(ScaffoldError::from)
    })
}
