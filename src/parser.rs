//! Input document decoding
//!
//! Accepts one YAML or JSON document. Fields the payload does not model are
//! tolerated; their paths are returned and logged as warnings.

use serde_json::error::Category;
use tracing::{debug, warn};

use crate::config::EmptyInputPolicy;
use crate::envelope::Envelope;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::models::ScaffoldPayload;

/// A decoded envelope plus the paths of ignored fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<P> {
    pub envelope: Envelope<P>,
    pub ignored: Vec<String>,
}

/// Surface syntax of an input document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSyntax {
    Json,
    Yaml,
}

/// JSON when the first significant character opens an object or array
///
/// A YAML flow mapping looks the same; [`decode`] falls back to YAML when the
/// JSON parser rejects the syntax.
pub fn detect_syntax(input: &str) -> InputSyntax {
    match input.trim_start().chars().next() {
        Some('{') | Some('[') => InputSyntax::Json,
        _ => InputSyntax::Yaml,
    }
}

/// True when the input holds no document at all
///
/// Whitespace, comment lines and bare document markers do not count.
pub fn is_blank(input: &str) -> bool {
    input.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Decode one document into a typed envelope
pub fn decode<P: ScaffoldPayload>(
    input: &str,
    policy: EmptyInputPolicy,
) -> ScaffoldResult<Decoded<P>> {
    if is_blank(input) {
        return match policy {
            EmptyInputPolicy::Defaults => {
                debug!(kind = %P::KIND, "empty input treated as an all-defaults document");
                Ok(Decoded {
                    envelope: Envelope::default(),
                    ignored: Vec::new(),
                })
            }
            EmptyInputPolicy::Reject => Err(ScaffoldError::EmptyInput),
        };
    }

    let mut syntax = detect_syntax(input);
    let mut ignored = Vec::new();
    let envelope = match syntax {
        InputSyntax::Json => match decode_json(input, &mut ignored) {
            Ok(envelope) => envelope,
            Err(err) if err.classify() == Category::Syntax => {
                debug!(error = %err, "not JSON, retrying as a YAML flow document");
                ignored.clear();
                syntax = InputSyntax::Yaml;
                decode_yaml(input, &mut ignored).map_err(|_| json_error(err))?
            }
            Err(err) => return Err(json_error(err)),
        },
        InputSyntax::Yaml => decode_yaml(input, &mut ignored).map_err(|e| yaml_error(&e))?,
    };

    for path in &ignored {
        warn!(field = %path, "ignoring unknown field");
    }
    debug!(kind = %P::KIND, ?syntax, name = %envelope.metadata.name, "decoded input");

    Ok(Decoded { envelope, ignored })
}

fn decode_json<P: ScaffoldPayload>(
    input: &str,
    ignored: &mut Vec<String>,
) -> Result<Envelope<P>, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(input);
    let envelope = serde_ignored::deserialize(&mut de, |p| ignored.push(p.to_string()))?;
    de.end()?;
    Ok(envelope)
}

fn decode_yaml<P: ScaffoldPayload>(
    input: &str,
    ignored: &mut Vec<String>,
) -> Result<Envelope<P>, serde_yaml_ng::Error> {
    let de = serde_yaml_ng::Deserializer::from_str(input);
    serde_ignored::deserialize(de, |p| ignored.push(p.to_string()))
}

fn json_error(err: serde_json::Error) -> ScaffoldError {
    let position = (err.line() > 0).then(|| (err.line(), err.column()));
    ScaffoldError::decode(err.to_string(), position)
}

fn yaml_error(err: &serde_yaml_ng::Error) -> ScaffoldError {
    let position = err.location().map(|loc| (loc.line(), loc.column()));
    ScaffoldError::decode(err.to_string(), position)
}
