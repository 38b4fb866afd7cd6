//! Registration browsing: `kinds`, `describe`, `example`

use anyhow::Result;

use scaffolds::infrastructure::{encode, OutputTarget};
use scaffolds::{example_document, registration, Config, OutputFormat, ScaffoldKind};

pub fn cmd_kinds() -> Result<()> {
    let mut listing = String::new();
    for kind in ScaffoldKind::ALL {
        let reg = registration(kind)?;
        listing.push_str(&format!(
            "{:<28} {:<26} {}\n",
            kind.cli_name(),
            reg.kind,
            reg.api_version
        ));
    }
    OutputTarget::Stdout.emit(&listing)?;
    Ok(())
}

pub fn cmd_describe(config: &Config, kind: ScaffoldKind, format: Option<OutputFormat>) -> Result<()> {
    let reg = registration(kind)?;
    let document = encode(
        &reg,
        format.unwrap_or(config.output.format),
        config.output.pretty,
    )?;
    OutputTarget::Stdout.emit(&document)?;
    Ok(())
}

pub fn cmd_example(
    config: &Config,
    kind: ScaffoldKind,
    name: &str,
    namespace: &str,
    format: Option<OutputFormat>,
) -> Result<()> {
    let doc = example_document(kind, name, namespace)?;
    let document = encode(
        &doc,
        format.unwrap_or(config.output.format),
        config.output.pretty,
    )?;
    OutputTarget::Stdout.emit(&document)?;
    Ok(())
}
