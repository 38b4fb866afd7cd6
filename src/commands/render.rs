use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use scaffolds::infrastructure::{encode, OutputTarget};
use scaffolds::{render, Config, EmptyInputPolicy, OutputFormat, RenderOptions, ScaffoldKind};

/// Arguments of `scaffolds render`
#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub kind: ScaffoldKind,
    pub input: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub pretty: bool,
    pub empty: Option<EmptyInputPolicy>,
}

pub fn cmd_render(config: &Config, args: RenderArgs) -> Result<()> {
    let input = read_input(args.input.as_deref())?;

    let options =
        RenderOptions::default().with_empty_input(args.empty.unwrap_or(config.input.empty));
    let rendered = render(args.kind, &input, options)?;
    if !rendered.ignored.is_empty() {
        warn!(
            count = rendered.ignored.len(),
            "input contained fields this kind does not use"
        );
    }

    let format = args.format.unwrap_or(config.output.format);
    let pretty = args.pretty || config.output.pretty;
    let document = encode(&rendered.resources, format, pretty)?;

    let target = OutputTarget::from_path(args.out);
    target.emit(&document).context("failed to write output")?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
