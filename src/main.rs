//! Scaffolds CLI - render application specs into Kubernetes resources
//!
//! Usage: scaffolds <COMMAND>
//!
//! Commands:
//!   render    Render one scaffold document into its resource list
//!   kinds     List registered scaffold kinds
//!   describe  Show the registration of a kind
//!   example   Print a minimal valid input document for a kind

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use scaffolds::Config;

/// Default filter for a `-v` count; `RUST_LOG` takes precedence
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr; stdout carries only the output document.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, warnings) = Config::load_layered(cli.config.as_deref())?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    match cli.command {
        Commands::Render {
            kind,
            input,
            out,
            format,
            pretty,
            empty,
        } => commands::cmd_render(
            &config,
            commands::RenderArgs {
                kind,
                input,
                out,
                format,
                pretty,
                empty,
            },
        ),
        Commands::Kinds => commands::cmd_kinds(),
        Commands::Describe { kind, format } => commands::cmd_describe(&config, kind, format),
        Commands::Example {
            kind,
            name,
            namespace,
            format,
        } => commands::cmd_example(&config, kind, &name, &namespace, format),
    }
}
