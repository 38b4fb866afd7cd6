use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scaffolds::{EmptyInputPolicy, OutputFormat, ScaffoldKind};

/// Scaffolds - render application specs into Kubernetes resources
#[derive(Parser, Debug)]
#[command(name = "scaffolds")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file layered over the user config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one scaffold document into its resource list
    Render {
        /// Scaffold kind (e.g. container-ingress or ContainerIngress)
        #[arg(short, long, value_parser = parse_kind)]
        kind: ScaffoldKind,

        /// Input document (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (writes stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,

        /// How to treat an empty input stream
        #[arg(long, value_enum)]
        empty: Option<EmptyInputPolicy>,
    },

    /// List registered scaffold kinds
    Kinds,

    /// Show the registration of a kind
    Describe {
        /// Scaffold kind
        #[arg(short, long, value_parser = parse_kind)]
        kind: ScaffoldKind,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print a minimal valid input document for a kind
    Example {
        /// Scaffold kind
        #[arg(short, long, value_parser = parse_kind)]
        kind: ScaffoldKind,

        /// metadata.name of the example
        #[arg(long, default_value = "example")]
        name: String,

        /// metadata.namespace of the example
        #[arg(long, default_value = "default")]
        namespace: String,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn parse_kind(value: &str) -> Result<ScaffoldKind, String> {
    value.parse::<ScaffoldKind>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_accepts_both_kind_spellings() {
        for spelling in ["container-ingress-db", "ContainerIngressDB"] {
            let cli = Cli::try_parse_from(["scaffolds", "render", "--kind", spelling]).unwrap();
            match cli.command {
                Commands::Render { kind, .. } => assert_eq!(kind, ScaffoldKind::ContainerIngressDb),
                other => panic!("unexpected command {other:?}"),
            }
        }
    }

    #[test]
    fn render_rejects_unknown_kind() {
        let err = Cli::try_parse_from(["scaffolds", "render", "--kind", "lambda"]).unwrap_err();
        assert!(err.to_string().contains("unknown scaffold kind 'lambda'"));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["scaffolds", "kinds", "-vv", "--config", "c.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
