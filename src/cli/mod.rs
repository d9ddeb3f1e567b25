//! CLI definitions using clap derive API
//!
//! Argument types live in one submodule per command:
//! - synth: Synth command arguments
//! - list: List command arguments
//! - context: Context command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod context;
pub mod list;
pub mod synth;

pub use completions::CompletionsArgs;
pub use context::ContextArgs;
pub use list::ListArgs;
pub use synth::SynthArgs;

/// Unistack - UniKarlsruhe infrastructure renderer
///
/// Render the static site and compute stacks into CloudFormation templates.
#[derive(Parser, Debug)]
#[command(
    name = "unistack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Render UniKarlsruhe infrastructure stacks into CloudFormation templates",
    long_about = "Unistack declares the UniKarlsruhe static website (bucket, CDN distribution, \
                  asset sync) and the optional load-balanced compute tier, and renders them \
                  into a deterministic CloudFormation assembly for the provisioning engine.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  unistack synth                                  \x1b[90m# Render into ./cdk.out\x1b[0m\n   \
                  unistack synth --stdout --format yaml           \x1b[90m# Print the YAML template\x1b[0m\n   \
                  unistack synth --target all                     \x1b[90m# Site and compute tier\x1b[0m\n   \
                  unistack synth -c domain=www.example.org        \x1b[90m# Override a context value\x1b[0m\n   \
                  unistack list                                   \x1b[90m# List declared resources\x1b[0m\n   \
                  unistack context                                \x1b[90m# Show the merged context\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory holding unistack.yaml (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "UNISTACK_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the stack into an output assembly
    Synth(SynthArgs),

    /// List the resources the stack declares
    List(ListArgs),

    /// Show the merged context and the resolved site domain
    Context(ContextArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::OutputFormat;
    use crate::config::DeploymentTarget;

    #[test]
    fn test_cli_parsing_synth_defaults() {
        let cli = Cli::try_parse_from(["unistack", "synth"]).unwrap();
        match cli.command {
            Commands::Synth(args) => {
                assert_eq!(args.out, PathBuf::from("cdk.out"));
                assert_eq!(args.format, OutputFormat::Json);
                assert!(!args.stdout);
                assert_eq!(args.target, None);
                assert!(args.context.is_empty());
            }
            _ => panic!("Expected Synth command"),
        }
    }

    #[test]
    fn test_cli_parsing_synth_options() {
        let cli = Cli::try_parse_from([
            "unistack",
            "synth",
            "--out",
            "build",
            "--format",
            "yaml",
            "--stdout",
            "--target",
            "all",
            "-c",
            "domain=www.example.org",
            "--context",
            "env=prod",
        ])
        .unwrap();
        match cli.command {
            Commands::Synth(args) => {
                assert_eq!(args.out, PathBuf::from("build"));
                assert_eq!(args.format, OutputFormat::Yaml);
                assert!(args.stdout);
                assert_eq!(args.target, Some(DeploymentTarget::All));
                assert_eq!(args.context, vec!["domain=www.example.org", "env=prod"]);
            }
            _ => panic!("Expected Synth command"),
        }
    }

    #[test]
    fn test_cli_parsing_unknown_target() {
        assert!(Cli::try_parse_from(["unistack", "synth", "--target", "everything"]).is_err());
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["unistack", "list", "--target", "compute"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.target, Some(DeploymentTarget::Compute)),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_context() {
        let cli = Cli::try_parse_from(["unistack", "context", "-c", "env=test"]).unwrap();
        match cli.command {
            Commands::Context(args) => assert_eq!(args.context, vec!["env=test"]),
            _ => panic!("Expected Context command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["unistack", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["unistack", "-v", "-p", "/tmp/site", "list"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/site")));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["unistack", "synth", "--project", "/tmp/site", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/site")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["unistack", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
