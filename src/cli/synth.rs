use clap::Parser;
use std::path::PathBuf;

use crate::assembly::{DEFAULT_OUT_DIR, OutputFormat};
use crate::config::DeploymentTarget;

/// Arguments for the synth command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Render into ./cdk.out:\n    unistack synth\n\n\
                  Render the compute tier as YAML into ./build:\n    unistack synth --target compute --format yaml --out build\n\n\
                  Print the template with a custom domain:\n    \
                  unistack synth --stdout -c domain=www.example.org -c certificateArn=arn:aws:acm:...")]
pub struct SynthArgs {
    /// Output directory for the assembly
    #[arg(long, short = 'o', default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Template format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print the template to stdout instead of writing the assembly
    #[arg(long)]
    pub stdout: bool,

    /// Shapes to declare (overrides `target` in unistack.yaml)
    #[arg(long, short = 't', value_enum)]
    pub target: Option<DeploymentTarget>,

    /// Context value as key=value (can be specified multiple times)
    #[arg(long = "context", short = 'c', value_name = "KEY=VALUE")]
    pub context: Vec<String>,
}
