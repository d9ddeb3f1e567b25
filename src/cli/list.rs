use clap::Parser;

use crate::config::DeploymentTarget;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List resources of the configured target:\n    unistack list\n\n\
                  List everything, including the compute tier:\n    unistack list --target all")]
pub struct ListArgs {
    /// Shapes to declare (overrides `target` in unistack.yaml)
    #[arg(long, short = 't', value_enum)]
    pub target: Option<DeploymentTarget>,

    /// Context value as key=value (can be specified multiple times)
    #[arg(long = "context", short = 'c', value_name = "KEY=VALUE")]
    pub context: Vec<String>,
}
