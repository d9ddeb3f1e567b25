use clap::Parser;

/// Arguments for the context command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the context from unistack.yaml:\n    unistack context\n\n\
                  Preview an override:\n    unistack context -c env=prod")]
pub struct ContextArgs {
    /// Context value as key=value (can be specified multiple times)
    #[arg(long = "context", short = 'c', value_name = "KEY=VALUE")]
    pub context: Vec<String>,
}
