//! Unistack - UniKarlsruhe infrastructure renderer
//!
//! Declares the UniKarlsruhe static website and its optional load-balanced
//! compute tier, and renders them into a CloudFormation assembly that the
//! provisioning engine deploys.

use clap::Parser;

mod app;
mod assembly;
mod cli;
mod commands;
mod config;
mod construct;
mod error;
mod hash;
mod logging;
mod resources;
mod stacks;
mod template;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Synth(args) => commands::synth::run(cli.project, args),
        Commands::List(args) => commands::list::run(cli.project, args),
        Commands::Context(args) => commands::context::run(cli.project, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}
