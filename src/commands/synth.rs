//! Synth command implementation
//!
//! Renders the selected shapes and writes the assembly, or prints the
//! template when `--stdout` is given.

use std::path::PathBuf;

use console::Style;

use crate::cli::SynthArgs;
use crate::commands::helpers::{load_app, resolve_project_path};
use crate::error::Result;

/// Run synth command
pub fn run(project: Option<PathBuf>, args: SynthArgs) -> Result<()> {
    // A relative --out lands next to unistack.yaml
    let out_dir = if args.out.is_absolute() {
        args.out
    } else {
        resolve_project_path(project.clone())?.join(&args.out)
    };

    let app = load_app(project, args.target, &args.context)?.with_out_dir(out_dir.clone());
    let assembly = app.synth()?;

    if args.stdout {
        print!("{}", assembly.render(args.format)?);
        return Ok(());
    }

    let written = assembly.write(&out_dir, args.format)?;

    println!(
        "{} {} ({} resources) to {}",
        Style::new().bold().green().apply_to("Synthesized"),
        Style::new().bold().apply_to(&assembly.stack_name),
        assembly.template.resources.len(),
        out_dir.display()
    );
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(())
}
