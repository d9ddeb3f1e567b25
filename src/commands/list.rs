//! List command implementation
//!
//! This command renders the stack in memory and lists the declared
//! resources with their types, plus parameters and outputs.

use std::path::PathBuf;

use crate::assembly::DEFAULT_OUT_DIR;
use crate::cli::ListArgs;
use crate::commands::helpers::{load_app, resolve_project_path};
use crate::error::Result;
use crate::ui;

/// Run list command
pub fn run(project: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let out_dir = resolve_project_path(project.clone())?.join(DEFAULT_OUT_DIR);
    let app = load_app(project, args.target, &args.context)?.with_out_dir(out_dir);
    let assembly = app.synth()?;
    ui::display_resources(&assembly.template);
    Ok(())
}
