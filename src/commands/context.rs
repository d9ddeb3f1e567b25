//! Context command implementation

use std::path::PathBuf;

use crate::cli::ContextArgs;
use crate::commands::helpers::load_app;
use crate::error::Result;
use crate::ui;

/// Print the merged context and the domain the site would be served from
pub fn run(project: Option<PathBuf>, args: ContextArgs) -> Result<()> {
    let app = load_app(project, None, &args.context)?;
    let site_domain = app.site_domain()?;
    ui::display_context(app.context(), site_domain.as_deref());
    Ok(())
}
