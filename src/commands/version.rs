//! Version command implementation

use crate::error::Result;
use crate::template::FORMAT_VERSION;

/// Run version command
pub fn run() -> Result<()> {
    println!("unistack {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Template format: {}", FORMAT_VERSION);

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
