//! Diagnostic logging on stderr
//!
//! Stdout carries command output only (templates under `--stdout`, listings),
//! so every event goes to stderr.

use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Filter directive for the given verbosity, unless `RUST_LOG` is set
fn filter(verbose: bool) -> EnvFilter {
    let level = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
