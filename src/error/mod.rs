//! Error types and handling for unistack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Sub-modules hold convenience constructors grouped by area:
//! - [`config`]: project file and context errors
//! - [`fs`]: file system errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for unistack operations
#[derive(Error, Diagnostic, Debug)]
pub enum UnistackError {
    // Context errors
    #[error("Missing context value: {key}")]
    #[diagnostic(
        code(unistack::context::missing),
        help("Pass it with `-c {key}=<value>` or add it under `context:` in unistack.yaml")
    )]
    ContextMissing { key: String },

    #[error("Invalid context argument: {input}")]
    #[diagnostic(
        code(unistack::context::invalid_pair),
        help("Context values are given as key=value, e.g. `-c env=test`")
    )]
    ContextInvalidPair { input: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(unistack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(unistack::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid capacity bounds: min {min}, desired {desired}, max {max}")]
    #[diagnostic(
        code(unistack::compute::capacity),
        help("Capacity must satisfy min <= desired <= max")
    )]
    InvalidCapacity { min: u32, desired: u32, max: u32 },

    #[error("Unknown {kind}: {value}")]
    #[diagnostic(code(unistack::config::unknown_value), help("Expected one of: {expected}"))]
    UnknownValue {
        kind: String,
        value: String,
        expected: String,
    },

    // Asset errors
    #[error("Asset directory not found: {path}")]
    #[diagnostic(
        code(unistack::assets::not_found),
        help("Set `site.assets` in unistack.yaml to an existing directory")
    )]
    AssetDirNotFound { path: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(unistack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(unistack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(unistack::fs::io_error))]
    IoError { message: String },

    // Rendering errors
    #[error("Failed to render template: {reason}")]
    #[diagnostic(code(unistack::render::failed))]
    RenderFailed { reason: String },
}

impl From<std::io::Error> for UnistackError {
    fn from(err: std::io::Error) -> Self {
        UnistackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for UnistackError {
    fn from(err: serde_yaml::Error) -> Self {
        UnistackError::RenderFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for UnistackError {
    fn from(err: serde_json::Error) -> Self {
        UnistackError::RenderFailed {
            reason: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for UnistackError {
    fn from(err: walkdir::Error) -> Self {
        UnistackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, UnistackError>;

#[cfg(test)]
mod tests;
