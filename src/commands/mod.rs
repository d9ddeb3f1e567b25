//! Command implementations for Unistack CLI

pub mod completions;
pub mod context;
pub mod helpers;
pub mod list;
pub mod synth;
pub mod version;
