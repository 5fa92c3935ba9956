//! Presentation layer for schemashield-ci
//!
//! This crate contains the CLI definition and console output formatting.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::{ConsoleFormatter, FAILED_PREFIX, PASSED_PREFIX};
