//! Infrastructure layer for schemashield-ci
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration loading.

pub mod api;
pub mod config;
pub mod discovery;

// Re-export commonly used types
pub use api::HttpCiGateway;
pub use config::{ConfigError, ConfigLoader, InputConfig};
pub use discovery::{LocalCaseSource, list_files};
