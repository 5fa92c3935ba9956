//! Application layer for schemashield-ci
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::CiConfig;
pub use ports::{
    case_source::CaseSourcePort,
    ci_gateway::{CiGateway, GatewayError},
};
pub use use_cases::prepare_payload::PreparePayloadUseCase;
pub use use_cases::run_ci::{RunCiError, RunCiOutput, RunCiUseCase};
