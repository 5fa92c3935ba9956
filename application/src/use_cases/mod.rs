//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod prepare_payload;
pub mod run_ci;
