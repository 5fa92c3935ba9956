//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No matching prompt/schema base names")]
    NoMatchingCases,
}

impl DomainError {
    /// Check if this error means discovery produced nothing to run
    pub fn is_no_matching_cases(&self) -> bool {
        matches!(self, DomainError::NoMatchingCases)
    }
}
