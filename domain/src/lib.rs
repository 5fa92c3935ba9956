//! Domain layer for schemashield-ci
//!
//! This crate contains the core business rules: how files are named and
//! paired into cases, what the run payload looks like, and how a remote
//! response turns into a pass or fail verdict.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Case
//!
//! A [`TestCase`] combines one prompt and one schema that share a base name
//! (file name without its final extension). Cases are produced by
//! [`pair_cases`] from two [`DiscoveryReport`]s.
//!
//! ## Run
//!
//! A [`Payload`] bundles every case with a provider matrix, a seed list and
//! a mode string. The remote service answers with a [`RemoteResult`] that
//! [`RemoteResponse::verdict`] reduces to a [`RunVerdict`].

pub mod case;
pub mod core;
pub mod discovery;
pub mod run;

// Re-export commonly used types
pub use case::{
    base_name::{base_name_no_ext, has_json_extension, is_hidden},
    entities::{NamedFile, TestCase},
    pairing::pair_cases,
};
pub use core::error::DomainError;
pub use discovery::{DiscoveredEntry, DiscoveryReport, SkipReason, SkippedFile};
pub use run::{
    payload::{MAX_SEEDS, Payload, ProviderTarget, seed_range},
    result::{RemoteResponse, RemoteResult, RunVerdict, is_truthy},
};
