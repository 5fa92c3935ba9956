//! Prepare Payload use case.
//!
//! Discovers schemas and prompts, pairs them by base name and assembles the
//! [`Payload`] for a run. Nothing is sent; [`RunCiUseCase`](super::run_ci::RunCiUseCase)
//! builds on this, and `--dry-run` uses it directly.

use crate::config::CiConfig;
use crate::ports::case_source::CaseSourcePort;
use shield_domain::{DiscoveryReport, DomainError, MAX_SEEDS, Payload, SkippedFile, pair_cases};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case that turns the configured directories into a run payload
#[derive(Clone)]
pub struct PreparePayloadUseCase {
    case_source: Arc<dyn CaseSourcePort>,
}

impl PreparePayloadUseCase {
    pub fn new(case_source: Arc<dyn CaseSourcePort>) -> Self {
        Self { case_source }
    }

    /// Build the payload for `config`.
    ///
    /// Fails with [`DomainError::NoMatchingCases`] when no base name appears
    /// in both directories.
    pub fn execute(&self, config: &CiConfig) -> Result<Payload, DomainError> {
        let schemas = self.case_source.discover_schemas(&config.schemas_dir);
        let prompts = self.case_source.discover_prompts(&config.prompts_dir);

        log_skipped("schema", schemas.skipped());
        log_skipped("prompt", prompts.skipped());

        info!(
            "Discovered {} schema(s) in {} and {} prompt(s) in {}",
            schemas.len(),
            config.schemas_dir.display(),
            prompts.len(),
            config.prompts_dir.display()
        );
        log_unpaired(&schemas, &prompts);

        let cases = pair_cases(&schemas, &prompts);
        if cases.is_empty() {
            return Err(DomainError::NoMatchingCases);
        }

        if config.seed_count > MAX_SEEDS {
            warn!(
                "Seed count {} exceeds the limit; sending {} seeds",
                config.seed_count, MAX_SEEDS
            );
        }

        let payload = Payload::new(
            config.provider_target(),
            config.seed_count,
            cases,
            config.mode.clone(),
        );

        info!(
            "Prepared {} case(s) x {} seed(s), mode '{}'",
            payload.cases.len(),
            payload.seeds.len(),
            payload.mode
        );
        Ok(payload)
    }
}

fn log_skipped(kind: &str, skipped: &[SkippedFile]) {
    for file in skipped {
        debug!("Skipping {} {}: {}", kind, file.path.display(), file.reason);
    }
}

fn log_unpaired<T, U>(schemas: &DiscoveryReport<T>, prompts: &DiscoveryReport<U>) {
    for name in schemas.base_names().filter(|n| !prompts.contains(n)) {
        debug!("Schema '{}' has no matching prompt", name);
    }
    for name in prompts.base_names().filter(|n| !schemas.contains(n)) {
        debug!("Prompt '{}' has no matching schema", name);
    }
}
