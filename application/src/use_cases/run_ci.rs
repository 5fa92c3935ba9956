//! Run CI use case.
//!
//! Prepares the payload, submits it once through the [`CiGateway`] and
//! reduces the response to a [`RunVerdict`]. There are no retries.

use super::prepare_payload::PreparePayloadUseCase;
use crate::config::CiConfig;
use crate::ports::case_source::CaseSourcePort;
use crate::ports::ci_gateway::{CiGateway, GatewayError};
use shield_domain::{DomainError, RemoteResponse, RunVerdict};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that stop a run before a verdict is reached
#[derive(Error, Debug)]
pub enum RunCiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Outcome of a submitted run
#[derive(Debug, Clone)]
pub struct RunCiOutput {
    /// Number of cases sent
    pub case_count: usize,
    pub response: RemoteResponse,
    pub verdict: RunVerdict,
}

/// Use case for a full CI run.
///
/// 1. Discover and pair files via [`PreparePayloadUseCase`]
/// 2. POST the payload once
/// 3. Interpret status and body
#[derive(Clone)]
pub struct RunCiUseCase {
    prepare: PreparePayloadUseCase,
    gateway: Arc<dyn CiGateway>,
}

impl RunCiUseCase {
    pub fn new(case_source: Arc<dyn CaseSourcePort>, gateway: Arc<dyn CiGateway>) -> Self {
        Self {
            prepare: PreparePayloadUseCase::new(case_source),
            gateway,
        }
    }

    pub async fn execute(&self, config: &CiConfig) -> Result<RunCiOutput, RunCiError> {
        let payload = self.prepare.execute(config)?;

        info!(
            "Submitting {} case(s) to {}",
            payload.cases.len(),
            self.gateway.endpoint()
        );
        let response = self.gateway.submit_run(&payload).await?;
        let verdict = response.verdict();

        if verdict.is_passed() {
            info!("Run passed (HTTP {})", response.status);
        } else {
            warn!(
                "Run failed (HTTP {}, ok={:?})",
                response.status,
                response.result.ok()
            );
        }

        Ok(RunCiOutput {
            case_count: payload.cases.len(),
            response,
            verdict,
        })
    }
}
