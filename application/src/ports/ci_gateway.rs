//! CI gateway port
//!
//! Defines the interface for submitting a run to the remote validation API.

use async_trait::async_trait;
use shield_domain::{Payload, RemoteResponse};
use thiserror::Error;

/// Errors that can occur before a response status is available
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Gateway to the remote CI run endpoint.
///
/// Any HTTP status, including 4xx and 5xx, is a successful call that
/// returns a [`RemoteResponse`]; only transport-level problems are errors.
#[async_trait]
pub trait CiGateway: Send + Sync {
    /// Submit the payload once and buffer the full response
    async fn submit_run(&self, payload: &Payload) -> Result<RemoteResponse, GatewayError>;

    /// URL the gateway posts to
    fn endpoint(&self) -> &str;
}
