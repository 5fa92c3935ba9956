//! HTTP gateway for the CI run endpoint

use async_trait::async_trait;
use shield_application::{CiConfig, CiGateway, GatewayError};
use shield_domain::{Payload, RemoteResponse};
use tracing::debug;

/// User agent sent with every request
const USER_AGENT: &str = concat!("schemashield-ci/", env!("CARGO_PKG_VERSION"));

/// Maximum response characters echoed into debug logs
const LOG_BODY_LIMIT: usize = 2048;

/// [`CiGateway`] backed by `reqwest`.
///
/// Sends exactly one `POST` per run with a bearer token and a JSON body.
/// The transport's default timeouts apply; nothing is retried.
pub struct HttpCiGateway {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpCiGateway {
    /// Create a gateway for the endpoint and token in `config`
    pub fn new(config: &CiConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(config, client))
    }

    /// Create a gateway with a preconfigured client
    pub fn with_client(config: &CiConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: config.run_url(),
            token: config.bearer_token().to_string(),
        }
    }
}

#[async_trait]
impl CiGateway for HttpCiGateway {
    async fn submit_run(&self, payload: &Payload) -> Result<RemoteResponse, GatewayError> {
        debug!("POST {} ({} case(s))", self.endpoint, payload.cases.len());

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                GatewayError::Transport(format!("Failed to reach {}: {}", self.endpoint, e))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            GatewayError::Transport(format!("Failed to read response body: {}", e))
        })?;

        let preview: String = text.chars().take(LOG_BODY_LIMIT).collect();
        debug!(
            "HTTP {} {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            preview
        );

        Ok(RemoteResponse::new(status.as_u16(), &text))
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
