//! CI run configuration.
//!
//! [`CiConfig`] is the immutable snapshot of settings read once at startup.
//! It is passed by reference into the use cases; nothing below the binary
//! reads the process environment.

use shield_domain::ProviderTarget;
use std::fmt;
use std::path::PathBuf;

/// Default directory scanned for `.json` schema files
pub const DEFAULT_SCHEMAS_DIR: &str = "./schemas";
/// Default directory scanned for prompt files
pub const DEFAULT_PROMPTS_DIR: &str = "./prompts";
/// Default mode forwarded to the remote service
pub const DEFAULT_MODE: &str = "validate";
/// Default base URL of the remote API
pub const DEFAULT_API_URL: &str = "https://schemashield.ai";
/// Path of the run endpoint, relative to the base URL
pub const RUN_ENDPOINT_PATH: &str = "/v1/ci/run";

/// Settings for a single CI run.
///
/// Missing token, provider and model are kept as `None` and forwarded; the
/// remote API decides whether they are acceptable.
#[derive(Clone, PartialEq, Eq)]
pub struct CiConfig {
    /// Bearer credential (secret, redacted in `Debug`)
    pub token: Option<String>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub schemas_dir: PathBuf,
    pub prompts_dir: PathBuf,
    /// Requested number of seeds; may be zero or negative, see [`shield_domain::seed_range`]
    pub seed_count: i64,
    pub mode: String,
    /// Base URL with one trailing slash removed
    pub api_base_url: String,
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            token: None,
            provider: None,
            model: None,
            schemas_dir: PathBuf::from(DEFAULT_SCHEMAS_DIR),
            prompts_dir: PathBuf::from(DEFAULT_PROMPTS_DIR),
            seed_count: 1,
            mode: DEFAULT_MODE.to_string(),
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl fmt::Debug for CiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CiConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("schemas_dir", &self.schemas_dir)
            .field("prompts_dir", &self.prompts_dir)
            .field("seed_count", &self.seed_count)
            .field("mode", &self.mode)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl CiConfig {
    // ==================== Builder Methods ====================

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_schemas_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schemas_dir = dir.into();
        self
    }

    pub fn with_prompts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.prompts_dir = dir.into();
        self
    }

    pub fn with_seed_count(mut self, count: i64) -> Self {
        self.seed_count = count;
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Set the base URL, removing one trailing slash
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = normalize_api_url(url);
        self
    }

    // ==================== Derived Values ====================

    /// Full URL of the run endpoint
    pub fn run_url(&self) -> String {
        format!("{}{}", self.api_base_url, RUN_ENDPOINT_PATH)
    }

    /// Token for the `Authorization` header; empty when unset
    pub fn bearer_token(&self) -> &str {
        self.token.as_deref().unwrap_or("")
    }

    /// The single provider/model pair of the run matrix
    pub fn provider_target(&self) -> ProviderTarget {
        ProviderTarget::new(self.provider.clone(), self.model.clone())
    }
}

/// Remove exactly one trailing `/` from a base URL
pub fn normalize_api_url(raw: &str) -> String {
    raw.strip_suffix('/').unwrap_or(raw).to_string()
}

/// Parse a seed count the way a lenient base-10 integer parse would.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits. Anything else after the digits is ignored (`"3abc"` is 3).
/// Missing input or input without leading digits yields 1.
pub fn parse_seed_count(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };

    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return 1;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative { -magnitude } else { magnitude }
}
