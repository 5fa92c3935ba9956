//! Application-level configuration.
//!
//! - [`CiConfig`]: settings snapshot for one CI run

pub mod ci_config;

pub use ci_config::{
    CiConfig, DEFAULT_API_URL, DEFAULT_MODE, DEFAULT_PROMPTS_DIR, DEFAULT_SCHEMAS_DIR,
    RUN_ENDPOINT_PATH, normalize_api_url, parse_seed_count,
};
