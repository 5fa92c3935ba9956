//! Raw action inputs
//!
//! [`InputConfig`] mirrors the `INPUT_*` variables one-to-one, before any
//! defaulting. Every value is carried as the exact text it was given.

use serde::{Deserialize, Deserializer, Serialize};
use shield_application::config::{CiConfig, parse_seed_count};
use std::path::PathBuf;

/// Raw inputs as provided by environment or config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompts_dir: Option<String>,
    #[serde(deserialize_with = "seed_text", skip_serializing_if = "Option::is_none")]
    pub seeds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl InputConfig {
    /// Apply defaults and normalization.
    ///
    /// Empty directories, seeds, mode and URL fall back to their defaults.
    /// Token, provider and model are forwarded as given, even when empty.
    pub fn into_ci_config(self) -> CiConfig {
        let defaults = CiConfig::default();
        let api_url = non_empty(self.api_url).unwrap_or(defaults.api_base_url.clone());

        CiConfig {
            token: self.token,
            provider: self.provider,
            model: self.model,
            schemas_dir: non_empty(self.schemas_dir)
                .map(PathBuf::from)
                .unwrap_or(defaults.schemas_dir.clone()),
            prompts_dir: non_empty(self.prompts_dir)
                .map(PathBuf::from)
                .unwrap_or(defaults.prompts_dir.clone()),
            seed_count: parse_seed_count(non_empty(self.seeds).as_deref()),
            mode: non_empty(self.mode).unwrap_or(defaults.mode.clone()),
            ..defaults
        }
        .with_api_base_url(&api_url)
    }

    /// Set the field named by `key`; unknown keys are ignored
    pub fn set(&mut self, key: &str, value: String) {
        let slot = match key {
            "token" => &mut self.token,
            "provider" => &mut self.provider,
            "model" => &mut self.model,
            "schemas_dir" => &mut self.schemas_dir,
            "prompts_dir" => &mut self.prompts_dir,
            "seeds" => &mut self.seeds,
            "mode" => &mut self.mode,
            "api_url" => &mut self.api_url,
            _ => return,
        };
        *slot = Some(value);
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedInput {
    Text(String),
    Count(i64),
}

/// `seeds` may be written as a bare integer in a TOML file
fn seed_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SeedInput>::deserialize(deserializer)?.map(|seeds| match seeds {
        SeedInput::Text(text) => text,
        SeedInput::Count(count) => count.to_string(),
    }))
}
