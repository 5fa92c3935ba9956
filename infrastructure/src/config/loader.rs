//! Configuration loader with multi-source merging

use super::inputs::InputConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use shield_application::CiConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Prefix of the environment variables read as inputs
pub const ENV_PREFIX: &str = "INPUT_";

/// Input keys, lower-case and without the prefix
pub const INPUT_KEYS: [&str; 8] = [
    "token",
    "provider",
    "model",
    "schemas_dir",
    "prompts_dir",
    "seeds",
    "mode",
    "api_url",
];

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    MissingFile(PathBuf),

    #[error("{0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Configuration loader that handles source discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `INPUT_*` environment variables
    /// 2. Explicit TOML config file (if provided)
    /// 3. Default values
    pub fn load(config_path: Option<&Path>) -> Result<CiConfig, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
        }

        let inputs: InputConfig = Self::figment(config_path)
            .extract()
            .map_err(Box::new)?;
        let config = inputs.into_ci_config();
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(InputConfig::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Serialized::defaults(Self::env_inputs()))
    }

    /// Collect `INPUT_*` variables as the text they were set to.
    ///
    /// figment's own `Env` provider parses values (`007` becomes `7`), so
    /// only its key filtering is used here.
    fn env_inputs() -> InputConfig {
        let mut inputs = InputConfig::default();
        for (key, value) in Env::prefixed(ENV_PREFIX).only(&INPUT_KEYS).iter() {
            inputs.set(key.as_str(), value);
        }
        inputs
    }

    /// Load only default configuration
    pub fn load_defaults() -> CiConfig {
        InputConfig::default().into_ci_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn extract(config_path: Option<&Path>) -> Result<CiConfig, figment::Error> {
        let inputs: InputConfig = ConfigLoader::figment(config_path).extract()?;
        Ok(inputs.into_ci_config())
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.mode, "validate");
        assert_eq!(config.seed_count, 1);
        assert!(config.provider.is_none());
    }

    #[test]
    fn test_env_inputs() {
        Jail::expect_with(|jail| {
            jail.set_env("INPUT_TOKEN", "tok-123");
            jail.set_env("INPUT_PROVIDER", "openai");
            jail.set_env("INPUT_MODEL", "gpt-4o");
            jail.set_env("INPUT_SCHEMAS_DIR", "ci/schemas");
            jail.set_env("INPUT_PROMPTS_DIR", "ci/prompts");
            jail.set_env("INPUT_SEEDS", "3");
            jail.set_env("INPUT_MODE", "evaluate");
            jail.set_env("INPUT_API_URL", "https://x.test/");

            let config = extract(None)?;
            assert_eq!(config.token.as_deref(), Some("tok-123"));
            assert_eq!(config.provider.as_deref(), Some("openai"));
            assert_eq!(config.model.as_deref(), Some("gpt-4o"));
            assert_eq!(config.schemas_dir, PathBuf::from("ci/schemas"));
            assert_eq!(config.prompts_dir, PathBuf::from("ci/prompts"));
            assert_eq!(config.seed_count, 3);
            assert_eq!(config.mode, "evaluate");
            assert_eq!(config.run_url(), "https://x.test/v1/ci/run");
            Ok(())
        });
    }

    #[test]
    fn test_numeric_token_stays_string() {
        Jail::expect_with(|jail| {
            jail.set_env("INPUT_TOKEN", "12345");
            let config = extract(None)?;
            assert_eq!(config.token.as_deref(), Some("12345"));
            Ok(())
        });
    }

    #[test]
    fn test_env_values_are_forwarded_verbatim() {
        Jail::expect_with(|jail| {
            jail.set_env("INPUT_TOKEN", "007");
            jail.set_env("INPUT_MODEL", "1.50");
            jail.set_env("INPUT_PROVIDER", "[a, b]");
            jail.set_env("INPUT_MODE", " validate ");
            jail.set_env("INPUT_SCHEMAS_DIR", "true");

            let inputs: InputConfig = ConfigLoader::figment(None).extract()?;
            assert_eq!(inputs.token.as_deref(), Some("007"));
            assert_eq!(inputs.model.as_deref(), Some("1.50"));
            assert_eq!(inputs.provider.as_deref(), Some("[a, b]"));
            assert_eq!(inputs.mode.as_deref(), Some(" validate "));
            assert_eq!(inputs.schemas_dir.as_deref(), Some("true"));

            let config = inputs.into_ci_config();
            assert_eq!(config.bearer_token(), "007");
            assert_eq!(config.mode, " validate ");
            assert_eq!(config.schemas_dir, PathBuf::from("true"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_integer_seeds_in_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file("schemashield.toml", "seeds = 2\ntoken = \"file\"")?;
            jail.set_env("INPUT_SEEDS", "05");

            let inputs: InputConfig =
                ConfigLoader::figment(Some(Path::new("schemashield.toml"))).extract()?;
            assert_eq!(inputs.seeds.as_deref(), Some("05"));
            assert_eq!(inputs.token.as_deref(), Some("file"));
            assert_eq!(inputs.into_ci_config().seed_count, 5);
            Ok(())
        });
    }

    #[test]
    fn test_non_numeric_seeds_default_to_one() {
        Jail::expect_with(|jail| {
            jail.set_env("INPUT_SEEDS", "many");
            assert_eq!(extract(None)?.seed_count, 1);
            Ok(())
        });
    }

    #[test]
    fn test_unrelated_inputs_are_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("INPUT_SOMETHING_ELSE", "[not, toml");
            assert_eq!(extract(None)?, CiConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "schemashield.toml",
                r#"
                provider = "anthropic"
                model = "claude"
                seeds = 2
                "#,
            )?;
            jail.set_env("INPUT_MODEL", "override");

            let config = extract(Some(Path::new("schemashield.toml")))?;
            assert_eq!(config.provider.as_deref(), Some("anthropic"));
            assert_eq!(config.model.as_deref(), Some("override"));
            assert_eq!(config.seed_count, 2);
            Ok(())
        });
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let err = ConfigLoader::load(Some(Path::new("/nonexistent/schemashield.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }
}
