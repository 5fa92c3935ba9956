//! Configuration loading for schemashield-ci
//!
//! Settings come from three sources. The priority order (highest to lowest):
//!
//! 1. `INPUT_*` environment variables (as set by CI action runners)
//! 2. `--config <path>` TOML file
//! 3. Default values

mod inputs;
mod loader;

pub use inputs::InputConfig;
pub use loader::{ConfigError, ConfigLoader, ENV_PREFIX, INPUT_KEYS};
