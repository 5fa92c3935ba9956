//! Console output formatter for CI runs

use colored::Colorize;
use serde_json::Value;
use shield_application::CiConfig;
use shield_domain::{Payload, RunVerdict};
use std::fmt::Display;

/// Prefix of the success line (stdout)
pub const PASSED_PREFIX: &str = "SchemaShield CI passed:";
/// Prefix of every failure line (stderr)
pub const FAILED_PREFIX: &str = "SchemaShield CI failed:";

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a verdict as a single pass or fail line
    pub fn format_verdict(verdict: &RunVerdict) -> String {
        match verdict {
            RunVerdict::Passed(report) => Self::format_passed(report),
            RunVerdict::Failed(result) => Self::format_failed(result),
        }
    }

    /// `SchemaShield CI passed: <report>`
    pub fn format_passed(report: &Value) -> String {
        format!("{} {}", PASSED_PREFIX.green().bold(), Self::compact(report))
    }

    /// `SchemaShield CI failed: <result>`
    pub fn format_failed(result: &Value) -> String {
        format!("{} {}", FAILED_PREFIX.red().bold(), Self::compact(result))
    }

    /// Failure line for errors that produced no response
    pub fn format_error(error: &dyn Display) -> String {
        format!("{} {}", FAILED_PREFIX.red().bold(), error)
    }

    /// Pretty JSON of the payload, for `--dry-run`
    pub fn format_payload(payload: &Payload) -> String {
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string())
    }

    /// Resolved configuration with the token redacted
    pub fn format_config(config: &CiConfig) -> String {
        let rows = [
            ("token", Self::secret(config.token.as_deref())),
            ("provider", Self::optional(config.provider.as_deref())),
            ("model", Self::optional(config.model.as_deref())),
            ("schemas_dir", config.schemas_dir.display().to_string()),
            ("prompts_dir", config.prompts_dir.display().to_string()),
            ("seeds", config.seed_count.to_string()),
            ("mode", config.mode.clone()),
            ("api_url", config.api_base_url.clone()),
            ("endpoint", config.run_url()),
        ];

        let mut output = format!("{}\n", "Resolved configuration:".cyan().bold());
        for (key, value) in rows {
            output.push_str(&format!("  {:<12} {}\n", key, value));
        }
        output
    }

    fn compact(value: &Value) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
    }

    fn secret(value: Option<&str>) -> String {
        match value {
            Some(_) => "<set>".to_string(),
            None => "<unset>".to_string(),
        }
    }

    fn optional(value: Option<&str>) -> String {
        value.map(str::to_string).unwrap_or_else(|| "<unset>".to_string())
    }
}
