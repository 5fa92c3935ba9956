//! Case source port
//!
//! Defines how the application layer discovers schema and prompt files.

use serde_json::Value;
use shield_domain::DiscoveryReport;
use std::path::Path;

/// Source of schema and prompt files.
///
/// Discovery never fails: a missing directory yields an empty report and
/// unusable files are recorded as skipped. Implementations (adapters) live
/// in the infrastructure layer.
pub trait CaseSourcePort: Send + Sync {
    /// Discover `.json` schema files directly inside `dir`, parsed as JSON
    fn discover_schemas(&self, dir: &Path) -> DiscoveryReport<Value>;

    /// Discover prompt files directly inside `dir`, as raw text
    fn discover_prompts(&self, dir: &Path) -> DiscoveryReport<String>;
}
