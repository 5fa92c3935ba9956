//! Local file system case source
//!
//! [`LocalCaseSource`] implements [`CaseSourcePort`] by listing the schema
//! and prompt directories on disk.
//!
//! # Listing rules
//!
//! - Only entries directly inside the directory are considered (no recursion)
//! - Names starting with `.` are ignored
//! - Entries are sorted by path so pairing order is stable across platforms
//! - A directory that is missing or unreadable lists as empty
//!
//! Files are decoded as UTF-8 with invalid sequences replaced.

use serde_json::Value;
use shield_application::CaseSourcePort;
use shield_domain::{DiscoveryReport, SkipReason, has_json_extension, is_hidden};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Case source that reads from the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalCaseSource;

impl LocalCaseSource {
    pub fn new() -> Self {
        Self
    }
}

impl CaseSourcePort for LocalCaseSource {
    fn discover_schemas(&self, dir: &Path) -> DiscoveryReport<Value> {
        let mut report = DiscoveryReport::new();

        for path in list_files(dir) {
            if !has_json_extension(&path) {
                report.skip(path, SkipReason::NotJson);
                continue;
            }

            let text = match read_text(&path) {
                Ok(text) => text,
                Err(e) => {
                    report.skip(path, SkipReason::Unreadable(e.to_string()));
                    continue;
                }
            };

            match serde_json::from_str::<Value>(&text) {
                Ok(schema) => report.insert(path, schema),
                Err(e) => report.skip(path, SkipReason::InvalidJson(e.to_string())),
            }
        }

        report
    }

    fn discover_prompts(&self, dir: &Path) -> DiscoveryReport<String> {
        let mut report = DiscoveryReport::new();

        for path in list_files(dir) {
            // Re-check: the entry may have vanished, or be a symlink to a directory
            let is_file = fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false);
            if !is_file {
                report.skip(path, SkipReason::NotARegularFile);
                continue;
            }

            match read_text(&path) {
                Ok(text) => report.insert(path, text),
                Err(e) => report.skip(path, SkipReason::Unreadable(e.to_string())),
            }
        }

        report
    }
}

/// List non-hidden entries directly inside `dir`, sorted by path.
///
/// Returns an empty list when the directory cannot be read.
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| !is_hidden(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.path())
        .collect();
    files.sort();
    files
}

fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
