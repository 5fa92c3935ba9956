//! Discovery results
//!
//! Discovery never fails as a whole: every file either becomes an entry or
//! is recorded as skipped with a [`SkipReason`]. Callers decide whether the
//! skips matter; the CI run itself ignores them.

use crate::case::entities::NamedFile;
use std::fmt;
use std::path::PathBuf;

/// Why a listed file did not become a discovery entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Schema candidate without a `.json` extension
    NotJson,
    /// File content failed to parse as JSON
    InvalidJson(String),
    /// Path vanished or resolves to something other than a regular file
    NotARegularFile,
    /// Reading the file failed
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotJson => write!(f, "not a .json file"),
            SkipReason::InvalidJson(e) => write!(f, "invalid JSON: {}", e),
            SkipReason::NotARegularFile => write!(f, "not a regular file"),
            SkipReason::Unreadable(e) => write!(f, "unreadable: {}", e),
        }
    }
}

/// A file that discovery passed over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// A file kept by discovery together with its loaded value
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredEntry<T> {
    pub file: NamedFile,
    pub value: T,
}

/// Ordered map from base name to loaded value, plus the skipped files.
///
/// Insertion order is preserved. Re-inserting a base name replaces the value
/// and file but keeps the original position.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveryReport<T> {
    entries: Vec<DiscoveredEntry<T>>,
    skipped: Vec<SkippedFile>,
}

impl<T> Default for DiscoveryReport<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T> DiscoveryReport<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a kept file under its base name
    pub fn insert(&mut self, path: impl Into<PathBuf>, value: T) {
        let file = NamedFile::from_path(path);
        match self
            .entries
            .iter_mut()
            .find(|e| e.file.base_name == file.base_name)
        {
            Some(existing) => {
                existing.file = file;
                existing.value = value;
            }
            None => self.entries.push(DiscoveredEntry { file, value }),
        }
    }

    /// Record a file that was passed over
    pub fn skip(&mut self, path: impl Into<PathBuf>, reason: SkipReason) {
        self.skipped.push(SkippedFile {
            path: path.into(),
            reason,
        });
    }

    pub fn get(&self, base_name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|e| e.file.base_name == base_name)
            .map(|e| &e.value)
    }

    pub fn contains(&self, base_name: &str) -> bool {
        self.get(base_name).is_some()
    }

    pub fn entries(&self) -> &[DiscoveredEntry<T>] {
        &self.entries
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    /// Base names in insertion order
    pub fn base_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.file.base_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
