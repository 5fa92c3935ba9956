//! Case entities

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::base_name::base_name_no_ext;

/// A discovered file reduced to its pairing key and location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedFile {
    pub base_name: String,
    pub full_path: PathBuf,
}

impl NamedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let full_path = path.into();
        Self {
            base_name: base_name_no_ext(&full_path),
            full_path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.full_path
    }
}

/// One unit of work sent to the remote API.
///
/// `schema` is kept opaque; the remote service owns its interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub prompt: String,
    pub schema: Value,
}

impl TestCase {
    pub fn new(name: impl Into<String>, prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            schema,
        }
    }
}
