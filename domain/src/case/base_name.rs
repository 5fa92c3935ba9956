//! File naming rules used as the pairing key between schemas and prompts.

use std::path::Path;

/// Return the file name of `path` with its final extension removed.
///
/// Only the last `.suffix` is stripped, so `a.b.json` becomes `a.b`.
/// Names without a dot, names ending in a dot (`foo.`) and names whose only
/// dot is the leading one (`.env`) are returned unchanged.
pub fn base_name_no_ext(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => name[..idx].to_string(),
        _ => name,
    }
}

/// Whether a directory entry name is hidden (leading dot)
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Whether `path` ends in `.json`, ignoring ASCII case
pub fn has_json_extension(path: &Path) -> bool {
    path.to_string_lossy().to_ascii_lowercase().ends_with(".json")
}
