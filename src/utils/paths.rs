//! Naming helpers for files derived from an input path.

use std::path::{Path, PathBuf};

/// File name up to its first `.`, e.g. `sample_1` for `out/sample_1.cps.fa`
#[must_use]
pub fn sample_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}

/// `<dir of path>/<sample name><suffix>`
#[must_use]
pub fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let name = format!("{}{suffix}", sample_name(path));
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
