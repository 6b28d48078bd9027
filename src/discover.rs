//! Workflow file discovery.

use glob::glob;
use std::path::{Path, PathBuf};

/// Recursively enumerate all `*.yml` and `*.yaml` files under `dir`.
///
/// Results are sorted for deterministic processing order. A directory with
/// no matches (or an unreadable pattern) yields an empty list; the caller
/// decides whether that is worth a warning.
pub fn find_workflow_files(dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = Vec::new();
    for ext in ["yml", "yaml"] {
        let pattern = dir.join(format!("**/*.{ext}")).to_string_lossy().to_string();
        if let Ok(entries) = glob(&pattern) {
            for entry in entries.flatten() {
                if entry.is_file() {
                    found.push(entry);
                }
            }
        }
    }
    found.sort();
    found
}
