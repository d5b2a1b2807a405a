use anyhow::{Context, Result, ensure};
use std::fs;
use std::path::Path;

/// Make sure `dir` is a directory, creating it and any missing ancestors.
pub(crate) fn ensure_dir_exists(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    ensure!(!dir.exists(), "[common::fs] {} exists but is not a directory", dir.display());
    fs::create_dir_all(dir)
        .with_context(|| format!("[common::fs] Failed to create directory {}", dir.display()))
}

/// Create the parent directory of `path` if it has one.
pub(crate) fn ensure_parent_exists(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir_exists(parent),
        _ => Ok(()),
    }
}
