//! Plain-text grid writing operations.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::common::ensure_parent_exists;
use crate::grid::Grid;

/// Render a grid as text: one line per row, cells separated by single spaces.
pub fn format_grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() * 2);
    for row in grid.rows() {
        let line = row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>().join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write a grid to a text file at `path`, creating parent directories.
pub fn write_grid(path: &Path, grid: &Grid) -> Result<()> {
    ensure_parent_exists(path)?;
    fs::write(path, format_grid(grid))
        .with_context(|| format!("[io::grid::write] Failed to write grid file: {}", path.display()))
}
