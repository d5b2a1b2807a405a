//! Plain-text grid reading operations.

use std::{fs, path::Path};

use anyhow::Context;

use crate::error::{LifeError, Result};
use crate::grid::{Grid, grid_from_rows};

/// Parse a grid from text.
///
/// Blank lines and surrounding whitespace are ignored. Every other line is a
/// row of `0`/`1` tokens, and all rows must have the same length.
pub fn parse_grid(text: &str) -> Result<Grid> {
    let rows = text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.split_whitespace()
                .map(|token| parse_cell(token, i + 1))
                .collect::<Result<Vec<u8>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    grid_from_rows(&rows)
}

/// Reads a grid file from `path`.
pub fn read_grid(path: &Path) -> anyhow::Result<Grid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::grid::read] Failed to open grid file: {}", path.display()))?;
    parse_grid(&text)
        .with_context(|| format!("[io::grid::read] Invalid grid in {}", path.display()))
}

fn parse_cell(token: &str, line: usize) -> Result<u8> {
    match token {
        "0" => Ok(0),
        "1" => Ok(1),
        _ => Err(LifeError::Parse { line, token: token.to_string() }),
    }
}
