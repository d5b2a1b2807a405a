//! Reading and writing grids as plain text.
//!
//! One grid row per line, cells as whitespace-separated `0`/`1`. Files written
//! here parse back to the same grid.

mod grid;

pub use grid::*;
