use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::common::ensure_dir_exists;
use crate::grid::Grid;
use crate::io::write_grid;

/// Receives the grid of each generation as a simulation runs.
pub trait GenerationSink {
    fn record(&mut self, generation: usize, grid: &Grid) -> Result<()>;
}

/// Discards every generation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl GenerationSink for NullSink {
    fn record(&mut self, _generation: usize, _grid: &Grid) -> Result<()> { Ok(()) }
}

/// Keeps every recorded generation in memory.
#[derive(Debug, Default, Clone)]
pub struct History {
    frames: Vec<(usize, Grid)>,
}

impl History {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn len(&self) -> usize { self.frames.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.frames.is_empty() }

    /// Recorded `(generation, grid)` pairs, in recording order.
    #[inline] pub fn frames(&self) -> &[(usize, Grid)] { &self.frames }

    /// Grid recorded for `generation`, if any.
    pub fn get(&self, generation: usize) -> Option<&Grid> {
        self.frames.iter().find(|(g, _)| *g == generation).map(|(_, grid)| grid)
    }
}

impl GenerationSink for History {
    fn record(&mut self, generation: usize, grid: &Grid) -> Result<()> {
        self.frames.push((generation, grid.clone()));
        Ok(())
    }
}

/// Writes each generation to `<dir>/generation_<n>.txt`.
#[derive(Debug, Clone)]
pub struct FrameWriter {
    dir: PathBuf,
}

impl FrameWriter {
    /// Create a writer, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        ensure_dir_exists(&dir)?;
        Ok(Self { dir })
    }

    #[inline] pub fn dir(&self) -> &Path { &self.dir }

    /// Path of the frame file for `generation`.
    pub fn frame_path(&self, generation: usize) -> PathBuf {
        self.dir.join(format!("generation_{generation}.txt"))
    }
}

impl GenerationSink for FrameWriter {
    fn record(&mut self, generation: usize, grid: &Grid) -> Result<()> {
        write_grid(&self.frame_path(generation), grid)
    }
}
