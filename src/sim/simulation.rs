use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{LifeError, Result};
use crate::grid::{Dims, Grid, StateVector, matrixify, vectorize_grid};
use crate::life::{Rule, step_with};
use crate::sim::GenerationSink;
use crate::sparse::CsrMatrix;
use crate::topology::build_topology;

/// Drives a grid through successive generations.
///
/// The neighbor matrix is built once from the starting grid's dimensions and
/// shared read-only; the state vector is replaced on every step.
#[derive(Clone, Debug)]
pub struct Simulation {
    dims: Dims,
    matrix: Arc<CsrMatrix<u32>>,
    rule: Rule,
    state: StateVector,
    generation: usize,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl Simulation {
    /// Start a simulation from `grid`, building its neighbor topology.
    pub fn new(grid: &Grid, rule: Rule) -> Result<Self> {
        let (rows, cols) = grid.dim();
        let dims = Dims::new(rows, cols)?;
        let matrix = Arc::new(build_topology(dims)?);
        Self::with_topology(grid, matrix, rule)
    }

    /// Start a simulation from `grid` reusing an existing neighbor matrix.
    ///
    /// The matrix must have one row per cell of `grid`.
    pub fn with_topology(grid: &Grid, matrix: Arc<CsrMatrix<u32>>, rule: Rule) -> Result<Self> {
        let (rows, cols) = grid.dim();
        let dims = Dims::new(rows, cols)?;
        if matrix.row_count() != dims.len() {
            return Err(LifeError::Shape { context: "topology row count", expected: dims.len(), found: matrix.row_count() });
        }
        Ok(Self { dims, matrix, rule, state: vectorize_grid(grid), generation: 0, parallel: false })
    }

    /// Use the row-parallel multiply for each step.
    #[cfg(feature = "parallel")]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[inline] pub fn dims(&self) -> Dims { self.dims }

    #[inline] pub fn rule(&self) -> Rule { self.rule }

    #[inline] pub fn generation(&self) -> usize { self.generation }

    /// Current row-major state vector.
    #[inline] pub fn state(&self) -> &[u8] { &self.state }

    /// Shared handle to the neighbor matrix.
    #[inline] pub fn topology(&self) -> &Arc<CsrMatrix<u32>> { &self.matrix }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.state.iter().filter(|&&cell| cell == 1).count()
    }

    /// Current state as a grid.
    pub fn grid(&self) -> Result<Grid> {
        matrixify(&self.state, self.dims)
    }

    /// Advance one generation.
    pub fn step(&mut self) -> Result<()> {
        self.state = self.next_state()?;
        self.generation += 1;
        debug!(generation = self.generation, population = self.population(), "step");
        Ok(())
    }

    #[cfg(feature = "parallel")]
    fn next_state(&self) -> Result<StateVector> {
        if self.parallel {
            crate::life::par_step_with(&self.rule, &self.state, &self.matrix)
        } else {
            step_with(&self.rule, &self.state, &self.matrix)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn next_state(&self) -> Result<StateVector> {
        step_with(&self.rule, &self.state, &self.matrix)
    }

    /// Advance `generations` times, reporting the current generation first and
    /// then every new one to `sink`.
    pub fn run(&mut self, generations: usize, sink: &mut dyn GenerationSink) -> anyhow::Result<()> {
        sink.record(self.generation, &self.grid()?)?;
        for _ in 0..generations {
            self.step()?;
            sink.record(self.generation, &self.grid()?)?;
        }
        info!(generation = self.generation, population = self.population(), "run finished");
        Ok(())
    }
}
