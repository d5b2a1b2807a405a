#![doc = "Conway's Game of Life as repeated sparse matrix-vector multiplication"]
mod common;
mod config;
mod error;
mod grid;
mod io;
mod life;
mod sim;
mod sparse;
mod topology;

#[doc(inline)]
pub use error::{LifeError, Result};

#[doc(inline)]
pub use grid::{Dims, Grid, MAX_CELLS, StateVector, grid_from_rows, matrixify, vectorize, vectorize_grid};

#[doc(inline)]
pub use sparse::{CooEntry, CsrMatrix, Weight};

#[doc(inline)]
pub use topology::{NEIGHBOR_OFFSETS, build_topology, build_topology_for, neighbor_entries};

#[doc(inline)]
pub use life::{Rule, apply, step_once, step_with};

#[cfg(feature = "parallel")]
#[doc(inline)]
pub use life::par_step_with;

#[doc(inline)]
pub use sim::{FrameWriter, GenerationSink, History, NullSink, Simulation};

#[doc(inline)]
pub use io::{format_grid, parse_grid, read_grid, write_grid};

#[doc(inline)]
pub use config::SimConfig;
