mod codec;
mod dims;

pub use codec::{Grid, StateVector, grid_from_rows, matrixify, vectorize, vectorize_grid};
pub use dims::{Dims, MAX_CELLS};
