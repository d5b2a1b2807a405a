use ndarray::Array2;

use crate::error::{LifeError, Result};
use crate::grid::Dims;

/// A rectangular grid of cells, `1` for alive and anything else for dead.
pub type Grid = Array2<u8>;

/// Row-major flattening of a `Grid`; length is always `rows * cols`.
pub type StateVector = Vec<u8>;

/// Flatten nested rows into a row-major state vector.
///
/// Every row must have the same length as the first one.
pub fn vectorize<R: AsRef<[u8]>>(rows: &[R]) -> Result<StateVector> {
    let dims = rows_dims(rows)?;
    let mut state = Vec::with_capacity(dims.len());
    for row in rows {
        state.extend_from_slice(row.as_ref());
    }
    Ok(state)
}

/// Flatten a grid into a row-major state vector.
#[inline]
pub fn vectorize_grid(grid: &Grid) -> StateVector {
    grid.iter().copied().collect()
}

/// Rebuild a `rows x cols` grid from a row-major state vector.
pub fn matrixify(state: &[u8], dims: Dims) -> Result<Grid> {
    if state.len() != dims.len() {
        return Err(LifeError::Shape { context: "state vector length", expected: dims.len(), found: state.len() });
    }
    Array2::from_shape_vec(dims.shape(), state.to_vec())
        .map_err(|_| LifeError::Shape { context: "state vector length", expected: dims.len(), found: state.len() })
}

/// Build a grid from nested rows, checking that they form a rectangle.
pub fn grid_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Grid> {
    let dims = rows_dims(rows)?;
    matrixify(&vectorize(rows)?, dims)
}

/// Infer dimensions from nested rows.
fn rows_dims<R: AsRef<[u8]>>(rows: &[R]) -> Result<Dims> {
    let cols = rows.first().map_or(0, |row| row.as_ref().len());
    let dims = Dims::new(rows.len(), cols)?;
    if let Some(row) = rows.iter().find(|row| row.as_ref().len() != cols) {
        return Err(LifeError::Shape { context: "row length", expected: cols, found: row.as_ref().len() });
    }
    Ok(dims)
}
