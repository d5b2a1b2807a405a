//! Neighbor adjacency of a bounded grid as a sparse matrix.
//!
//! Row `i` of the matrix has a `1` in column `j` when cell `j` is one of the
//! (up to) eight cells touching cell `i`. Multiplying the matrix by a state
//! vector therefore yields the live-neighbor count of every cell at once.

use tracing::info;

use crate::error::Result;
use crate::grid::Dims;
use crate::sparse::{CooEntry, CsrMatrix};

/// The eight neighbor offsets `(dr, dc)`, in emission order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Coordinate entries of the neighbor matrix for a `dims` grid.
///
/// Cells are visited in row-major order and, for each cell, neighbors in
/// `NEIGHBOR_OFFSETS` order. Offsets falling outside the grid are dropped, so
/// edge cells have 5 neighbors and corner cells 3 (fewer on thin grids).
pub fn neighbor_entries(dims: Dims) -> Vec<CooEntry<u32>> {
    // `Dims` caps the cell count at `MAX_CELLS`, so indices fit in `u32`.
    let mut entries = Vec::with_capacity(8 * dims.len());
    for row in 0..dims.rows() {
        for col in 0..dims.cols() {
            let cell = dims.index(row, col) as u32;
            entries.extend(NEIGHBOR_OFFSETS.iter()
                .filter_map(|&(dr, dc)| dims.offset(row, col, dr, dc))
                .map(|neighbor| CooEntry::new(cell, neighbor as u32, 1)));
        }
    }
    entries
}

/// Build the neighbor matrix for a `dims` grid.
pub fn build_topology(dims: Dims) -> Result<CsrMatrix<u32>> {
    let matrix = CsrMatrix::from_coordinates(neighbor_entries(dims), dims.len())?;
    info!(rows = dims.rows(), cols = dims.cols(), nnz = matrix.nnz(), "built neighbor topology");
    Ok(matrix)
}

/// Build the neighbor matrix for a `rows x cols` grid.
///
/// Fails with `LifeError::EmptyInput` if either dimension is zero, and with
/// `LifeError::Index` if the grid has more than `MAX_CELLS` cells.
pub fn build_topology_for(rows: usize, cols: usize) -> Result<CsrMatrix<u32>> {
    build_topology(Dims::new(rows, cols)?)
}
