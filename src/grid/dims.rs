use crate::error::{LifeError, Result};

/// Largest cell count a grid may have.
///
/// Cell indices and CSR offsets are `u32`, and each cell carries at most eight
/// neighbor entries, so `8 * MAX_CELLS` must still fit in a `u32`.
pub const MAX_CELLS: usize = u32::MAX as usize / 8;

/// Fixed dimensions of a bounded grid.
///
/// Built once from the loaded grid and passed by value to every routine that
/// needs to translate between `(row, col)` positions and linear indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    rows: usize,
    cols: usize,
}

impl Dims {
    /// Construct dimensions, rejecting grids with no rows or no columns and
    /// grids with more than `MAX_CELLS` cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::EmptyInput { rows, cols });
        }
        match rows.checked_mul(cols) {
            Some(cells) if cells <= MAX_CELLS => Ok(Self { rows, cols }),
            cells => Err(LifeError::Index { context: "grid cell count", index: cells.unwrap_or(usize::MAX), bound: MAX_CELLS }),
        }
    }

    #[inline] pub fn rows(&self) -> usize { self.rows }

    #[inline] pub fn cols(&self) -> usize { self.cols }

    /// Total number of cells (`rows * cols`).
    #[inline] pub fn len(&self) -> usize { self.rows * self.cols }

    /// Whether the grid has no cells; never true for a constructed `Dims`.
    #[inline] pub fn is_empty(&self) -> bool { false }

    /// Row-major linear index of `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "cell out of range");
        row * self.cols + col
    }

    /// Inverse of `index`.
    #[inline]
    pub fn position(&self, index: usize) -> (usize, usize) {
        debug_assert!(index < self.len(), "index out of range");
        (index / self.cols, index % self.cols)
    }

    /// Offset `(row, col)` by `(dr, dc)`, returning the linear index if the
    /// result stays inside the grid. No wraparound.
    #[inline]
    pub fn offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<usize> {
        let r = row.checked_add_signed(dr).filter(|&r| r < self.rows)?;
        let c = col.checked_add_signed(dc).filter(|&c| c < self.cols)?;
        Some(self.index(r, c))
    }

    /// Shape tuple in the form `ndarray` expects.
    #[inline] pub fn shape(&self) -> (usize, usize) { (self.rows, self.cols) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_is_empty_input() {
        assert_eq!(Dims::new(0, 3), Err(LifeError::EmptyInput { rows: 0, cols: 3 }));
        assert_eq!(Dims::new(3, 0), Err(LifeError::EmptyInput { rows: 3, cols: 0 }));
    }

    #[test]
    fn oversized_grids_are_rejected() {
        assert_eq!(
            Dims::new(usize::MAX, 2),
            Err(LifeError::Index { context: "grid cell count", index: usize::MAX, bound: MAX_CELLS })
        );
        assert_eq!(
            Dims::new(usize::MAX / 2, 3),
            Err(LifeError::Index { context: "grid cell count", index: usize::MAX, bound: MAX_CELLS })
        );
        assert_eq!(
            Dims::new(MAX_CELLS, 2),
            Err(LifeError::Index { context: "grid cell count", index: 2 * MAX_CELLS, bound: MAX_CELLS })
        );
    }

    #[test]
    fn largest_grid_is_accepted() {
        let dims = Dims::new(MAX_CELLS, 1).unwrap();
        assert_eq!(dims.len(), MAX_CELLS);
        assert!(8 * dims.len() <= u32::MAX as usize);
    }

    #[test]
    fn index_and_position_are_inverse() {
        let dims = Dims::new(3, 5).unwrap();
        assert_eq!(dims.len(), 15);
        for i in 0..dims.len() {
            let (r, c) = dims.position(i);
            assert_eq!(dims.index(r, c), i);
        }
        assert_eq!(dims.index(2, 1), 11);
    }

    #[test]
    fn offset_stays_inside_grid() {
        let dims = Dims::new(2, 2).unwrap();
        assert_eq!(dims.offset(0, 0, -1, 0), None);
        assert_eq!(dims.offset(0, 0, 0, -1), None);
        assert_eq!(dims.offset(1, 1, 1, 0), None);
        assert_eq!(dims.offset(1, 1, 0, 1), None);
        assert_eq!(dims.offset(0, 0, 1, 1), Some(3));
        assert_eq!(dims.offset(1, 0, -1, 1), Some(1));
    }
}
