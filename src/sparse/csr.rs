use std::ops::{Add, Mul, Range};

use crate::error::{LifeError, Result};
use crate::sparse::CooEntry;

/// Numeric types that can be stored as nonzeros of a `CsrMatrix`.
///
/// `Default::default()` is taken to be the additive identity.
pub trait Weight: Copy + Default + Add<Output = Self> + Mul<Output = Self> + Send + Sync {}

impl<T> Weight for T where T: Copy + Default + Add<Output = T> + Mul<Output = T> + Send + Sync {}

/// A read-only sparse matrix in compressed sparse row format.
///
/// `row_start[i]..row_start[i + 1]` indexes into `col_index` and `values` to
/// give the nonzeros of row `i`, in the order they were supplied.
#[derive(Clone, Debug, PartialEq)]
pub struct CsrMatrix<T> {
    /// Nonzero weights, grouped by row.
    values: Vec<T>,
    /// Column of each nonzero; same length as `values`.
    col_index: Vec<u32>,
    /// Row offsets; length = `row_count + 1`, last entry = nnz.
    row_start: Vec<u32>,
    /// Smallest input length `multiply` accepts (`max(col_index) + 1`).
    min_input_len: usize,
}

impl<T: Weight> CsrMatrix<T> {
    /// Build a matrix with `row_count` rows from coordinate entries.
    ///
    /// Entries are counted per row, the counts are prefix-summed into
    /// `row_start`, and each entry is then placed into its row bucket.
    /// Placement is stable, so entries that share a row keep their input order.
    pub fn from_coordinates(entries: Vec<CooEntry<T>>, row_count: usize) -> Result<Self> {
        let nnz = u32::try_from(entries.len())
            .map_err(|_| LifeError::Index { context: "nonzero count", index: entries.len(), bound: u32::MAX as usize })?;

        let mut row_start = vec![0u32; row_count + 1];
        for entry in &entries {
            let row = entry.row as usize;
            if row >= row_count {
                return Err(LifeError::Index { context: "coordinate row", index: row, bound: row_count });
            }
            row_start[row + 1] += 1;
        }
        for i in 1..row_start.len() {
            row_start[i] += row_start[i - 1];
        }
        debug_assert_eq!(row_start[row_count], nnz);

        let mut cursor = row_start[..row_count].to_vec();
        let mut col_index = vec![0u32; entries.len()];
        let mut values = vec![T::default(); entries.len()];
        for entry in entries {
            let slot = &mut cursor[entry.row as usize];
            col_index[*slot as usize] = entry.col;
            values[*slot as usize] = entry.value;
            *slot += 1;
        }

        let min_input_len = col_index.iter().max().map_or(0, |&c| c as usize + 1);

        Ok(Self { values, col_index, row_start, min_input_len })
    }

    /// Compute `A * x`.
    ///
    /// Fails with `LifeError::Index` if `x` is too short to cover every column
    /// referenced by the matrix.
    pub fn multiply<V: Copy + Into<T>>(&self, x: &[V]) -> Result<Vec<T>> {
        let mut out = vec![T::default(); self.row_count()];
        self.multiply_into(x, &mut out)?;
        Ok(out)
    }

    /// Compute `A * x` into `out`, which must have exactly `row_count` slots.
    pub fn multiply_into<V: Copy + Into<T>>(&self, x: &[V], out: &mut [T]) -> Result<()> {
        self.check_input(x.len())?;
        if out.len() != self.row_count() {
            return Err(LifeError::Shape { context: "output vector length", expected: self.row_count(), found: out.len() });
        }
        out.iter_mut().enumerate().for_each(|(i, y)| *y = self.row_dot(i, x));
        Ok(())
    }

    /// Row-parallel `A * x`. Same result as `multiply`.
    #[cfg(feature = "parallel")]
    pub fn par_multiply<V: Copy + Into<T> + Sync>(&self, x: &[V]) -> Result<Vec<T>> {
        use rayon::prelude::*;

        self.check_input(x.len())?;
        Ok((0..self.row_count()).into_par_iter().map(|i| self.row_dot(i, x)).collect())
    }

    #[inline]
    fn row_dot<V: Copy + Into<T>>(&self, row: usize, x: &[V]) -> T {
        self.row_range(row).fold(T::default(), |acc, j| {
            acc + self.values[j] * x[self.col_index[j] as usize].into()
        })
    }

    #[inline]
    fn check_input(&self, len: usize) -> Result<()> {
        if len < self.min_input_len {
            return Err(LifeError::Index { context: "input vector", index: self.min_input_len - 1, bound: len });
        }
        Ok(())
    }
}

impl<T: Copy> CsrMatrix<T> {
    /// Number of rows.
    #[inline] pub fn row_count(&self) -> usize { self.row_start.len() - 1 }

    /// Number of stored nonzeros.
    #[inline] pub fn nnz(&self) -> usize { self.values.len() }

    /// Minimum length of a vector accepted by `multiply`.
    #[inline] pub fn min_input_len(&self) -> usize { self.min_input_len }

    #[inline] pub fn values(&self) -> &[T] { &self.values }

    #[inline] pub fn col_index(&self) -> &[u32] { &self.col_index }

    #[inline] pub fn row_start(&self) -> &[u32] { &self.row_start }

    /// Range of nonzero slots belonging to `row`.
    #[inline]
    pub fn row_range(&self, row: usize) -> Range<usize> {
        self.row_start[row] as usize..self.row_start[row + 1] as usize
    }

    /// Number of nonzeros in `row`.
    #[inline] pub fn degree(&self, row: usize) -> usize { self.row_range(row).len() }

    /// Iterator over `(col, value)` pairs of `row`, in stored order.
    #[inline]
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        self.row_range(row).map(move |j| (self.col_index[j] as usize, self.values[j]))
    }

    /// Iterator over every nonzero as a coordinate entry, row by row.
    pub fn entries(&self) -> impl Iterator<Item = CooEntry<T>> + '_ {
        (0..self.row_count()).flat_map(move |i| {
            self.row_range(i).map(move |j| CooEntry::new(i as u32, self.col_index[j], self.values[j]))
        })
    }
}
