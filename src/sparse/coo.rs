/// One nonzero of a sparse matrix in coordinate form.
///
/// For a neighbor matrix, `row` is the cell whose neighbors are being counted
/// and `col` is the neighbor contributing `value` to that count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CooEntry<T> {
    pub row: u32,
    pub col: u32,
    pub value: T,
}

impl<T> CooEntry<T> {
    #[inline]
    pub fn new(row: u32, col: u32, value: T) -> Self {
        Self { row, col, value }
    }
}
