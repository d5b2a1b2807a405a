use thiserror::Error;

/// Errors reported by the grid, topology, sparse-matrix and stepping code.
///
/// Nothing in the core recovers from these on its own: every failure is
/// returned to the caller, which decides whether to abort the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A grid is not rectangular, or a vector does not have the length its
    /// consumer requires.
    #[error("shape mismatch: {context}: expected {expected}, found {found}")]
    Shape { context: &'static str, expected: usize, found: usize },

    /// An index fell outside the bounds of a matrix or vector.
    #[error("index out of bounds: {context}: index {index} but bound is {bound}")]
    Index { context: &'static str, index: usize, bound: usize },

    /// Zero rows or zero columns were supplied where a grid is required.
    #[error("empty input: grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyInput { rows: usize, cols: usize },

    /// A grid text line contained something other than `0` or `1`.
    #[error("parse error on line {line}: unexpected token {token:?}")]
    Parse { line: usize, token: String },

    /// A rule string was not valid `B.../S...` notation.
    #[error("invalid rule {0:?}: expected notation like \"B3/S23\"")]
    Rule(String),
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
