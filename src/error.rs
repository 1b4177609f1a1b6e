use thiserror::Error;

/// Everything that can abort a reduction. None of these are retried: the pass
/// is deterministic, so running it again cannot change the outcome.
#[derive(Debug, Error)]
pub enum ReduceError {
    #[error("b must have the same number of rows as A (A has {a_rows}, b has {b_rows})")]
    DimensionMismatch { a_rows: usize, b_rows: usize },

    #[error("Zero pivot at row {row}")]
    ZeroPivot { row: usize },

    #[error("Cannot reduce row {row} against itself")]
    SelfReduce { row: usize },

    #[error("Matrix A must have at least one row and one column")]
    Empty,

    #[error("Row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid number format: {0:?}")]
    InvalidNumberFormat(String),

    #[error("Failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReduceError>;
