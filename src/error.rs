//! Error types for the marshaling layer and the multiply entry points.

use thiserror::Error;

/// Errors reported when operand shapes disagree with their declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Left and right operands of the transposed product have different widths.
    #[error("column count mismatch: left has {left} columns, right has {right} columns")]
    ColumnMismatch { left: usize, right: usize },

    /// A jagged source does not hold the declared number of rows.
    #[error("row count mismatch: declared {declared} rows, source has {actual}")]
    RowCount { declared: usize, actual: usize },

    /// A jagged source row is not exactly as wide as the declared column count.
    #[error("ragged row {row}: expected {expected} values, found {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat data handed to `Matrix::from_vec` does not fill `rows × cols`.
    #[error("data length {len} does not match {rows}x{cols}")]
    DataLength { rows: usize, cols: usize, len: usize },

    /// Standard product requested with incompatible inner dimensions.
    #[error("inner dimension mismatch: left has {left_cols} columns, right has {right_rows} rows")]
    InnerDimension { left_cols: usize, right_rows: usize },
}

/// Result type for shape-checked operations.
pub type Result<T> = std::result::Result<T, Error>;
