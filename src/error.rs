// src/error.rs

use thiserror::Error;

/// Errors reported by matrix loading and the bounds-checked grid operations.
///
/// The `Display` text of each variant is the message printed when the
/// corresponding operation fails.
#[derive(Error, Debug)]
pub enum GridError {
    /// The input file could not be opened or read.
    #[error("could not open file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A token in the input file is not a valid integer.
    #[error("invalid integer token {token:?}")]
    ParseToken { token: String },

    /// The input ended before all expected integer tokens were read.
    #[error("truncated input: expected {expected} integer tokens, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    /// A row-major value buffer does not match the declared grid size.
    #[error("expected {expected} cell values, got {found}")]
    ValueCount { expected: usize, found: usize },

    /// A row index is outside `[0, size)`.
    #[error("row index {index} out of range for grid of size {size}")]
    RowIndex { index: usize, size: usize },

    /// A column index is outside `[0, size)`.
    #[error("column index {index} out of range for grid of size {size}")]
    ColumnIndex { index: usize, size: usize },

    /// Two grids in a binary operation have different sizes.
    #[error("grid size mismatch: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },
}
