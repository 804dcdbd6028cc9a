//! Error type for frame construction.

/// Errors that can occur when building a [`Frame`](super::Frame).
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The builder was given no columns.
    #[error("frame must have at least one column")]
    EmptyFrame,

    /// A column's row count disagrees with the first column's.
    #[error("column {column} has {got} rows, expected {expected}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    /// Two columns were added under the same name.
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
}
