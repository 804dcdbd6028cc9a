//! Error type for the encoding stage.

/// Errors detected while encoding a frame into the sparse feature space.
///
/// All variants describe malformed or insufficient input and are raised
/// eagerly, before any matrix is assembled.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The caller declared no categorical columns; the global index space
    /// cannot be anchored without at least one.
    #[error("no categorical columns declared")]
    NoCategoricalColumns,

    /// A declared column name is absent from the frame.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// A declared column has zero rows; category indexing is undefined
    /// for an empty domain.
    #[error("column {column} is empty")]
    EmptyColumn { column: String },

    /// A declared column's storage kind does not match its declared role.
    #[error("column {column} is not {expected}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
    },
}
