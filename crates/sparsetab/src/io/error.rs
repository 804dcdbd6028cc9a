//! Error types for svmlight serialization.

use std::io;

use crate::encode::EncodeError;

/// Errors that can occur while writing a sparse matrix to svmlight text.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The destination rejected writes.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The target vector length does not match the matrix row count.
    #[error("target vector has {got} values, expected {expected} (one per row)")]
    TargetLengthMismatch { expected: usize, got: usize },

    /// The query-id vector length does not match the matrix row count.
    #[error("query id vector has {got} values, expected {expected} (one per row)")]
    QueryIdLengthMismatch { expected: usize, got: usize },
}

/// Errors surfaced by the end-to-end dump pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// Encoding the frame into the sparse feature space failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Serializing the matrix failed.
    #[error(transparent)]
    Write(#[from] WriteError),
}
