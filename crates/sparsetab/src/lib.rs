//! sparsetab: one-hot encoding of tabular frames into sparse svmlight text.
//!
//! This crate converts an in-memory table with categorical and numerical
//! columns into a sparse one-hot matrix and serializes it to the
//! line-oriented svmlight format (`target col:value ...`).
//!
//! # Key Types
//!
//! - [`Frame`] / [`FrameBuilder`] - The input table
//! - [`CategoryMap`] - Distinct value → local index, per column
//! - [`FeatureLayout`] - Global feature index space across all columns
//! - [`CsrMatrix`] - The assembled sparse matrix
//! - [`DumpOptions`] - Index base, comment, query ids
//!
//! # Pipeline
//!
//! `Frame` → [`to_csr`] → [`write_svmlight`], or [`dump_svmlight`] for the
//! whole thing in one call:
//!
//! ```no_run
//! use sparsetab::{dump_svmlight, DumpOptions, Frame};
//! use ndarray::array;
//!
//! let frame = Frame::builder()
//!     .push_categorical("proto", ["tcp", "udp", "udp", "tcp", "dns", "tcp"])
//!     .push_categorical("color", ["red", "blue", "red", "green", "blue", "red"])
//!     .push_numeric("a", array![1.0, 2.0, 1.0, 1.0, 3.0, 4.0].view())
//!     .push_numeric("b", array![1.0, 4.0, 1.0, 4.0, 3.0, 4.0].view())
//!     .build()?;
//!
//! let targets = [1.0, 0.0, 1.0, 1.0, 0.0, 0.0];
//! dump_svmlight(
//!     &frame,
//!     &targets,
//!     "example.svm",
//!     &["proto", "color"],
//!     &["a", "b"],
//!     &DumpOptions::default(),
//! )?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Determinism
//!
//! Category indices are assigned in order of first appearance scanning
//! each column top to bottom, so one pipeline invocation is fully
//! deterministic. Indices are NOT stable across different inputs: reuse a
//! fitted [`CategoryMap`] when two datasets must agree.

pub mod data;
pub mod encode;
pub mod io;
pub mod testing;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Input side
pub use data::{Column, CsrMatrix, Frame, FrameBuilder, FrameError};

// Encoding pipeline
pub use encode::{one_hot, to_csr, CategoryMap, EncodeError, FeatureLayout};

// Output side
pub use io::{dump_svmlight, write_svmlight, DumpError, DumpOptions, WriteError};
