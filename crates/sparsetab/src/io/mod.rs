//! Svmlight text output.
//!
//! [`write_svmlight`] serializes an already-assembled sparse matrix to any
//! [`std::io::Write`] destination; [`dump_svmlight`] runs the whole
//! pipeline from a frame to a file on disk.

mod error;
mod svmlight;

pub use error::{DumpError, WriteError};
pub use svmlight::{dump_svmlight, write_svmlight, DumpOptions};
