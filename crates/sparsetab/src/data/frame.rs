//! Frame container and builder.
//!
//! This module provides [`Frame`] and [`FrameBuilder`].

use ndarray::ArrayView1;

use super::column::Column;
use super::error::FrameError;

/// An in-memory table of named, equal-length columns.
///
/// A frame is the input collaborator of the encoding pipeline: it provides
/// named-column, row-indexed read access and nothing more. Row order is
/// significant and preserved by every operation downstream.
///
/// # Construction
///
/// Use [`Frame::builder`]. The builder validates shape once at
/// [`FrameBuilder::build`], so a constructed frame always has at least one
/// column and all columns the same row count.
///
/// # Example
///
/// ```
/// use sparsetab::data::Frame;
/// use ndarray::array;
///
/// let frame = Frame::builder()
///     .push_categorical("proto", ["tcp", "udp", "tcp"])
///     .push_numeric("bytes", array![1.0, 2.0, 4.0].view())
///     .build()
///     .unwrap();
///
/// assert_eq!(frame.n_rows(), 3);
/// assert_eq!(frame.n_columns(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Frame {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Frame {
    /// Create a builder for frame construction.
    pub fn builder() -> FrameBuilder {
        FrameBuilder::new()
    }

    /// Number of rows.
    ///
    /// Every column has this length; the builder rejects ragged input.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.columns[0].len()
    }

    /// Number of columns.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|i| &self.columns[i])
    }

    /// Iterate over `(name, column)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// Builder for [`Frame`] construction.
///
/// Columns are appended in call order; `build` validates the shape.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl FrameBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a categorical column from raw values.
    pub fn push_categorical<S>(mut self, name: &str, values: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        self.names.push(name.to_owned());
        self.columns
            .push(Column::Categorical(values.into_iter().map(Into::into).collect()));
        self
    }

    /// Add a numeric column.
    pub fn push_numeric(mut self, name: &str, values: ArrayView1<'_, f64>) -> Self {
        self.names.push(name.to_owned());
        self.columns.push(Column::Numeric(values.to_owned()));
        self
    }

    /// Add an already-built column.
    pub fn push_column(mut self, name: &str, column: Column) -> Self {
        self.names.push(name.to_owned());
        self.columns.push(column);
        self
    }

    /// Build the frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] if:
    /// - No columns were added
    /// - Columns have inconsistent row counts
    /// - A column name appears twice
    pub fn build(self) -> Result<Frame, FrameError> {
        if self.columns.is_empty() {
            return Err(FrameError::EmptyFrame);
        }

        let n_rows = self.columns[0].len();
        for (name, col) in self.names.iter().zip(&self.columns) {
            if col.len() != n_rows {
                return Err(FrameError::ShapeMismatch {
                    column: name.clone(),
                    expected: n_rows,
                    got: col.len(),
                });
            }
        }

        for (i, name) in self.names.iter().enumerate() {
            if self.names[..i].contains(name) {
                return Err(FrameError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Frame {
            names: self.names,
            columns: self.columns,
        })
    }
}
