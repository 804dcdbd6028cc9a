//! The encoding pipeline: frame + declared column roles → sparse matrix.
//!
//! # Overview
//!
//! Encoding runs in three stages, each a separate type:
//!
//! 1. [`CategoryMap`] assigns every distinct value of one categorical
//!    column a dense local index.
//! 2. [`FeatureLayout`] folds the per-column local index spaces into one
//!    global feature index space, with a trailing block for numerical
//!    columns.
//! 3. [`to_csr`] assembles the (row, global column, value) triples into a
//!    [`CsrMatrix`].
//!
//! [`one_hot`] is a frame-to-frame variant that replaces categorical
//! columns by their global indices without building a matrix.
//!
//! All validation is eager: a malformed declaration fails before any
//! triple is assembled.

mod categories;
mod error;
mod layout;

pub use categories::CategoryMap;
pub use error::EncodeError;
pub use layout::FeatureLayout;

use ndarray::Array1;

use crate::data::{Column, CsrMatrix, Frame};

/// Assemble the one-hot sparse matrix for a frame.
///
/// Produces one entry of value 1.0 per (row, categorical column) pair at
/// the column's global index, then — if numerical columns are declared —
/// one entry per (row, numerical column) pair carrying the raw value,
/// zeros included. Within a row, entries follow declaration order and are
/// not sorted by column; the svmlight writer sorts per line.
///
/// # Arguments
///
/// * `frame` - The input table
/// * `cat_columns` - Names of the categorical columns, in encoding order
/// * `num_columns` - Names of the numerical columns, possibly empty
///
/// # Errors
///
/// Returns [`EncodeError`] if `cat_columns` is empty, a declared name is
/// absent from the frame, a declared column has the wrong storage kind,
/// or the frame has zero rows.
///
/// # Example
///
/// ```
/// use sparsetab::encode::to_csr;
/// use sparsetab::data::Frame;
/// use ndarray::array;
///
/// let frame = Frame::builder()
///     .push_categorical("proto", ["tcp", "udp", "tcp"])
///     .push_numeric("bytes", array![5.0, 0.0, 7.0].view())
///     .build()
///     .unwrap();
///
/// let matrix = to_csr(&frame, &["proto"], &["bytes"]).unwrap();
/// assert_eq!(matrix.n_rows(), 3);
/// // tcp=0, udp=1; numeric block starts at 2
/// assert_eq!(matrix.n_cols(), 3);
/// // the zero-valued numeric entry of row 1 is still stored
/// assert_eq!(matrix.nnz(), 6);
/// ```
pub fn to_csr(
    frame: &Frame,
    cat_columns: &[&str],
    num_columns: &[&str],
) -> Result<CsrMatrix<f64>, EncodeError> {
    let (locals, layout) = fit_columns(frame, cat_columns)?;
    let numerics = resolve_numeric(frame, num_columns)?;

    let n_rows = frame.n_rows();
    let mut triples = Vec::with_capacity(n_rows * (cat_columns.len() + num_columns.len()));
    for row in 0..n_rows {
        for (i, col_locals) in locals.iter().enumerate() {
            triples.push((row as u32, layout.global(i, col_locals[row]), 1.0));
        }
        for (j, values) in numerics.iter().enumerate() {
            triples.push((row as u32, layout.numeric_slot(j), values[row]));
        }
    }

    Ok(CsrMatrix::from_triples(
        n_rows,
        layout.n_features(num_columns.len()),
        &triples,
    ))
}

/// Replace categorical columns by their global one-hot indices.
///
/// Returns a new frame in which every column named in `cat_columns` has
/// become a numeric column of global feature indices; all other columns
/// are copied through unchanged and the column order is preserved.
/// Offsets follow the order of `cat_columns`, not frame order.
///
/// # Errors
///
/// Same conditions as [`to_csr`].
pub fn one_hot(frame: &Frame, cat_columns: &[&str]) -> Result<Frame, EncodeError> {
    let (locals, layout) = fit_columns(frame, cat_columns)?;

    let mut builder = Frame::builder();
    for (name, column) in frame.iter() {
        match cat_columns.iter().position(|c| *c == name) {
            Some(i) => {
                let globals: Array1<f64> = locals[i]
                    .iter()
                    .map(|&local| layout.global(i, local) as f64)
                    .collect();
                builder = builder.push_numeric(name, globals.view());
            }
            None => {
                builder = builder.push_column(name, column.clone());
            }
        }
    }

    // Shape already validated by the source frame
    Ok(builder.build().expect("rebuilt frame keeps its shape"))
}

/// Fit category maps and the feature layout for the declared categorical
/// columns, validating the declaration eagerly.
fn fit_columns(
    frame: &Frame,
    cat_columns: &[&str],
) -> Result<(Vec<Vec<u32>>, FeatureLayout), EncodeError> {
    if cat_columns.is_empty() {
        return Err(EncodeError::NoCategoricalColumns);
    }

    let mut locals = Vec::with_capacity(cat_columns.len());
    for name in cat_columns {
        let values = resolve_categorical(frame, name)?;
        let (col_locals, _map) = CategoryMap::fit_encode(name, values)?;
        locals.push(col_locals);
    }

    let layout = FeatureLayout::fit(&locals)?;
    Ok((locals, layout))
}

fn resolve_categorical<'a>(frame: &'a Frame, name: &str) -> Result<&'a [String], EncodeError> {
    match frame.column(name) {
        None => Err(EncodeError::ColumnNotFound(name.to_owned())),
        Some(Column::Categorical(values)) => Ok(values),
        Some(other) => Err(EncodeError::TypeMismatch {
            column: format!("{name} ({})", other.kind()),
            expected: "categorical",
        }),
    }
}

fn resolve_numeric<'a>(
    frame: &'a Frame,
    num_columns: &[&str],
) -> Result<Vec<&'a Array1<f64>>, EncodeError> {
    let mut resolved = Vec::with_capacity(num_columns.len());
    for name in num_columns {
        match frame.column(name) {
            None => return Err(EncodeError::ColumnNotFound((*name).to_owned())),
            Some(Column::Numeric(values)) => resolved.push(values),
            Some(other) => {
                return Err(EncodeError::TypeMismatch {
                    column: format!("{name} ({})", other.kind()),
                    expected: "numeric",
                })
            }
        }
    }
    Ok(resolved)
}
