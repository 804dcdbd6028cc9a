//! Svmlight text serialization.
//!
//! Svmlight is a line-oriented sparse text format, one sample per line:
//!
//! ```text
//! # optional comment
//! <target> [qid:<id>] <col>:<value> <col>:<value> ...
//! ```
//!
//! Targets are written with six decimal places, feature values in
//! scientific notation with enough digits to round-trip an `f64` exactly.
//! Feature pairs are sorted by ascending column index within each line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bon::Builder;

use super::error::{DumpError, WriteError};
use crate::data::{CsrMatrix, Frame};
use crate::encode;

/// Options for svmlight output.
///
/// # Example
///
/// ```
/// use sparsetab::io::DumpOptions;
///
/// // Defaults: zero-based column indices, no comment, no query ids
/// let options = DumpOptions::default();
/// assert!(options.zero_based);
///
/// // One-based indices with a header comment
/// let options = DumpOptions::builder()
///     .zero_based(false)
///     .comment("exported by sparsetab".to_string())
///     .build();
/// assert!(!options.zero_based);
/// ```
#[derive(Clone, Debug, Builder)]
#[builder(derive(Clone, Debug))]
pub struct DumpOptions {
    /// Write zero-based column indices (`true`, the default) or one-based
    /// (`false`).
    #[builder(default = true)]
    pub zero_based: bool,

    /// Optional comment emitted before the data, each line prefixed `# `.
    pub comment: Option<String>,

    /// Optional per-row query ids, written as `qid:<id>` after the target.
    pub query_ids: Option<Vec<u64>>,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Serialize a sparse matrix plus target vector to svmlight text.
///
/// Rows are written in increasing row order. Within each line the feature
/// pairs are sorted by ascending column index regardless of the order they
/// are stored in the matrix.
///
/// # Errors
///
/// Returns [`WriteError`] if the target or query-id vector length does not
/// match the matrix row count (checked before any byte is written), or if
/// the destination fails.
pub fn write_svmlight<W: Write>(
    matrix: &CsrMatrix<f64>,
    targets: &[f64],
    mut out: W,
    options: &DumpOptions,
) -> Result<(), WriteError> {
    validate(matrix, targets, options)?;

    if let Some(comment) = &options.comment {
        for line in comment.lines() {
            writeln!(out, "# {line}")?;
        }
    }

    let base: usize = if options.zero_based { 0 } else { 1 };
    let mut pairs: Vec<(usize, f64)> = Vec::new();

    for row in 0..matrix.n_rows() {
        pairs.clear();
        pairs.extend(matrix.row(row));
        pairs.sort_unstable_by_key(|&(col, _)| col);

        write!(out, "{:.6}", targets[row])?;
        if let Some(qids) = &options.query_ids {
            write!(out, " qid:{}", qids[row])?;
        }
        for &(col, value) in &pairs {
            write!(out, " {}:{:.16e}", col + base, value)?;
        }
        out.write_all(b"\n")?;
    }

    Ok(())
}

/// Encode a frame and write it to an svmlight file in one step.
///
/// This is the end-to-end pipeline: categorical indexing, global layout,
/// matrix assembly, then serialization through a buffered writer. All
/// validation happens before the file is created, so a failed dump never
/// leaves a partial file behind.
///
/// # Arguments
///
/// * `frame` - The input table
/// * `targets` - One target value per row, written first on each line
/// * `path` - Destination file, created or truncated
/// * `cat_columns` - Names of the categorical columns, in encoding order
/// * `num_columns` - Names of the numerical columns, possibly empty
/// * `options` - Index base, comment, query ids
///
/// # Errors
///
/// Returns [`DumpError::Encode`] for a malformed declaration and
/// [`DumpError::Write`] for length mismatches or I/O failure.
pub fn dump_svmlight<P: AsRef<Path>>(
    frame: &Frame,
    targets: &[f64],
    path: P,
    cat_columns: &[&str],
    num_columns: &[&str],
    options: &DumpOptions,
) -> Result<(), DumpError> {
    let matrix = encode::to_csr(frame, cat_columns, num_columns)?;
    validate(&matrix, targets, options).map_err(DumpError::Write)?;

    let file = File::create(path).map_err(WriteError::Io)?;
    let mut out = BufWriter::new(file);
    write_svmlight(&matrix, targets, &mut out, options)?;
    out.flush().map_err(WriteError::Io)?;
    Ok(())
}

fn validate(
    matrix: &CsrMatrix<f64>,
    targets: &[f64],
    options: &DumpOptions,
) -> Result<(), WriteError> {
    if targets.len() != matrix.n_rows() {
        return Err(WriteError::TargetLengthMismatch {
            expected: matrix.n_rows(),
            got: targets.len(),
        });
    }
    if let Some(qids) = &options.query_ids {
        if qids.len() != matrix.n_rows() {
            return Err(WriteError::QueryIdLengthMismatch {
                expected: matrix.n_rows(),
                got: qids.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_matrix() -> CsrMatrix<f64> {
        // Row 0: entries out of column order on purpose
        CsrMatrix::from_triples(2, 4, &[(0, 2, 1.0), (0, 0, 1.0), (1, 1, 1.0), (1, 3, 2.5)])
    }

    fn write_to_string(
        matrix: &CsrMatrix<f64>,
        targets: &[f64],
        options: &DumpOptions,
    ) -> String {
        let mut buf = Vec::new();
        write_svmlight(matrix, targets, &mut buf, options).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lines_and_target_format() {
        let text = write_to_string(&tiny_matrix(), &[1.0, 0.0], &DumpOptions::default());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1.000000 "));
        assert!(lines[1].starts_with("0.000000 "));
    }

    #[test]
    fn pairs_sorted_by_column() {
        let text = write_to_string(&tiny_matrix(), &[1.0, 0.0], &DumpOptions::default());
        let first = text.lines().next().unwrap();

        // Stored order was 2 then 0; the line must come out 0 then 2
        let cols: Vec<usize> = first
            .split_whitespace()
            .skip(1)
            .map(|tok| tok.split(':').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(cols, vec![0, 2]);
    }

    #[test]
    fn one_based_shifts_every_index() {
        let zero = write_to_string(&tiny_matrix(), &[1.0, 0.0], &DumpOptions::default());
        let one = write_to_string(
            &tiny_matrix(),
            &[1.0, 0.0],
            &DumpOptions::builder().zero_based(false).build(),
        );

        for (z_line, o_line) in zero.lines().zip(one.lines()) {
            let z_cols: Vec<usize> = z_line
                .split_whitespace()
                .skip(1)
                .map(|tok| tok.split(':').next().unwrap().parse().unwrap())
                .collect();
            let o_cols: Vec<usize> = o_line
                .split_whitespace()
                .skip(1)
                .map(|tok| tok.split(':').next().unwrap().parse().unwrap())
                .collect();
            let shifted: Vec<usize> = z_cols.iter().map(|c| c + 1).collect();
            assert_eq!(o_cols, shifted);

            // targets and values untouched
            let strip = |line: &str| -> Vec<String> {
                line.split_whitespace()
                    .map(|tok| match tok.split_once(':') {
                        Some((_, val)) => val.to_string(),
                        None => tok.to_string(),
                    })
                    .collect()
            };
            assert_eq!(strip(z_line), strip(o_line));
        }
    }

    #[test]
    fn values_round_trip() {
        let matrix = CsrMatrix::from_triples(1, 2, &[(0, 0, 0.1), (0, 1, 1.0 / 3.0)]);
        let text = write_to_string(&matrix, &[1.0], &DumpOptions::default());

        let parsed: Vec<f64> = text
            .lines()
            .next()
            .unwrap()
            .split_whitespace()
            .skip(1)
            .map(|tok| tok.split(':').nth(1).unwrap().parse().unwrap())
            .collect();
        assert_eq!(parsed, vec![0.1, 1.0 / 3.0]);
    }

    #[test]
    fn comment_lines_prefixed() {
        let options = DumpOptions::builder()
            .comment("first\nsecond".to_string())
            .build();
        let text = write_to_string(&tiny_matrix(), &[1.0, 0.0], &options);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "# first");
        assert_eq!(lines[1], "# second");
        assert!(lines[2].starts_with("1.000000 "));
    }

    #[test]
    fn query_ids_after_target() {
        let options = DumpOptions::builder().query_ids(vec![7, 8]).build();
        let text = write_to_string(&tiny_matrix(), &[1.0, 0.0], &options);

        let first = text.lines().next().unwrap();
        let mut tokens = first.split_whitespace();
        assert_eq!(tokens.next(), Some("1.000000"));
        assert_eq!(tokens.next(), Some("qid:7"));
    }

    #[test]
    fn target_length_mismatch() {
        let mut buf = Vec::new();
        let result = write_svmlight(&tiny_matrix(), &[1.0], &mut buf, &DumpOptions::default());

        assert!(matches!(
            result,
            Err(WriteError::TargetLengthMismatch { expected: 2, got: 1 })
        ));
        // nothing was written
        assert!(buf.is_empty());
    }

    #[test]
    fn query_id_length_mismatch() {
        let options = DumpOptions::builder().query_ids(vec![7]).build();
        let mut buf = Vec::new();
        let result = write_svmlight(&tiny_matrix(), &[1.0, 0.0], &mut buf, &options);

        assert!(matches!(
            result,
            Err(WriteError::QueryIdLengthMismatch { expected: 2, got: 1 })
        ));
        assert!(buf.is_empty());
    }
}
