//! Global feature index space allocation.

use super::error::EncodeError;

/// Partition of the global feature index space across categorical columns
/// plus a trailing block for numerical columns.
///
/// The layout is a pure fold over the encoded local-index columns, computed
/// once before matrix assembly: column 0 keeps its local indices unchanged,
/// and every later column is shifted by the running sum of the *maximum
/// local index observed* in each preceding column.
///
/// Note the running sum accumulates maxima, not distinct counts. With
/// contiguous local indices from [`CategoryMap`](super::CategoryMap) the
/// two coincide at `count - 1` per column, which means adjacent categorical
/// ranges share one boundary index. Existing consumers of the output depend
/// on these exact offsets, so the formula is load-bearing; callers that
/// need fully disjoint one-hot blocks must not rely on the boundary index.
///
/// The numerical block starts strictly after the categorical space:
/// `numeric_start = highest categorical global index + 1`. Numerical column
/// `j` (in declared order) occupies global column `numeric_start + j` for
/// every row.
#[derive(Debug, Clone)]
pub struct FeatureLayout {
    /// Global offset added to each categorical column's local indices.
    offsets: Vec<u32>,
    /// Maximum local index observed per categorical column.
    max_locals: Vec<u32>,
    /// First global index of the numerical block.
    numeric_start: u32,
}

impl FeatureLayout {
    /// Compute the layout from per-column local-index sequences.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::NoCategoricalColumns`] if `local_columns` is empty;
    ///   the global space cannot be anchored without at least one
    ///   categorical column.
    /// - [`EncodeError::EmptyColumn`] if any column has zero rows.
    pub fn fit(local_columns: &[Vec<u32>]) -> Result<Self, EncodeError> {
        if local_columns.is_empty() {
            return Err(EncodeError::NoCategoricalColumns);
        }

        let mut max_locals = Vec::with_capacity(local_columns.len());
        for (i, locals) in local_columns.iter().enumerate() {
            let max = locals.iter().copied().max().ok_or_else(|| {
                EncodeError::EmptyColumn {
                    column: format!("categorical column {i}"),
                }
            })?;
            max_locals.push(max);
        }

        let mut offsets = Vec::with_capacity(local_columns.len());
        let mut running = 0u32;
        for &max in &max_locals {
            offsets.push(running);
            running += max;
        }

        // `running` is now the highest global categorical index
        let numeric_start = running + 1;

        Ok(Self {
            offsets,
            max_locals,
            numeric_start,
        })
    }

    /// Number of categorical columns in the layout.
    #[inline]
    pub fn n_cat_columns(&self) -> usize {
        self.offsets.len()
    }

    /// Global offset of a categorical column.
    #[inline]
    pub fn offset(&self, col: usize) -> u32 {
        self.offsets[col]
    }

    /// Global index for a local index of a categorical column.
    #[inline]
    pub fn global(&self, col: usize, local: u32) -> u32 {
        debug_assert!(
            local <= self.max_locals[col],
            "local index {} exceeds fitted maximum for column {}",
            local,
            col
        );
        self.offsets[col] + local
    }

    /// First global index of the numerical block.
    ///
    /// Strictly greater than every categorical global index.
    #[inline]
    pub fn numeric_start(&self) -> u32 {
        self.numeric_start
    }

    /// Global index of the `j`-th declared numerical column.
    #[inline]
    pub fn numeric_slot(&self, j: usize) -> u32 {
        self.numeric_start + j as u32
    }

    /// Total width of the feature space given the declared numerical
    /// column count.
    ///
    /// With no numerical columns this is the width of the categorical
    /// space alone.
    #[inline]
    pub fn n_features(&self, n_num_columns: usize) -> usize {
        self.numeric_start as usize + n_num_columns
    }
}
