//! Per-column category indexing.

use std::collections::HashMap;

use super::error::EncodeError;

/// Mapping from the distinct values of one categorical column to dense,
/// zero-based local indices.
///
/// Indices are assigned in order of first appearance during a single
/// left-to-right scan of the column: the first distinct value seen gets 0,
/// the next new value 1, and so on. This makes the assignment deterministic
/// for a given column, but two independently fitted maps over different
/// data will not agree — callers that need a consistent encoding must
/// reuse the same map object.
///
/// # Example
///
/// ```
/// use sparsetab::encode::CategoryMap;
///
/// let values: Vec<String> = ["b", "a", "b", "c"].iter().map(|s| s.to_string()).collect();
/// let (locals, map) = CategoryMap::fit_encode("letter", &values).unwrap();
///
/// assert_eq!(locals, vec![0, 1, 0, 2]); // b=0, a=1, c=2 by first appearance
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.index_of("c"), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct CategoryMap {
    index: HashMap<String, u32>,
    categories: Vec<String>,
}

impl CategoryMap {
    /// Fit a map over one column and encode it in the same scan.
    ///
    /// Returns the local index for every row, in row order, together with
    /// the fitted map. The local indices always cover exactly
    /// `[0, distinct_count - 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::EmptyColumn`] if the column has zero rows.
    pub fn fit_encode(column: &str, values: &[String]) -> Result<(Vec<u32>, Self), EncodeError> {
        if values.is_empty() {
            return Err(EncodeError::EmptyColumn {
                column: column.to_owned(),
            });
        }

        let mut map = Self {
            index: HashMap::new(),
            categories: Vec::new(),
        };
        let mut locals = Vec::with_capacity(values.len());

        for value in values {
            let local = match map.index.get(value) {
                Some(&i) => i,
                None => {
                    let i = map.categories.len() as u32;
                    map.index.insert(value.clone(), i);
                    map.categories.push(value.clone());
                    i
                }
            };
            locals.push(local);
        }

        Ok((locals, map))
    }

    /// Fit a map over one column without keeping the encoded indices.
    pub fn fit(column: &str, values: &[String]) -> Result<Self, EncodeError> {
        Self::fit_encode(column, values).map(|(_, map)| map)
    }

    /// Number of distinct categories.
    #[inline]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the map holds no categories. Never true for a fitted map.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Highest local index, i.e. `len() - 1`.
    #[inline]
    pub fn max_index(&self) -> u32 {
        debug_assert!(!self.categories.is_empty());
        (self.categories.len() - 1) as u32
    }

    /// Local index of a raw value, if it was seen during the fit.
    pub fn index_of(&self, value: &str) -> Option<u32> {
        self.index.get(value).copied()
    }

    /// Raw value for a local index.
    pub fn category(&self, local: u32) -> Option<&str> {
        self.categories.get(local as usize).map(String::as_str)
    }

    /// Distinct values in local-index order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}
