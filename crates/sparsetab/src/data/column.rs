//! Column storage for [`Frame`](super::Frame).

use ndarray::Array1;

/// A single named column's storage.
///
/// Frames hold two kinds of columns: categorical columns store their raw
/// string values, numeric columns store `f64` values. Which columns take
/// part in an encoding, and in what role, is declared by the caller at the
/// encoding entry points; the storage kind only constrains which roles a
/// column can legally play.
#[derive(Debug, Clone)]
pub enum Column {
    /// Raw categorical values, one per row.
    Categorical(Vec<String>),

    /// Numeric values, one per row.
    Numeric(Array1<f64>),
}

impl Column {
    /// Number of rows in this column.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Column::Categorical(values) => values.len(),
            Column::Numeric(values) => values.len(),
        }
    }

    /// Whether the column has zero rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if this column stores categorical values.
    #[inline]
    pub fn is_categorical(&self) -> bool {
        matches!(self, Column::Categorical(_))
    }

    /// Returns true if this column stores numeric values.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }

    /// Short name of the storage kind, for error messages.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Column::Categorical(_) => "categorical",
            Column::Numeric(_) => "numeric",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn len_and_kind() {
        let cat = Column::Categorical(vec!["a".into(), "b".into()]);
        assert_eq!(cat.len(), 2);
        assert!(cat.is_categorical());
        assert!(!cat.is_numeric());

        let num = Column::Numeric(array![1.0, 2.0, 3.0]);
        assert_eq!(num.len(), 3);
        assert!(num.is_numeric());
        assert!(!num.is_empty());
    }

    #[test]
    fn empty_column() {
        let cat = Column::Categorical(Vec::new());
        assert!(cat.is_empty());
    }
}
