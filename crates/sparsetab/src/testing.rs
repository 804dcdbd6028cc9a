//! Deterministic synthetic frames for tests and benchmarks.

use ndarray::Array1;
use rand::prelude::*;

use crate::data::Frame;

/// Generate a random categorical column drawing from `n_distinct` values.
///
/// Values look like `v0`, `v1`, ... Sampling is uniform, so for small row
/// counts not every value is guaranteed to appear.
pub fn random_categorical(rows: usize, n_distinct: usize, seed: u64) -> Vec<String> {
    assert!(n_distinct > 0);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| format!("v{}", rng.gen_range(0..n_distinct)))
        .collect()
}

/// Generate a random numeric column with values uniform in `[min, max]`.
pub fn random_numeric(rows: usize, seed: u64, min: f64, max: f64) -> Array1<f64> {
    assert!(max >= min);
    let mut rng = StdRng::seed_from_u64(seed);
    let width = max - min;
    (0..rows).map(|_| min + rng.gen::<f64>() * width).collect()
}

/// Generate random 0/1 targets, one per row.
pub fn random_targets(rows: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|_| if rng.gen::<bool>() { 1.0 } else { 0.0 })
        .collect()
}

/// Build a random frame with `n_cat` categorical columns (named `c0`,
/// `c1`, ...) and `n_num` numeric columns (named `x0`, `x1`, ...).
///
/// Each column gets its own seed derived from `seed`, so frames are
/// reproducible across runs.
pub fn random_frame(rows: usize, n_cat: usize, n_num: usize, seed: u64) -> Frame {
    assert!(rows > 0 && n_cat > 0);

    let mut builder = Frame::builder();
    for i in 0..n_cat {
        let values = random_categorical(rows, 2 + i * 3, seed.wrapping_add(i as u64));
        builder = builder.push_categorical(&format!("c{i}"), values);
    }
    for j in 0..n_num {
        let values = random_numeric(rows, seed.wrapping_add(1000 + j as u64), -10.0, 10.0);
        builder = builder.push_numeric(&format!("x{j}"), values.view());
    }
    builder.build().expect("generated columns share the row count")
}

/// Names of the categorical columns produced by [`random_frame`].
pub fn cat_names(n_cat: usize) -> Vec<String> {
    (0..n_cat).map(|i| format!("c{i}")).collect()
}

/// Names of the numeric columns produced by [`random_frame`].
pub fn num_names(n_num: usize) -> Vec<String> {
    (0..n_num).map(|j| format!("x{j}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_reproducible() {
        let a = random_frame(20, 2, 1, 42);
        let b = random_frame(20, 2, 1, 42);

        assert_eq!(a.n_rows(), 20);
        assert_eq!(a.names(), b.names());
        for (name, _) in a.iter() {
            match (a.column(name).unwrap(), b.column(name).unwrap()) {
                (
                    crate::data::Column::Categorical(x),
                    crate::data::Column::Categorical(y),
                ) => assert_eq!(x, y),
                (crate::data::Column::Numeric(x), crate::data::Column::Numeric(y)) => {
                    assert_eq!(x, y)
                }
                _ => panic!("column kinds diverged"),
            }
        }
    }
}
