//! # Least squares estimation
//!
//! Observations are generated from known parameters, so that the estimate can be checked.
use linmap::{DenseMatrix, DenseVector, MatrixMut, VectorMut};

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Polynomial design matrix: observation `o` at `t = o` has entries `1, t, t², ...`.
fn polynomial_design(parameters: usize, observations: usize) -> DenseMatrix<f64> {
    let mut x = DenseMatrix::zeros(parameters, observations);
    for output in 0..observations {
        let t = output as f64 / observations as f64;
        for input in 0..parameters {
            x.set(input, output, t.powi(input as i32)).unwrap();
        }
    }

    x
}

/// Add `noise[o]` to every observation.
fn perturb(y: &mut DenseVector<f64>, noise: &[f64]) {
    for (index, value) in noise.iter().enumerate() {
        let current = y.data()[index];
        y.set(index, current + value).unwrap();
    }
}
