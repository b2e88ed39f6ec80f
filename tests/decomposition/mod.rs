//! # QR decompositions of random and structured matrices
use linmap::{DenseMatrix, MatrixMut};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Matrix with entries drawn uniformly from `[-range, range)`.
fn random_matrix(rng: &mut StdRng, ins: usize, outs: usize, range: f64) -> DenseMatrix<f64> {
    let mut a = DenseMatrix::zeros(ins, outs);
    for output in 0..outs {
        for input in 0..ins {
            a.set(input, output, rng.gen_range(-range..range)).unwrap();
        }
    }

    a
}

/// Fixed seed, so that failures reproduce.
fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}
