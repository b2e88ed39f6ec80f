use approx::assert_abs_diff_eq;

use linmap::{decompose_qr, DenseMatrix, Matrix, QrDecomposition};
use linmap::data::linear_algebra::matrix::{Dual, Slice};
use linmap::data::linear_algebra::matrix::ops::{compose, copy, identity};

use super::{random_matrix, rng};
use crate::init_logging;

fn assert_valid(a: &DenseMatrix<f64>, q: &DenseMatrix<f64>, r: &DenseMatrix<f64>) {
    let (ins, outs) = a.shape();

    assert_abs_diff_eq!(compose(q, &Dual::new(q)).unwrap(), identity(outs), epsilon = 1e-9);
    for input in 0..ins {
        for output in input + 1..outs {
            assert_abs_diff_eq!(r.get(input, output).unwrap(), 0f64, epsilon = 1e-9);
        }
    }
    assert_abs_diff_eq!(compose(r, q).unwrap(), *a, epsilon = 1e-9);
}

#[test]
fn random_square() {
    init_logging();
    let mut rng = rng();

    for size in 1..8 {
        let a = random_matrix(&mut rng, size, size, 10f64);
        let (q, r) = decompose_qr(&a).unwrap();
        assert_valid(&a, &q, &r);
    }
}

#[test]
fn random_tall() {
    init_logging();
    let mut rng = rng();

    for (ins, outs) in [(1, 4), (2, 3), (3, 7), (5, 6), (6, 12)] {
        let a = random_matrix(&mut rng, ins, outs, 100f64);
        let decomposition = QrDecomposition::new(&a).unwrap();
        assert_valid(&a, decomposition.q(), decomposition.r());
    }
}

#[test]
fn slice_of_larger_matrix() {
    init_logging();
    let mut rng = rng();

    let a = random_matrix(&mut rng, 6, 6, 1f64);
    let view = Slice::new(&a, 1..4, 0..5).unwrap();
    let (q, r) = decompose_qr(&view).unwrap();

    assert_eq!(q.shape(), (5, 5));
    assert_eq!(r.shape(), (3, 5));
    assert_valid(&copy(&view).unwrap(), &q, &r);
}
