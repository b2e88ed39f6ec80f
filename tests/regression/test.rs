use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use linmap::{
    ordinary_least_squares,
    DenseMatrix,
    DenseVector,
    LinearAlgebraError,
    Matrix,
    QrDecomposition,
    Vector,
};
use linmap::data::linear_algebra::matrix::Dual;
use linmap::data::linear_algebra::matrix::ops::apply_to_vector;

use super::{perturb, polynomial_design};
use crate::init_logging;

#[test]
fn recovers_exact_parameters() {
    init_logging();

    let x = polynomial_design(3, 10);
    let theta = DenseVector::new(vec![1.5f64, -2f64, 0.25f64]);
    let y = apply_to_vector(&x, &theta).unwrap();

    let estimate = ordinary_least_squares(&x, &y).unwrap();
    assert_abs_diff_eq!(estimate, theta, epsilon = 1e-9);
}

#[test]
fn residual_is_orthogonal_to_design() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(42);

    let x = polynomial_design(2, 8);
    let mut y = apply_to_vector(&x, &DenseVector::new(vec![3f64, 1f64])).unwrap();
    let noise = (0..8).map(|_| rng.gen_range(-0.1f64..0.1f64)).collect::<Vec<_>>();
    perturb(&mut y, &noise);

    let estimate = ordinary_least_squares(&x, &y).unwrap();
    let fitted = apply_to_vector(&x, &estimate).unwrap();
    let residual = DenseVector::new(
        (0..y.dimension()).map(|o| y.get(o).unwrap() - fitted.get(o).unwrap()).collect(),
    );

    // Normal equation: Xᵗ·(y - X·θ) = 0
    let gradient = apply_to_vector(&Dual::new(&x), &residual).unwrap();
    assert_abs_diff_eq!(gradient, DenseVector::zeros(2), epsilon = 1e-9);

    // Close to the parameters without noise
    assert_abs_diff_eq!(estimate.get(0).unwrap(), 3f64, epsilon = 0.3);
    assert_abs_diff_eq!(estimate.get(1).unwrap(), 1f64, epsilon = 0.5);
}

#[test]
fn one_decomposition_many_observations() {
    init_logging();

    let x = polynomial_design(2, 5);
    let decomposition = QrDecomposition::new(&x).unwrap();
    assert_eq!(decomposition.q().shape(), (5, 5));

    for (a, b) in [(0f64, 1f64), (2f64, -1f64), (-4f64, 0.5f64)] {
        let theta = DenseVector::new(vec![a, b]);
        let y = apply_to_vector(&x, &theta).unwrap();
        assert_abs_diff_eq!(decomposition.solve_least_squares(&y).unwrap(), theta, epsilon = 1e-9);
    }
}

#[test]
fn collinear_design() {
    init_logging();

    let x = DenseMatrix::from_data(vec![
        vec![1f64, 1f64],
        vec![1f64, 1f64],
        vec![1f64, 1f64],
    ]).unwrap();
    let y = DenseVector::new(vec![1f64, 2f64, 3f64]);

    assert!(matches!(ordinary_least_squares(&x, &y), Err(LinearAlgebraError::Singular { .. })));
}
