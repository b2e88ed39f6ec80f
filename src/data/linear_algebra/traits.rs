//! # Traits for elements of vectors and matrices
//!
//! The algorithms in this crate need square roots, absolute values and a notion of "close to
//! zero", so elements are floating point numbers. Anything implementing `num_traits::Float` will
//! do; in practice that is `f64` and `f32`.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::{Float, NumCast};

/// Element of a `Vector` or `Matrix` type.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Scalar: Float + Sum + Debug + Display + 'static {
    /// Convert an `f64` constant (a tolerance, a literal in a test) to this type.
    ///
    /// Falls back to the machine epsilon of the type if the value can't be represented, which
    /// only happens for types that are narrower than any sensible tolerance.
    fn from_f64(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::epsilon)
    }
}
impl<T: Float + Sum + Debug + Display + 'static> Scalar for T {
}
