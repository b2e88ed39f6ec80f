//! Numerical tolerances used by the decomposition and the solvers.

use crate::data::linear_algebra::EPSILON;
use crate::data::linear_algebra::traits::Scalar;
use crate::error::{LinearAlgebraError, Result};

/// Thresholds below which values are treated as zero.
///
/// Use the builder methods to customise them.
///
/// # Example
///
/// ```
/// use linmap::config::Tolerances;
///
/// let tolerances = Tolerances::<f64>::default().with_singular(1e-12);
///
/// assert_eq!(tolerances.zero, 1e-9);
/// assert!(tolerances.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances<F> {
    /// Entries below the diagonal with at most this magnitude count as zero. The QR decomposition
    /// skips the reflection of a column whose sub-diagonal is zero in this sense, and back
    /// substitution accepts such matrices as upper triangular.
    pub zero: F,
    /// Diagonal pivots with a magnitude below this value make a triangular system singular.
    pub singular: F,
}

impl<F: Scalar> Default for Tolerances<F> {
    fn default() -> Self {
        Self {
            zero: F::from_f64(EPSILON),
            singular: F::from_f64(EPSILON),
        }
    }
}

impl<F: Scalar> Tolerances<F> {
    /// Set the threshold for "zero" entries below the diagonal.
    pub fn with_zero(mut self, zero: F) -> Self {
        self.zero = zero;
        self
    }

    /// Set the threshold for singular pivots.
    pub fn with_singular(mut self, singular: F) -> Self {
        self.singular = singular;
        self
    }

    /// Check that both tolerances are finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("zero", self.zero), ("singular", self.singular)] {
            if !value.is_finite() || value < F::zero() {
                return Err(LinearAlgebraError::InvalidTolerance {
                    name,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }
}
