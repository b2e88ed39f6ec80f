//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size.
use std::fmt::{self, Display};

use approx::{AbsDiffEq, RelativeEq};

use crate::data::linear_algebra::traits::Scalar;
use crate::data::linear_algebra::vector::{check_component, Vector, VectorMut};
use crate::error::Result;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
}

impl<F: Scalar> Dense<F> {
    /// Create a vector of zero's of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self { data: vec![F::zero(); dimension] }
    }

    /// Create a `DenseVector` from the provided data.
    ///
    /// The dimension of the vector is the length of `data`.
    pub fn new(data: Vec<F>) -> Self {
        Self { data }
    }

    /// Copy any vector into dense storage.
    pub fn from_vector<V: Vector<F = F> + ?Sized>(vector: &V) -> Result<Self> {
        let data = (0..vector.dimension())
            .map(|index| vector.get(index))
            .collect::<Result<_>>()?;

        Ok(Self { data })
    }

    /// Values of this vector.
    pub fn data(&self) -> &[F] {
        &self.data
    }

    /// Take the values out of this vector.
    pub fn into_inner(self) -> Vec<F> {
        self.data
    }
}

impl<F: Scalar> Vector for Dense<F> {
    type F = F;

    fn dimension(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Result<F> {
        check_component(self.dimension(), index)?;

        Ok(self.data[index])
    }
}

impl<F: Scalar> VectorMut for Dense<F> {
    fn set(&mut self, index: usize, value: F) -> Result<()> {
        check_component(self.dimension(), index)?;

        self.data[index] = value;
        Ok(())
    }
}

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.data {
            writeln!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<F: Scalar + AbsDiffEq<Epsilon = F>> AbsDiffEq for Dense<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.data.len() == other.data.len()
            && self.data.iter().zip(&other.data).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<F: Scalar + RelativeEq<Epsilon = F>> RelativeEq for Dense<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.data.len() == other.data.len()
            && self.data.iter()
                .zip(&other.data)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
