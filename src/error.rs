//! # Error reporting for linear algebra operations
//!
//! Every error in this crate is a violated precondition of the called operation. They are
//! detected before (or at the moment) the offending computation would happen and returned to the
//! caller; nothing is retried or recovered from locally.
use std::fmt;

/// Shape of a matrix as `(ins, outs)`: the number of columns and rows.
pub type Shape = (usize, usize);

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinearAlgebraError>;

/// Location of a scalar inside a matrix or a vector.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Position {
    /// Entry of a matrix, addressed by input (column) and output (row).
    Entry {
        #[allow(missing_docs)]
        input: usize,
        #[allow(missing_docs)]
        output: usize,
    },
    /// Component of a vector.
    Component(usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Position::Entry { input, output } => write!(f, "(in {}, out {})", input, output),
            Position::Component(index) => write!(f, "[{}]", index),
        }
    }
}

/// A `LinearAlgebraError` is returned when an operation is called with arguments it can't work
/// with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinearAlgebraError {
    /// Two operands have shapes that don't fit together, e.g. `outs(A) != ins(B)` in a
    /// composition, or an output argument of the wrong shape.
    #[error("{operation}: shape {left:?} is incompatible with shape {right:?}")]
    ShapeMismatch {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Shape of the first operand as `(ins, outs)`.
        left: Shape,
        /// Shape of the second operand as `(ins, outs)`.
        right: Shape,
    },
    /// A vector's dimension doesn't match the matrix axis it is used with.
    #[error("{operation}: expected dimension {expected}, got {actual}")]
    DimensionMismatch {
        /// Name of the operation that was attempted.
        operation: &'static str,
        /// Dimension required by the operation.
        expected: usize,
        /// Dimension that was provided.
        actual: usize,
    },
    /// Access outside of the declared extent of a matrix, vector or view.
    #[error("index {index} out of bounds for extent {extent}")]
    OutOfBounds {
        /// The index that was accessed.
        index: Position,
        /// Shape (for matrices) or dimension (for vectors) of the accessed object.
        extent: Position,
    },
    /// A matrix that should be upper triangular has a value below the diagonal.
    #[error("matrix is not upper triangular: nonzero entry at (in {input}, out {output})")]
    NotUpperTriangular {
        #[allow(missing_docs)]
        input: usize,
        #[allow(missing_docs)]
        output: usize,
    },
    /// A diagonal pivot that has to be divided by is too close to zero.
    #[error("matrix is singular: diagonal entry {index} is numerically zero")]
    Singular {
        /// Index on the diagonal of the offending pivot.
        index: usize,
    },
    /// A map with fewer outputs than inputs was used where `outs >= ins` is required.
    #[error("map with {ins} inputs and {outs} outputs is underdetermined")]
    Underdetermined {
        #[allow(missing_docs)]
        ins: usize,
        #[allow(missing_docs)]
        outs: usize,
    },
    /// A vector with norm zero was normalized.
    #[error("{operation}: vector has zero length")]
    ZeroVector {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },
    /// An input contained NaN or an infinity, so the result would not be meaningful.
    #[error("{operation}: input contains a value that is not finite")]
    NonFinite {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },
    /// A tolerance was negative or not finite.
    #[error("tolerance `{name}` must be finite and non-negative, got {value}")]
    InvalidTolerance {
        /// Name of the tolerance field.
        name: &'static str,
        /// The rejected value, converted for reporting.
        value: f64,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn out_of_bounds_message() {
        let error = LinearAlgebraError::OutOfBounds {
            index: Position::Entry { input: 2, output: 0 },
            extent: Position::Entry { input: 2, output: 3 },
        };
        assert_eq!(
            error.to_string(),
            "index (in 2, out 0) out of bounds for extent (in 2, out 3)",
        );

        let error = LinearAlgebraError::OutOfBounds {
            index: Position::Component(5),
            extent: Position::Component(3),
        };
        assert_eq!(error.to_string(), "index [5] out of bounds for extent [3]");
    }

    #[test]
    fn shape_mismatch_message() {
        let error = LinearAlgebraError::ShapeMismatch {
            operation: "compose",
            left: (2, 3),
            right: (2, 2),
        };
        assert_eq!(error.to_string(), "compose: shape (2, 3) is incompatible with shape (2, 2)");
    }

    #[test]
    fn singular_names_index() {
        let error = LinearAlgebraError::Singular { index: 4 };
        assert!(error.to_string().contains("diagonal entry 4"));
    }

    #[test]
    fn non_finite_message() {
        let error = LinearAlgebraError::NonFinite { operation: "decompose_qr" };
        assert_eq!(error.to_string(), "decompose_qr: input contains a value that is not finite");
    }

    #[test]
    fn is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<LinearAlgebraError>();
    }
}
