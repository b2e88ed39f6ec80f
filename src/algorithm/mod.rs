//! # Algorithms
//!
//! The decomposition and solver pipeline. Ordinary least squares decomposes its design matrix
//! with `qr`, which reflects one column at a time using `householder`, after which
//! `triangular_solve` finds the parameters by back substitution.
pub mod householder;
pub mod least_squares;
pub mod qr;
pub mod triangular_solve;
