//! # Storing of linear maps in memory
//!
//! This module provides the data structures used to represent vectors and matrices in memory.
//! Algorithms working on them live in `algorithm`.

pub mod linear_algebra;
