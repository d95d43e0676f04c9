// hamilton-num - Hypercomplex numeric tower
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # hamilton-num
//!
//! A hypercomplex numeric tower: immutable `Complex` (rank 2) and
//! `Quaternion` (rank 4) values over an exact real scalar tower, with a
//! full set of arithmetic and transcendental operations and a coercion
//! protocol (`Number`) that lets every numeric kind - integers, big
//! integers, ratios, floats, complexes, quaternions, vectors and
//! polynomials - combine under the usual operators.
//!
//! Every value is immutable and freshly constructed by each operation,
//! so everything here is safe to share across threads. Operations either
//! return a value or fail synchronously with an [`Error`]; division by
//! zero and undefined angles are errors, never silent NaNs.

pub mod complex;
pub mod error;
pub mod polynomial;
pub mod quaternion;
pub mod real;
pub mod value;
pub mod vector;

mod functions;
mod random;

pub use complex::Complex;
pub use error::{Error, Result};
pub use polynomial::Polynomial;
pub use quaternion::Quaternion;
pub use real::Real;
pub use value::{Kind, Number};
pub use vector::Vector;

// Re-export the big-integer type for callers constructing big scalars
pub use num_bigint::BigInt;
