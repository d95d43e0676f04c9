// hamilton-solver - Linear systems over the numeric tower
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # hamilton-solver
//!
//! Gaussian elimination with partial pivoting over [`Number`] values.
//!
//! The solver consumes only the public arithmetic of the tower - it
//! never looks inside a complex or quaternion - so the field type can be
//! any scalar kind the tower supports. A system with no unique solution
//! is reported as the explicit [`SolveError::Singular`] variant rather
//! than a trapped fault: a failed elimination step is data, not control
//! flow.

use std::cmp::Ordering;
use std::fmt;

use hamilton_num::{Number, Real};

/// Errors from [`solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The system has no unique solution
    Singular,
    /// The coefficient matrix and right-hand side do not form a square
    /// system
    BadShape { rows: usize, rhs: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Singular => write!(f, "Singular system: no unique solution"),
            SolveError::BadShape { rows, rhs } => {
                write!(
                    f,
                    "Malformed system: {} equations against {} right-hand sides",
                    rows, rhs
                )
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Pivot magnitude of an entry. Anything the tower cannot take the norm
/// of disqualifies the row, which surfaces later as a singular system.
fn magnitude(entry: &Number) -> f64 {
    match entry.abs_secure() {
        Ok(Number::Real(r)) => r.to_f64(),
        _ => 0.0,
    }
}

/// Solve `a * x = b` for `x` by Gaussian elimination with partial
/// pivoting. Returns [`SolveError::Singular`] when no unique solution
/// exists and [`SolveError::BadShape`] when the inputs are not a square
/// system.
pub fn solve(a: &[Vec<Number>], b: &[Number]) -> Result<Vec<Number>, SolveError> {
    let n = a.len();
    if b.len() != n || a.iter().any(|row| row.len() != n) {
        return Err(SolveError::BadShape {
            rows: n,
            rhs: b.len(),
        });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Augmented rows, eliminated in place
    let mut rows: Vec<Vec<Number>> = a
        .iter()
        .zip(b.iter())
        .map(|(row, rhs)| {
            let mut out = row.clone();
            out.push(rhs.clone());
            out
        })
        .collect();

    for col in 0..n {
        // Partial pivoting: bring the largest-magnitude entry up
        let pivot_row = (col..n)
            .max_by(|&r1, &r2| {
                magnitude(&rows[r1][col])
                    .partial_cmp(&magnitude(&rows[r2][col]))
                    .unwrap_or(Ordering::Equal)
            })
            .expect("column range is never empty");
        if rows[pivot_row][col].is_zero() {
            return Err(SolveError::Singular);
        }
        rows.swap(col, pivot_row);

        for row in col + 1..n {
            let factor = rows[row][col]
                .div(&rows[col][col])
                .map_err(|_| SolveError::Singular)?;
            for idx in col..=n {
                let scaled = factor
                    .mul(&rows[col][idx])
                    .map_err(|_| SolveError::Singular)?;
                rows[row][idx] = rows[row][idx]
                    .sub(&scaled)
                    .map_err(|_| SolveError::Singular)?;
            }
        }
    }

    // Back substitution
    let mut solution = vec![Number::Real(Real::Int(0)); n];
    for col in (0..n).rev() {
        let mut acc = rows[col][n].clone();
        for idx in col + 1..n {
            let term = rows[col][idx]
                .mul(&solution[idx])
                .map_err(|_| SolveError::Singular)?;
            acc = acc.sub(&term).map_err(|_| SolveError::Singular)?;
        }
        solution[col] = acc
            .div(&rows[col][col])
            .map_err(|_| SolveError::Singular)?;
    }
    Ok(solution)
}
