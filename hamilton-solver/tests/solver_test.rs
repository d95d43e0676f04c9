// hamilton-solver - Solver integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for Gaussian elimination over the numeric tower.

use hamilton_num::Number;
use hamilton_solver::{solve, SolveError};

fn row(values: &[i64]) -> Vec<Number> {
    values.iter().map(|&v| Number::int(v)).collect()
}

#[test]
fn test_two_by_two_exact() {
    // x + y = 3, x - y = 1
    let a = vec![row(&[1, 1]), row(&[1, -1])];
    let b = row(&[3, 1]);
    assert_eq!(solve(&a, &b).unwrap(), row(&[2, 1]));
}

#[test]
fn test_three_by_three_requires_pivoting() {
    // The leading entry is zero, so the first column must pivot
    let a = vec![row(&[0, 1, 1]), row(&[2, 0, 1]), row(&[1, 1, 0])];
    let b = row(&[5, 5, 3]);
    assert_eq!(solve(&a, &b).unwrap(), row(&[1, 2, 3]));
}

#[test]
fn test_rational_solution() {
    // 2x = 1
    let a = vec![row(&[2])];
    let b = row(&[1]);
    assert_eq!(
        solve(&a, &b).unwrap(),
        vec![Number::ratio(1, 2).unwrap()]
    );
}

#[test]
fn test_complex_field() {
    // (1+i) x = 2i has the solution x = 1+i
    let a = vec![vec![Number::complex(1, 1)]];
    let b = vec![Number::complex(0, 2)];
    assert_eq!(solve(&a, &b).unwrap(), vec![Number::complex(1, 1)]);
}

#[test]
fn test_complex_system() {
    // x + y = 1+i, x - y = 1-i  =>  x = 1, y = i
    let a = vec![row(&[1, 1]), row(&[1, -1])];
    let b = vec![Number::complex(1, 1), Number::complex(1, -1)];
    assert_eq!(
        solve(&a, &b).unwrap(),
        vec![Number::int(1), Number::complex(0, 1)]
    );
}

#[test]
fn test_singular_system() {
    let a = vec![row(&[1, 2]), row(&[2, 4])];
    let b = row(&[1, 2]);
    assert_eq!(solve(&a, &b), Err(SolveError::Singular));
}

#[test]
fn test_zero_matrix_is_singular() {
    let a = vec![row(&[0, 0]), row(&[0, 0])];
    let b = row(&[0, 0]);
    assert_eq!(solve(&a, &b), Err(SolveError::Singular));
}

#[test]
fn test_bad_shapes_are_rejected() {
    let a = vec![row(&[1, 2]), row(&[3, 4])];
    let b = row(&[1]);
    assert_eq!(
        solve(&a, &b),
        Err(SolveError::BadShape { rows: 2, rhs: 1 })
    );
    let ragged = vec![row(&[1, 2]), row(&[3])];
    let b = row(&[1, 2]);
    assert!(matches!(
        solve(&ragged, &b),
        Err(SolveError::BadShape { .. })
    ));
}

#[test]
fn test_empty_system() {
    assert_eq!(solve(&[], &[]).unwrap(), Vec::<Number>::new());
}
