// hamilton-num - Quaternion integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for Hamilton's table, the non-commutative product,
//! norms, division, the unreal-decomposition transcendentals and
//! reduction.

use std::f64::consts::{FRAC_PI_3, PI};

use hamilton_num::{Complex, Error, Number, Quaternion};

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

macro_rules! assert_close4 {
    ($q:expr, $re:expr, $i:expr, $j:expr, $k:expr) => {
        let q = $q;
        assert!(
            approx(q.real().to_f64(), $re, 1e-9)
                && approx(q.i().to_f64(), $i, 1e-9)
                && approx(q.j().to_f64(), $j, 1e-9)
                && approx(q.k().to_f64(), $k, 1e-9),
            "Expected ({} i: {} j: {} k: {}), got {}",
            $re,
            $i,
            $j,
            $k,
            q
        );
    };
}

// =============================================================================
// Hamilton's multiplication table (exact over integer units)
// =============================================================================

#[test]
fn test_squares_of_units() {
    let minus_one = Quaternion::from_real(-1);
    assert_eq!(Quaternion::unit_i().mul(&Quaternion::unit_i()), minus_one);
    assert_eq!(Quaternion::unit_j().mul(&Quaternion::unit_j()), minus_one);
    assert_eq!(Quaternion::unit_k().mul(&Quaternion::unit_k()), minus_one);
}

#[test]
fn test_cyclic_products() {
    assert_eq!(
        Quaternion::unit_i().mul(&Quaternion::unit_j()),
        Quaternion::unit_k()
    );
    assert_eq!(
        Quaternion::unit_j().mul(&Quaternion::unit_k()),
        Quaternion::unit_i()
    );
    assert_eq!(
        Quaternion::unit_k().mul(&Quaternion::unit_i()),
        Quaternion::unit_j()
    );
}

#[test]
fn test_reversed_products_negate() {
    assert_eq!(
        Quaternion::unit_j().mul(&Quaternion::unit_i()),
        Quaternion::unit_k().neg()
    );
    assert_eq!(
        Quaternion::unit_k().mul(&Quaternion::unit_j()),
        Quaternion::unit_i().neg()
    );
    assert_eq!(
        Quaternion::unit_i().mul(&Quaternion::unit_k()),
        Quaternion::unit_j().neg()
    );
}

#[test]
fn test_multiplication_is_not_commutative() {
    let p = Quaternion::new(1, 2, 3, 4);
    let q = Quaternion::new(4, -3, 2, -1);
    assert_ne!(p.mul(&q), q.mul(&p));
}

// =============================================================================
// Conjugation, norms, division
// =============================================================================

#[test]
fn test_conjugate_embeds_squared_norm() {
    let q = Quaternion::new(1, 2, 3, 4);
    assert_eq!(q.squared_norm().to_f64(), 30.0);
    assert_eq!(q.mul(&q.conjugate()), Quaternion::from_real(30));
    assert_eq!(q.conjugate().mul(&q), Quaternion::from_real(30));
}

#[test]
fn test_abs() {
    assert!(approx(
        Quaternion::new(1, 1, 1, 1).abs().to_f64(),
        2.0,
        1e-12
    ));
    assert_eq!(Quaternion::zero().abs().to_f64(), 0.0);
}

#[test]
fn test_abs_secure_avoids_overflow() {
    let q = Quaternion::new(1e200, 1e200, 1e200, 1e200);
    assert!(q.abs().to_f64().is_infinite());
    assert!(approx(q.abs_secure().to_f64() / 1e200, 2.0, 1e-12));
}

#[test]
fn test_division_by_self_is_one_exactly() {
    let q = Quaternion::new(1, 2, 3, 4);
    assert_eq!(q.div(&q).unwrap(), Quaternion::one());
}

#[test]
fn test_reciprocal_is_sided_correctly() {
    let q = Quaternion::new(1, 2, 3, 4);
    let inv = q.reciprocal().unwrap();
    assert_eq!(q.mul(&inv), Quaternion::one());
    assert_eq!(inv.mul(&q), Quaternion::one());
}

#[test]
fn test_division_preserves_operand_order() {
    let p = Quaternion::new(1, 1, 0, 0);
    let q = Quaternion::new(1, 0, 1, 0);
    // p / q = p * q^-1, which differs from q^-1 * p
    let right = p.mul(&q.reciprocal().unwrap());
    assert_eq!(p.div(&q).unwrap(), right);
    let left = q.reciprocal().unwrap().mul(&p);
    assert_ne!(right, left);
}

#[test]
fn test_division_by_zero() {
    let q = Quaternion::new(1, 2, 3, 4);
    assert_eq!(q.div(&Quaternion::zero()), Err(Error::DivisionByZero));
    assert_eq!(Quaternion::zero().reciprocal(), Err(Error::DivisionByZero));
}

// =============================================================================
// Transcendental functions via the unreal decomposition
// =============================================================================

#[test]
fn test_exp_of_real_quaternion_is_real() {
    let q = Quaternion::from_real(1).exp();
    assert_close4!(q, std::f64::consts::E, 0.0, 0.0, 0.0);
}

#[test]
fn test_exp_matches_complex_embedding() {
    // A quaternion with only the i axis populated behaves exactly like
    // the complex number with the same pair.
    let q = Quaternion::new(1, 2, 0, 0).exp();
    let z = Complex::new(1, 2).exp();
    assert_close4!(q, z.real().to_f64(), z.imaginary().to_f64(), 0.0, 0.0);
}

#[test]
fn test_exp_distributes_along_the_unreal_direction() {
    // exp(q) = e^re (cos|v| + sin|v| v/|v|)
    let q = Quaternion::new(0.5, 1.0, 2.0, -2.0);
    let vn: f64 = 3.0;
    let e = 0.5f64.exp();
    let s = e * vn.sin() / vn;
    assert_close4!(q.exp(), e * vn.cos(), s, 2.0 * s, -2.0 * s);
}

#[test]
fn test_exp_ln_round_trip() {
    let q = Quaternion::new(0.7, -1.2, 0.4, 2.0);
    let back = q.ln().unwrap().exp();
    assert_close4!(back, 0.7, -1.2, 0.4, 2.0);
}

#[test]
fn test_ln_of_zero_is_domain_error() {
    assert!(matches!(
        Quaternion::zero().ln(),
        Err(Error::DomainError { .. })
    ));
}

#[test]
fn test_sqrt_squares_back() {
    let q = Quaternion::new(1, 2, 3, 4);
    let r = q.sqrt();
    assert_close4!(r.mul(&r), 1.0, 2.0, 3.0, 4.0);
}

#[test]
fn test_sqrt_of_negative_real_lands_on_the_i_axis() {
    // The unreal direction is arbitrary in the limit; the i axis is
    // used.
    assert_close4!(Quaternion::from_real(-4).sqrt(), 0.0, 2.0, 0.0, 0.0);
}

#[test]
fn test_trig_matches_complex_embedding() {
    let q = Quaternion::new(0.5, -1.5, 0, 0);
    let z = Complex::new(0.5, -1.5);
    for (qv, zv) in [
        (q.cos(), z.cos()),
        (q.sin(), z.sin()),
        (q.tan(), z.tan()),
        (q.cosh(), z.cosh()),
        (q.sinh(), z.sinh()),
        (q.tanh(), z.tanh()),
        (q.arcsin(), z.arcsin()),
        (q.arccos(), z.arccos()),
        (q.arctan(), z.arctan()),
        (q.arsinh(), z.arsinh()),
        (q.arccosh(), z.arccosh()),
        (q.artanh(), z.artanh()),
    ] {
        assert_close4!(qv, zv.real().to_f64(), zv.imaginary().to_f64(), 0.0, 0.0);
    }
}

#[test]
fn test_arcsin_round_trip() {
    let q = Quaternion::new(0.3, 0.2, -0.4, 0.1);
    let back = q.arcsin().sin();
    assert_close4!(back, 0.3, 0.2, -0.4, 0.1);
}

#[test]
fn test_raised_to_matches_exp_ln() {
    // q^3 agrees with exp(3 ln q)
    for q in [
        Quaternion::from_real(1),
        Quaternion::new(1, 1, 0, 0),
        Quaternion::new(2, -1, 3, 0.5),
    ] {
        let direct = q.raised_to_integer(3).unwrap();
        let three = Number::int(3);
        let via_exp = three
            .mul(&Number::Quaternion(q.clone()).ln().unwrap())
            .unwrap()
            .exp()
            .unwrap();
        match via_exp {
            Number::Quaternion(e) => {
                assert!(approx(e.real().to_f64(), direct.real().to_f64(), 1e-6));
                assert!(approx(e.i().to_f64(), direct.i().to_f64(), 1e-6));
                assert!(approx(e.j().to_f64(), direct.j().to_f64(), 1e-6));
                assert!(approx(e.k().to_f64(), direct.k().to_f64(), 1e-6));
            }
            other => panic!("expected a quaternion, got {}", other),
        }
    }
}

#[test]
fn test_integer_powers() {
    let q = Quaternion::new(1, 1, 0, 0);
    // (1+i)^4 = -4 inside the quaternions as well
    assert_eq!(q.raised_to_integer(4).unwrap(), Quaternion::from_real(-4));
    assert_eq!(q.raised_to_integer(0).unwrap(), Quaternion::one());
    assert_eq!(
        Quaternion::zero().raised_to_integer(-2),
        Err(Error::DivisionByZero)
    );
    // q^-1 * q^1 = 1
    let inv = q.raised_to_integer(-1).unwrap();
    assert_eq!(inv.mul(&q), Quaternion::one());
}

// =============================================================================
// Angle, reduction, display, cross-kind equality
// =============================================================================

#[test]
fn test_angle() {
    // abs = 2, real = 1, so the angle is arccos(1/2) = pi/3
    let q = Quaternion::new(1, 1, 1, 1);
    assert!(approx(q.angle().unwrap().to_f64(), FRAC_PI_3, 1e-12));
    assert!(approx(q.angle_in_degrees().unwrap().to_f64(), 60.0, 1e-9));
    assert!(approx(Quaternion::from_real(2).angle().unwrap().to_f64(), 0.0, 1e-12));
    assert!(approx(Quaternion::from_real(-2).angle().unwrap().to_f64(), PI, 1e-12));
    assert!(matches!(
        Quaternion::zero().angle(),
        Err(Error::DomainError { .. })
    ));
}

#[test]
fn test_reduce() {
    assert_eq!(Quaternion::from_real(5).reduce(), Number::int(5));
    assert_eq!(
        Quaternion::new(1, 2, 0, 0).reduce(),
        Number::Complex(Complex::new(1, 2))
    );
    let q = Quaternion::new(1, 0, 2, 0);
    assert_eq!(q.reduce(), Number::Quaternion(q.clone()));
}

#[test]
fn test_display() {
    assert_eq!(
        Quaternion::new(1, 2, 3, 4).to_string(),
        "(1 i: 2 j: 3 k: 4)"
    );
    assert_eq!(
        Quaternion::new(1, -2, 0.5, 0).to_string(),
        "(1 i: -2 j: 0.5 k: 0)"
    );
}

#[test]
fn test_cross_kind_equality_through_the_table() {
    // 1 + 2i == 1 + 2(j*k), since j*k = i
    let jk = Quaternion::unit_j().mul(&Quaternion::unit_k());
    let via_quaternion = Quaternion::from_real(1).add(&jk.mul(&Quaternion::from_real(2)));
    let as_complex = Number::Complex(Complex::new(1, 2));
    assert_eq!(Number::Quaternion(via_quaternion), as_complex);
    // 1 + 2j is a different value entirely
    let on_j = Quaternion::new(1, 0, 2, 0);
    assert_ne!(Number::Quaternion(on_j), as_complex);
}
