// hamilton-num - Property-based tests for the numeric tower
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for the tower laws:
//! - exp(ln(z)) recovers z for nonzero hypercomplex values
//! - the two norm policies agree at moderate magnitudes
//! - abs squared tracks the exact squared norm
//! - commutativity where the algebra is commutative
//! - q * conjugate(q) is exactly real
//! - reduction is idempotent and equality is hash-consistent

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use hamilton_num::{Complex, Number, Quaternion};
use proptest::prelude::*;

fn hash_of(n: &Number) -> u64 {
    let mut hasher = DefaultHasher::new();
    n.hash(&mut hasher);
    hasher.finish()
}

/// Components in a well-conditioned range
fn arb_component() -> impl Strategy<Value = f64> {
    -100.0f64..100.0f64
}

fn arb_complex() -> impl Strategy<Value = Complex> {
    (arb_component(), arb_component()).prop_map(|(re, im)| Complex::new(re, im))
}

/// Complex values bounded away from zero, where ln is defined
fn arb_nonzero_complex() -> impl Strategy<Value = Complex> {
    arb_complex().prop_filter("must be away from zero", |z| z.abs().to_f64() > 1e-3)
}

fn arb_quaternion() -> impl Strategy<Value = Quaternion> {
    (
        arb_component(),
        arb_component(),
        arb_component(),
        arb_component(),
    )
        .prop_map(|(a, b, c, d)| Quaternion::new(a, b, c, d))
}

fn arb_nonzero_quaternion() -> impl Strategy<Value = Quaternion> {
    arb_quaternion().prop_filter("must be away from zero", |q| q.abs().to_f64() > 1e-3)
}

/// Quaternions from small integers with axes dropped at random, so the
/// reduced kind varies
fn arb_reducible_quaternion() -> impl Strategy<Value = Quaternion> {
    (
        -100i64..100,
        prop_oneof![Just(0i64), -100i64..100],
        prop_oneof![Just(0i64), -100i64..100],
        prop_oneof![Just(0i64), -100i64..100],
    )
        .prop_map(|(a, b, c, d)| Quaternion::new(a, b, c, d))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// exp(ln(z)) recovers z within 1e-6
    #[test]
    fn complex_exp_ln_round_trip(z in arb_nonzero_complex()) {
        let back = z.ln().unwrap().exp();
        prop_assert!(
            (back.real().to_f64() - z.real().to_f64()).abs() <= 1e-6
                && (back.imaginary().to_f64() - z.imaginary().to_f64()).abs() <= 1e-6,
            "exp(ln({})) = {}",
            z,
            back
        );
    }

    /// The same round trip holds inside the quaternions
    #[test]
    fn quaternion_exp_ln_round_trip(q in arb_nonzero_quaternion()) {
        let back = q.ln().unwrap().exp();
        let close = (back.real().to_f64() - q.real().to_f64()).abs() <= 1e-6
            && (back.i().to_f64() - q.i().to_f64()).abs() <= 1e-6
            && (back.j().to_f64() - q.j().to_f64()).abs() <= 1e-6
            && (back.k().to_f64() - q.k().to_f64()).abs() <= 1e-6;
        prop_assert!(close, "exp(ln({})) = {}", q, back);
    }

    /// abs(z)^2 tracks the exact squared norm
    #[test]
    fn abs_squared_matches_squared_norm(z in arb_complex()) {
        let a = z.abs().to_f64();
        let n = z.squared_norm().to_f64();
        prop_assert!((a * a - n).abs() <= 1e-9 * n.max(1.0));
    }

    /// The secure norm agrees with the naive norm at moderate magnitude
    #[test]
    fn abs_secure_agrees_with_abs(z in arb_complex()) {
        let naive = z.abs().to_f64();
        let secure = z.abs_secure().to_f64();
        prop_assert!((naive - secure).abs() <= 1e-9 * naive.max(1.0));
    }

    /// Complex addition and multiplication are commutative
    #[test]
    fn complex_ring_is_commutative(a in arb_complex(), b in arb_complex()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    /// Quaternion addition is commutative even though the product is not
    #[test]
    fn quaternion_addition_is_commutative(p in arb_quaternion(), q in arb_quaternion()) {
        prop_assert_eq!(p.add(&q), q.add(&p));
    }

    /// q * conjugate(q) has an exactly zero unreal part
    #[test]
    fn conjugate_product_is_real(q in arb_quaternion()) {
        let n = q.mul(&q.conjugate());
        prop_assert!(n.i().is_zero() && n.j().is_zero() && n.k().is_zero(),
            "unreal residue in {}", n);
    }

    /// reduce(reduce(x)) = reduce(x)
    #[test]
    fn reduce_is_idempotent(q in arb_reducible_quaternion()) {
        let n = Number::Quaternion(q);
        prop_assert_eq!(n.reduce().reduce(), n.reduce());
    }

    /// A value equals its own reduction, and their hashes agree
    #[test]
    fn reduction_preserves_equality_and_hash(q in arb_reducible_quaternion()) {
        let n = Number::Quaternion(q);
        let r = n.reduce();
        prop_assert_eq!(&n, &r);
        prop_assert_eq!(hash_of(&n), hash_of(&r));
    }

    /// Mixed-kind addition is symmetric through the coercion protocol
    #[test]
    fn coercion_is_symmetric_for_addition(a in -1000i64..1000, z in arb_complex()) {
        let scalar = Number::int(a);
        let complex = Number::Complex(z);
        prop_assert_eq!(
            scalar.add(&complex).unwrap(),
            complex.add(&scalar).unwrap()
        );
    }
}
