// hamilton-num - Real scalar tower
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The real scalar tower: exact integers, big integers, rationals and
//! floats with numeric contagion.
//!
//! Binary operations follow the precedence Float > BigRatio > Big >
//! Ratio > Int; combining Big with Ratio produces BigRatio. Arithmetic on
//! `i64` values promotes to Big/BigRatio on overflow instead of erroring,
//! so `+`, `-` and `*` are total. Division by an algebraically zero value
//! (including `0.0`) is a `DivisionByZero` error, never a silent
//! infinity.
//!
//! Values are canonical: ratios are reduced with a positive denominator
//! and a denominator of one collapses to an integer; a big integer that
//! fits `i64` collapses to `Int`. Canonical form is what keeps cross-kind
//! equality transitive.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};

/// A real scalar: the field type underlying every hypercomplex value.
#[derive(Debug, Clone)]
pub enum Real {
    /// 64-bit signed integer
    Int(i64),
    /// Arbitrary-precision integer (never in `i64` range)
    Big(BigInt),
    /// Rational number (reduced, denominator > 1)
    Ratio(i64, i64),
    /// Arbitrary-precision rational (reduced, not representable as Ratio)
    BigRatio(BigInt, BigInt),
    /// 64-bit floating point number
    Float(f64),
}

fn gcd_i64(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    // The result divides the (positive, in-range) denominator it will
    // reduce, so the cast cannot wrap.
    a as i64
}

fn gcd_big(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let t = b.clone();
        b = &a % &b;
        a = t;
    }
    a
}

/// Numeric category for determining the precision of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Int,
    Ratio,
    Big,
    BigRatio,
    Float,
}

/// Classify an operand pair, short-circuiting on Float (highest
/// precedence).
fn category(a: &Real, b: &Real) -> Category {
    let mut has_big = false;
    let mut has_ratio = false;
    let mut has_big_ratio = false;

    for v in [a, b] {
        match v {
            Real::Int(_) => {}
            Real::Ratio(_, _) => has_ratio = true,
            Real::Big(_) => has_big = true,
            Real::BigRatio(_, _) => has_big_ratio = true,
            Real::Float(_) => return Category::Float,
        }
    }

    if has_big_ratio || (has_big && has_ratio) {
        Category::BigRatio
    } else if has_big {
        Category::Big
    } else if has_ratio {
        Category::Ratio
    } else {
        Category::Int
    }
}

impl Real {
    /// Create an integer value.
    pub fn int(n: i64) -> Self {
        Real::Int(n)
    }

    /// Create a float value.
    pub fn float(f: f64) -> Self {
        Real::Float(f)
    }

    /// Create a big integer value, collapsing to `Int` when it fits.
    pub fn big(n: BigInt) -> Self {
        match n.to_i64() {
            Some(i) => Real::Int(i),
            None => Real::Big(n),
        }
    }

    /// Create a ratio, reduced and sign-normalized. A zero denominator is
    /// a `DivisionByZero` error.
    pub fn ratio(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::big_ratio_reduced(BigInt::from(num), BigInt::from(den)))
    }

    /// Create a big ratio, reduced and sign-normalized. A zero
    /// denominator is a `DivisionByZero` error.
    pub fn big_ratio(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::big_ratio_reduced(num, den))
    }

    /// Reduce an i64 ratio with a known-positive denominator.
    fn ratio_reduced(num: i64, den: i64) -> Self {
        debug_assert!(den > 0);
        if num == 0 {
            return Real::Int(0);
        }
        let g = gcd_i64(num, den);
        let (num, den) = (num / g, den / g);
        if den == 1 {
            Real::Int(num)
        } else {
            Real::Ratio(num, den)
        }
    }

    /// Reduce a big ratio with a known-nonzero denominator, demoting to
    /// the cheapest representation.
    fn big_ratio_reduced(mut num: BigInt, mut den: BigInt) -> Self {
        debug_assert!(!den.is_zero());
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        if num.is_zero() {
            return Real::Int(0);
        }
        let g = gcd_big(&num, &den);
        if !g.is_one() {
            num /= &g;
            den /= &g;
        }
        if den.is_one() {
            return Self::big(num);
        }
        match (num.to_i64(), den.to_i64()) {
            (Some(n), Some(d)) => Real::Ratio(n, d),
            _ => Real::BigRatio(num, den),
        }
    }

    // ------------------------------------------------------------------
    // Conversion helpers for the contagion paths
    // ------------------------------------------------------------------

    fn as_int(&self) -> i64 {
        match self {
            Real::Int(n) => *n,
            _ => unreachable!("classified as Int"),
        }
    }

    fn to_big(&self) -> BigInt {
        match self {
            Real::Int(n) => BigInt::from(*n),
            Real::Big(n) => n.clone(),
            _ => unreachable!("classified as integer"),
        }
    }

    fn to_i64_ratio(&self) -> (i64, i64) {
        match self {
            Real::Int(n) => (*n, 1),
            Real::Ratio(num, den) => (*num, *den),
            _ => unreachable!("classified as i64 ratio"),
        }
    }

    fn to_big_ratio(&self) -> (BigInt, BigInt) {
        match self {
            Real::Int(n) => (BigInt::from(*n), BigInt::one()),
            Real::Big(n) => (n.clone(), BigInt::one()),
            Real::Ratio(num, den) => (BigInt::from(*num), BigInt::from(*den)),
            Real::BigRatio(num, den) => (num.clone(), den.clone()),
            Real::Float(_) => unreachable!("classified as exact"),
        }
    }

    /// Convert to f64, approximating big values by infinity.
    pub fn to_f64(&self) -> f64 {
        match self {
            Real::Int(n) => *n as f64,
            Real::Big(n) => n.to_f64().unwrap_or(f64::INFINITY),
            Real::Ratio(num, den) => *num as f64 / *den as f64,
            Real::BigRatio(num, den) => {
                let nf = num.to_f64().unwrap_or(f64::INFINITY);
                let df = den.to_f64().unwrap_or(f64::INFINITY);
                if nf.is_finite() || df.is_finite() {
                    nf / df
                } else {
                    // Both overflow f64: divide first, then convert, so
                    // the quotient does not collapse to inf/inf = NaN.
                    (num / den).to_f64().unwrap_or(f64::INFINITY)
                }
            }
            Real::Float(f) => *f,
        }
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Add two reals with contagion.
    pub fn add(&self, other: &Real) -> Real {
        match category(self, other) {
            Category::Float => Real::Float(self.to_f64() + other.to_f64()),
            Category::BigRatio => {
                let (an, ad) = self.to_big_ratio();
                let (bn, bd) = other.to_big_ratio();
                Self::big_ratio_reduced(&an * &bd + &bn * &ad, ad * bd)
            }
            Category::Big => Self::big(self.to_big() + other.to_big()),
            Category::Ratio => {
                let (an, ad) = self.to_i64_ratio();
                let (bn, bd) = other.to_i64_ratio();
                let num = an
                    .checked_mul(bd)
                    .zip(bn.checked_mul(ad))
                    .and_then(|(x, y)| x.checked_add(y));
                match (num, ad.checked_mul(bd)) {
                    (Some(n), Some(d)) => Self::ratio_reduced(n, d),
                    _ => Self::big_ratio_reduced(
                        BigInt::from(an) * BigInt::from(bd)
                            + BigInt::from(bn) * BigInt::from(ad),
                        BigInt::from(ad) * BigInt::from(bd),
                    ),
                }
            }
            Category::Int => {
                let (a, b) = (self.as_int(), other.as_int());
                match a.checked_add(b) {
                    Some(s) => Real::Int(s),
                    None => Self::big(BigInt::from(a) + BigInt::from(b)),
                }
            }
        }
    }

    /// Subtract with contagion.
    pub fn sub(&self, other: &Real) -> Real {
        match category(self, other) {
            Category::Float => Real::Float(self.to_f64() - other.to_f64()),
            Category::BigRatio => {
                let (an, ad) = self.to_big_ratio();
                let (bn, bd) = other.to_big_ratio();
                Self::big_ratio_reduced(&an * &bd - &bn * &ad, ad * bd)
            }
            Category::Big => Self::big(self.to_big() - other.to_big()),
            Category::Ratio => {
                let (an, ad) = self.to_i64_ratio();
                let (bn, bd) = other.to_i64_ratio();
                let num = an
                    .checked_mul(bd)
                    .zip(bn.checked_mul(ad))
                    .and_then(|(x, y)| x.checked_sub(y));
                match (num, ad.checked_mul(bd)) {
                    (Some(n), Some(d)) => Self::ratio_reduced(n, d),
                    _ => Self::big_ratio_reduced(
                        BigInt::from(an) * BigInt::from(bd)
                            - BigInt::from(bn) * BigInt::from(ad),
                        BigInt::from(ad) * BigInt::from(bd),
                    ),
                }
            }
            Category::Int => {
                let (a, b) = (self.as_int(), other.as_int());
                match a.checked_sub(b) {
                    Some(s) => Real::Int(s),
                    None => Self::big(BigInt::from(a) - BigInt::from(b)),
                }
            }
        }
    }

    /// Multiply with contagion.
    pub fn mul(&self, other: &Real) -> Real {
        match category(self, other) {
            Category::Float => Real::Float(self.to_f64() * other.to_f64()),
            Category::BigRatio => {
                let (an, ad) = self.to_big_ratio();
                let (bn, bd) = other.to_big_ratio();
                Self::big_ratio_reduced(an * bn, ad * bd)
            }
            Category::Big => Self::big(self.to_big() * other.to_big()),
            Category::Ratio => {
                let (an, ad) = self.to_i64_ratio();
                let (bn, bd) = other.to_i64_ratio();
                match (an.checked_mul(bn), ad.checked_mul(bd)) {
                    (Some(n), Some(d)) => Self::ratio_reduced(n, d),
                    _ => Self::big_ratio_reduced(
                        BigInt::from(an) * BigInt::from(bn),
                        BigInt::from(ad) * BigInt::from(bd),
                    ),
                }
            }
            Category::Int => {
                let (a, b) = (self.as_int(), other.as_int());
                match a.checked_mul(b) {
                    Some(p) => Real::Int(p),
                    None => Self::big(BigInt::from(a) * BigInt::from(b)),
                }
            }
        }
    }

    /// Divide with contagion. Exact kinds divide exactly (producing
    /// ratios); a float operand forces float division. Division by zero
    /// of any kind is an error.
    pub fn div(&self, other: &Real) -> Result<Real> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        match category(self, other) {
            Category::Float => Ok(Real::Float(self.to_f64() / other.to_f64())),
            Category::Int => {
                let (a, b) = (self.as_int(), other.as_int());
                match (a.checked_mul(b.signum()), b.checked_abs()) {
                    (Some(n), Some(d)) => Ok(Self::ratio_reduced(n, d)),
                    _ => Ok(Self::big_ratio_reduced(BigInt::from(a), BigInt::from(b))),
                }
            }
            _ => {
                let (an, ad) = self.to_big_ratio();
                let (bn, bd) = other.to_big_ratio();
                Ok(Self::big_ratio_reduced(an * bd, ad * bn))
            }
        }
    }

    /// Negate.
    pub fn neg(&self) -> Real {
        match self {
            Real::Int(n) => match n.checked_neg() {
                Some(m) => Real::Int(m),
                None => Self::big(-BigInt::from(*n)),
            },
            Real::Big(n) => Self::big(-n),
            Real::Ratio(num, den) => match num.checked_neg() {
                Some(m) => Real::Ratio(m, *den),
                None => Self::big_ratio_reduced(-BigInt::from(*num), BigInt::from(*den)),
            },
            Real::BigRatio(num, den) => Self::big_ratio_reduced(-num, den.clone()),
            Real::Float(f) => Real::Float(-f),
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Real {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// True for the additive identity of any kind (including `0.0` and
    /// `-0.0`).
    pub fn is_zero(&self) -> bool {
        match self {
            Real::Int(n) => *n == 0,
            Real::Big(n) => n.is_zero(),
            Real::Ratio(num, _) => *num == 0,
            Real::BigRatio(num, _) => num.is_zero(),
            Real::Float(f) => *f == 0.0,
        }
    }

    /// True when the value is strictly below zero; for floats this is
    /// the sign bit, so `-0.0` counts as negative (it matters only for
    /// printing).
    pub fn is_negative(&self) -> bool {
        match self {
            Real::Int(n) => *n < 0,
            Real::Big(n) => n.is_negative(),
            Real::Ratio(num, _) => *num < 0,
            Real::BigRatio(num, _) => num.is_negative(),
            Real::Float(f) => f.is_sign_negative(),
        }
    }

    /// True for the integer kinds.
    pub fn is_integer(&self) -> bool {
        matches!(self, Real::Int(_) | Real::Big(_))
    }

    /// Get the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Real::Int(_) => "int",
            Real::Big(_) => "bigint",
            Real::Ratio(_, _) => "ratio",
            Real::BigRatio(_, _) => "bigratio",
            Real::Float(_) => "float",
        }
    }

    /// The exact i64 value, when this is an in-range integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Real::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Total comparison over reals. Comparing a NaN is a `DomainError`.
    pub fn compare(&self, other: &Real) -> Result<Ordering> {
        match category(self, other) {
            Category::Float => {
                let (x, y) = (self.to_f64(), other.to_f64());
                x.partial_cmp(&y)
                    .ok_or_else(|| Error::domain("compare", "cannot compare NaN"))
            }
            _ => {
                let (an, ad) = self.to_big_ratio();
                let (bn, bd) = other.to_big_ratio();
                // Denominators are positive, so cross-multiplying
                // preserves the ordering.
                Ok((an * bd).cmp(&(bn * ad)))
            }
        }
    }
}

impl From<i64> for Real {
    fn from(n: i64) -> Self {
        Real::Int(n)
    }
}

impl From<f64> for Real {
    fn from(f: f64) -> Self {
        Real::Float(f)
    }
}

impl From<BigInt> for Real {
    fn from(n: BigInt) -> Self {
        Real::big(n)
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Real::Int(a), Real::Int(b)) => a == b,
            (Real::Big(a), Real::Big(b)) => a == b,
            (Real::Ratio(an, ad), Real::Ratio(bn, bd)) => an == bn && ad == bd,
            (Real::BigRatio(an, ad), Real::BigRatio(bn, bd)) => an == bn && ad == bd,
            (Real::Float(a), Real::Float(b)) => a.to_bits() == b.to_bits(),
            (Real::Int(a), Real::Float(b)) | (Real::Float(b), Real::Int(a)) => {
                (*a as f64).to_bits() == b.to_bits()
            }
            _ => false,
        }
    }
}

impl Eq for Real {}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Real::Int(n) => {
                state.write_u8(0);
                n.hash(state);
            }
            Real::Float(f) => {
                // Integral floats hash as their integer value, keeping
                // the hash consistent with Int/Float equality.
                if f.is_finite() && f.trunc() == *f && (*f as i64) as f64 == *f {
                    state.write_u8(0);
                    (*f as i64).hash(state);
                } else {
                    state.write_u8(1);
                    f.to_bits().hash(state);
                }
            }
            Real::Big(n) => {
                state.write_u8(2);
                n.hash(state);
            }
            Real::Ratio(num, den) => {
                state.write_u8(3);
                num.hash(state);
                den.hash(state);
            }
            Real::BigRatio(num, den) => {
                state.write_u8(4);
                num.hash(state);
                den.hash(state);
            }
        }
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Real::Int(n) => write!(f, "{}", n),
            Real::Big(n) => write!(f, "{}", n),
            Real::Ratio(num, den) => write!(f, "{}/{}", num, den),
            Real::BigRatio(num, den) => write!(f, "{}/{}", num, den),
            Real::Float(x) => {
                let s = format!("{}", x);
                // Keep a decimal point so the text round-trips as a float
                if x.is_finite() && !s.contains('.') && !s.contains('e') && !s.contains('E') {
                    write!(f, "{}.0", s)
                } else {
                    write!(f, "{}", s)
                }
            }
        }
    }
}
