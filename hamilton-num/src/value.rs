// hamilton-num - The numeric tower
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The closed numeric tower and its coercion protocol.
//!
//! `Number` is the tagged union over every numeric kind. A binary
//! operation on mixed scalar kinds promotes the less general operand up
//! the ladder Real < Complex < Quaternion and retries with both operands
//! homogeneous; a container operand distributes the operation over its
//! elements with the operand order preserved, so non-commutative
//! products broadcast correctly. Reduction demotes a value to the
//! cheapest kind representing it exactly and is applied only on demand.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::polynomial::Polynomial;
use crate::quaternion::Quaternion;
use crate::real::Real;
use crate::vector::Vector;

/// The kind of a number. The scalar kinds are ordered by generality;
/// the containers sit outside the ladder and distribute instead of
/// promoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Real,
    Complex,
    Quaternion,
    Vector,
    Polynomial,
}

/// A value of the numeric tower.
#[derive(Debug, Clone)]
pub enum Number {
    /// A real scalar (integer, big integer, ratio or float)
    Real(Real),
    /// A rank-2 hypercomplex value
    Complex(Complex),
    /// A rank-4 hypercomplex value
    Quaternion(Quaternion),
    /// A vector of numbers; operations distribute element-wise
    Vector(Vector),
    /// A polynomial with numeric coefficients
    Polynomial(Polynomial),
}

/// Generality rank of a scalar kind. Containers never promote and are
/// consumed before any promotion is attempted.
fn scalar_rank(n: &Number) -> u8 {
    match n {
        Number::Real(_) => 0,
        Number::Complex(_) => 1,
        Number::Quaternion(_) => 2,
        Number::Vector(_) | Number::Polynomial(_) => unreachable!("containers distribute"),
    }
}

/// Promote both operands to the more general of their two scalar kinds.
fn promote_pair(a: &Number, b: &Number) -> (Number, Number) {
    let target = if scalar_rank(a) >= scalar_rank(b) {
        a.kind()
    } else {
        b.kind()
    };
    (a.promoted(target), b.promoted(target))
}

impl Number {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create an integer value.
    pub fn int(n: i64) -> Self {
        Number::Real(Real::Int(n))
    }

    /// Create a float value.
    pub fn float(f: f64) -> Self {
        Number::Real(Real::Float(f))
    }

    /// Create a ratio value (reduced; zero denominator is an error).
    pub fn ratio(num: i64, den: i64) -> Result<Self> {
        Ok(Number::Real(Real::ratio(num, den)?))
    }

    /// Create a complex value from rectangular components.
    pub fn complex(re: impl Into<Real>, im: impl Into<Real>) -> Self {
        Number::Complex(Complex::new(re, im))
    }

    /// Create a quaternion value from its four components.
    pub fn quaternion(
        re: impl Into<Real>,
        i: impl Into<Real>,
        j: impl Into<Real>,
        k: impl Into<Real>,
    ) -> Self {
        Number::Quaternion(Quaternion::new(re, i, j, k))
    }

    /// Create a vector value from elements.
    pub fn vector(items: impl IntoIterator<Item = Number>) -> Self {
        Number::Vector(Vector::new(items))
    }

    /// Create a polynomial value from coefficients, constant term first.
    pub fn polynomial(coeffs: Vec<Number>) -> Self {
        Number::Polynomial(Polynomial::new(coeffs))
    }

    // ------------------------------------------------------------------
    // Capability queries and conversions
    // ------------------------------------------------------------------

    /// The kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Number::Real(_) => Kind::Real,
            Number::Complex(_) => Kind::Complex,
            Number::Quaternion(_) => Kind::Quaternion,
            Number::Vector(_) => Kind::Vector,
            Number::Polynomial(_) => Kind::Polynomial,
        }
    }

    /// The type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Real(r) => r.type_name(),
            Number::Complex(_) => "complex",
            Number::Quaternion(_) => "quaternion",
            Number::Vector(_) => "vector",
            Number::Polynomial(_) => "polynomial",
        }
    }

    /// True for a real scalar.
    pub fn is_real(&self) -> bool {
        matches!(self, Number::Real(_))
    }

    /// True for a complex value.
    pub fn is_complex(&self) -> bool {
        matches!(self, Number::Complex(_))
    }

    /// True for a quaternion value.
    pub fn is_quaternion(&self) -> bool {
        matches!(self, Number::Quaternion(_))
    }

    /// True for any scalar kind (not a container).
    pub fn is_number(&self) -> bool {
        !matches!(self, Number::Vector(_) | Number::Polynomial(_))
    }

    /// True for the additive identity of a scalar kind or the zero
    /// polynomial.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Real(r) => r.is_zero(),
            Number::Complex(c) => c.is_zero(),
            Number::Quaternion(q) => q.is_zero(),
            Number::Vector(_) => false,
            Number::Polynomial(p) => p.is_zero(),
        }
    }

    /// View this value as a complex, when it is representable as one.
    pub fn as_complex(&self) -> Result<Complex> {
        match self {
            Number::Real(r) => Ok(Complex::from_real(r.clone())),
            Number::Complex(c) => Ok(c.clone()),
            Number::Quaternion(q) if q.j().is_zero() && q.k().is_zero() => {
                Ok(Complex::new(q.real().clone(), q.i().clone()))
            }
            _ => Err(Error::type_error_in(
                "as-complex",
                "complex-representable value",
                self.type_name(),
            )),
        }
    }

    /// View this value as a quaternion.
    pub fn as_quaternion(&self) -> Result<Quaternion> {
        match self {
            Number::Real(r) => Ok(Quaternion::from_real(r.clone())),
            Number::Complex(c) => Ok(Quaternion::from_complex(c)),
            Number::Quaternion(q) => Ok(q.clone()),
            _ => Err(Error::type_error_in(
                "as-quaternion",
                "number",
                self.type_name(),
            )),
        }
    }

    /// Raise this scalar to `target` kind; values already at or above
    /// the target are returned unchanged.
    fn promoted(&self, target: Kind) -> Number {
        match (self, target) {
            (Number::Real(r), Kind::Complex) => Number::Complex(Complex::from_real(r.clone())),
            (Number::Real(r), Kind::Quaternion) => {
                Number::Quaternion(Quaternion::from_real(r.clone()))
            }
            (Number::Complex(c), Kind::Quaternion) => {
                Number::Quaternion(Quaternion::from_complex(c))
            }
            _ => self.clone(),
        }
    }

    /// Demote to the cheapest kind representing this value exactly.
    /// Pure and idempotent; never applied automatically.
    pub fn reduce(&self) -> Number {
        match self {
            Number::Complex(c) => c.reduce(),
            Number::Quaternion(q) => q.reduce(),
            _ => self.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Arithmetic with coercion
    // ------------------------------------------------------------------

    pub fn add(&self, other: &Number) -> Result<Number> {
        match (self, other) {
            (Number::Vector(a), Number::Vector(b)) => {
                Ok(Number::Vector(a.zip(b, |x, y| x.add(y))?))
            }
            (Number::Vector(a), b) => Ok(Number::Vector(a.try_map(|x| x.add(b))?)),
            (a, Number::Vector(b)) => Ok(Number::Vector(b.try_map(|y| a.add(y))?)),
            (Number::Polynomial(p), Number::Polynomial(q)) => Ok(Number::Polynomial(p.add(q)?)),
            (Number::Polynomial(p), s) => Ok(Number::Polynomial(p.add_scalar(s)?)),
            (s, Number::Polynomial(q)) => Ok(Number::Polynomial(q.add_scalar(s)?)),
            (Number::Real(a), Number::Real(b)) => Ok(Number::Real(a.add(b))),
            (Number::Complex(a), Number::Complex(b)) => Ok(Number::Complex(a.add(b))),
            (Number::Quaternion(a), Number::Quaternion(b)) => Ok(Number::Quaternion(a.add(b))),
            _ => {
                let (a, b) = promote_pair(self, other);
                a.add(&b)
            }
        }
    }

    pub fn sub(&self, other: &Number) -> Result<Number> {
        match (self, other) {
            (Number::Vector(a), Number::Vector(b)) => {
                Ok(Number::Vector(a.zip(b, |x, y| x.sub(y))?))
            }
            (Number::Vector(a), b) => Ok(Number::Vector(a.try_map(|x| x.sub(b))?)),
            (a, Number::Vector(b)) => Ok(Number::Vector(b.try_map(|y| a.sub(y))?)),
            (Number::Polynomial(p), Number::Polynomial(q)) => Ok(Number::Polynomial(p.sub(q)?)),
            (Number::Polynomial(p), s) => Ok(Number::Polynomial(p.add_scalar(&s.neg())?)),
            (s, Number::Polynomial(q)) => Ok(Number::Polynomial(q.neg().add_scalar(s)?)),
            (Number::Real(a), Number::Real(b)) => Ok(Number::Real(a.sub(b))),
            (Number::Complex(a), Number::Complex(b)) => Ok(Number::Complex(a.sub(b))),
            (Number::Quaternion(a), Number::Quaternion(b)) => Ok(Number::Quaternion(a.sub(b))),
            _ => {
                let (a, b) = promote_pair(self, other);
                a.sub(&b)
            }
        }
    }

    pub fn mul(&self, other: &Number) -> Result<Number> {
        match (self, other) {
            (Number::Vector(a), Number::Vector(b)) => {
                Ok(Number::Vector(a.zip(b, |x, y| x.mul(y))?))
            }
            (Number::Vector(a), b) => Ok(Number::Vector(a.try_map(|x| x.mul(b))?)),
            (a, Number::Vector(b)) => Ok(Number::Vector(b.try_map(|y| a.mul(y))?)),
            (Number::Polynomial(p), Number::Polynomial(q)) => Ok(Number::Polynomial(p.mul(q)?)),
            (Number::Polynomial(p), s) => Ok(Number::Polynomial(p.try_map(|c| c.mul(s))?)),
            (s, Number::Polynomial(q)) => Ok(Number::Polynomial(q.try_map(|c| s.mul(c))?)),
            (Number::Real(a), Number::Real(b)) => Ok(Number::Real(a.mul(b))),
            (Number::Complex(a), Number::Complex(b)) => Ok(Number::Complex(a.mul(b))),
            (Number::Quaternion(a), Number::Quaternion(b)) => Ok(Number::Quaternion(a.mul(b))),
            _ => {
                let (a, b) = promote_pair(self, other);
                a.mul(&b)
            }
        }
    }

    pub fn div(&self, other: &Number) -> Result<Number> {
        match (self, other) {
            (Number::Vector(a), Number::Vector(b)) => {
                Ok(Number::Vector(a.zip(b, |x, y| x.div(y))?))
            }
            (Number::Vector(a), b) => Ok(Number::Vector(a.try_map(|x| x.div(b))?)),
            (a, Number::Vector(b)) => Ok(Number::Vector(b.try_map(|y| a.div(y))?)),
            (Number::Polynomial(p), s) if s.is_number() => {
                Ok(Number::Polynomial(p.try_map(|c| c.div(s))?))
            }
            (Number::Polynomial(_), other) => Err(Error::type_error_in(
                "/",
                "number",
                other.type_name(),
            )),
            (_, Number::Polynomial(_)) => Err(Error::type_error_in(
                "/",
                "number",
                "polynomial",
            )),
            (Number::Real(a), Number::Real(b)) => Ok(Number::Real(a.div(b)?)),
            (Number::Complex(a), Number::Complex(b)) => Ok(Number::Complex(a.div(b)?)),
            (Number::Quaternion(a), Number::Quaternion(b)) => Ok(Number::Quaternion(a.div(b)?)),
            _ => {
                let (a, b) = promote_pair(self, other);
                a.div(&b)
            }
        }
    }

    /// Negate.
    pub fn neg(&self) -> Number {
        match self {
            Number::Real(r) => Number::Real(r.neg()),
            Number::Complex(c) => Number::Complex(c.neg()),
            Number::Quaternion(q) => Number::Quaternion(q.neg()),
            Number::Vector(v) => Number::Vector(v.map(|x| x.neg())),
            Number::Polynomial(p) => Number::Polynomial(p.neg()),
        }
    }

    /// Multiplicative inverse.
    pub fn reciprocal(&self) -> Result<Number> {
        match self {
            Number::Real(r) => Ok(Number::Real(Real::Int(1).div(r)?)),
            Number::Complex(c) => Ok(Number::Complex(c.reciprocal()?)),
            Number::Quaternion(q) => Ok(Number::Quaternion(q.reciprocal()?)),
            Number::Vector(v) => Ok(Number::Vector(v.try_map(|x| x.reciprocal())?)),
            Number::Polynomial(_) => Err(Error::type_error_in(
                "reciprocal",
                "number",
                self.type_name(),
            )),
        }
    }

    /// Conjugate; real scalars are self-conjugate.
    pub fn conjugate(&self) -> Number {
        match self {
            Number::Real(_) => self.clone(),
            Number::Complex(c) => Number::Complex(c.conjugate()),
            Number::Quaternion(q) => Number::Quaternion(q.conjugate()),
            Number::Vector(v) => Number::Vector(v.map(|x| x.conjugate())),
            Number::Polynomial(p) => Number::Polynomial(p.map(|c| c.conjugate())),
        }
    }

    /// Euclidean norm (naive formula).
    pub fn abs(&self) -> Result<Number> {
        match self {
            Number::Real(r) => Ok(Number::Real(r.abs())),
            Number::Complex(c) => Ok(Number::Real(c.abs())),
            Number::Quaternion(q) => Ok(Number::Real(q.abs())),
            Number::Vector(v) => Ok(Number::Vector(v.try_map(|x| x.abs())?)),
            Number::Polynomial(_) => {
                Err(Error::type_error_in("abs", "number", self.type_name()))
            }
        }
    }

    /// Euclidean norm with overflow/underflow-avoiding scaling.
    pub fn abs_secure(&self) -> Result<Number> {
        match self {
            Number::Real(r) => Ok(Number::Real(r.abs())),
            Number::Complex(c) => Ok(Number::Real(c.abs_secure())),
            Number::Quaternion(q) => Ok(Number::Real(q.abs_secure())),
            Number::Vector(v) => Ok(Number::Vector(v.try_map(|x| x.abs_secure())?)),
            Number::Polynomial(_) => {
                Err(Error::type_error_in("abs", "number", self.type_name()))
            }
        }
    }

    /// Squared Euclidean norm, exact over exact components.
    pub fn squared_norm(&self) -> Result<Number> {
        match self {
            Number::Real(r) => Ok(Number::Real(r.mul(r))),
            Number::Complex(c) => Ok(Number::Real(c.squared_norm())),
            Number::Quaternion(q) => Ok(Number::Real(q.squared_norm())),
            Number::Vector(v) => Ok(Number::Vector(v.try_map(|x| x.squared_norm())?)),
            Number::Polynomial(_) => Err(Error::type_error_in(
                "squared-norm",
                "number",
                self.type_name(),
            )),
        }
    }

    /// Angle against the positive real axis; for a complex this is the
    /// four-quadrant argument in (-pi, pi], for a quaternion the angle
    /// in [0, pi]. Undefined at zero.
    pub fn arg(&self) -> Result<Number> {
        match self {
            Number::Real(r) => {
                if r.is_zero() {
                    Err(Error::domain("arg", "angle of zero is undefined"))
                } else if r.is_negative() {
                    Ok(Number::float(std::f64::consts::PI))
                } else {
                    Ok(Number::float(0.0))
                }
            }
            Number::Complex(c) => Ok(Number::Real(c.arg()?)),
            Number::Quaternion(q) => Ok(Number::Real(q.angle()?)),
            _ => Err(Error::type_error_in("arg", "number", self.type_name())),
        }
    }

    // ------------------------------------------------------------------
    // Powers
    // ------------------------------------------------------------------

    /// Raise to a power. Integer-kind exponents use binary
    /// exponentiation; any other exponent goes through
    /// `exp(exponent * ln(self))`, with 0 and 1 short-circuited exactly.
    pub fn raised_to(&self, exponent: &Number) -> Result<Number> {
        if let Number::Real(r) = exponent {
            if r.as_i64().is_some() {
                return self.raised_to_integer(exponent);
            }
        }
        if exponent.is_zero() {
            return Ok(self.one_like());
        }
        if exponent == &Number::int(1) {
            return Ok(self.clone());
        }
        exponent.mul(&self.ln()?)?.exp()
    }

    /// The integer-specific power entry point; a non-integer exponent is
    /// a type error.
    pub fn raised_to_integer(&self, exponent: &Number) -> Result<Number> {
        let n = match exponent {
            Number::Real(r) if r.is_integer() => r.as_i64().ok_or_else(|| {
                Error::domain("raised-to-integer", "exponent out of range")
            })?,
            _ => {
                return Err(Error::type_error_in(
                    "raised-to-integer",
                    "integer",
                    exponent.type_name(),
                ))
            }
        };
        match self {
            Number::Real(r) => Ok(Number::Real(real_pow(r, n)?)),
            Number::Complex(c) => Ok(Number::Complex(c.raised_to_integer(n)?)),
            Number::Quaternion(q) => Ok(Number::Quaternion(q.raised_to_integer(n)?)),
            Number::Vector(v) => Ok(Number::Vector(
                v.try_map(|x| x.raised_to_integer(exponent))?,
            )),
            Number::Polynomial(p) => {
                if n < 0 {
                    return Err(Error::type_error_in(
                        "raised-to-integer",
                        "nonnegative integer exponent",
                        "negative integer",
                    ));
                }
                let mut acc = Polynomial::new(vec![Number::int(1)]);
                let mut base = p.clone();
                let mut m = n as u64;
                while m > 0 {
                    if m & 1 == 1 {
                        acc = acc.mul(&base)?;
                    }
                    base = base.mul(&base)?;
                    m >>= 1;
                }
                Ok(Number::Polynomial(acc))
            }
        }
    }

    /// The multiplicative identity of this value's kind.
    fn one_like(&self) -> Number {
        match self {
            Number::Real(_) | Number::Polynomial(_) => Number::int(1),
            Number::Complex(_) => Number::Complex(Complex::one()),
            Number::Quaternion(_) => Number::Quaternion(Quaternion::one()),
            Number::Vector(v) => Number::Vector(v.map(|x| x.one_like())),
        }
    }

    // ------------------------------------------------------------------
    // Transcendental functions
    // ------------------------------------------------------------------

    pub fn exp(&self) -> Result<Number> {
        match self {
            Number::Real(r) => Ok(Number::float(r.to_f64().exp())),
            Number::Complex(c) => Ok(Number::Complex(c.exp())),
            Number::Quaternion(q) => Ok(Number::Quaternion(q.exp())),
            Number::Vector(v) => Ok(Number::Vector(v.try_map(|x| x.exp())?)),
            Number::Polynomial(_) => {
                Err(Error::type_error_in("exp", "number", self.type_name()))
            }
        }
    }

    /// Principal natural logarithm. A negative real promotes to the
    /// complex plane instead of erroring; zero is undefined.
    pub fn ln(&self) -> Result<Number> {
        match self {
            Number::Real(r) => {
                if r.is_zero() {
                    Err(Error::domain("ln", "logarithm of zero is undefined"))
                } else if r.is_negative() {
                    Ok(Number::Complex(Complex::from_real(r.clone()).ln()?))
                } else {
                    Ok(Number::float(r.to_f64().ln()))
                }
            }
            Number::Complex(c) => Ok(Number::Complex(c.ln()?)),
            Number::Quaternion(q) => Ok(Number::Quaternion(q.ln()?)),
            Number::Vector(v) => Ok(Number::Vector(v.try_map(|x| x.ln())?)),
            Number::Polynomial(_) => {
                Err(Error::type_error_in("ln", "number", self.type_name()))
            }
        }
    }

    /// Logarithm to an arbitrary base: `ln(self) / ln(base)`.
    pub fn log(&self, base: &Number) -> Result<Number> {
        self.ln()?.div(&base.ln()?)
    }

    /// Principal square root. A negative real promotes to the complex
    /// plane.
    pub fn sqrt(&self) -> Result<Number> {
        match self {
            Number::Real(r) => {
                if r.is_negative() {
                    Ok(Number::Complex(Complex::from_real(r.clone()).sqrt()))
                } else {
                    Ok(Number::float(r.to_f64().sqrt()))
                }
            }
            Number::Complex(c) => Ok(Number::Complex(c.sqrt())),
            Number::Quaternion(q) => Ok(Number::Quaternion(q.sqrt())),
            Number::Vector(v) => Ok(Number::Vector(v.try_map(|x| x.sqrt())?)),
            Number::Polynomial(_) => {
                Err(Error::type_error_in("sqrt", "number", self.type_name()))
            }
        }
    }

    pub fn cos(&self) -> Result<Number> {
        self.elementary(f64::cos, Complex::cos, Quaternion::cos, "cos")
    }

    pub fn sin(&self) -> Result<Number> {
        self.elementary(f64::sin, Complex::sin, Quaternion::sin, "sin")
    }

    pub fn tan(&self) -> Result<Number> {
        self.elementary(f64::tan, Complex::tan, Quaternion::tan, "tan")
    }

    pub fn cosh(&self) -> Result<Number> {
        self.elementary(f64::cosh, Complex::cosh, Quaternion::cosh, "cosh")
    }

    pub fn sinh(&self) -> Result<Number> {
        self.elementary(f64::sinh, Complex::sinh, Quaternion::sinh, "sinh")
    }

    pub fn tanh(&self) -> Result<Number> {
        self.elementary(f64::tanh, Complex::tanh, Quaternion::tanh, "tanh")
    }

    /// Arcsine; a real input beyond the cut at +-1 promotes to the
    /// complex plane.
    pub fn arcsin(&self) -> Result<Number> {
        match self {
            Number::Real(r) => {
                let x = r.to_f64();
                if x.abs() <= 1.0 {
                    Ok(Number::float(x.asin()))
                } else {
                    Ok(Number::Complex(Complex::from_real(r.clone()).arcsin()))
                }
            }
            _ => self.elementary(f64::asin, Complex::arcsin, Quaternion::arcsin, "arcsin"),
        }
    }

    /// Arccosine; a real input beyond the cut at +-1 promotes to the
    /// complex plane.
    pub fn arccos(&self) -> Result<Number> {
        match self {
            Number::Real(r) => {
                let x = r.to_f64();
                if x.abs() <= 1.0 {
                    Ok(Number::float(x.acos()))
                } else {
                    Ok(Number::Complex(Complex::from_real(r.clone()).arccos()))
                }
            }
            _ => self.elementary(f64::acos, Complex::arccos, Quaternion::arccos, "arccos"),
        }
    }

    pub fn arctan(&self) -> Result<Number> {
        self.elementary(f64::atan, Complex::arctan, Quaternion::arctan, "arctan")
    }

    pub fn arsinh(&self) -> Result<Number> {
        self.elementary(f64::asinh, Complex::arsinh, Quaternion::arsinh, "arsinh")
    }

    /// Inverse hyperbolic cosine; a real input below 1 promotes to the
    /// complex plane.
    pub fn arccosh(&self) -> Result<Number> {
        match self {
            Number::Real(r) => {
                let x = r.to_f64();
                if x >= 1.0 {
                    Ok(Number::float(x.acosh()))
                } else {
                    Ok(Number::Complex(Complex::from_real(r.clone()).arccosh()))
                }
            }
            _ => self.elementary(f64::acosh, Complex::arccosh, Quaternion::arccosh, "arccosh"),
        }
    }

    /// Inverse hyperbolic tangent; a real input beyond the cut at +-1
    /// promotes to the complex plane.
    pub fn artanh(&self) -> Result<Number> {
        match self {
            Number::Real(r) => {
                let x = r.to_f64();
                if x.abs() <= 1.0 {
                    Ok(Number::float(x.atanh()))
                } else {
                    Ok(Number::Complex(Complex::from_real(r.clone()).artanh()))
                }
            }
            _ => self.elementary(f64::atanh, Complex::artanh, Quaternion::artanh, "artanh"),
        }
    }

    fn elementary(
        &self,
        real_fn: fn(f64) -> f64,
        complex_fn: fn(&Complex) -> Complex,
        quaternion_fn: fn(&Quaternion) -> Quaternion,
        name: &'static str,
    ) -> Result<Number> {
        match self {
            Number::Real(r) => Ok(Number::float(real_fn(r.to_f64()))),
            Number::Complex(c) => Ok(Number::Complex(complex_fn(c))),
            Number::Quaternion(q) => Ok(Number::Quaternion(quaternion_fn(q))),
            Number::Vector(v) => Ok(Number::Vector(v.try_map(|x| {
                x.elementary(real_fn, complex_fn, quaternion_fn, name)
            })?)),
            Number::Polynomial(_) => {
                Err(Error::type_error_in(name, "number", self.type_name()))
            }
        }
    }
}

/// Integer power of a real by squaring, exact over exact kinds.
fn real_pow(r: &Real, n: i64) -> Result<Real> {
    match n {
        0 => Ok(Real::Int(1)),
        1 => Ok(r.clone()),
        _ if n < 0 => {
            if r.is_zero() {
                return Err(Error::DivisionByZero);
            }
            let inv = Real::Int(1).div(r)?;
            Ok(real_pow_by_squaring(&inv, n.unsigned_abs()))
        }
        _ => Ok(real_pow_by_squaring(r, n as u64)),
    }
}

fn real_pow_by_squaring(r: &Real, mut n: u64) -> Real {
    let mut base = r.clone();
    let mut acc = Real::Int(1);
    while n > 0 {
        if n & 1 == 1 {
            acc = acc.mul(&base);
        }
        base = base.mul(&base);
        n >>= 1;
    }
    acc
}

// ----------------------------------------------------------------------
// Conversions
// ----------------------------------------------------------------------

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Real(Real::Int(n))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Real(Real::Float(f))
    }
}

impl From<Real> for Number {
    fn from(r: Real) -> Self {
        Number::Real(r)
    }
}

impl From<Complex> for Number {
    fn from(c: Complex) -> Self {
        Number::Complex(c)
    }
}

impl From<Quaternion> for Number {
    fn from(q: Quaternion) -> Self {
        Number::Quaternion(q)
    }
}

impl From<Vector> for Number {
    fn from(v: Vector) -> Self {
        Number::Vector(v)
    }
}

impl From<Polynomial> for Number {
    fn from(p: Polynomial) -> Self {
        Number::Polynomial(p)
    }
}

// ----------------------------------------------------------------------
// Equality, hashing, display
// ----------------------------------------------------------------------

impl PartialEq for Number {
    /// Cross-kind equality: two values are equal when the reduced form
    /// of one equals the other, whichever operand initiates the
    /// comparison. Symmetric and transitive across kinds.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Real(a), Number::Real(b)) => a == b,
            (Number::Complex(a), Number::Complex(b)) => a == b,
            (Number::Quaternion(a), Number::Quaternion(b)) => a == b,
            (Number::Vector(a), Number::Vector(b)) => a == b,
            (Number::Polynomial(a), Number::Polynomial(b)) => a == b,
            (Number::Complex(c), Number::Real(r)) | (Number::Real(r), Number::Complex(c)) => {
                c.imaginary().is_zero() && c.real() == r
            }
            (Number::Quaternion(q), Number::Real(r))
            | (Number::Real(r), Number::Quaternion(q)) => {
                q.i().is_zero() && q.j().is_zero() && q.k().is_zero() && q.real() == r
            }
            (Number::Quaternion(q), Number::Complex(c))
            | (Number::Complex(c), Number::Quaternion(q)) => {
                q.j().is_zero()
                    && q.k().is_zero()
                    && q.real() == c.real()
                    && q.i() == c.imaginary()
            }
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    /// Hashes the reduced canonical form, so that cross-kind equality
    /// stays consistent with hashing.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Number::Real(r) => r.hash(state),
            Number::Complex(c) => {
                if c.imaginary().is_zero() {
                    c.real().hash(state);
                } else {
                    state.write_u8(10);
                    c.real().hash(state);
                    c.imaginary().hash(state);
                }
            }
            Number::Quaternion(q) => {
                if q.j().is_zero() && q.k().is_zero() {
                    if q.i().is_zero() {
                        q.real().hash(state);
                    } else {
                        state.write_u8(10);
                        q.real().hash(state);
                        q.i().hash(state);
                    }
                } else {
                    state.write_u8(11);
                    q.real().hash(state);
                    q.i().hash(state);
                    q.j().hash(state);
                    q.k().hash(state);
                }
            }
            Number::Vector(v) => {
                state.write_u8(12);
                state.write_usize(v.len());
                for item in v.iter() {
                    item.hash(state);
                }
            }
            Number::Polynomial(p) => {
                state.write_u8(13);
                state.write_usize(p.coefficients().len());
                for c in p.coefficients() {
                    c.hash(state);
                }
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Real(r) => write!(f, "{}", r),
            Number::Complex(c) => write!(f, "{}", c),
            Number::Quaternion(q) => write!(f, "{}", q),
            Number::Vector(v) => write!(f, "{}", v),
            Number::Polynomial(p) => write!(f, "{}", p),
        }
    }
}
