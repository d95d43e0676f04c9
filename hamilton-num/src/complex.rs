// hamilton-num - Complex values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Rank-2 hypercomplex values: `re + im*i` with `i^2 = -1`.
//!
//! Components are `Real` scalars, so the ring operations (`add`, `sub`,
//! `mul`, and the division algorithms) stay exact over exact components;
//! the transcendental functions go through the float kernels and return
//! float components. Values are immutable; every operation returns a
//! fresh value.

use std::fmt;

use crate::error::{Error, Result};
use crate::functions;
use crate::random;
use crate::real::Real;
use crate::value::Number;

/// An immutable complex number over the real scalar tower.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Complex {
    re: Real,
    im: Real,
}

impl Complex {
    /// Create a complex from rectangular components.
    pub fn new(re: impl Into<Real>, im: impl Into<Real>) -> Self {
        Complex {
            re: re.into(),
            im: im.into(),
        }
    }

    /// Create a degenerate complex from a real scalar.
    pub fn from_real(re: impl Into<Real>) -> Self {
        Complex {
            re: re.into(),
            im: Real::Int(0),
        }
    }

    /// Create a complex from polar components.
    pub fn from_polar(abs: impl Into<Real>, arg: impl Into<Real>) -> Self {
        let m = abs.into().to_f64();
        let t = arg.into().to_f64();
        Complex {
            re: Real::Float(m * t.cos()),
            im: Real::Float(m * t.sin()),
        }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Complex::new(0, 0)
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Complex::new(1, 0)
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Complex::new(0, 1)
    }

    /// The real component.
    pub fn real(&self) -> &Real {
        &self.re
    }

    /// The imaginary component.
    pub fn imaginary(&self) -> &Real {
        &self.im
    }

    /// True when both components are algebraically zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    fn parts(&self) -> (f64, f64) {
        (self.re.to_f64(), self.im.to_f64())
    }

    fn from_parts((re, im): (f64, f64)) -> Self {
        Complex {
            re: Real::Float(re),
            im: Real::Float(im),
        }
    }

    // ------------------------------------------------------------------
    // Ring operations (exact over exact components)
    // ------------------------------------------------------------------

    pub fn add(&self, other: &Complex) -> Complex {
        Complex {
            re: self.re.add(&other.re),
            im: self.im.add(&other.im),
        }
    }

    pub fn sub(&self, other: &Complex) -> Complex {
        Complex {
            re: self.re.sub(&other.re),
            im: self.im.sub(&other.im),
        }
    }

    /// `(a + bi)(c + di) = (ac - bd) + (ad + bc)i`.
    pub fn mul(&self, other: &Complex) -> Complex {
        let (a, b) = (&self.re, &self.im);
        let (c, d) = (&other.re, &other.im);
        Complex {
            re: a.mul(c).sub(&b.mul(d)),
            im: a.mul(d).add(&b.mul(c)),
        }
    }

    pub fn neg(&self) -> Complex {
        Complex {
            re: self.re.neg(),
            im: self.im.neg(),
        }
    }

    pub fn conjugate(&self) -> Complex {
        Complex {
            re: self.re.clone(),
            im: self.im.neg(),
        }
    }

    /// `re^2 + im^2`, exact over exact components.
    pub fn squared_norm(&self) -> Real {
        self.re.mul(&self.re).add(&self.im.mul(&self.im))
    }

    /// Euclidean norm by the naive formula `sqrt(re^2 + im^2)`; the
    /// squares overflow or underflow when the components are extreme.
    pub fn abs(&self) -> Real {
        let (x, y) = self.parts();
        Real::Float((x * x + y * y).sqrt())
    }

    /// Euclidean norm with components scaled by the larger magnitude
    /// before squaring, staying finite wherever the components are.
    pub fn abs_secure(&self) -> Real {
        let (x, y) = self.parts();
        Real::Float(functions::norm_scaled(&[x, y]))
    }

    /// Four-quadrant angle in (-pi, pi]; undefined at zero.
    pub fn arg(&self) -> Result<Real> {
        if self.is_zero() {
            return Err(Error::domain("arg", "angle of zero is undefined"));
        }
        let (x, y) = self.parts();
        Ok(Real::Float(functions::arg_parts(x, y)))
    }

    // ------------------------------------------------------------------
    // Division
    // ------------------------------------------------------------------

    /// Divide; defaults to the scaled three-division algorithm.
    pub fn div(&self, other: &Complex) -> Result<Complex> {
        self.div_scaled(other)
    }

    /// Three-division algorithm: scale by the ratio of the
    /// larger-magnitude divisor component, then divide twice by the
    /// rescaled denominator.
    pub fn div_scaled(&self, other: &Complex) -> Result<Complex> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (a, b) = (&self.re, &self.im);
        let (c, d) = (&other.re, &other.im);
        if c.abs().compare(&d.abs())? != std::cmp::Ordering::Less {
            let r = d.div(c)?;
            let den = c.add(&d.mul(&r));
            Ok(Complex {
                re: a.add(&b.mul(&r)).div(&den)?,
                im: b.sub(&a.mul(&r)).div(&den)?,
            })
        } else {
            let r = c.div(d)?;
            let den = d.add(&c.mul(&r));
            Ok(Complex {
                re: a.mul(&r).add(b).div(&den)?,
                im: b.mul(&r).sub(a).div(&den)?,
            })
        }
    }

    /// Six-division algorithm: normalize both operands by the sum of the
    /// absolute values of the divisor's components.
    pub fn div_normalized(&self, other: &Complex) -> Result<Complex> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let s = other.re.abs().add(&other.im.abs());
        let ars = self.re.div(&s)?;
        let ais = self.im.div(&s)?;
        let brs = other.re.div(&s)?;
        let bis = other.im.div(&s)?;
        let s2 = brs.mul(&brs).add(&bis.mul(&bis));
        Ok(Complex {
            re: ars.mul(&brs).add(&ais.mul(&bis)).div(&s2)?,
            im: ais.mul(&brs).sub(&ars.mul(&bis)).div(&s2)?,
        })
    }

    /// Multiplicative inverse.
    pub fn reciprocal(&self) -> Result<Complex> {
        Complex::one().div(self)
    }

    // ------------------------------------------------------------------
    // Transcendental functions
    // ------------------------------------------------------------------

    pub fn exp(&self) -> Complex {
        Self::from_parts(functions::exp_parts(self.re.to_f64(), self.im.to_f64()))
    }

    /// Principal natural logarithm; undefined at zero.
    pub fn ln(&self) -> Result<Complex> {
        if self.is_zero() {
            return Err(Error::domain("ln", "logarithm of zero is undefined"));
        }
        let (x, y) = self.parts();
        Ok(Self::from_parts(functions::ln_parts(x, y)))
    }

    /// Logarithm to an arbitrary base: `ln(self) / ln(base)`.
    pub fn log(&self, base: &Complex) -> Result<Complex> {
        self.ln()?.div(&base.ln()?)
    }

    /// Principal square root; the imaginary part keeps the sign of the
    /// input's imaginary part, and a nonnegative real input yields its
    /// nonnegative real root.
    pub fn sqrt(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::sqrt_parts(x, y))
    }

    pub fn cos(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::cos_parts(x, y))
    }

    pub fn sin(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::sin_parts(x, y))
    }

    pub fn tan(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::tan_parts(x, y))
    }

    pub fn cosh(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::cosh_parts(x, y))
    }

    pub fn sinh(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::sinh_parts(x, y))
    }

    pub fn tanh(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::tanh_parts(x, y))
    }

    pub fn arcsin(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::arcsin_parts(x, y))
    }

    pub fn arccos(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::arccos_parts(x, y))
    }

    pub fn arctan(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::arctan_parts(x, y))
    }

    pub fn arsinh(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::arsinh_parts(x, y))
    }

    pub fn arccosh(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::arccosh_parts(x, y))
    }

    pub fn artanh(&self) -> Complex {
        let (x, y) = self.parts();
        Self::from_parts(functions::artanh_parts(x, y))
    }

    // ------------------------------------------------------------------
    // Powers, random, reduction
    // ------------------------------------------------------------------

    /// Integer power by squaring: O(log n) multiplications, exact over
    /// exact components. A negative exponent inverts the base first, so
    /// a zero base with a negative exponent is a `DivisionByZero`.
    pub fn raised_to_integer(&self, n: i64) -> Result<Complex> {
        match n {
            0 => Ok(Complex::one()),
            1 => Ok(self.clone()),
            _ if n < 0 => {
                let inv = self.reciprocal()?;
                Ok(inv.pow_by_squaring(n.unsigned_abs()))
            }
            _ => Ok(self.pow_by_squaring(n as u64)),
        }
    }

    fn pow_by_squaring(&self, mut n: u64) -> Complex {
        let mut base = self.clone();
        let mut acc = Complex::one();
        while n > 0 {
            if n & 1 == 1 {
                acc = acc.mul(&base);
            }
            base = base.mul(&base);
            n >>= 1;
        }
        acc
    }

    /// A uniform point inside the disc whose radius is this value's own
    /// magnitude: magnitude drawn uniformly from [0, 1), angle from
    /// [0, 2*pi), times self.
    pub fn random(&self) -> Complex {
        let m = random::next_f64();
        let t = random::next_f64() * std::f64::consts::TAU;
        self.mul(&Complex::from_polar(m, t))
    }

    /// Demote to the cheapest equal representation: the bare real scalar
    /// when the imaginary part is zero, otherwise self unchanged.
    pub fn reduce(&self) -> Number {
        if self.im.is_zero() {
            Number::Real(self.re.clone())
        } else {
            Number::Complex(self.clone())
        }
    }
}

impl From<Real> for Complex {
    fn from(re: Real) -> Self {
        Complex::from_real(re)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_negative() {
            write!(f, "{} - {} i", self.re, self.im.abs())
        } else {
            write!(f, "{} + {} i", self.re, self.im)
        }
    }
}
