// hamilton-num - Quaternion values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Rank-4 hypercomplex values: `re + i + j + k` under Hamilton's table.
//!
//! ```text
//!  i*i = j*j = k*k = -1
//!  i*j = k   j*k = i   k*i = j
//!  j*i = -k  k*j = -i  i*k = -j
//! ```
//!
//! Multiplication is non-commutative; every derived identity here keeps
//! the product order explicit. The transcendental functions decompose a
//! value into `real + unreal`: the unreal part squares to the negative
//! of its squared norm, so it plays the role the imaginary unit plays
//! for complex values, and the shared scalar kernels apply unchanged to
//! `(real, |unreal|)` with the second component redistributed along
//! `unreal / |unreal|`.

use std::fmt;

use crate::complex::Complex;
use crate::error::{Error, Result};
use crate::functions;
use crate::real::Real;
use crate::value::Number;

/// An immutable quaternion over the real scalar tower.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quaternion {
    re: Real,
    i: Real,
    j: Real,
    k: Real,
}

impl Quaternion {
    /// Create a quaternion from its four components.
    pub fn new(
        re: impl Into<Real>,
        i: impl Into<Real>,
        j: impl Into<Real>,
        k: impl Into<Real>,
    ) -> Self {
        Quaternion {
            re: re.into(),
            i: i.into(),
            j: j.into(),
            k: k.into(),
        }
    }

    /// Create a degenerate quaternion from a real scalar.
    pub fn from_real(re: impl Into<Real>) -> Self {
        Quaternion::new(re.into(), 0, 0, 0)
    }

    /// Embed a complex value on the i axis.
    pub fn from_complex(z: &Complex) -> Self {
        Quaternion::new(z.real().clone(), z.imaginary().clone(), 0, 0)
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Quaternion::new(0, 0, 0, 0)
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Quaternion::new(1, 0, 0, 0)
    }

    /// The i unit.
    pub fn unit_i() -> Self {
        Quaternion::new(0, 1, 0, 0)
    }

    /// The j unit.
    pub fn unit_j() -> Self {
        Quaternion::new(0, 0, 1, 0)
    }

    /// The k unit.
    pub fn unit_k() -> Self {
        Quaternion::new(0, 0, 0, 1)
    }

    /// The real component.
    pub fn real(&self) -> &Real {
        &self.re
    }

    /// The i component.
    pub fn i(&self) -> &Real {
        &self.i
    }

    /// The j component.
    pub fn j(&self) -> &Real {
        &self.j
    }

    /// The k component.
    pub fn k(&self) -> &Real {
        &self.k
    }

    /// True when all four components are algebraically zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.i.is_zero() && self.j.is_zero() && self.k.is_zero()
    }

    fn parts(&self) -> (f64, f64, f64, f64) {
        (
            self.re.to_f64(),
            self.i.to_f64(),
            self.j.to_f64(),
            self.k.to_f64(),
        )
    }

    // ------------------------------------------------------------------
    // Ring operations (exact over exact components)
    // ------------------------------------------------------------------

    pub fn add(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            re: self.re.add(&other.re),
            i: self.i.add(&other.i),
            j: self.j.add(&other.j),
            k: self.k.add(&other.k),
        }
    }

    pub fn sub(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            re: self.re.sub(&other.re),
            i: self.i.sub(&other.i),
            j: self.j.sub(&other.j),
            k: self.k.sub(&other.k),
        }
    }

    /// Hamilton product. Not commutative: the receiver is the left
    /// factor.
    pub fn mul(&self, other: &Quaternion) -> Quaternion {
        let (a1, b1, c1, d1) = (&self.re, &self.i, &self.j, &self.k);
        let (a2, b2, c2, d2) = (&other.re, &other.i, &other.j, &other.k);
        Quaternion {
            re: a1.mul(a2).sub(&b1.mul(b2)).sub(&c1.mul(c2)).sub(&d1.mul(d2)),
            i: a1.mul(b2).add(&b1.mul(a2)).add(&c1.mul(d2)).sub(&d1.mul(c2)),
            j: a1.mul(c2).sub(&b1.mul(d2)).add(&c1.mul(a2)).add(&d1.mul(b2)),
            k: a1.mul(d2).add(&b1.mul(c2)).sub(&c1.mul(b2)).add(&d1.mul(a2)),
        }
    }

    pub fn neg(&self) -> Quaternion {
        Quaternion {
            re: self.re.neg(),
            i: self.i.neg(),
            j: self.j.neg(),
            k: self.k.neg(),
        }
    }

    /// Conjugate: negates the unreal part, so `q * conjugate(q)` is the
    /// squared norm embedded in a zero-unreal quaternion.
    pub fn conjugate(&self) -> Quaternion {
        Quaternion {
            re: self.re.clone(),
            i: self.i.neg(),
            j: self.j.neg(),
            k: self.k.neg(),
        }
    }

    /// Sum of the squared components, exact over exact components.
    pub fn squared_norm(&self) -> Real {
        self.re
            .mul(&self.re)
            .add(&self.i.mul(&self.i))
            .add(&self.j.mul(&self.j))
            .add(&self.k.mul(&self.k))
    }

    /// Euclidean norm by the naive formula.
    pub fn abs(&self) -> Real {
        let (a, b, c, d) = self.parts();
        Real::Float((a * a + b * b + c * c + d * d).sqrt())
    }

    /// Euclidean norm with scaling, finite wherever the components are.
    pub fn abs_secure(&self) -> Real {
        let (a, b, c, d) = self.parts();
        Real::Float(functions::norm_scaled(&[a, b, c, d]))
    }

    /// Multiplicative inverse: `conjugate(q) / squared_norm(q)`.
    pub fn reciprocal(&self) -> Result<Quaternion> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let n = self.squared_norm();
        Ok(Quaternion {
            re: self.re.div(&n)?,
            i: self.i.neg().div(&n)?,
            j: self.j.neg().div(&n)?,
            k: self.k.neg().div(&n)?,
        })
    }

    /// Right division: `self * other^-1`, in that order.
    pub fn div(&self, other: &Quaternion) -> Result<Quaternion> {
        Ok(self.mul(&other.reciprocal()?))
    }

    // ------------------------------------------------------------------
    // Transcendental functions via the unreal decomposition
    // ------------------------------------------------------------------

    /// Apply a scalar kernel to `(real, |unreal|)` and redistribute the
    /// second component along the unreal direction. With a vanishing
    /// unreal part the direction is arbitrary and the i axis is used.
    fn apply(&self, kernel: fn(f64, f64) -> (f64, f64)) -> Quaternion {
        let (w, x, y, z) = self.parts();
        let vn = functions::norm_scaled(&[x, y, z]);
        let (u, v) = kernel(w, vn);
        if vn == 0.0 {
            Quaternion::new(u, v, 0.0, 0.0)
        } else {
            let s = v / vn;
            Quaternion::new(u, x * s, y * s, z * s)
        }
    }

    pub fn exp(&self) -> Quaternion {
        self.apply(functions::exp_parts)
    }

    /// Principal natural logarithm; undefined at zero.
    pub fn ln(&self) -> Result<Quaternion> {
        if self.is_zero() {
            return Err(Error::domain("ln", "logarithm of zero is undefined"));
        }
        Ok(self.apply(functions::ln_parts))
    }

    /// Logarithm to an arbitrary base: `ln(self) * ln(base)^-1`.
    pub fn log(&self, base: &Quaternion) -> Result<Quaternion> {
        self.ln()?.div(&base.ln()?)
    }

    pub fn sqrt(&self) -> Quaternion {
        self.apply(functions::sqrt_parts)
    }

    pub fn cos(&self) -> Quaternion {
        self.apply(functions::cos_parts)
    }

    pub fn sin(&self) -> Quaternion {
        self.apply(functions::sin_parts)
    }

    pub fn tan(&self) -> Quaternion {
        self.apply(functions::tan_parts)
    }

    pub fn cosh(&self) -> Quaternion {
        self.apply(functions::cosh_parts)
    }

    pub fn sinh(&self) -> Quaternion {
        self.apply(functions::sinh_parts)
    }

    pub fn tanh(&self) -> Quaternion {
        self.apply(functions::tanh_parts)
    }

    pub fn arcsin(&self) -> Quaternion {
        self.apply(functions::arcsin_parts)
    }

    pub fn arccos(&self) -> Quaternion {
        self.apply(functions::arccos_parts)
    }

    pub fn arctan(&self) -> Quaternion {
        self.apply(functions::arctan_parts)
    }

    pub fn arsinh(&self) -> Quaternion {
        self.apply(functions::arsinh_parts)
    }

    pub fn arccosh(&self) -> Quaternion {
        self.apply(functions::arccosh_parts)
    }

    pub fn artanh(&self) -> Quaternion {
        self.apply(functions::artanh_parts)
    }

    // ------------------------------------------------------------------
    // Powers, angle, reduction
    // ------------------------------------------------------------------

    /// Integer power by squaring. Powers of a single value commute with
    /// each other, so the product order inside the loop is immaterial.
    pub fn raised_to_integer(&self, n: i64) -> Result<Quaternion> {
        match n {
            0 => Ok(Quaternion::one()),
            1 => Ok(self.clone()),
            _ if n < 0 => {
                let inv = self.reciprocal()?;
                Ok(inv.pow_by_squaring(n.unsigned_abs()))
            }
            _ => Ok(self.pow_by_squaring(n as u64)),
        }
    }

    fn pow_by_squaring(&self, mut n: u64) -> Quaternion {
        let mut base = self.clone();
        let mut acc = Quaternion::one();
        while n > 0 {
            if n & 1 == 1 {
                acc = acc.mul(&base);
            }
            base = base.mul(&base);
            n >>= 1;
        }
        acc
    }

    /// Angle against the positive real axis: `arccos(real / abs)`, in
    /// [0, pi]; undefined at zero.
    pub fn angle(&self) -> Result<Real> {
        if self.is_zero() {
            return Err(Error::domain("angle", "angle of zero is undefined"));
        }
        let (a, b, c, d) = self.parts();
        let m = functions::norm_scaled(&[a, b, c, d]);
        Ok(Real::Float((a / m).clamp(-1.0, 1.0).acos()))
    }

    /// `angle`, in degrees.
    pub fn angle_in_degrees(&self) -> Result<Real> {
        Ok(Real::Float(self.angle()?.to_f64().to_degrees()))
    }

    /// Demote to the cheapest equal representation: the real scalar when
    /// the unreal part is zero, a complex on the i axis when only j and
    /// k are zero, otherwise self unchanged.
    pub fn reduce(&self) -> Number {
        if self.j.is_zero() && self.k.is_zero() {
            if self.i.is_zero() {
                Number::Real(self.re.clone())
            } else {
                Number::Complex(Complex::new(self.re.clone(), self.i.clone()))
            }
        } else {
            Number::Quaternion(self.clone())
        }
    }
}

impl From<Real> for Quaternion {
    fn from(re: Real) -> Self {
        Quaternion::from_real(re)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} i: {} j: {} k: {})", self.re, self.i, self.j, self.k)
    }
}
