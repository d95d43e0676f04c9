// hamilton-num - Polynomial container
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Dense univariate polynomials with numeric coefficients.
//!
//! Coefficients are stored constant-first with trailing zeros trimmed,
//! so equal polynomials are structurally equal. Polynomials combine with
//! scalars by distributing over the coefficients (addition touches the
//! constant term only); with each other by padded addition and
//! convolution.

use std::fmt;

use crate::error::Result;
use crate::value::Number;

/// An immutable dense polynomial, coefficients from x^0 upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: Vec<Number>,
}

impl Polynomial {
    /// Create a polynomial from coefficients (constant term first).
    /// Trailing zero coefficients are trimmed; the zero polynomial has
    /// no coefficients at all.
    pub fn new(mut coeffs: Vec<Number>) -> Self {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        Polynomial { coeffs }
    }

    /// The coefficients, constant term first.
    pub fn coefficients(&self) -> &[Number] {
        &self.coeffs
    }

    /// The degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// True for the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    fn coeff(&self, idx: usize) -> Number {
        self.coeffs
            .get(idx)
            .cloned()
            .unwrap_or_else(|| Number::from(0))
    }

    /// Add two polynomials.
    pub fn add(&self, other: &Polynomial) -> Result<Polynomial> {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut out = Vec::with_capacity(len);
        for idx in 0..len {
            out.push(self.coeff(idx).add(&other.coeff(idx))?);
        }
        Ok(Polynomial::new(out))
    }

    /// Subtract a polynomial.
    pub fn sub(&self, other: &Polynomial) -> Result<Polynomial> {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut out = Vec::with_capacity(len);
        for idx in 0..len {
            out.push(self.coeff(idx).sub(&other.coeff(idx))?);
        }
        Ok(Polynomial::new(out))
    }

    /// Multiply two polynomials by convolution, preserving the factor
    /// order of the coefficient products.
    pub fn mul(&self, other: &Polynomial) -> Result<Polynomial> {
        if self.is_zero() || other.is_zero() {
            return Ok(Polynomial::new(Vec::new()));
        }
        let len = self.coeffs.len() + other.coeffs.len() - 1;
        let mut out = vec![Number::from(0); len];
        for (ia, a) in self.coeffs.iter().enumerate() {
            for (ib, b) in other.coeffs.iter().enumerate() {
                out[ia + ib] = out[ia + ib].add(&a.mul(b)?)?;
            }
        }
        Ok(Polynomial::new(out))
    }

    /// Negate every coefficient.
    pub fn neg(&self) -> Polynomial {
        Polynomial {
            coeffs: self.coeffs.iter().map(|c| c.neg()).collect(),
        }
    }

    /// Add a scalar to the constant term.
    pub fn add_scalar(&self, s: &Number) -> Result<Polynomial> {
        let mut out = self.coeffs.clone();
        if out.is_empty() {
            out.push(s.clone());
        } else {
            out[0] = out[0].add(s)?;
        }
        Ok(Polynomial::new(out))
    }

    /// Apply an operation to every coefficient.
    pub(crate) fn try_map(&self, f: impl Fn(&Number) -> Result<Number>) -> Result<Polynomial> {
        let coeffs: Result<Vec<Number>> = self.coeffs.iter().map(f).collect();
        Ok(Polynomial::new(coeffs?))
    }

    /// Apply an infallible operation to every coefficient.
    pub(crate) fn map(&self, f: impl Fn(&Number) -> Number) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(f).collect())
    }

    /// Evaluate at `x` by Horner's rule; coefficients stay on the left
    /// of each product.
    pub fn evaluate(&self, x: &Number) -> Result<Number> {
        let mut iter = self.coeffs.iter().rev();
        let mut acc = match iter.next() {
            Some(c) => c.clone(),
            None => return Ok(Number::from(0)),
        };
        for c in iter {
            acc = acc.mul(x)?.add(c)?;
        }
        Ok(acc)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (power, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            let unit = power > 0 && *c == Number::from(1);
            if !unit {
                // Coefficients whose text has internal structure get parens
                let text = c.to_string();
                if text.contains(' ') {
                    write!(f, "({})", text)?;
                } else {
                    write!(f, "{}", text)?;
                }
            }
            match (power, unit) {
                (0, _) => {}
                (1, true) => write!(f, "x")?,
                (1, false) => write!(f, " x")?,
                (_, true) => write!(f, "x^{}", power)?,
                (_, false) => write!(f, " x^{}", power)?,
            }
        }
        Ok(())
    }
}
