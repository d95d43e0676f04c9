// hamilton-num - Shared scalar kernels
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Scalar kernels for the transcendental functions.
//!
//! Each kernel is a pure function on an `(a, b)` pair standing for
//! `a + b·u`, where `u` is a unit whose square is -1. Complex values call
//! them with `(re, im)`; quaternions call them with `(real, |unreal|)`
//! and redistribute the second component along the unreal direction.
//! Keeping the kernels in one place means the branch-cut handling exists
//! exactly once.

use std::f64::consts::{FRAC_PI_2, PI};

/// Scaled Euclidean norm: divides every component by the largest
/// magnitude before squaring, so the squares neither overflow nor
/// underflow when the components do not. A zero scale short-circuits.
pub(crate) fn norm_scaled(parts: &[f64]) -> f64 {
    let scale = parts.iter().fold(0.0f64, |m, p| m.max(p.abs()));
    if scale == 0.0 {
        return 0.0;
    }
    let sum: f64 = parts.iter().map(|p| (p / scale) * (p / scale)).sum();
    scale * sum.sqrt()
}

/// Four-quadrant angle of `a + b·u`, normalized to (-pi, pi].
pub(crate) fn arg_parts(a: f64, b: f64) -> f64 {
    let t = b.atan2(a);
    if t == -PI {
        PI
    } else {
        t
    }
}

/// `e^(a + b·u) = e^a (cos b + u sin b)`.
pub(crate) fn exp_parts(a: f64, b: f64) -> (f64, f64) {
    let ea = a.exp();
    (ea * b.cos(), ea * b.sin())
}

/// Principal logarithm. The caller rejects the zero value.
pub(crate) fn ln_parts(a: f64, b: f64) -> (f64, f64) {
    (norm_scaled(&[a, b]).ln(), arg_parts(a, b))
}

/// Principal square root: the second component keeps the sign of `b`,
/// and a nonnegative real input yields its nonnegative real root.
pub(crate) fn sqrt_parts(a: f64, b: f64) -> (f64, f64) {
    if a == 0.0 && b == 0.0 {
        return (0.0, 0.0);
    }
    let t = ((norm_scaled(&[a, b]) + a.abs()) / 2.0).sqrt();
    if a >= 0.0 {
        (t, b / (2.0 * t))
    } else {
        (b.abs() / (2.0 * t), t.copysign(b))
    }
}

/// `cosh(a + b·u) = cosh a cos b + u sinh a sin b`.
pub(crate) fn cosh_parts(a: f64, b: f64) -> (f64, f64) {
    (a.cosh() * b.cos(), a.sinh() * b.sin())
}

/// `sinh(a + b·u) = sinh a cos b + u cosh a sin b`.
pub(crate) fn sinh_parts(a: f64, b: f64) -> (f64, f64) {
    (a.sinh() * b.cos(), a.cosh() * b.sin())
}

/// `cos z = cosh(u·z)`.
pub(crate) fn cos_parts(a: f64, b: f64) -> (f64, f64) {
    cosh_parts(-b, a)
}

/// `sin z = -u · sinh(u·z)`.
pub(crate) fn sin_parts(a: f64, b: f64) -> (f64, f64) {
    let (x, y) = sinh_parts(-b, a);
    (y, -x)
}

pub(crate) fn tan_parts(a: f64, b: f64) -> (f64, f64) {
    let (sr, si) = sin_parts(a, b);
    let (cr, ci) = cos_parts(a, b);
    div_parts(sr, si, cr, ci)
}

pub(crate) fn tanh_parts(a: f64, b: f64) -> (f64, f64) {
    let (sr, si) = sinh_parts(a, b);
    let (cr, ci) = cosh_parts(a, b);
    div_parts(sr, si, cr, ci)
}

/// Scaled division of `(ar + ai·u) / (br + bi·u)`: three divisions, the
/// first by the larger-magnitude divisor component.
pub(crate) fn div_parts(ar: f64, ai: f64, br: f64, bi: f64) -> (f64, f64) {
    if br.abs() >= bi.abs() {
        let r = bi / br;
        let den = br + bi * r;
        ((ar + ai * r) / den, (ai - ar * r) / den)
    } else {
        let r = br / bi;
        let den = bi + br * r;
        ((ar * r + ai) / den, (ai * r - ar) / den)
    }
}

fn mul_parts(ar: f64, ai: f64, br: f64, bi: f64) -> (f64, f64) {
    (ar * br - ai * bi, ar * bi + ai * br)
}

/// Stable arcsine.
///
/// A purely real input beyond the cut at +-1 gets the closed form
/// directly, so no rounding can smuggle in a spurious tiny second
/// component. Otherwise the branch is picked through the intermediate
/// quantities `tmp`, `delta` and `sh2y`: `sh2y` is the squared
/// hyperbolic sine of the result's second component, and copying the
/// sign of `b` onto that component selects the correct side of the cut
/// without cancellation near +-1.
pub(crate) fn arcsin_parts(a: f64, b: f64) -> (f64, f64) {
    if b == 0.0 && a.abs() > 1.0 {
        return (FRAC_PI_2.copysign(a), a.abs().acosh().copysign(b));
    }
    let tmp = (a * a + b * b - 1.0) / 2.0;
    let delta = tmp * tmp + b * b;
    let sh2y = tmp + delta.sqrt();
    let shy = sh2y.sqrt();
    let chy = (1.0 + sh2y).sqrt();
    ((a / chy).clamp(-1.0, 1.0).asin(), shy.asinh().copysign(b))
}

/// `arccos z = pi/2 - arcsin z`.
pub(crate) fn arccos_parts(a: f64, b: f64) -> (f64, f64) {
    let (x, y) = arcsin_parts(a, b);
    (FRAC_PI_2 - x, -y)
}

/// `arsinh z = -u · arcsin(u·z)`.
pub(crate) fn arsinh_parts(a: f64, b: f64) -> (f64, f64) {
    let (x, y) = arcsin_parts(-b, a);
    (y, -x)
}

/// `arccosh z = +-u · arccos z`, signed so the real part is nonnegative.
pub(crate) fn arccosh_parts(a: f64, b: f64) -> (f64, f64) {
    let (x, y) = arccos_parts(a, b);
    if y <= 0.0 {
        (-y, x)
    } else {
        (y, -x)
    }
}

/// `artanh z = arsinh(z / sqrt(1 - z^2))`, with the cut beyond +-1 on
/// the real axis taken in closed form and the poles at +-1 mapped to
/// signed infinity.
pub(crate) fn artanh_parts(a: f64, b: f64) -> (f64, f64) {
    if b == 0.0 && a.abs() > 1.0 {
        let re = (0.5 * ((a.abs() + 1.0) / (a.abs() - 1.0)).ln()).copysign(a);
        return (re, FRAC_PI_2.copysign(b));
    }
    if b == 0.0 && a.abs() == 1.0 {
        return (f64::INFINITY.copysign(a), 0.0);
    }
    let (zr, zi) = mul_parts(a, b, a, b);
    let (sr, si) = sqrt_parts(1.0 - zr, -zi);
    let (qr, qi) = div_parts(a, b, sr, si);
    arsinh_parts(qr, qi)
}

/// `arctan z = arcsin(z / sqrt(1 + z^2))`, with the cut beyond +-u on
/// the imaginary axis taken in closed form and the poles at +-u mapped
/// to signed infinity.
pub(crate) fn arctan_parts(a: f64, b: f64) -> (f64, f64) {
    if a == 0.0 && b.abs() > 1.0 {
        let im = (0.5 * ((b.abs() + 1.0) / (b.abs() - 1.0)).ln()).copysign(b);
        return (FRAC_PI_2.copysign(b), im);
    }
    if a == 0.0 && b.abs() == 1.0 {
        return (0.0, f64::INFINITY.copysign(b));
    }
    let (zr, zi) = mul_parts(a, b, a, b);
    let (sr, si) = sqrt_parts(1.0 + zr, zi);
    let (qr, qi) = div_parts(a, b, sr, si);
    arcsin_parts(qr, qi)
}
