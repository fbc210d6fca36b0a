//! Adaptive quadrature for the per-edge lune integrals.
//!
//! Classic adaptive Simpson with Richardson error control. The integrands are
//! smooth trigonometric products and the inner lower bound is a bounded
//! arctangent, so bisection terminates quickly away from pathological inputs;
//! when the depth cap is hit before the tolerance is met, the failure is
//! surfaced instead of returning a low-confidence value.
//!
//! Integration bounds may be reversed (`a > b`); the result is signed, which
//! the lune integrals rely on for edges traversed toward decreasing
//! longitude.

use std::fmt;

/// Quadrature failure: the tolerance could not be met within the depth cap.
#[derive(Clone, Copy, Debug)]
pub struct QuadError {
    /// Midpoint of the offending interval.
    pub at: f64,
    /// Interval half-width when the depth cap was hit.
    pub half_width: f64,
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "adaptive bisection exhausted near {} (half-width {:.3e})",
            self.at, self.half_width
        )
    }
}

impl std::error::Error for QuadError {}

/// One Simpson panel: interval, cached endpoint/midpoint samples, estimate.
#[derive(Clone, Copy)]
struct Panel {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    s: f64,
}

impl Panel {
    #[inline]
    fn new(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> Self {
        let s = (b - a) / 6.0 * (fa + 4.0 * fm + fb);
        Self { a, b, fa, fm, fb, s }
    }
}

/// ∫ f over [a, b] to absolute tolerance `tol`.
///
/// The integrand is fallible so that nested integrals can propagate their own
/// convergence failures through `?`.
pub(crate) fn integrate<F>(f: &F, a: f64, b: f64, tol: f64, max_depth: u32) -> Result<f64, QuadError>
where
    F: Fn(f64) -> Result<f64, QuadError>,
{
    if a == b {
        return Ok(0.0);
    }
    let m = 0.5 * (a + b);
    let whole = Panel::new(a, b, f(a)?, f(m)?, f(b)?);
    refine(f, whole, tol, max_depth)
}

fn refine<F>(f: &F, p: Panel, tol: f64, depth: u32) -> Result<f64, QuadError>
where
    F: Fn(f64) -> Result<f64, QuadError>,
{
    let m = 0.5 * (p.a + p.b);
    let lm = 0.5 * (p.a + m);
    let rm = 0.5 * (m + p.b);
    let left = Panel::new(p.a, m, p.fa, f(lm)?, p.fm);
    let right = Panel::new(m, p.b, p.fm, f(rm)?, p.fb);
    let err = left.s + right.s - p.s;
    if err.abs() <= 15.0 * tol {
        // Richardson extrapolation: the halved panels are one order better.
        return Ok(left.s + right.s + err / 15.0);
    }
    if depth == 0 {
        return Err(QuadError {
            at: m,
            half_width: 0.5 * (p.b - p.a).abs(),
        });
    }
    Ok(refine(f, left, 0.5 * tol, depth - 1)? + refine(f, right, 0.5 * tol, depth - 1)?)
}
