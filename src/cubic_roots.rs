//! Real roots of cubic, quadratic and linear polynomials.
//!
//! `solve_cubic` finds all real `t` with `a*t^3 + b*t^2 + c*t + d = 0`,
//! falling back to the quadratic and linear solvers when the leading
//! coefficients vanish. One real root is computed with Cardano's formula,
//! three with the trigonometric method; every root is then polished with a
//! couple of Newton steps against the unreduced coefficients.
//!
//! Curves consume the solver through the `CubicSolver` trait, so a different
//! solver (or a test stub) can be injected.

use std::f64::consts::PI;

// ============================================================================
// Constants
// ============================================================================

/// Relative size below which a leading coefficient is treated as zero.
pub const SOLVER_EPSILON: f64 = 1e-12;

const POLISH_ITERATIONS: u32 = 2;

// ============================================================================
// CubicRoots
// ============================================================================

/// Up to three real roots, stored inline.
///
/// Dereferences to `[f64]`. Order is whatever the producing solver yields.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicRoots {
    roots: [f64; 3],
    len: usize,
}

impl CubicRoots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a root. Values past the third are dropped.
    pub fn push(&mut self, root: f64) {
        if self.len < self.roots.len() {
            self.roots[self.len] = root;
            self.len += 1;
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.roots[..self.len]
    }
}

impl std::ops::Deref for CubicRoots {
    type Target = [f64];
    fn deref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl PartialEq for CubicRoots {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl FromIterator<f64> for CubicRoots {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut roots = CubicRoots::new();
        for r in iter {
            roots.push(r);
        }
        roots
    }
}

impl From<&[f64]> for CubicRoots {
    fn from(roots: &[f64]) -> Self {
        roots.iter().copied().collect()
    }
}

// ============================================================================
// Solvers
// ============================================================================

/// Root of `a*t + b = 0`. Empty when `a` is zero, including `0 = 0`.
pub fn solve_linear(a: f64, b: f64) -> CubicRoots {
    let mut result = CubicRoots::new();
    if a != 0.0 {
        let t = -b / a;
        if t.is_finite() {
            result.push(t);
        }
    }
    result
}

/// Real roots of `a*t^2 + b*t + c = 0`. A double root is reported once.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> CubicRoots {
    if a == 0.0 || a.abs() < SOLVER_EPSILON * b.abs().max(c.abs()) {
        return solve_linear(b, c);
    }
    let sc1 = b / a;
    let sc0 = c / a;
    if !(sc0.is_finite() && sc1.is_finite()) {
        return solve_linear(b, c);
    }

    let mut result = CubicRoots::new();
    let disc = sc1 * sc1 - 4.0 * sc0;
    if disc < 0.0 {
        return result;
    }
    if disc == 0.0 {
        result.push(-0.5 * sc1);
        return result;
    }
    // Citardauq form avoids cancellation in the smaller root.
    let q = -0.5 * (sc1 + disc.sqrt().copysign(sc1));
    result.push(q);
    result.push(sc0 / q);
    result
}

/// Real roots of `a*t^3 + b*t^2 + c*t + d = 0`.
///
/// Degenerate inputs reduce to `solve_quadratic`/`solve_linear`; a non-zero
/// constant or any non-finite coefficient yields no roots.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> CubicRoots {
    if !(a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite()) {
        return CubicRoots::new();
    }
    let rest = b.abs().max(c.abs()).max(d.abs());
    if a == 0.0 || a.abs() < SOLVER_EPSILON * rest {
        return polish_all(a, b, c, d, solve_quadratic(b, c, d));
    }

    // Monic: t^3 + p2*t^2 + p1*t + p0
    let p2 = b / a;
    let p1 = c / a;
    let p0 = d / a;
    if !(p0.is_finite() && p1.is_finite() && p2.is_finite()) {
        return polish_all(a, b, c, d, solve_quadratic(b, c, d));
    }

    // Depressed: s^3 + p*s + q with t = s - p2/3
    let shift = -p2 / 3.0;
    let p = p1 - p2 * p2 / 3.0;
    let q = 2.0 * p2 * p2 * p2 / 27.0 - p2 * p1 / 3.0 + p0;
    let half_q = 0.5 * q;
    let third_p = p / 3.0;
    let disc = half_q * half_q + third_p * third_p * third_p;
    // A double root leaves a discriminant of rounding noise; either sign would
    // lose it (one branch drops it, the other splits it by sqrt(noise)).
    let disc_scale = (half_q * half_q).max((third_p * third_p * third_p).abs());
    let disc = if disc.abs() <= SOLVER_EPSILON * disc_scale {
        0.0
    } else {
        disc
    };

    let mut result = CubicRoots::new();
    if disc > 0.0 {
        // Pick the cube root with the larger magnitude, derive the other
        // from u*v = -p/3.
        let u = (-half_q - disc.sqrt().copysign(half_q)).cbrt();
        let v = if u != 0.0 { -third_p / u } else { 0.0 };
        result.push(u + v + shift);
    } else if disc == 0.0 {
        if half_q == 0.0 {
            result.push(shift);
        } else {
            let u = (-half_q).cbrt();
            result.push(2.0 * u + shift);
            result.push(-u + shift);
        }
    } else {
        // disc < 0 implies p < 0
        let m = 2.0 * (-third_p).sqrt();
        let cos_arg = (3.0 * q / (p * m)).clamp(-1.0, 1.0);
        let theta = cos_arg.acos() / 3.0;
        for k in 0..3 {
            result.push(m * (theta - 2.0 * PI * k as f64 / 3.0).cos() + shift);
        }
    }
    polish_all(a, b, c, d, result)
}

#[inline]
fn eval_cubic(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    ((a * t + b) * t + c) * t + d
}

/// Newton steps against the full cubic; a step is only taken when
/// it reduces the residual.
fn polish(a: f64, b: f64, c: f64, d: f64, mut t: f64) -> f64 {
    let mut f = eval_cubic(a, b, c, d, t);
    for _ in 0..POLISH_ITERATIONS {
        if f == 0.0 {
            break;
        }
        let df = (3.0 * a * t + 2.0 * b) * t + c;
        if df == 0.0 {
            break;
        }
        let next = t - f / df;
        let next_f = eval_cubic(a, b, c, d, next);
        if !next.is_finite() || next_f.abs() >= f.abs() {
            break;
        }
        t = next;
        f = next_f;
    }
    t
}

fn polish_all(a: f64, b: f64, c: f64, d: f64, roots: CubicRoots) -> CubicRoots {
    roots.iter().map(|&t| polish(a, b, c, d, t)).collect()
}

// ============================================================================
// CubicSolver
// ============================================================================

/// A capability that returns the real roots of a cubic polynomial.
///
/// Implementations must handle degenerate coefficients themselves
/// (`a == 0` and so on) and report 0-3 roots in any order.
pub trait CubicSolver {
    fn solve_cubic(&self, a: f64, b: f64, c: f64, d: f64) -> CubicRoots;
}

impl<F> CubicSolver for F
where
    F: Fn(f64, f64, f64, f64) -> CubicRoots,
{
    fn solve_cubic(&self, a: f64, b: f64, c: f64, d: f64) -> CubicRoots {
        self(a, b, c, d)
    }
}

/// The default solver, backed by [`solve_cubic`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardanoSolver;

impl CubicSolver for CardanoSolver {
    fn solve_cubic(&self, a: f64, b: f64, c: f64, d: f64) -> CubicRoots {
        solve_cubic(a, b, c, d)
    }
}

// ============================================================================
// Tests
// ============================================================================
