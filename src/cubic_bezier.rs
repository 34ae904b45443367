//! Cubic Bezier curve evaluated as a function `y = f(x)`.
//!
//! `CubicBezier` answers two queries:
//!
//! - **Parametric** (`x`, `y`, `point`): the Bernstein-weighted position at
//!   parameter `t`.
//! - **Inverse** (`value`): the `y` at a given `x`. The curve's `x(t)` is
//!   expanded into `a*t^3 + b*t^2 + c*t + d`, with `d` shifted by the query,
//!   the real roots are found by the injected `CubicSolver`, and the first
//!   root inside `[0, 1]` is fed back into `y(t)`. With no root in range the
//!   parameter falls back to `t = 0`.
//!
//! The first in-range root is only unambiguous when `x(t)` is monotonic on
//! `[0, 1]`, which holds for well-formed easing curves. For curves that fold
//! back on themselves the answer depends on the solver's root order.

use crate::basics::{Interval, PointD};
use crate::control_points::{ControlPoints, Curve4Points};
use crate::cubic_roots::{CardanoSolver, CubicSolver};
use crate::error::BezierError;

// ============================================================================
// Constants
// ============================================================================

/// Distance outside `[0, 1]` within which a root is still accepted
/// (and clamped onto the interval).
pub const ROOT_EPSILON: f64 = 1e-9;

// ============================================================================
// Free functions
// ============================================================================

/// Cubic Bernstein blend of four coordinates at parameter `t`.
///
/// `(1-t)^3*c0 + 3(1-t)^2*t*c1 + 3(1-t)*t^2*c2 + t^3*c3`. Defined for any `t`;
/// outside `[0, 1]` it extrapolates the polynomial.
#[inline]
pub fn bernstein(t: f64, c0: f64, c1: f64, c2: f64, c3: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * mt * c0 + 3.0 * mt * mt * t * c1 + 3.0 * mt * t * t * c2 + t * t * t * c3
}

/// First root inside `[0, 1]`, in the order given.
///
/// Roots within `ROOT_EPSILON` of the interval are clamped onto it.
pub fn select_root(roots: &[f64]) -> Option<f64> {
    roots
        .iter()
        .copied()
        .find(|&t| t >= -ROOT_EPSILON && t <= 1.0 + ROOT_EPSILON)
        .map(|t| t.clamp(0.0, 1.0))
}

// ============================================================================
// CubicBezier
// ============================================================================

/// A cubic Bezier curve with immutable control points.
///
/// ```
/// use easing_bezier::{CubicBezier, PointD};
///
/// let curve = CubicBezier::new(&[PointD::new(0.37, 0.0), PointD::new(0.63, 1.0)]).unwrap();
/// assert!((curve.value(0.5) - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CubicBezier<S = CardanoSolver> {
    points: Curve4Points,
    #[cfg_attr(feature = "serde", serde(skip))]
    solver: S,
}

impl CubicBezier<CardanoSolver> {
    /// Build a curve from 2 or 4 points over the unit interval.
    ///
    /// Two points are the handles P1, P2; the curve then runs from (0, 0)
    /// to (1, 1). Four points are P0..P3 as given.
    pub fn new(points: &[PointD]) -> Result<Self, BezierError> {
        Self::with_interval(points, Interval::UNIT)
    }

    /// Like `new`, but two-handle curves start at `(min_x, min_y)` and end at
    /// `(max_x, max_y)` of `interval`.
    pub fn with_interval(points: &[PointD], interval: Interval) -> Result<Self, BezierError> {
        let cp = ControlPoints::from_slice(points)?;
        Ok(Self::from_control_points(cp, interval))
    }

    pub fn from_control_points(cp: ControlPoints, interval: Interval) -> Self {
        Self {
            points: cp.resolve(interval),
            solver: CardanoSolver,
        }
    }

    /// CSS `cubic-bezier(x1, y1, x2, y2)` over the unit square.
    pub fn from_handles(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::from_control_points(
            ControlPoints::TwoHandle {
                p1: PointD::new(x1, y1),
                p2: PointD::new(x2, y2),
            },
            Interval::UNIT,
        )
    }
}

impl<S: CubicSolver> CubicBezier<S> {
    /// Replace the root solver used by `value`.
    pub fn with_solver<T: CubicSolver>(self, solver: T) -> CubicBezier<T> {
        CubicBezier {
            points: self.points,
            solver,
        }
    }

    pub fn control_points(&self) -> &Curve4Points {
        &self.points
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// X(t).
    #[inline]
    pub fn x(&self, t: f64) -> f64 {
        let [x0, x1, x2, x3] = self.points.xs();
        bernstein(t, x0, x1, x2, x3)
    }

    /// Y(t).
    #[inline]
    pub fn y(&self, t: f64) -> f64 {
        let [y0, y1, y2, y3] = self.points.ys();
        bernstein(t, y0, y1, y2, y3)
    }

    /// (X(t), Y(t)).
    #[inline]
    pub fn point(&self, t: f64) -> PointD {
        PointD::new(self.x(t), self.y(t))
    }

    /// Coefficients `[a, b, c, d]` of `X(t) - x` in power form.
    pub fn coefficients(&self, x: f64) -> [f64; 4] {
        let [x0, x1, x2, x3] = self.points.xs();
        [
            -x0 + 3.0 * x1 - 3.0 * x2 + x3,
            3.0 * x0 - 6.0 * x1 + 3.0 * x2,
            -3.0 * x0 + 3.0 * x1,
            x0 - x,
        ]
    }

    /// The parameter `t` at which the curve reaches `x`, or 0 if no root of
    /// `X(t) = x` lies in `[0, 1]`.
    pub fn parameter_for(&self, x: f64) -> f64 {
        let [a, b, c, d] = self.coefficients(x);
        let roots = self.solver.solve_cubic(a, b, c, d);
        match select_root(&roots) {
            Some(t) => t,
            None => {
                log::trace!(
                    "no parameter in [0, 1] for x = {x} (roots {:?}), using t = 0",
                    roots.as_slice()
                );
                0.0
            }
        }
    }

    /// The `y` coordinate of the curve at `x`.
    ///
    /// Never fails: out-of-domain queries yield `Y(0)`, the start point's y.
    pub fn value(&self, x: f64) -> f64 {
        self.y(self.parameter_for(x))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubic_roots::CubicRoots;
    use std::cell::Cell;

    fn curve(points: &[(f64, f64)]) -> CubicBezier {
        let points: Vec<PointD> = points.iter().map(|&p| PointD::from(p)).collect();
        CubicBezier::new(&points).unwrap()
    }

    fn rescaled() -> CubicBezier {
        curve(&[(0.0, 100.0), (40.0, 100.0), (60.0, 30.0), (100.0, 30.0)])
    }

    fn stub(roots: &'static [f64]) -> impl Fn(f64, f64, f64, f64) -> CubicRoots {
        move |_, _, _, _| CubicRoots::from(roots)
    }

    // --- Construction ---

    #[test]
    fn test_two_points_use_unit_corners() {
        let c = curve(&[(0.5, 0.5), (0.5, 0.5)]);
        let p = c.control_points();
        assert_eq!(p.start(), PointD::new(0.0, 0.0));
        assert_eq!(p.end(), PointD::new(1.0, 1.0));
    }

    #[test]
    fn test_two_points_with_interval() {
        let c = CubicBezier::with_interval(
            &[PointD::new(50.0, 120.0), PointD::new(50.0, 140.0)],
            Interval::new(0.0, 100.0, 100.0, 255.0),
        )
        .unwrap();
        assert_eq!(c.point(0.0), PointD::new(0.0, 100.0));
        assert_eq!(c.point(1.0), PointD::new(100.0, 255.0));
    }

    #[test]
    fn test_invalid_counts() {
        for n in [0, 1, 3, 5] {
            let points = vec![PointD::new(0.0, 0.0); n];
            assert_eq!(
                CubicBezier::new(&points),
                Err(BezierError::InvalidControlPointCount(n))
            );
        }
    }

    #[test]
    fn test_from_handles_matches_new() {
        let a = CubicBezier::from_handles(0.42, 0.0, 0.58, 1.0);
        let b = curve(&[(0.42, 0.0), (0.58, 1.0)]);
        assert_eq!(a, b);
    }

    // --- Parametric ---

    #[test]
    fn test_bernstein_endpoints_and_midpoint() {
        assert_eq!(bernstein(0.0, 1.0, 2.0, 3.0, 4.0), 1.0);
        assert_eq!(bernstein(1.0, 1.0, 2.0, 3.0, 4.0), 4.0);
        // Evenly spaced coefficients blend linearly
        assert!((bernstein(0.5, 1.0, 2.0, 3.0, 4.0) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_parametric_endpoints() {
        let c = rescaled();
        assert_eq!(c.point(0.0), PointD::new(0.0, 100.0));
        assert_eq!(c.point(1.0), PointD::new(100.0, 30.0));
    }

    #[test]
    fn test_parametric_midpoint() {
        let c = rescaled();
        assert!((c.x(0.5) - 50.0).abs() < 1e-12);
        assert!((c.y(0.5) - 65.0).abs() < 1e-12);
    }

    #[test]
    fn test_parametric_extrapolates() {
        // Linear in t when handles sit at thirds
        let c = curve(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        assert!((c.x(2.0) - 6.0).abs() < 1e-12);
        assert!((c.y(-1.0) + 3.0).abs() < 1e-12);
    }

    // --- Coefficients ---

    #[test]
    fn test_coefficients() {
        let c = rescaled();
        assert_eq!(c.coefficients(25.0), [40.0, -60.0, 120.0, -25.0]);
        assert_eq!(c.coefficients(0.0)[3], 0.0);
    }

    #[test]
    fn test_coefficients_reproduce_x() {
        let c = curve(&[(0.1, 0.0), (0.7, 0.2), (0.2, 0.9), (0.95, 1.0)]);
        let [a, b, cc, d] = c.coefficients(0.0);
        for t in [0.0, 0.2, 0.5, 0.8, 1.0] {
            let power = ((a * t + b) * t + cc) * t + d;
            assert!((power - c.x(t)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_coefficients_passed_to_solver() {
        let seen = Cell::new([0.0; 4]);
        let curve = rescaled().with_solver(|a: f64, b: f64, c: f64, d: f64| {
            seen.set([a, b, c, d]);
            CubicRoots::new()
        });
        curve.value(75.0);
        assert_eq!(seen.get(), [40.0, -60.0, 120.0, -75.0]);
        curve.value(10.0);
        assert_eq!(seen.get()[3], -10.0);
    }

    // --- Root selection ---

    #[test]
    fn test_select_root() {
        assert_eq!(select_root(&[]), None);
        assert_eq!(select_root(&[-0.5, 1.5]), None);
        assert_eq!(select_root(&[1.5, 0.3, 0.7]), Some(0.3));
        assert_eq!(select_root(&[0.7, 0.3]), Some(0.7));
        assert_eq!(select_root(&[0.0]), Some(0.0));
        assert_eq!(select_root(&[1.0]), Some(1.0));
        assert_eq!(select_root(&[f64::NAN, 0.4]), Some(0.4));
    }

    #[test]
    fn test_select_root_clamps_noise() {
        assert_eq!(select_root(&[1.0 + 1e-13]), Some(1.0));
        assert_eq!(select_root(&[-1e-13]), Some(0.0));
        assert_eq!(select_root(&[1.0 + 1e-6]), None);
    }

    #[test]
    fn test_stub_no_roots_falls_back_to_start() {
        let c = rescaled().with_solver(stub(&[]));
        assert_eq!(c.value(50.0), 100.0);
    }

    #[test]
    fn test_stub_out_of_range_roots_fall_back() {
        let c = rescaled().with_solver(stub(&[-0.25, 1.75]));
        assert_eq!(c.value(50.0), 100.0);
    }

    #[test]
    fn test_stub_one_root() {
        let c = rescaled().with_solver(stub(&[0.5]));
        assert!((c.value(1234.0) - 65.0).abs() < 1e-12);
    }

    #[test]
    fn test_stub_two_roots_first_in_range_wins() {
        let c = rescaled().with_solver(stub(&[2.0, 1.0]));
        assert_eq!(c.value(0.0), 30.0);
    }

    #[test]
    fn test_stub_three_roots_order_decides() {
        let forward = rescaled().with_solver(stub(&[0.0, 0.5, 1.0]));
        let backward = rescaled().with_solver(stub(&[1.0, 0.5, 0.0]));
        assert_eq!(forward.value(0.0), 100.0);
        assert_eq!(backward.value(0.0), 30.0);
    }

    // --- Inverse with the default solver ---

    #[test]
    fn test_value_linear() {
        let c = curve(&[(0.0, 0.0), (0.5, 0.5), (0.5, 0.5), (1.0, 1.0)]);
        for x in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            assert!((c.value(x) - x).abs() < 1e-9, "x = {x}");
        }
    }

    #[test]
    fn test_value_thirds_is_identity() {
        // Handles at thirds: a = b = 0, solver reduces to linear
        let c = curve(&[(1.0 / 3.0, 1.0 / 3.0), (2.0 / 3.0, 2.0 / 3.0)]);
        assert!(c.coefficients(0.4)[0].abs() < 1e-12);
        for x in [0.0, 0.3, 0.6, 1.0] {
            assert!((c.value(x) - x).abs() < 1e-9, "x = {x}");
        }
    }

    #[test]
    fn test_value_hits_endpoints() {
        let c = rescaled();
        assert!((c.value(0.0) - 100.0).abs() < 1e-9);
        assert!((c.value(100.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_out_of_domain_falls_back() {
        let c = rescaled();
        assert_eq!(c.value(-10.0), 100.0);
        assert_eq!(c.value(250.0), 100.0);
    }

    #[test]
    fn test_parameter_for_round_trips_x() {
        let c = curve(&[(0.0, 0.0), (0.37, 0.0), (0.63, 1.0), (1.0, 1.0)]);
        for x in [0.05, 0.3, 0.5, 0.77, 0.95] {
            let t = c.parameter_for(x);
            assert!((0.0..=1.0).contains(&t));
            assert!((c.x(t) - x).abs() < 1e-9);
        }
    }
}
