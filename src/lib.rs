//! # easing-bezier
//!
//! Cubic Bezier curves evaluated as functions `y = f(x)`, the mechanism
//! behind CSS-style easing curves.
//!
//! A curve is built from two handles (start and end are implied by the
//! interval corners, `(0, 0)` and `(1, 1)` by default) or from four explicit
//! control points over any coordinate range. It supports:
//!
//! - Parametric evaluation `X(t)`, `Y(t)` in the cubic Bernstein basis
//! - Inverse evaluation `value(x)`: solve `X(t) = x` for `t`, return `Y(t)`
//! - An injectable cubic root solver (`CubicSolver`)
//! - CSS keyword easings (`ease`, `ease-in`, `ease-out`, `ease-in-out`)
//!
//! ## Inverse evaluation
//!
//! 1. **Coefficients**: expand `X(t) - x` into `a*t^3 + b*t^2 + c*t + d`
//! 2. **Roots**: hand `(a, b, c, d)` to the solver
//! 3. **Selection**: take the first root in `[0, 1]`, else `t = 0`
//! 4. **Value**: evaluate `Y(t)`
//!
//! Evaluation never fails; only construction can (wrong point count).
//!
//! ```
//! use easing_bezier::{CubicBezier, PointD};
//!
//! let curve = CubicBezier::new(&[
//!     PointD::new(0.0, 100.0),
//!     PointD::new(40.0, 100.0),
//!     PointD::new(60.0, 30.0),
//!     PointD::new(100.0, 30.0),
//! ])
//! .unwrap();
//! assert!((curve.value(50.0) - 65.0).abs() < 1e-9);
//! ```

// Foundation Types
pub mod basics;
pub mod error;

// Curve Construction & Evaluation
pub mod control_points;
pub mod cubic_bezier;
pub mod cubic_roots;
pub mod easing;

pub use basics::{Interval, PointD};
pub use control_points::{ControlPoints, Curve4Points};
pub use cubic_bezier::CubicBezier;
pub use cubic_roots::{CardanoSolver, CubicRoots, CubicSolver};
pub use easing::Easing;
pub use error::BezierError;
