//! Errors raised while building a curve.
//!
//! Evaluation itself never fails; see `CubicBezier::value`.

use thiserror::Error;

/// Error returned when a curve cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BezierError {
    /// The control point sequence had a length other than 2 or 4.
    #[error(
        "bezier curve requires 2 or 4 control points, got {0}; \
         with 2 points the start and end are implied by the interval corners"
    )]
    InvalidControlPointCount(usize),
}
