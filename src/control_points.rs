//! Control point shapes accepted by a cubic Bezier curve.
//!
//! A curve is requested either with its two interior handles only
//! (`ControlPoints::TwoHandle`) or with all four points
//! (`ControlPoints::FourPoint`). Both are resolved immediately into a single
//! `Curve4Points`, so nothing downstream branches on the input shape.

use crate::basics::{Interval, PointD};
use crate::error::BezierError;

// ============================================================================
// ControlPoints
// ============================================================================

/// A construction request for a cubic Bezier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ControlPoints {
    /// Interior handles only. Start and end are the interval corners.
    TwoHandle { p1: PointD, p2: PointD },
    /// Start, two handles, end.
    FourPoint {
        p0: PointD,
        p1: PointD,
        p2: PointD,
        p3: PointD,
    },
}

impl ControlPoints {
    /// Classify a point sequence by its length.
    ///
    /// Fails with `BezierError::InvalidControlPointCount` unless the slice
    /// holds exactly 2 or 4 points.
    pub fn from_slice(points: &[PointD]) -> Result<Self, BezierError> {
        match *points {
            [p1, p2] => Ok(ControlPoints::TwoHandle { p1, p2 }),
            [p0, p1, p2, p3] => Ok(ControlPoints::FourPoint { p0, p1, p2, p3 }),
            _ => {
                log::debug!("rejecting {} control points", points.len());
                Err(BezierError::InvalidControlPointCount(points.len()))
            }
        }
    }

    /// Expand to the four points P0..P3.
    ///
    /// `interval` only matters for `TwoHandle`; four points are taken verbatim.
    pub fn resolve(&self, interval: Interval) -> Curve4Points {
        match *self {
            ControlPoints::TwoHandle { p1, p2 } => {
                Curve4Points::new(interval.start(), p1, p2, interval.end())
            }
            ControlPoints::FourPoint { p0, p1, p2, p3 } => Curve4Points::new(p0, p1, p2, p3),
        }
    }
}

impl TryFrom<&[PointD]> for ControlPoints {
    type Error = BezierError;

    fn try_from(points: &[PointD]) -> Result<Self, Self::Error> {
        ControlPoints::from_slice(points)
    }
}

// ============================================================================
// Curve4Points
// ============================================================================

/// The four resolved control points of a cubic Bezier curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Curve4Points {
    pub cp: [PointD; 4],
}

impl Curve4Points {
    pub fn new(p0: PointD, p1: PointD, p2: PointD, p3: PointD) -> Self {
        Self {
            cp: [p0, p1, p2, p3],
        }
    }

    #[inline]
    pub fn start(&self) -> PointD {
        self.cp[0]
    }

    #[inline]
    pub fn end(&self) -> PointD {
        self.cp[3]
    }

    /// The x-coordinates of P0..P3.
    #[inline]
    pub fn xs(&self) -> [f64; 4] {
        [self.cp[0].x, self.cp[1].x, self.cp[2].x, self.cp[3].x]
    }

    /// The y-coordinates of P0..P3.
    #[inline]
    pub fn ys(&self) -> [f64; 4] {
        [self.cp[0].y, self.cp[1].y, self.cp[2].y, self.cp[3].y]
    }
}

impl std::ops::Index<usize> for Curve4Points {
    type Output = PointD;
    fn index(&self, i: usize) -> &PointD {
        &self.cp[i]
    }
}

// ============================================================================
// Tests
// ============================================================================
