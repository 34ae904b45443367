//! Foundation types: points and the coordinate interval of a curve.
//!
//! Everything else in the crate is expressed in terms of `PointD` and
//! `Interval`.

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> From<(T, T)> for PointBase<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

pub type PointD = PointBase<f64>;

// ============================================================================
// Interval
// ============================================================================

/// The coordinate box a curve is defined over.
///
/// Only used to place the implicit endpoints of a two-handle curve:
/// the start lands on `(min_x, min_y)` and the end on `(max_x, max_y)`.
/// Coordinates are never normalized or range-checked against it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Interval {
    /// The unit square `[0, 1] x [0, 1]`.
    pub const UNIT: Interval = Interval {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 1.0,
        max_y: 1.0,
    };

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Lower-left corner, the implicit start point.
    #[inline]
    pub fn start(&self) -> PointD {
        PointD::new(self.min_x, self.min_y)
    }

    /// Upper-right corner, the implicit end point.
    #[inline]
    pub fn end(&self) -> PointD {
        PointD::new(self.max_x, self.max_y)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::UNIT
    }
}

// ============================================================================
// Tests
// ============================================================================
