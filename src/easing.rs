//! Named easing functions.
//!
//! The CSS timing-function keywords, each backed by a unit-square
//! `CubicBezier` and evaluated through its inverse `value`.

use crate::cubic_bezier::CubicBezier;

/// An easing function mapping progress `x` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(CubicBezier),
}

impl Easing {
    /// Shorthand for `Easing::CubicBezier(CubicBezier::from_handles(..))`.
    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Easing::CubicBezier(CubicBezier::from_handles(x1, y1, x2, y2))
    }

    /// The curve this easing evaluates.
    pub fn curve(&self) -> CubicBezier {
        match *self {
            Easing::Linear => CubicBezier::from_handles(0.0, 0.0, 1.0, 1.0),
            Easing::Ease => CubicBezier::from_handles(0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => CubicBezier::from_handles(0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => CubicBezier::from_handles(0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => CubicBezier::from_handles(0.42, 0.0, 0.58, 1.0),
            Easing::CubicBezier(b) => b,
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Easing::Linear => x,
            Easing::CubicBezier(b) => b.value(x),
            _ => self.curve().value(x),
        }
    }
}
