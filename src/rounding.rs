//! Output coordinate rounding modes.

use crate::primitives::Point2;
use num_traits::Float;

/// Controls how clip output coordinates are reported.
///
/// The classical formulations of both clippers round every emitted
/// coordinate to the nearest integer, treating output as pixel-grid
/// positions. Callers working in continuous geometry opt out with
/// [`Rounding::Continuous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round every emitted coordinate to the nearest integer.
    #[default]
    Pixel,
    /// Keep full floating-point precision.
    Continuous,
}

impl Rounding {
    /// Applies this rounding mode to a point.
    #[inline]
    pub fn apply<F: Float>(self, p: Point2<F>) -> Point2<F> {
        match self {
            Rounding::Pixel => p.rounded(),
            Rounding::Continuous => p,
        }
    }
}
