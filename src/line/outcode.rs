//! Region codes for Cohen-Sutherland clipping.

use crate::primitives::Point2;
use crate::rect::ClipRect;
use bitflags::bitflags;
use num_traits::Float;

bitflags! {
    /// Region code classifying a point against a clip rectangle.
    ///
    /// The four boundary lines of the window partition the plane into nine
    /// regions. Each bit records one violated side; the empty set means the
    /// point is inside the window or on its boundary. A point in a corner
    /// region has two bits set (for example `TOP | LEFT`).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Outcode: u8 {
        const LEFT = 0b0001;
        const RIGHT = 0b0010;
        const BOTTOM = 0b0100;
        const TOP = 0b1000;
    }
}

impl Outcode {
    /// Computes the region code of a point relative to a clip rectangle.
    ///
    /// `LEFT` and `RIGHT` are mutually exclusive (checked in that order),
    /// as are `BOTTOM` and `TOP`. A point exactly on a boundary line sets
    /// no bit for that side; the window is a closed region.
    pub fn of<F: Float>(p: Point2<F>, rect: ClipRect<F>) -> Self {
        let mut code = Outcode::empty();

        if p.x < rect.xmin() {
            code |= Outcode::LEFT;
        } else if p.x > rect.xmax() {
            code |= Outcode::RIGHT;
        }

        if p.y < rect.ymin() {
            code |= Outcode::BOTTOM;
        } else if p.y > rect.ymax() {
            code |= Outcode::TOP;
        }

        code
    }
}
