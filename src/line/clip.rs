//! Cohen-Sutherland line clipping.

use super::Outcode;
use crate::primitives::{Point2, Segment2};
use crate::rect::ClipRect;
use crate::rounding::Rounding;
use num_traits::Float;

/// Clips a line segment against an axis-aligned window using the
/// Cohen-Sutherland algorithm.
///
/// Returns the visible portion of the segment, or `None` when the segment
/// lies entirely outside the window. Segments fully inside are trivially
/// accepted; segments fully outside on one side are trivially rejected;
/// everything else is resolved by iteratively trimming the outside
/// endpoint to the boundary it violates.
///
/// [`Rounding::Pixel`] snaps the accepted endpoints to the nearest
/// integer, the classical pixel-grid convention.
///
/// # Example
///
/// ```
/// use clip2d::{clip_segment, ClipRect, Rounding, Segment2};
///
/// let rect: ClipRect<f64> = ClipRect::from_coords(0.0, 0.0, 10.0, 10.0).unwrap();
/// let segment = Segment2::from_coords(-5.0, 5.0, 15.0, 5.0);
///
/// let clipped = clip_segment(segment, rect, Rounding::Pixel).unwrap();
/// assert_eq!(clipped, Segment2::from_coords(0.0, 5.0, 10.0, 5.0));
///
/// let outside = Segment2::from_coords(20.0, 20.0, 30.0, 30.0);
/// assert!(clip_segment(outside, rect, Rounding::Pixel).is_none());
/// ```
pub fn clip_segment<F: Float>(
    segment: Segment2<F>,
    rect: ClipRect<F>,
    rounding: Rounding,
) -> Option<Segment2<F>> {
    let mut start = segment.start;
    let mut end = segment.end;
    let mut start_code = Outcode::of(start, rect);
    let mut end_code = Outcode::of(end, rect);

    loop {
        if (start_code | end_code).is_empty() {
            // Trivial accept: both endpoints inside or on the boundary.
            let clipped = Segment2::new(rounding.apply(start), rounding.apply(end));
            return Some(clipped);
        }

        if !(start_code & end_code).is_empty() {
            // Trivial reject: both endpoints outside on the same side.
            return None;
        }

        // At least one endpoint is outside; the start endpoint is resolved
        // first. Each iteration clears at least one outcode bit, so the
        // loop runs a small bounded number of times.
        if !start_code.is_empty() {
            start = intersect_boundary(start, end, start_code, rect);
            start_code = Outcode::of(start, rect);
        } else {
            end = intersect_boundary(end, start, end_code, rect);
            end_code = Outcode::of(end, rect);
        }
    }
}

/// Moves an outside point onto the boundary line it violates.
///
/// When the point sits in a corner region (two bits set), only one side is
/// resolved per call, in the fixed priority TOP, BOTTOM, RIGHT, LEFT. The
/// caller recomputes the outcode and loops, picking up the second side on
/// a later iteration. This resolution order determines which corner
/// coordinate is produced and must not be reordered.
fn intersect_boundary<F: Float>(
    outside: Point2<F>,
    other: Point2<F>,
    code: Outcode,
    rect: ClipRect<F>,
) -> Point2<F> {
    let d = other - outside;

    if code.contains(Outcode::TOP) {
        intersect_horizontal(outside, d.x, d.y, rect.ymax())
    } else if code.contains(Outcode::BOTTOM) {
        intersect_horizontal(outside, d.x, d.y, rect.ymin())
    } else if code.contains(Outcode::RIGHT) {
        intersect_vertical(outside, d.x, d.y, rect.xmax())
    } else {
        intersect_vertical(outside, d.x, d.y, rect.xmin())
    }
}

/// Parametric intersection with the horizontal boundary line at `y`.
fn intersect_horizontal<F: Float>(p: Point2<F>, dx: F, dy: F, y: F) -> Point2<F> {
    // dy == 0 is unreachable for finite inputs: a segment parallel to a
    // horizontal boundary violates it with both endpoints and trivially
    // rejects before any intersection. The guard returns the point
    // unchanged rather than producing a non-finite coordinate.
    if dy == F::zero() {
        return p;
    }
    Point2::new(p.x + dx * (y - p.y) / dy, y)
}

/// Parametric intersection with the vertical boundary line at `x`.
fn intersect_vertical<F: Float>(p: Point2<F>, dx: F, dy: F, x: F) -> Point2<F> {
    // Mirror of the horizontal case: unreachable for finite inputs.
    if dx == F::zero() {
        return p;
    }
    Point2::new(x, p.y + dy * (x - p.x) / dx)
}
