//! Sutherland-Hodgman polygon clipping.

use crate::polygon::Polygon;
use crate::primitives::Point2;
use crate::rect::ClipRect;
use crate::rounding::Rounding;
use num_traits::Float;

/// Clips a polygon against a convex clip polygon using the
/// Sutherland-Hodgman algorithm.
///
/// The subject is clipped successively against the half-plane to the left
/// of each directed clip edge; the working list is replaced after every
/// pass and the algorithm short-circuits as soon as it empties.
///
/// The clip polygon must be convex with counter-clockwise winding; the
/// result is unspecified otherwise ([`Polygon::is_convex`] lets callers
/// check). The result may be empty, or degenerate with fewer than three
/// vertices when the clip region barely grazes the subject; no output
/// validation is performed.
///
/// Intersection points introduced at the clip boundary pass through
/// `rounding`; original subject vertices are emitted unchanged.
///
/// # Example
///
/// ```
/// use clip2d::{sutherland_hodgman, Point2, Polygon, Rounding};
///
/// let subject = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
///     Point2::new(0.0, 10.0),
/// ]);
/// let clip = Polygon::new(vec![
///     Point2::new(5.0, 5.0),
///     Point2::new(15.0, 5.0),
///     Point2::new(15.0, 15.0),
///     Point2::new(5.0, 15.0),
/// ]);
///
/// let result = sutherland_hodgman(&subject, &clip, Rounding::Pixel);
/// assert_eq!(result.len(), 4);
/// assert_eq!(result.area(), 25.0);
/// ```
pub fn sutherland_hodgman<F: Float>(
    subject: &Polygon<F>,
    clip: &Polygon<F>,
    rounding: Rounding,
) -> Polygon<F> {
    if subject.is_empty() || clip.is_empty() {
        return Polygon::empty();
    }

    let mut output = subject.vertices.clone();
    let n = clip.len();

    for i in 0..n {
        if output.is_empty() {
            break;
        }

        let edge_start = clip.vertices[i];
        let edge_end = clip.vertices[(i + 1) % n];

        output = clip_against_edge(&output, edge_start, edge_end, rounding);
    }

    Polygon::new(output)
}

/// Clips a polygon against an axis-aligned window.
///
/// Convenience wrapper around [`sutherland_hodgman`] with the window
/// converted through [`ClipRect::to_polygon`], which produces the
/// counter-clockwise winding the inside test expects.
pub fn clip_polygon_to_rect<F: Float>(
    subject: &Polygon<F>,
    rect: ClipRect<F>,
    rounding: Rounding,
) -> Polygon<F> {
    sutherland_hodgman(subject, &rect.to_polygon(), rounding)
}

/// Runs one clip pass against the half-plane left of a directed edge.
fn clip_against_edge<F: Float>(
    input: &[Point2<F>],
    edge_start: Point2<F>,
    edge_end: Point2<F>,
    rounding: Rounding,
) -> Vec<Point2<F>> {
    let n = input.len();
    let mut output = Vec::with_capacity(n + 1);

    for i in 0..n {
        let current = input[i];
        let next = input[(i + 1) % n];

        let current_inside = is_inside(current, edge_start, edge_end);
        let next_inside = is_inside(next, edge_start, edge_end);

        if current_inside && next_inside {
            output.push(next);
        } else if current_inside {
            // Leaving the half-plane.
            output.push(rounding.apply(line_intersection(current, next, edge_start, edge_end)));
        } else if next_inside {
            // Entering the half-plane.
            output.push(rounding.apply(line_intersection(current, next, edge_start, edge_end)));
            output.push(next);
        }
    }

    output
}

/// Tests whether a point lies on the inside (left) of a directed edge.
///
/// Boundary inclusive: a point exactly on the edge line counts as inside.
#[inline]
fn is_inside<F: Float>(p: Point2<F>, edge_start: Point2<F>, edge_end: Point2<F>) -> bool {
    (edge_end - edge_start).cross(p - edge_start) >= F::zero()
}

/// Intersects the infinite lines through (p1, p2) and (p3, p4).
///
/// Each line is put in implicit form `A·x + B·y = C` and the 2x2 system is
/// solved by determinant. A determinant below epsilon means the lines are
/// treated as parallel and `p1` is returned unchanged, a deliberate
/// degenerate fallback rather than a rigorous parallel-line policy.
fn line_intersection<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    p4: Point2<F>,
) -> Point2<F> {
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = a1 * p1.x + b1 * p1.y;

    let a2 = p4.y - p3.y;
    let b2 = p3.x - p4.x;
    let c2 = a2 * p3.x + b2 * p3.y;

    let det = a1 * b2 - a2 * b1;
    if det.abs() < F::epsilon() {
        return p1;
    }

    Point2::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det)
}
