//! Core polygon type.

use crate::primitives::Point2;
use num_traits::Float;

/// An ordered sequence of vertices interpreted as a closed loop.
///
/// The last vertex implicitly connects to the first. Counter-clockwise
/// winding gives positive area. At least three vertices are needed for a
/// non-degenerate polygon, but no validation is performed: a clip result
/// may legally be empty or degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area using the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area(&self) -> F {
        if self.vertices.len() < 3 {
            return F::zero();
        }

        let n = self.vertices.len();
        let mut area = F::zero();

        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            area = area + a.x * b.y - b.x * a.y;
        }

        area / F::from(2.0).unwrap()
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Tests if the polygon is convex.
    ///
    /// All cross products of consecutive edges must have the same sign;
    /// near-zero cross products (collinear runs) are ignored. Useful for
    /// checking the clip-polygon precondition of
    /// [`sutherland_hodgman`](crate::polygon::sutherland_hodgman).
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }

        let mut sign: Option<bool> = None;

        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];

            let cross = (b - a).cross(c - b);
            if cross.abs() <= F::epsilon() {
                continue;
            }

            let positive = cross > F::zero();
            match sign {
                None => sign = Some(positive),
                Some(s) if s != positive => return false,
                _ => {}
            }
        }

        true
    }

    /// Tests if a point is inside the polygon using ray casting.
    ///
    /// Points exactly on the boundary may report either way.
    pub fn contains(&self, point: Point2<F>) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;

        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];

            if (vi.y > point.y) != (vj.y > point.y)
                && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn unit_square() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_empty() {
        let poly: Polygon<f64> = Polygon::empty();
        assert!(poly.is_empty());
        assert_eq!(poly.len(), 0);
        assert_eq!(poly.area(), 0.0);
    }

    #[test]
    fn test_signed_area_winding() {
        let ccw = unit_square();
        assert!(ccw.signed_area() > 0.0);

        let cw = Polygon::new(ccw.vertices.iter().rev().copied().collect());
        assert!(cw.signed_area() < 0.0);
        assert!(approx_eq(cw.area(), 1.0, 1e-10));
    }

    #[test]
    fn test_area_triangle() {
        let poly = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 2.0),
        ]);
        assert!(approx_eq(poly.area(), 2.0, 1e-10));
    }

    #[test]
    fn test_is_convex() {
        assert!(unit_square().is_convex());

        // L-shaped polygon is concave.
        let ell = Polygon::new(vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ]);
        assert!(!ell.is_convex());
    }

    #[test]
    fn test_is_convex_degenerate() {
        let two: Polygon<f64> =
            Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(two.is_convex());
    }

    #[test]
    fn test_contains() {
        let poly = unit_square();
        assert!(poly.contains(Point2::new(0.5, 0.5)));
        assert!(!poly.contains(Point2::new(1.5, 0.5)));
        assert!(!poly.contains(Point2::new(-0.5, 0.5)));
    }
}
