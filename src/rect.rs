//! Axis-aligned clip rectangle.

use crate::error::ClipError;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned clip window.
///
/// The window covers the closed region `[xmin, xmax] × [ymin, ymax]`:
/// points exactly on the boundary are treated as inside by both clippers.
///
/// The corners are validated at construction (`min <= max` on both axes),
/// so every `ClipRect` in existence is a well-formed window. The fields
/// are private for that reason.
///
/// # Example
///
/// ```
/// use clip2d::{ClipError, ClipRect};
///
/// let rect: ClipRect<f64> = ClipRect::from_coords(0.0, 0.0, 10.0, 10.0)?;
/// assert_eq!(rect.width(), 10.0);
///
/// // A degenerate window is rejected outright.
/// assert!(ClipRect::from_coords(10.0, 0.0, 0.0, 10.0).is_err());
/// # Ok::<(), ClipError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect<F> {
    min: Point2<F>,
    max: Point2<F>,
}

impl<F: Float> ClipRect<F> {
    /// Creates a new clip rectangle from min and max corners.
    ///
    /// Fails with [`ClipError::InvalidRectangle`] when `min` exceeds `max`
    /// on either axis.
    pub fn new(min: Point2<F>, max: Point2<F>) -> Result<Self, ClipError> {
        if min.x <= max.x && min.y <= max.y {
            Ok(Self { min, max })
        } else {
            Err(ClipError::InvalidRectangle)
        }
    }

    /// Creates a clip rectangle from boundary coordinates.
    ///
    /// Fails with [`ClipError::InvalidRectangle`] when `xmin > xmax` or
    /// `ymin > ymax`.
    pub fn from_coords(xmin: F, ymin: F, xmax: F, ymax: F) -> Result<Self, ClipError> {
        Self::new(Point2::new(xmin, ymin), Point2::new(xmax, ymax))
    }

    /// Creates a clip rectangle from two arbitrary corners.
    ///
    /// Corners in any orientation are normalized, so this cannot fail.
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Returns the minimum corner.
    #[inline]
    pub fn min(self) -> Point2<F> {
        self.min
    }

    /// Returns the maximum corner.
    #[inline]
    pub fn max(self) -> Point2<F> {
        self.max
    }

    /// Returns the left boundary coordinate.
    #[inline]
    pub fn xmin(self) -> F {
        self.min.x
    }

    /// Returns the bottom boundary coordinate.
    #[inline]
    pub fn ymin(self) -> F {
        self.min.y
    }

    /// Returns the right boundary coordinate.
    #[inline]
    pub fn xmax(self) -> F {
        self.max.x
    }

    /// Returns the top boundary coordinate.
    #[inline]
    pub fn ymax(self) -> F {
        self.max.y
    }

    /// Returns the width of the window.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the window.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns `true` if the window contains the given point.
    ///
    /// The region is closed; boundary points are inside.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Converts the window to its 4-vertex polygon representation.
    ///
    /// Vertices are emitted counter-clockwise starting at the minimum
    /// corner: (xmin,ymin), (xmax,ymin), (xmax,ymax), (xmin,ymax). This
    /// winding matches the inside test of
    /// [`sutherland_hodgman`](crate::polygon::sutherland_hodgman), so the
    /// result is directly usable as a convex clip polygon. Reversing the
    /// winding inverts the inside/outside test.
    pub fn to_polygon(self) -> Polygon<F> {
        Polygon::new(vec![
            Point2::new(self.min.x, self.min.y),
            Point2::new(self.max.x, self.min.y),
            Point2::new(self.max.x, self.max.y),
            Point2::new(self.min.x, self.max.y),
        ])
    }
}

impl<F: Float> From<ClipRect<F>> for Polygon<F> {
    fn from(rect: ClipRect<F>) -> Self {
        rect.to_polygon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let rect: ClipRect<f64> =
            ClipRect::new(Point2::new(0.0, 0.0), Point2::new(10.0, 5.0)).unwrap();
        assert_eq!(rect.xmin(), 0.0);
        assert_eq!(rect.ymax(), 5.0);
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 5.0);
    }

    #[test]
    fn test_new_degenerate_extent_is_valid() {
        // A zero-area window is still a well-formed closed region.
        let rect: ClipRect<f64> = ClipRect::from_coords(3.0, 3.0, 3.0, 3.0).unwrap();
        assert!(rect.contains_point(Point2::new(3.0, 3.0)));
        assert!(!rect.contains_point(Point2::new(3.0, 3.1)));
    }

    #[test]
    fn test_new_rejects_inverted() {
        assert_eq!(
            ClipRect::<f64>::from_coords(10.0, 0.0, 0.0, 10.0).unwrap_err(),
            ClipError::InvalidRectangle
        );
        assert_eq!(
            ClipRect::<f64>::from_coords(0.0, 10.0, 10.0, 0.0).unwrap_err(),
            ClipError::InvalidRectangle
        );
    }

    #[test]
    fn test_from_corners_normalizes() {
        let rect: ClipRect<f64> =
            ClipRect::from_corners(Point2::new(10.0, 10.0), Point2::new(0.0, 0.0));
        assert_eq!(rect.min(), Point2::new(0.0, 0.0));
        assert_eq!(rect.max(), Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_contains_point() {
        let rect: ClipRect<f64> = ClipRect::from_coords(0.0, 0.0, 10.0, 10.0).unwrap();

        assert!(rect.contains_point(Point2::new(5.0, 5.0)));
        assert!(rect.contains_point(Point2::new(0.0, 0.0))); // On boundary
        assert!(rect.contains_point(Point2::new(10.0, 10.0))); // On boundary
        assert!(!rect.contains_point(Point2::new(-1.0, 5.0)));
        assert!(!rect.contains_point(Point2::new(5.0, 11.0)));
    }

    #[test]
    fn test_to_polygon_winding() {
        let rect: ClipRect<f64> = ClipRect::from_coords(0.0, 0.0, 10.0, 10.0).unwrap();
        let poly = rect.to_polygon();

        assert_eq!(poly.len(), 4);
        assert_eq!(poly.vertices[0], Point2::new(0.0, 0.0));
        assert_eq!(poly.vertices[1], Point2::new(10.0, 0.0));
        assert_eq!(poly.vertices[2], Point2::new(10.0, 10.0));
        assert_eq!(poly.vertices[3], Point2::new(0.0, 10.0));

        // Counter-clockwise winding has positive signed area.
        assert!(poly.signed_area() > 0.0);
    }

    #[test]
    fn test_from_impl() {
        let rect: ClipRect<f64> = ClipRect::from_coords(1.0, 2.0, 3.0, 4.0).unwrap();
        let poly: Polygon<f64> = rect.into();
        assert_eq!(poly, rect.to_polygon());
    }
}
