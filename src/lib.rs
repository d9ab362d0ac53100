//! clip2d - 2D line and polygon clipping.
//!
//! Everything a renderer draws has to survive a clip window first. This
//! library implements the two classical 2D clipping algorithms:
//! Cohen-Sutherland for line segments against an axis-aligned rectangle,
//! and Sutherland-Hodgman for polygons against a convex clip region.
//!
//! Both clippers are pure functions over immutable inputs: no shared
//! state, no I/O, safe to call from any number of threads. Output
//! coordinates snap to the pixel grid by default ([`Rounding::Pixel`])
//! or stay continuous on request.

pub mod error;
pub mod line;
pub mod polygon;
pub mod primitives;
pub mod rect;
pub mod rounding;

pub use error::ClipError;
pub use line::{clip_segment, Outcode};
pub use polygon::{clip_polygon_to_rect, sutherland_hodgman, Polygon};
pub use primitives::{Point2, Segment2, Vec2};
pub use rect::ClipRect;
pub use rounding::Rounding;
