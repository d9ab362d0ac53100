//! Polygon type and clipping against convex regions.

mod clip;
mod core;

pub use clip::{clip_polygon_to_rect, sutherland_hodgman};
pub use core::Polygon;
