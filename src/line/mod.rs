//! Line segment clipping against an axis-aligned window.

mod clip;
mod outcode;

pub use clip::clip_segment;
pub use outcode::Outcode;
