//! Error types for clipping operations.

use thiserror::Error;

/// Errors that can occur when constructing clipping inputs.
///
/// The clip operations themselves are total: once the inputs exist, no
/// call can fail. Validation happens up front at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    /// The clip rectangle's minimum corner exceeds its maximum corner.
    ///
    /// A degenerate window would silently classify every point with a
    /// nonsensical region code, so it is rejected outright.
    #[error("invalid clip rectangle: min corner must not exceed max corner")]
    InvalidRectangle,
}
