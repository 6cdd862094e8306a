//! Error types for plane and frame construction.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing planes or frames.
///
/// All variants are structural: they describe a buffer that cannot represent
/// the requested geometry. Once a plane view exists, sample access within its
/// bounds cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height is unusable for a plane.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Stride is too small for the given width.
    ///
    /// A row stride must be at least the plane width so rows do not overlap.
    #[error("stride {stride} is less than width {width}")]
    InvalidStride {
        /// Provided stride
        stride: usize,
        /// Plane width
        width: u32,
    },

    /// The backing buffer cannot hold the described plane.
    #[error("buffer of {actual} bytes too small, plane needs {required}")]
    BufferTooSmall {
        /// Bytes required by the plane geometry
        required: usize,
        /// Bytes provided
        actual: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}
