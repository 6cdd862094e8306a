//! Configuration error types.

use thiserror::Error;

/// Errors that abort filter construction.
///
/// All of these are configuration errors surfaced before any frame is
/// processed; there are no recoverable runtime faults once a filter exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The smoothing window parameter was negative.
    #[error("smoothing_window must not be negative (got {0})")]
    NegativeSmoothingWindow(i32),

    /// The clips do not all share one format.
    #[error("the clips must have the same format")]
    FormatMismatch,

    /// The two compared clips differ in size.
    #[error("the first two clips must have the same dimensions ({0}x{1} vs {2}x{3})")]
    DimensionMismatch(u32, u32, u32, u32),

    /// A clip has variable format or dimensions.
    #[error("the clips must have constant format and dimensions")]
    VariableClip,

    /// The format is RGB or deeper than 8 bits per sample.
    #[error("the clips must have 8 bits per sample and must not be RGB")]
    UnsupportedFormat,

    /// A selected plane index does not exist in the format.
    #[error("plane index {index} out of range for a {planes}-plane format")]
    PlaneIndexOutOfRange {
        /// The offending index
        index: usize,
        /// Planes in the format
        planes: usize,
    },

    /// The same plane was selected more than once.
    #[error("plane {0} selected more than once")]
    PlaneSelectedTwice(usize),

    /// `show` needs room for the 256x256 curve region.
    #[error("clips must be at least 256x256 pixels when show is enabled")]
    FrameTooSmallForShow,

    /// `debug` renders a single curve and accepts only one selected plane.
    #[error("only one plane can be processed at a time when debug is enabled")]
    MultiplePlanesInDebug,
}
