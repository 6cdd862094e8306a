//! Curve export error types.

use thiserror::Error;

/// Result type for curve export operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur when serializing a curve.
#[derive(Debug, Error)]
pub enum CurveError {
    /// I/O error while writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
