//! Error types for stainpix-core.

use thiserror::Error;

/// Result type alias for stainpix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for stainpix operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sample count of zero. Checked separately from the dimension checks
    /// because `inside / n` would otherwise divide by zero.
    #[error("sample count must be positive")]
    InvalidSampleCount,

    /// Zero image dimension.
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
    },

    /// Pixel buffer length does not match `width * height * channels`.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// Length required by the declared dimensions and channel layout.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Computed pixel offset falls outside the buffer. Indicates a caller
    /// bug (dimensions inconsistent with the buffer), never retried.
    #[error("pixel offset out of range: {offset} >= {len}")]
    OffsetOutOfRange {
        /// Flat byte offset of the first channel of the pixel.
        offset: usize,
        /// Buffer length.
        len: usize,
    },
}
