//! Error types for icon generation

use thiserror::Error;

/// Result type for icon generation operations
pub type IconResult<T> = Result<T, IconError>;

/// Errors that can occur during rasterization, encoding, or file output
#[derive(Error, Debug)]
pub enum IconError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
