//! Error types for img2char.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that can end a render run.
#[derive(Debug, thiserror::Error)]
pub enum Img2CharError {
    /// The input path does not exist
    #[error("input image '{}' not found", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input exists but could not be decoded as an image
    #[error("failed to read image '{}': {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Width or height is zero
    #[error("invalid dimensions {width}x{height}: width and height must be greater than 0")]
    InvalidDimensions { width: u32, height: u32 },

    /// The sample grid does not have the requested shape
    #[error(
        "sample grid is {}x{}, expected {}x{}",
        .actual.0, .actual.1, .expected.0, .expected.1
    )]
    GridMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A sample mapped past the sparsest ramp level under the strict policy
    #[error("ramp index {index} out of range for a ramp of {len} characters")]
    RampIndexOutOfRange { index: usize, len: usize },

    /// The output file could not be written
    #[error("failed to write output '{}': {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard output could not be written
    #[error("failed to write to stdout: {0}")]
    StdoutWriteFailure(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Img2CharError>;
