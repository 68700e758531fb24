//! Error types for rawsmooth-core
//!
//! Provides a unified error type for pixel buffer construction, access and
//! raw binary I/O. Each variant captures enough context for diagnostics.

use thiserror::Error;

/// rawsmooth-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Conflicting or incomplete construction parameters
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Supplied 2D array disagrees with the declared shape
    ///
    /// Shapes are `(rows, cols)`.
    #[error("shape mismatch: expected {}x{} (rows x cols), got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Flat pixel data has the wrong number of elements
    #[error("data length {actual} doesn't match expected {expected} elements")]
    DataLength { expected: usize, actual: usize },

    /// Raw file byte count disagrees with `width * height * element size`
    #[error("raw data is {actual} bytes but {expected} bytes are required")]
    RawLength { expected: usize, actual: usize },

    /// Pixel coordinates out of bounds
    #[error("pixel ({row}, {col}) out of bounds for {height}x{width} buffer")]
    IndexOutOfBounds {
        row: u32,
        col: u32,
        height: u32,
        width: u32,
    },

    /// Unknown element type name
    #[error("unknown element type: {0}")]
    UnknownElemType(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rawsmooth-core operations
pub type Result<T> = std::result::Result<T, Error>;
