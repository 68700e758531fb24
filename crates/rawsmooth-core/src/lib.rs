//! rawsmooth-core - Pixel buffers for raw grayscale images
//!
//! This crate provides the image container used by the rawsmooth filters:
//!
//! - [`PixelBuffer`] - dense 2D pixel array with a declared [`ElemType`]
//! - [`PixelBufferBuilder`] - construction from zeros, a 2D array or a raw file
//! - Raw binary I/O in row-major or column-major element order ([`RawOrder`])
//! - [`Narrowing`] - how floating-point results are stored into integer pixels

pub mod buffer;
pub mod error;

pub use buffer::{
    ElemType, Element, Narrowing, PixelBuffer, PixelBufferBuilder, PixelData, RawOrder,
};
pub use error::{Error, Result};
