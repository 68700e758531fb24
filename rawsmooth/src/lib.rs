//! rawsmooth - Gaussian and bilateral smoothing of raw grayscale images
//!
//! # Overview
//!
//! - [`PixelBuffer`] holds a 2D grayscale image of one element type
//!   (`u8`, `u16`, `u32`, `i16`, `i32`, `f32` or `f64`)
//! - Raw files are read and written as headerless little-endian element
//!   streams, row-major or column-major ([`RawOrder`])
//! - [`filter`] builds Gaussian kernels and applies the Gaussian and
//!   bilateral filters
//!
//! # Example
//!
//! ```
//! use rawsmooth::filter::{Kernel, bilateral_filter, gauss_filter};
//! use rawsmooth::{ElemType, PixelBuffer, RawOrder};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let input = dir.path().join("in.raw");
//!
//! let rows: Vec<Vec<u8>> = (0..8).map(|r| (0..8).map(|c| (r * 8 + c) as u8).collect()).collect();
//! let image = PixelBuffer::from_rows(8, 8, ElemType::U8, &rows).unwrap();
//! image.write_raw(&input).unwrap();
//!
//! // Writes are row-major; reading column-major yields the transpose.
//! let read = PixelBuffer::from_file(8, 8, ElemType::U8, &input, RawOrder::ColumnMajor).unwrap();
//! assert_eq!(read, image.transpose());
//! let image = read.transpose();
//!
//! let smooth = gauss_filter(&image, &Kernel::gauss(3, 3, 1.0, true).unwrap()).unwrap();
//! let edges = bilateral_filter(&image, &Kernel::gauss(3, 3, 1.0, false).unwrap(), 60.0).unwrap();
//!
//! assert_eq!(smooth.dimensions(), (8, 8));
//! assert_eq!(edges.elem_type(), ElemType::U8);
//! smooth.write(dir.path().join("gauss.raw"));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rawsmooth_core::*;

// Re-export the filters as a module
pub use rawsmooth_filter as filter;
