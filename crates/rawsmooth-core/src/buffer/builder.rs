//! Builder for PixelBuffer construction
//!
//! A buffer is built from at most one pixel source: an in-memory 2D array
//! or a raw file. With neither, the buffer is all zeros.

use super::{ElemType, PixelBuffer, RawOrder};
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Collects the construction parameters of a [`PixelBuffer`]
///
/// # Examples
///
/// ```
/// use rawsmooth_core::{ElemType, PixelBuffer, RawOrder};
///
/// let buf = PixelBuffer::builder(2, 2, ElemType::U8)
///     .rows(&[[1u8, 2], [3, 4]])
///     .build()
///     .unwrap();
/// assert_eq!(buf.get(1, 0), Some(3.0));
///
/// // A file and an array together are rejected.
/// let err = PixelBuffer::builder(2, 2, ElemType::U8)
///     .rows(&[[1u8, 2], [3, 4]])
///     .file("image.raw", RawOrder::RowMajor)
///     .build();
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PixelBufferBuilder {
    width: u32,
    height: u32,
    elem_type: ElemType,
    rows: Option<Vec<Vec<f64>>>,
    file: Option<(PathBuf, RawOrder)>,
}

impl PixelBufferBuilder {
    /// Start a builder for a `width x height` buffer of `elem_type`.
    pub fn new(width: u32, height: u32, elem_type: ElemType) -> Self {
        PixelBufferBuilder {
            width,
            height,
            elem_type,
            rows: None,
            file: None,
        }
    }

    /// Use a 2D array as the pixel source.
    pub fn rows<V, R>(mut self, rows: &[R]) -> Self
    where
        V: Copy + Into<f64>,
        R: AsRef<[V]>,
    {
        let rows = rows
            .iter()
            .map(|r| r.as_ref().iter().map(|&v| v.into()).collect())
            .collect();
        self.rows = Some(rows);
        self
    }

    /// Use a raw file as the pixel source.
    pub fn file(mut self, path: impl Into<PathBuf>, order: RawOrder) -> Self {
        self.file = Some((path.into(), order));
        self
    }

    /// Build the buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if both rows and a file were given
    /// - [`Error::ShapeMismatch`] if the rows disagree with the shape
    /// - [`Error::InvalidDimension`] if width or height is 0
    ///
    /// File read failures are not errors; see [`PixelBuffer::from_file`].
    pub fn build(self) -> Result<PixelBuffer> {
        match (self.rows, self.file) {
            (Some(_), Some(_)) => Err(Error::InvalidConfig(
                "cannot provide a file name and data array at the same time".to_string(),
            )),
            (Some(rows), None) => {
                PixelBuffer::from_rows(self.width, self.height, self.elem_type, rows.as_slice())
            }
            (None, Some((path, order))) => {
                PixelBuffer::from_file(self.width, self.height, self.elem_type, path, order)
            }
            (None, None) => PixelBuffer::new(self.width, self.height, self.elem_type),
        }
    }
}
