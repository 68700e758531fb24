//! PixelBuffer - dense 2D grayscale image
//!
//! `PixelBuffer` is a `height x width` array of numeric pixels with a
//! declared [`ElemType`]. Pixels are addressed as `(row, col)` and stored
//! row-major with no padding: pixel `(r, c)` is at index `r * width + c`.
//!
//! Filtering happens in `f64`; values written back are narrowed to the
//! element type (see [`Narrowing`]).
//!
//! # Examples
//!
//! ```
//! use rawsmooth_core::{ElemType, PixelBuffer};
//!
//! let buf = PixelBuffer::from_rows(3, 2, ElemType::U8, &[[1, 2, 3], [4, 5, 6]]).unwrap();
//! let t = buf.transpose();
//! assert_eq!(t.dimensions(), (2, 3));
//! assert_eq!(t.get(2, 1), Some(6.0));
//! ```

mod builder;
mod elem;
pub mod raw;

pub use builder::PixelBufferBuilder;
pub use elem::{ElemType, Element, Narrowing, PixelData};
pub use raw::RawOrder;

use crate::error::{Error, Result};
use std::fmt;

/// Number of leading rows shown by the `Display` summary.
const SUMMARY_HEAD_ROWS: usize = 10;

/// Number of trailing rows shown when the buffer is at least twice as tall.
const SUMMARY_TAIL_ROWS: usize = 9;

/// Dense 2D pixel array with a declared element type
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Number of columns
    width: u32,
    /// Number of rows
    height: u32,
    /// Pixel storage (row-major, no padding)
    data: PixelData,
}

fn check_dimensions(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(width as usize * height as usize)
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, elem_type: ElemType) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        Ok(PixelBuffer {
            width,
            height,
            data: PixelData::zeros(elem_type, len),
        })
    }

    /// Create a buffer from typed storage in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLength`] if `data` does not hold exactly
    /// `width * height` elements.
    pub fn from_data(width: u32, height: u32, data: PixelData) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        if data.len() != len {
            return Err(Error::DataLength {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Create a buffer from a typed vector in row-major order.
    ///
    /// The element type is taken from `T`.
    pub fn from_vec<T: Element>(width: u32, height: u32, values: Vec<T>) -> Result<Self> {
        Self::from_data(width, height, T::wrap(values))
    }

    /// Create a buffer from `f64` values in row-major order, narrowing each
    /// into `elem_type`.
    pub fn from_values(
        width: u32,
        height: u32,
        elem_type: ElemType,
        values: &[f64],
        mode: Narrowing,
    ) -> Result<Self> {
        let len = check_dimensions(width, height)?;
        if values.len() != len {
            return Err(Error::DataLength {
                expected: len,
                actual: values.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            data: PixelData::from_f64_values(elem_type, values, mode),
        })
    }

    /// Create a buffer from a 2D array given as rows.
    ///
    /// `rows` must contain exactly `height` rows of exactly `width` values.
    /// Values are narrowed into `elem_type` by rounding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the array shape disagrees with
    /// `(height, width)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rawsmooth_core::{ElemType, PixelBuffer};
    ///
    /// let buf = PixelBuffer::from_rows(2, 1, ElemType::U16, &[vec![7u16, 9]]).unwrap();
    /// assert_eq!(buf.get(0, 1), Some(9.0));
    /// assert!(PixelBuffer::from_rows(3, 1, ElemType::U16, &[vec![7u16, 9]]).is_err());
    /// ```
    pub fn from_rows<V, R>(width: u32, height: u32, elem_type: ElemType, rows: &[R]) -> Result<Self>
    where
        V: Copy + Into<f64>,
        R: AsRef<[V]>,
    {
        let len = check_dimensions(width, height)?;
        let expected = (height as usize, width as usize);
        if rows.len() != expected.0 {
            let cols = rows.first().map_or(0, |r| r.as_ref().len());
            return Err(Error::ShapeMismatch {
                expected,
                actual: (rows.len(), cols),
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.as_ref().len() != expected.1) {
            return Err(Error::ShapeMismatch {
                expected,
                actual: (rows.len(), bad.as_ref().len()),
            });
        }

        let mut values = Vec::with_capacity(len);
        for row in rows {
            values.extend(row.as_ref().iter().map(|&v| v.into()));
        }
        Self::from_values(width, height, elem_type, &values, Narrowing::Round)
    }

    /// Start a [`PixelBufferBuilder`] for the given shape and type.
    pub fn builder(width: u32, height: u32, elem_type: ElemType) -> PixelBufferBuilder {
        PixelBufferBuilder::new(width, height, elem_type)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Declared element type.
    #[inline]
    pub fn elem_type(&self) -> ElemType {
        self.data.elem_type()
    }

    /// Borrow the underlying storage.
    pub fn data(&self) -> &PixelData {
        &self.data
    }

    /// Borrow the pixels as a typed slice, if `T` matches the element type.
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::view(&self.data)
    }

    /// Get the pixel at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<f64> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.get_unchecked(row, col))
    }

    /// Get the pixel at `(row, col)` without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the flat index falls outside the storage.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32) -> f64 {
        self.data.get_f64(self.index(row, col))
    }

    /// Set the pixel at `(row, col)`, rounding into the element type.
    pub fn set(&mut self, row: u32, col: u32, value: f64) -> Result<()> {
        self.set_with(row, col, value, Narrowing::Round)
    }

    /// Set the pixel at `(row, col)` with an explicit narrowing mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are outside
    /// the buffer.
    pub fn set_with(&mut self, row: u32, col: u32, value: f64, mode: Narrowing) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        let idx = self.index(row, col);
        self.data.set_f64(idx, value, mode);
        Ok(())
    }

    /// Values of row `row`, or `None` if out of bounds.
    pub fn row(&self, row: u32) -> Option<Vec<f64>> {
        if row >= self.height {
            return None;
        }
        Some((0..self.width).map(|c| self.get_unchecked(row, c)).collect())
    }

    /// All pixels widened to `f64`, row-major.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.data.to_f64_vec()
    }

    /// Swap rows and columns.
    ///
    /// The result is `height x width`; its `(r, c)` equals `(c, r)` of
    /// `self`, and the element type is unchanged.
    pub fn transpose(&self) -> PixelBuffer {
        let (w, h) = (self.width as usize, self.height as usize);
        // Result has `h` columns: flat k -> (k / h, k % h) in the result,
        // which is (k % h, k / h) in the source.
        let data = self.data.gather(w * h, |k| (k % h) * w + k / h);
        PixelBuffer {
            width: self.height,
            height: self.width,
            data,
        }
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    fn fmt_rows(&self, f: &mut fmt::Formatter<'_>, rows: std::ops::Range<usize>) -> fmt::Result {
        let last = rows.end.saturating_sub(1);
        for r in rows.clone() {
            let open = if r == rows.start { "[" } else { " " };
            write!(f, "{open}[")?;
            for c in 0..self.width {
                if c > 0 {
                    f.write_str(" ")?;
                }
                let v = self.get_unchecked(r as u32, c);
                if self.elem_type().is_integer() {
                    write!(f, "{}", v as i64)?;
                } else {
                    write!(f, "{v}")?;
                }
            }
            f.write_str("]")?;
            if r == last {
                f.write_str("]")?;
            } else {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Textual summary of the pixels.
///
/// Buffers shorter than ten rows are printed whole. From ten to nineteen
/// rows, the first ten rows are followed by `...` and the rest. From twenty
/// rows up, the first ten rows are followed by `...` and the last nine.
impl fmt::Display for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.height as usize;
        if h < SUMMARY_HEAD_ROWS {
            return self.fmt_rows(f, 0..h);
        }
        self.fmt_rows(f, 0..SUMMARY_HEAD_ROWS)?;
        f.write_str("\n...\n")?;
        if h < 2 * SUMMARY_HEAD_ROWS {
            self.fmt_rows(f, SUMMARY_HEAD_ROWS..h)
        } else {
            self.fmt_rows(f, h - SUMMARY_TAIL_ROWS..h)
        }
    }
}
