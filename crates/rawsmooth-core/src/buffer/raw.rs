//! Raw binary I/O for PixelBuffer
//!
//! A raw image file is a headerless stream of `width * height` elements,
//! each `elem_type.size_bytes()` bytes, little-endian.
//!
//! # Element order
//!
//! - [`RawOrder::RowMajor`]: element `k` is pixel `(k / width, k % width)`
//! - [`RawOrder::ColumnMajor`]: element `k` is pixel `(k % height, k / height)`
//!
//! Writes are always row-major.
//!
//! [`PixelBuffer::from_file`] and [`PixelBuffer::write`] never fail on I/O:
//! they log a warning and degrade (to zeros, or to a no-op). The fallible
//! forms are [`PixelBuffer::read_raw`] and [`PixelBuffer::write_raw`].

use super::{ElemType, PixelBuffer, PixelData};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Order in which a flat raw stream fills the 2D buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawOrder {
    /// Consecutive elements run along a row
    RowMajor,
    /// Consecutive elements run down a column
    ColumnMajor,
}

impl PixelBuffer {
    /// Decode a buffer from raw little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RawLength`] unless `bytes` holds exactly
    /// `width * height` elements of `elem_type`.
    pub fn from_bytes(
        width: u32,
        height: u32,
        elem_type: ElemType,
        bytes: &[u8],
        order: RawOrder,
    ) -> Result<Self> {
        let len = super::check_dimensions(width, height)?;
        let expected = len * elem_type.size_bytes();
        if bytes.len() != expected {
            return Err(Error::RawLength {
                expected,
                actual: bytes.len(),
            });
        }
        let data = PixelData::from_le_bytes(elem_type, bytes).ok_or(Error::RawLength {
            expected,
            actual: bytes.len(),
        })?;

        let data = match order {
            RawOrder::RowMajor => data,
            RawOrder::ColumnMajor => {
                let (w, h) = (width as usize, height as usize);
                // Row-major index k is (k / w, k % w); its column-major
                // position is col * h + row.
                data.gather(len, |k| (k % w) * h + k / w)
            }
        };
        PixelBuffer::from_data(width, height, data)
    }

    /// Encode the pixels as raw little-endian bytes, row-major.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.to_le_bytes()
    }

    /// Create a buffer from a raw file, degrading to zeros on failure.
    ///
    /// A missing file, a file of the wrong length, or any other read error
    /// is logged as a warning and yields an all-zero buffer of the declared
    /// shape and type.
    ///
    /// # Errors
    ///
    /// Only [`Error::InvalidDimension`] is returned; I/O problems are not.
    pub fn from_file(
        width: u32,
        height: u32,
        elem_type: ElemType,
        path: impl AsRef<Path>,
        order: RawOrder,
    ) -> Result<Self> {
        let mut buf = PixelBuffer::new(width, height, elem_type)?;
        let path = path.as_ref();
        if let Err(e) = buf.read_raw(path, order) {
            log::warn!(
                "cannot load {}x{} {} image from {}: {}; using all zeros",
                width,
                height,
                elem_type,
                path.display(),
                e
            );
        }
        Ok(buf)
    }

    /// Replace the pixels with the contents of a raw file.
    ///
    /// The buffer's shape and element type are kept. On error the buffer is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::RawLength`] if its size does not match the buffer.
    pub fn read_raw(&mut self, path: impl AsRef<Path>, order: RawOrder) -> Result<()> {
        let mut bytes = Vec::new();
        File::open(path.as_ref())?.read_to_end(&mut bytes)?;
        let loaded =
            PixelBuffer::from_bytes(self.width, self.height, self.elem_type(), &bytes, order)?;
        self.data = loaded.data;
        Ok(())
    }

    /// Write the pixels to a raw file, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn write_raw(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&self.to_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the pixels to a raw file, logging instead of failing.
    pub fn write(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(e) = self.write_raw(path) {
            log::warn!("cannot write image to {}: {}", path.display(), e);
        }
    }
}
