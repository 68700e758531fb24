//! Zero padding
//!
//! Filters read their source through a [`Padded`] grid: the image widened by
//! the kernel half-sizes on every side, with zeros outside the image. Output
//! pixel `(u, v)` then sees its kernel window at padded rows `u..u + kh` and
//! columns `v..v + kw`, with no bounds checks against the source image.

use rawsmooth_core::PixelBuffer;

/// Source image surrounded by a zero border, widened to `f64`
#[derive(Debug, Clone)]
pub(crate) struct Padded {
    /// Padded width, `width + 2 * pad_cols`
    width: usize,
    /// Padded rows (row-major)
    data: Vec<f64>,
}

impl Padded {
    /// Pad `image` with `pad_rows` zero rows above and below and `pad_cols`
    /// zero columns left and right.
    pub(crate) fn zero(image: &PixelBuffer, pad_rows: usize, pad_cols: usize) -> Self {
        let w = image.width() as usize;
        let h = image.height() as usize;
        let pw = w + 2 * pad_cols;
        let ph = h + 2 * pad_rows;

        let mut data = vec![0.0f64; pw * ph];
        let src = image.to_f64_vec();
        for (r, src_row) in src.chunks_exact(w).enumerate() {
            let start = (r + pad_rows) * pw + pad_cols;
            data[start..start + w].copy_from_slice(src_row);
        }

        Padded { width: pw, data }
    }

    /// Row `row` of the padded grid.
    #[inline]
    pub(crate) fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.width..(row + 1) * self.width]
    }

    /// Value at padded coordinates `(row, col)`.
    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }
}
