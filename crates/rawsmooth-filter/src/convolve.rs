//! Gaussian (linear) filtering
//!
//! Correlates an image with a kernel over a zero-padded border:
//!
//! ```text
//! out[u][v] = sum_i sum_j padded[u + i][v + j] * H[i][j]
//! ```
//!
//! The sum is taken in `f64` and narrowed into the source element type.
//! The kernel is not flipped, and its weights need not sum to 1.

use crate::padding::Padded;
use crate::rows::fill_rows;
use crate::{FilterOptions, FilterResult, Kernel};
use rawsmooth_core::PixelBuffer;

/// Smooth an image with a kernel, zero-padding the border.
///
/// The result has the same width, height and element type as `image`.
///
/// # Examples
///
/// ```
/// use rawsmooth_core::{ElemType, PixelBuffer};
/// use rawsmooth_filter::{Kernel, gauss_filter};
///
/// let image = PixelBuffer::from_rows(3, 3, ElemType::U8, &[[0, 0, 0], [0, 100, 0], [0, 0, 0]])
///     .unwrap();
/// let h = Kernel::gauss(3, 3, 1.0, true).unwrap();
/// let out = gauss_filter(&image, &h).unwrap();
/// assert_eq!(out.get(1, 1), Some(20.0));
/// ```
pub fn gauss_filter(image: &PixelBuffer, kernel: &Kernel) -> FilterResult<PixelBuffer> {
    gauss_filter_with(image, kernel, &FilterOptions::default())
}

/// [`gauss_filter`] with explicit options.
pub fn gauss_filter_with(
    image: &PixelBuffer,
    kernel: &Kernel,
    options: &FilterOptions,
) -> FilterResult<PixelBuffer> {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let kw = kernel.width() as usize;
    let kh = kernel.height() as usize;
    let rc = kernel.center_row() as usize;
    let cc = kernel.center_col() as usize;

    log::debug!(
        "gauss_filter: {}x{} {} image, {}x{} kernel",
        w,
        h,
        image.elem_type(),
        kh,
        kw
    );

    let padded = Padded::zero(image, rc, cc);
    let weights = kernel.data();

    let mut out = vec![0.0f64; w * h];
    fill_rows(&mut out, w, |u, out_row| {
        for (v, dst) in out_row.iter_mut().enumerate() {
            let mut sum = 0.0f64;
            for i in 0..kh {
                let src = &padded.row(u + i)[v..v + kw];
                let krow = &weights[i * kw..(i + 1) * kw];
                for (p, k) in src.iter().zip(krow) {
                    sum += p * k;
                }
            }
            *dst = sum;
        }
    });

    Ok(PixelBuffer::from_values(
        image.width(),
        image.height(),
        image.elem_type(),
        &out,
        options.narrowing,
    )?)
}

/// Apply a normalized `size x size` Gaussian blur.
///
/// # Errors
///
/// Fails if `size` is even or zero, or if `sigma` is not positive.
pub fn gaussian_blur(image: &PixelBuffer, size: u32, sigma: f64) -> FilterResult<PixelBuffer> {
    let kernel = Kernel::gauss(size, size, sigma, true)?;
    gauss_filter(image, &kernel)
}
