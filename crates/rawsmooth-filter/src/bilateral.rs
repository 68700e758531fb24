//! Bilateral filtering (edge-preserving smoothing)
//!
//! Bilateral filtering is a non-linear, edge-preserving smoothing filter.
//! It combines a spatial Gaussian kernel with a range (intensity) Gaussian.
//!
//! # Algorithm
//!
//! For each output pixel `(i, j)`, with `C` the source pixel under the
//! kernel center and `padded` the zero-padded source:
//!
//! 1. Weight every kernel cell by the photometric Gaussian of its
//!    intensity difference from `C`:
//!    `W[m][n] = H[m][n] * exp(-(padded[i+m][j+n] - C)^2 / (2 sigma_r^2))`
//! 2. Normalize: `Hn = W / sum(W)`
//! 3. Accumulate: `out[i][j] = sum padded[i+u][j+v] * Hn[u][v]`
//!
//! Neighbours far from `C` in intensity get almost no weight, so regions
//! are smoothed without blurring across strong edges.
//!
//! # Example
//!
//! ```ignore
//! use rawsmooth_filter::{Kernel, bilateral_filter};
//!
//! let h = Kernel::gauss(7, 7, 1.0, false)?;
//! let smoothed = bilateral_filter(&image, &h, 60.0)?;
//! ```

use crate::kernel::check_sigma;
use crate::padding::Padded;
use crate::rows::fill_rows;
use crate::{FilterOptions, FilterResult, Kernel};
use rawsmooth_core::PixelBuffer;

/// Apply a bilateral filter with a raw spatial kernel.
///
/// `kernel` is the unnormalized spatial Gaussian (see
/// [`Kernel::gauss`] with `normalize = false`); `sigma_r` is the range
/// standard deviation in pixel-value units.
///
/// The result has the same width, height and element type as `image`.
/// Images smaller than the kernel are accepted; near the border the zero
/// padding biases the output toward 0.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`](crate::FilterError) if
/// `sigma_r` is not positive and finite.
pub fn bilateral_filter(
    image: &PixelBuffer,
    kernel: &Kernel,
    sigma_r: f64,
) -> FilterResult<PixelBuffer> {
    bilateral_filter_with(image, kernel, sigma_r, &FilterOptions::default())
}

/// [`bilateral_filter`] with explicit options.
pub fn bilateral_filter_with(
    image: &PixelBuffer,
    kernel: &Kernel,
    sigma_r: f64,
    options: &FilterOptions,
) -> FilterResult<PixelBuffer> {
    check_sigma("sigma_r", sigma_r)?;

    let w = image.width() as usize;
    let h = image.height() as usize;
    let kw = kernel.width() as usize;
    let kh = kernel.height() as usize;
    let rc = kernel.center_row() as usize;
    let cc = kernel.center_col() as usize;

    log::debug!(
        "bilateral_filter: {}x{} {} image, {}x{} kernel, sigma_r = {}",
        w,
        h,
        image.elem_type(),
        kh,
        kw,
        sigma_r
    );

    let padded = Padded::zero(image, rc, cc);
    let spatial = kernel.data();
    let denom = 2.0 * sigma_r * sigma_r;

    let mut out = vec![0.0f64; w * h];
    fill_rows(&mut out, w, |i, out_row| {
        let mut weights = vec![0.0f64; kh * kw];
        for (j, dst) in out_row.iter_mut().enumerate() {
            let center = padded.get(i + rc, j + cc);

            // Photometric weighting
            let mut weight_sum = 0.0f64;
            for m in 0..kh {
                let src = &padded.row(i + m)[j..j + kw];
                for n in 0..kw {
                    let diff = src[n] - center;
                    let weight = spatial[m * kw + n] * (-(diff * diff) / denom).exp();
                    weights[m * kw + n] = weight;
                    weight_sum += weight;
                }
            }

            // A kernel with no weight at its center can leave nothing to
            // normalize; keep the source pixel.
            if weight_sum <= 0.0 {
                *dst = center;
                continue;
            }

            // Normalization and accumulation
            let mut acc = 0.0f64;
            for u in 0..kh {
                let src = &padded.row(i + u)[j..j + kw];
                for v in 0..kw {
                    acc += src[v] * (weights[u * kw + v] / weight_sum);
                }
            }
            *dst = acc;
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

/// Bilateral filter with a `size x size` raw spatial Gaussian.
///
/// # Arguments
///
/// * `image` - Source image
/// * `size` - Odd kernel size
/// * `sigma_s` - Spatial standard deviation (pixels)
/// * `sigma_r` - Range standard deviation (pixel-value units)
pub fn bilateral(
    image: &PixelBuffer,
    size: u32,
    sigma_s: f64,
    sigma_r: f64,
) -> FilterResult<PixelBuffer> {
    let kernel = Kernel::gauss(size, size, sigma_s, false)?;
    bilateral_filter(image, &kernel, sigma_r)
}
