//! Smoothing kernels
//!
//! A [`Kernel`] is an odd-sized 2D array of `f64` weights whose center
//! `((height - 1) / 2, (width - 1) / 2)` is aligned with the output pixel.
//! Filters apply kernels as a correlation: the kernel is never flipped.
//!
//! Gaussian kernels come from [`Kernel::gauss`] (or [`make_gauss`] when the
//! size arrives as a list):
//!
//! ```text
//! raw[m][n] = exp(-((m - rc)^2 + (n - cc)^2) / (2 sigma^2))
//! ```
//!
//! The normalized form divides every cell by the sum of `raw`.

use crate::{FilterError, FilterResult};

/// A 2D smoothing kernel with odd dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Number of columns
    width: u32,
    /// Number of rows
    height: u32,
    /// Center column
    cx: u32,
    /// Center row
    cy: u32,
    /// Weights (row-major order)
    data: Vec<f64>,
}

fn check_odd(height: u32, width: u32) -> FilterResult<()> {
    if height == 0 || width == 0 || height % 2 == 0 || width % 2 == 0 {
        return Err(FilterError::InvalidKernel(format!(
            "size must be two odd positive integers, got [{height}, {width}]"
        )));
    }
    Ok(())
}

pub(crate) fn check_sigma(name: &str, sigma: f64) -> FilterResult<()> {
    if !(sigma > 0.0 && sigma.is_finite()) {
        return Err(FilterError::InvalidParameters(format!(
            "{name} must be positive and finite, got {sigma}"
        )));
    }
    Ok(())
}

/// Unnormalized Gaussian weight at offset `(dm, dn)` from the center.
#[inline]
fn gauss_weight(dm: f64, dn: f64, sigma: f64) -> f64 {
    let a = dm * dm + dn * dn;
    let b = 2.0 * sigma * sigma;
    (-(a / b)).exp()
}

impl Kernel {
    /// Create a zero kernel with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] unless both dimensions are odd
    /// and positive.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        check_odd(height, width)?;
        Ok(Kernel {
            width,
            height,
            cx: (width - 1) / 2,
            cy: (height - 1) / 2,
            data: vec![0.0; width as usize * height as usize],
        })
    }

    /// Create a kernel from row-major weights.
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> FilterResult<Self> {
        let mut kernel = Kernel::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for {}x{} kernel, got {}",
                kernel.data.len(),
                height,
                width,
                data.len()
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Create a `height x width` Gaussian kernel.
    ///
    /// With `normalize` the weights sum to 1; otherwise they are the bare
    /// exponentials and the center weight is exactly 1.
    ///
    /// # Errors
    ///
    /// - [`FilterError::InvalidKernel`] if either dimension is even or zero
    /// - [`FilterError::InvalidParameters`] if `sigma` is not positive
    ///
    /// # Examples
    ///
    /// ```
    /// use rawsmooth_filter::Kernel;
    ///
    /// let raw = Kernel::gauss(3, 3, 1.0, false).unwrap();
    /// assert_eq!(raw.get(1, 1), Some(1.0));
    ///
    /// let norm = Kernel::gauss(3, 3, 1.0, true).unwrap();
    /// assert!((norm.sum() - 1.0).abs() < 1e-9);
    /// ```
    pub fn gauss(height: u32, width: u32, sigma: f64, normalize: bool) -> FilterResult<Self> {
        check_odd(height, width)?;
        check_sigma("sigma", sigma)?;

        let mut kernel = Kernel::new(width, height)?;
        let rc = kernel.cy as f64;
        let cc = kernel.cx as f64;

        let mut sum = 0.0;
        for m in 0..height {
            for n in 0..width {
                let val = gauss_weight(m as f64 - rc, n as f64 - cc, sigma);
                kernel.data[(m * width + n) as usize] = val;
                sum += val;
            }
        }
        if !normalize {
            return Ok(kernel);
        }

        // Recompute each exponent; the stored raw weights are not reused.
        for i in 0..height {
            for j in 0..width {
                let val = gauss_weight(i as f64 - rc, j as f64 - cc, sigma) / sum;
                kernel.data[(i * width + j) as usize] = val;
            }
        }
        Ok(kernel)
    }

    /// Kernel width (columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Kernel height (rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Center column, `(width - 1) / 2`.
    #[inline]
    pub fn center_col(&self) -> u32 {
        self.cx
    }

    /// Center row, `(height - 1) / 2`.
    #[inline]
    pub fn center_row(&self) -> u32 {
        self.cy
    }

    /// Weights in row-major order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Weight at `(row, col)`.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<f64> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.data[(row * self.width + col) as usize])
    }

    /// Set the weight at `(row, col)`. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, value: f64) {
        if row < self.height && col < self.width {
            self.data[(row * self.width + col) as usize] = value;
        }
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Build a Gaussian kernel from a `[height, width]` size list.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] unless `size` holds exactly two
/// odd positive integers, and [`FilterError::InvalidParameters`] if `sigma`
/// is not positive.
pub fn make_gauss(size: &[u32], sigma: f64, normalize: bool) -> FilterResult<Kernel> {
    match *size {
        [height, width] => Kernel::gauss(height, width, sigma, normalize),
        _ => Err(FilterError::InvalidKernel(format!(
            "size must be a list with 2 odd integers, got {} entries",
            size.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauss_raw_values() {
        let k = make_gauss(&[3, 3], 1.0, false).unwrap();
        let edge = (-0.5f64).exp();
        let corner = (-1.0f64).exp();
        assert_eq!(k.get(1, 1), Some(1.0));
        for (r, c) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert!((k.get(r, c).unwrap() - edge).abs() < 1e-12);
        }
        for (r, c) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert!((k.get(r, c).unwrap() - corner).abs() < 1e-12);
        }
        assert!((edge - 0.6065307).abs() < 1e-7);
        assert!((corner - 0.3678794).abs() < 1e-7);
    }

    #[test]
    fn test_gauss_normalized() {
        let k = make_gauss(&[3, 3], 1.0, true).unwrap();
        assert!((k.sum() - 1.0).abs() < 1e-9);
        let expected = 1.0 / (1.0 + 4.0 * (-0.5f64).exp() + 4.0 * (-1.0f64).exp());
        assert!((k.get(1, 1).unwrap() - expected).abs() < 1e-12);
        assert!((expected - 0.2041800).abs() < 1e-6);
    }

    #[test]
    fn test_gauss_symmetry() {
        for &(kh, kw, sigma) in &[(5u32, 5u32, 1.3), (7, 3, 2.0), (1, 9, 0.7)] {
            for normalize in [false, true] {
                let k = Kernel::gauss(kh, kw, sigma, normalize).unwrap();
                for i in 0..kh {
                    for j in 0..kw {
                        assert_eq!(k.get(i, j), k.get(kh - 1 - i, kw - 1 - j));
                        if kh == kw {
                            assert_eq!(k.get(i, j), k.get(j, i));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_gauss_center_is_unique_maximum() {
        let k = Kernel::gauss(7, 5, 1.5, false).unwrap();
        assert_eq!(k.center_row(), 3);
        assert_eq!(k.center_col(), 2);
        assert_eq!(k.get(3, 2), Some(1.0));
        for i in 0..7 {
            for j in 0..5 {
                if (i, j) != (3, 2) {
                    assert!(k.get(i, j).unwrap() < 1.0);
                }
            }
        }
    }

    #[test]
    fn test_gauss_normalized_is_scaled_raw() {
        let raw = Kernel::gauss(5, 5, 1.0, false).unwrap();
        let norm = Kernel::gauss(5, 5, 1.0, true).unwrap();
        let s = raw.sum();
        for (r, n) in raw.data().iter().zip(norm.data()) {
            assert!((r / s - n).abs() < 1e-15);
        }
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(matches!(
            make_gauss(&[3], 1.0, true),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(matches!(
            make_gauss(&[3, 3, 3], 1.0, true),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(matches!(
            make_gauss(&[4, 3], 1.0, true),
            Err(FilterError::InvalidKernel(_))
        ));
        assert!(matches!(
            make_gauss(&[0, 3], 1.0, true),
            Err(FilterError::InvalidKernel(_))
        ));
    }

    #[test]
    fn test_invalid_sigma() {
        for sigma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Kernel::gauss(3, 3, sigma, false),
                Err(FilterError::InvalidParameters(_))
            ));
        }
    }

    #[test]
    fn test_from_slice() {
        let k = Kernel::from_slice(3, 1, &[0.25, 0.5, 0.25]).unwrap();
        assert_eq!(k.center_col(), 1);
        assert_eq!(k.center_row(), 0);
        assert_eq!(k.sum(), 1.0);
        assert!(Kernel::from_slice(3, 1, &[1.0, 2.0]).is_err());
        assert!(Kernel::from_slice(2, 1, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_get_set() {
        let mut k = Kernel::new(3, 3).unwrap();
        k.set(0, 2, 4.0);
        k.set(5, 5, 1.0);
        assert_eq!(k.get(0, 2), Some(4.0));
        assert_eq!(k.get(3, 0), None);
        assert_eq!(k.sum(), 4.0);
    }
}
