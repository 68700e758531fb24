//! rawsmooth-filter - Smoothing filters for raw grayscale images
//!
//! This crate provides:
//!
//! - Gaussian kernel construction ([`Kernel::gauss`], [`make_gauss`])
//! - Linear smoothing with an arbitrary odd kernel ([`gauss_filter`])
//! - Bilateral filtering (edge-preserving smoothing) ([`bilateral_filter`])
//!
//! Both filters zero-pad the border, apply the kernel without flipping it,
//! and return an image of the same shape and element type as their input.
//! Enable the `parallel` feature to fill output rows on the rayon pool.

pub mod bilateral;
pub mod convolve;
mod error;
pub mod kernel;
mod options;
mod padding;
mod rows;

pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, make_gauss};
pub use options::FilterOptions;

// Re-export commonly used functions
pub use bilateral::{bilateral, bilateral_filter, bilateral_filter_with};
pub use convolve::{gauss_filter, gauss_filter_with, gaussian_blur};
