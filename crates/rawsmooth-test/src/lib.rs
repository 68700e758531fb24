//! rawsmooth-test - Regression test framework for rawsmooth
//!
//! Tests accumulate numbered checks in a [`RegParams`] and assert on
//! [`RegParams::cleanup`] at the end, so a single run reports every failing
//! comparison rather than stopping at the first.
//!
//! Two modes are supported:
//!
//! - **Compare**: run the checks (default)
//! - **Display**: run the checks and also keep filter outputs as raw files
//!   under `tests/regout` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use rawsmooth_test::RegParams;
//!
//! let mut rp = RegParams::new("gauss");
//! rp.compare_values(20.0, out.get(1, 1).unwrap(), 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use rawsmooth_core::{ElemType, Narrowing, PixelBuffer};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // rawsmooth-test is at crates/rawsmooth-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Build a bi-level test image: columns `< split` are 0, the rest `high`.
pub fn step_image(
    width: u32,
    height: u32,
    split: u32,
    high: f64,
    elem_type: ElemType,
) -> PixelBuffer {
    let rows: Vec<Vec<f64>> = (0..height)
        .map(|_| (0..width).map(|c| if c < split { 0.0 } else { high }).collect())
        .collect();
    PixelBuffer::from_rows(width, height, elem_type, &rows).expect("valid step image shape")
}

/// Build an image where every pixel equals `value`.
pub fn constant_image(width: u32, height: u32, value: f64, elem_type: ElemType) -> PixelBuffer {
    let values = vec![value; width as usize * height as usize];
    PixelBuffer::from_values(
        width,
        height,
        elem_type,
        &values,
        Narrowing::Round,
    )
    .expect("valid constant image shape")
}

/// Build a deterministic textured image with values in `0..=max`.
///
/// Uses a small linear congruential generator so tests are reproducible.
pub fn noise_image(
    width: u32,
    height: u32,
    max: u32,
    elem_type: ElemType,
    seed: u64,
) -> PixelBuffer {
    let mut state = seed;
    let values: Vec<f64> = (0..width as usize * height as usize)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % (max as u64 + 1)) as f64
        })
        .collect();
    PixelBuffer::from_values(
        width,
        height,
        elem_type,
        &values,
        Narrowing::Round,
    )
    .expect("valid noise image shape")
}
