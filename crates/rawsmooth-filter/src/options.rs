//! Filter options

use rawsmooth_core::Narrowing;

/// Options shared by the smoothing filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// How each `f64` result is stored into the output element type
    pub narrowing: Narrowing,
}

impl FilterOptions {
    /// Options with the given narrowing mode.
    pub fn with_narrowing(narrowing: Narrowing) -> Self {
        FilterOptions { narrowing }
    }
}
