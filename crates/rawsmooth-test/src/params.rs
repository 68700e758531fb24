//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use rawsmooth_core::PixelBuffer;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Run comparisons only (default)
    #[default]
    Compare,
    /// Run comparisons and keep outputs for inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "gauss")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Check a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.record_failure(msg);
        }
        condition
    }

    /// Compare two buffers for shape, element type and pixel equality
    pub fn compare_buffers(&mut self, buf1: &PixelBuffer, buf2: &PixelBuffer) -> bool {
        self.compare_buffers_within(buf1, buf2, 0.0)
    }

    /// Compare two buffers, allowing each pixel to differ by `delta`
    pub fn compare_buffers_within(
        &mut self,
        buf1: &PixelBuffer,
        buf2: &PixelBuffer,
        delta: f64,
    ) -> bool {
        self.index += 1;

        if buf1.dimensions() != buf2.dimensions() || buf1.elem_type() != buf2.elem_type() {
            let msg = format!(
                "Failure in {}_reg: buffer comparison for index {} - {}x{} {} vs {}x{} {}",
                self.test_name,
                self.index,
                buf1.width(),
                buf1.height(),
                buf1.elem_type(),
                buf2.width(),
                buf2.height(),
                buf2.elem_type()
            );
            self.record_failure(msg);
            return false;
        }

        for row in 0..buf1.height() {
            for col in 0..buf1.width() {
                let p1 = buf1.get_unchecked(row, col);
                let p2 = buf2.get_unchecked(row, col);
                if (p1 - p2).abs() > delta {
                    let msg = format!(
                        "Failure in {}_reg: buffer comparison for index {} - \
                         pixel mismatch at ({}, {}): {} vs {}",
                        self.test_name, self.index, row, col, p1, p2
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two byte arrays
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Keep a buffer as a raw file when in display mode
    ///
    /// The file is named `<test>.<index>.<label>.<type>.<width>x<height>.raw`
    /// under the regout directory. In compare mode nothing is written.
    pub fn write_buffer(&mut self, buf: &PixelBuffer, label: &str) -> TestResult<()> {
        self.index += 1;
        if !self.display() {
            return Ok(());
        }

        let dir = regout_dir();
        fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.clone(),
            message: e.to_string(),
        })?;

        let path = format!(
            "{}/{}.{:02}.{}.{}.{}x{}.raw",
            dir,
            self.test_name,
            self.index,
            label,
            buf.elem_type(),
            buf.width(),
            buf.height()
        );
        buf.write_raw(&path).map_err(|e| TestError::BufferWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
