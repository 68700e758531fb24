//! Output row driver
//!
//! Every output pixel depends only on the padded source and the kernel, so
//! rows can be filled independently. With the `parallel` feature the rows
//! are distributed over the rayon thread pool; the call returns once every
//! row is written.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fill `out` (row-major, `width` columns) by calling `fill(row, slice)` for
/// each output row.
#[cfg(feature = "parallel")]
pub(crate) fn fill_rows<F>(out: &mut [f64], width: usize, fill: F)
where
    F: Fn(usize, &mut [f64]) + Send + Sync,
{
    out.par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, slice)| fill(row, slice));
}

/// Fill `out` (row-major, `width` columns) by calling `fill(row, slice)` for
/// each output row.
#[cfg(not(feature = "parallel"))]
pub(crate) fn fill_rows<F>(out: &mut [f64], width: usize, fill: F)
where
    F: Fn(usize, &mut [f64]) + Send + Sync,
{
    out.chunks_mut(width)
        .enumerate()
        .for_each(|(row, slice)| fill(row, slice));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rows_visits_each_row_once() {
        let mut out = vec![0.0; 12];
        fill_rows(&mut out, 4, |row, slice| {
            for (col, v) in slice.iter_mut().enumerate() {
                *v += (row * 10 + col) as f64;
            }
        });
        assert_eq!(&out[..4], &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(&out[8..], &[20.0, 21.0, 22.0, 23.0]);
    }
}
