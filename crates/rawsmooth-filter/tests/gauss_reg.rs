//! Gaussian filter regression test
//!
//! Tests gauss_filter:
//!   (1) impulse response of the normalized 3x3 kernel
//!   (2) shape and type preservation for every element type
//!   (3) constant images are unchanged away from the border

use rawsmooth_core::{ElemType, PixelBuffer};
use rawsmooth_filter::{Kernel, gauss_filter, gaussian_blur};
use rawsmooth_test::{RegParams, constant_image, noise_image};

#[test]
fn gauss_reg_impulse() {
    let mut rp = RegParams::new("gauss_impulse");

    let image = PixelBuffer::from_rows(
        3,
        3,
        ElemType::U8,
        &[[0u8, 0, 0], [0, 100, 0], [0, 0, 0]],
    )
    .unwrap();
    let h = Kernel::gauss(3, 3, 1.0, true).unwrap();
    let out = gauss_filter(&image, &h).unwrap();
    rp.compare_values(20.0, out.get(1, 1).unwrap(), 0.0);
    rp.compare_values(12.0, out.get(0, 1).unwrap(), 0.0);
    rp.compare_values(8.0, out.get(0, 0).unwrap(), 0.0);

    // In f64 nothing is narrowed: the center is 100 times the kernel center.
    let mut fimage = PixelBuffer::new(3, 3, ElemType::F64).unwrap();
    fimage.set(1, 1, 100.0).unwrap();
    let fout = gauss_filter(&fimage, &h).unwrap();
    rp.compare_values(100.0 * h.get(1, 1).unwrap(), fout.get(1, 1).unwrap(), 1e-12);
    rp.compare_values(20.418, fout.get(1, 1).unwrap(), 1e-3);
    rp.write_buffer(&out, "impulse").unwrap();

    assert!(rp.cleanup(), "gauss_impulse regression test failed");
}

#[test]
fn gauss_reg_shape() {
    let mut rp = RegParams::new("gauss_shape");
    let h = Kernel::gauss(7, 7, 1.0, true).unwrap();

    for (i, &elem_type) in ElemType::ALL.iter().enumerate() {
        // 5x3 is smaller than the kernel; 40x24 is not.
        for &(w, ht) in &[(5u32, 3u32), (40, 24)] {
            let image = noise_image(w, ht, 200, elem_type, i as u64);
            let out = gauss_filter(&image, &h).unwrap();
            rp.check(out.dimensions() == (w, ht), "dimensions preserved");
            rp.check(out.elem_type() == elem_type, "element type preserved");
        }
    }

    assert!(rp.cleanup(), "gauss_shape regression test failed");
}

#[test]
fn gauss_reg_constant() {
    let mut rp = RegParams::new("gauss_constant");

    for &elem_type in &ElemType::ALL {
        let image = constant_image(20, 15, 77.0, elem_type);
        for &(kh, kw, sigma) in &[(3u32, 3u32, 1.0), (7, 5, 1.5)] {
            let h = Kernel::gauss(kh, kw, sigma, true).unwrap();
            let out = gauss_filter(&image, &h).unwrap();
            let (rc, cc) = (h.center_row(), h.center_col());

            let delta = if elem_type.is_integer() { 0.0 } else { 1e-4 };
            for r in rc..15 - rc {
                for c in cc..20 - cc {
                    rp.compare_values(77.0, out.get(r, c).unwrap(), delta);
                }
            }
            // The border sees zero padding.
            rp.check(out.get(0, 0).unwrap() < 77.0, "corner darkened");
        }
    }

    let blurred = gaussian_blur(&constant_image(9, 9, 10.0, ElemType::U16), 3, 1.0).unwrap();
    rp.compare_values(10.0, blurred.get(4, 4).unwrap(), 0.0);
    rp.write_buffer(&blurred, "blurred").unwrap();

    assert!(rp.cleanup(), "gauss_constant regression test failed");
}
