//! PixelBuffer regression test
//!
//! Tests construction, transpose and the textual summary:
//!   (1) from_rows / builder / zeros
//!   (2) transpose shape and involution for every element type
//!   (3) Display head/tail rows

use rawsmooth_core::{ElemType, Error, PixelBuffer};
use rawsmooth_test::{RegParams, noise_image};

#[test]
fn pixelbuffer_reg_transpose() {
    let mut rp = RegParams::new("pixelbuffer_transpose");

    // 2x3 [[1,2,3],[4,5,6]] -> 3x2 [[1,4],[2,5],[3,6]]
    let buf = PixelBuffer::from_rows(3, 2, ElemType::U8, &[[1u8, 2, 3], [4, 5, 6]]).unwrap();
    let t = buf.transpose();
    let expected = PixelBuffer::from_rows(2, 3, ElemType::U8, &[[1u8, 4], [2, 5], [3, 6]]).unwrap();
    rp.compare_buffers(&expected, &t);

    for (i, &elem_type) in ElemType::ALL.iter().enumerate() {
        let buf = noise_image(13, 7, 100, elem_type, 17 + i as u64);
        let t = buf.transpose();
        rp.check(t.dimensions() == (7, 13), "transpose swaps dimensions");
        rp.check(t.elem_type() == elem_type, "transpose keeps element type");
        rp.compare_values(buf.get(2, 11).unwrap(), t.get(11, 2).unwrap(), 0.0);
        rp.compare_buffers(&buf, &t.transpose());
    }

    assert!(rp.cleanup(), "pixelbuffer_transpose regression test failed");
}

#[test]
fn pixelbuffer_reg_construction() {
    let mut rp = RegParams::new("pixelbuffer_construction");

    let zeros = PixelBuffer::new(5, 4, ElemType::F32).unwrap();
    rp.check(
        zeros.to_f64_vec().iter().all(|&v| v == 0.0),
        "new buffer is all zeros",
    );

    let built = PixelBuffer::builder(3, 2, ElemType::I16)
        .rows(&[[-1i16, 0, 1], [2, 3, 4]])
        .build()
        .unwrap();
    rp.compare_values(-1.0, built.get(0, 0).unwrap(), 0.0);
    rp.compare_values(4.0, built.get(1, 2).unwrap(), 0.0);

    // Array values are narrowed into the declared type.
    let narrowed = PixelBuffer::from_rows(2, 1, ElemType::U8, &[[300.0f64, -5.0]]).unwrap();
    rp.compare_values(255.0, narrowed.get(0, 0).unwrap(), 0.0);
    rp.compare_values(0.0, narrowed.get(0, 1).unwrap(), 0.0);

    let err = PixelBuffer::from_rows(3, 3, ElemType::U8, &[[1u8, 2, 3], [4, 5, 6]]).unwrap_err();
    rp.check(
        matches!(err, Error::ShapeMismatch { .. }),
        "row count mismatch is a shape error",
    );

    assert!(rp.cleanup(), "pixelbuffer_construction regression test failed");
}

#[test]
fn pixelbuffer_reg_display() {
    let mut rp = RegParams::new("pixelbuffer_display");

    let small = PixelBuffer::from_rows(3, 2, ElemType::U16, &[[1u16, 2, 3], [4, 5, 6]]).unwrap();
    rp.compare_strings(b"[[1 2 3]\n [4 5 6]]", small.to_string().as_bytes());

    // 25 rows of one column: first ten, ellipsis, last nine
    let values: Vec<i32> = (0..25).collect();
    let tall = PixelBuffer::from_vec(1, 25, values).unwrap();
    let text = tall.to_string();
    let lines: Vec<&str> = text.lines().collect();
    rp.compare_values(20.0, lines.len() as f64, 0.0);
    rp.compare_strings(b"[[0]", lines[0].as_bytes());
    rp.compare_strings(b" [9]]", lines[9].as_bytes());
    rp.compare_strings(b"...", lines[10].as_bytes());
    rp.compare_strings(b"[[16]", lines[11].as_bytes());
    rp.compare_strings(b" [24]]", lines[19].as_bytes());

    let floats = PixelBuffer::from_vec(2, 1, vec![0.5f64, 2.0]).unwrap();
    rp.compare_strings(b"[[0.5 2]]", floats.to_string().as_bytes());

    assert!(rp.cleanup(), "pixelbuffer_display regression test failed");
}
