//! Pixel element types
//!
//! A [`PixelBuffer`](super::PixelBuffer) carries a runtime [`ElemType`] tag
//! and stores its pixels in the matching [`PixelData`] variant. The
//! [`Element`] trait connects each tag to its Rust scalar type.
//!
//! # Narrowing
//!
//! Filters compute in `f64` and store back into the buffer's element type.
//! Integer stores round to nearest (or truncate toward zero with
//! [`Narrowing::Truncate`]) and then saturate to the type's range, following
//! Rust's float-to-int `as` semantics (NaN becomes 0). `f32` stores take the
//! nearest representable value.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Element type of a pixel buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElemType {
    /// Unsigned 8-bit
    U8,
    /// Unsigned 16-bit
    U16,
    /// Unsigned 32-bit
    U32,
    /// Signed 16-bit
    I16,
    /// Signed 32-bit
    I32,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
}

impl ElemType {
    /// All supported element types.
    pub const ALL: [ElemType; 7] = [
        ElemType::U8,
        ElemType::U16,
        ElemType::U32,
        ElemType::I16,
        ElemType::I32,
        ElemType::F32,
        ElemType::F64,
    ];

    /// Storage width of one element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            ElemType::U8 => 1,
            ElemType::U16 | ElemType::I16 => 2,
            ElemType::U32 | ElemType::I32 | ElemType::F32 => 4,
            ElemType::F64 => 8,
        }
    }

    /// Short lowercase name (`"u8"`, `"f64"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ElemType::U8 => "u8",
            ElemType::U16 => "u16",
            ElemType::U32 => "u32",
            ElemType::I16 => "i16",
            ElemType::I32 => "i32",
            ElemType::F32 => "f32",
            ElemType::F64 => "f64",
        }
    }

    /// Whether the type stores integers.
    pub fn is_integer(self) -> bool {
        !matches!(self, ElemType::F32 | ElemType::F64)
    }

    /// Narrow a computed value to what this type can store.
    ///
    /// The result is returned as `f64` so callers can compare against the
    /// stored value without knowing the concrete type.
    pub fn narrow(self, value: f64, mode: Narrowing) -> f64 {
        match self {
            ElemType::U8 => u8::from_f64(value, mode).to_f64(),
            ElemType::U16 => u16::from_f64(value, mode).to_f64(),
            ElemType::U32 => u32::from_f64(value, mode).to_f64(),
            ElemType::I16 => i16::from_f64(value, mode).to_f64(),
            ElemType::I32 => i32::from_f64(value, mode).to_f64(),
            ElemType::F32 => f32::from_f64(value, mode).to_f64(),
            ElemType::F64 => value,
        }
    }
}

impl fmt::Display for ElemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElemType {
    type Err = Error;

    /// Accepts both the short names and the long `uint8`/`float64` forms.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "u8" | "uint8" => Ok(ElemType::U8),
            "u16" | "uint16" => Ok(ElemType::U16),
            "u32" | "uint32" => Ok(ElemType::U32),
            "i16" | "int16" => Ok(ElemType::I16),
            "i32" | "int32" => Ok(ElemType::I32),
            "f32" | "float32" => Ok(ElemType::F32),
            "f64" | "float64" => Ok(ElemType::F64),
            _ => Err(Error::UnknownElemType(s.to_string())),
        }
    }
}

/// How a floating-point value is stored into an integer element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Narrowing {
    /// Round to nearest, half away from zero, then saturate
    #[default]
    Round,
    /// Truncate toward zero, then saturate
    Truncate,
}

/// Scalar types that can be stored in a [`PixelData`]
pub trait Element: Copy + PartialEq + fmt::Debug + Default + Send + Sync + 'static {
    /// Runtime tag for this type
    const ELEM_TYPE: ElemType;

    /// Widen to `f64` (exact for every supported type).
    fn to_f64(self) -> f64;

    /// Narrow from `f64`.
    fn from_f64(value: f64, mode: Narrowing) -> Self;

    /// Append the little-endian encoding to `out`.
    fn write_le(self, out: &mut Vec<u8>);

    /// Decode from exactly `ELEM_TYPE.size_bytes()` little-endian bytes.
    fn read_le(bytes: &[u8]) -> Self;

    /// Borrow the typed storage if `data` holds this type.
    fn view(data: &PixelData) -> Option<&[Self]>;

    /// Wrap typed values into storage.
    fn wrap(values: Vec<Self>) -> PixelData;
}

macro_rules! impl_element {
    ($t:ty, $variant:ident, |$value:ident, $mode:ident| $narrow:expr) => {
        impl Element for $t {
            const ELEM_TYPE: ElemType = ElemType::$variant;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            #[allow(unused_variables)]
            fn from_f64($value: f64, $mode: Narrowing) -> Self {
                $narrow
            }

            #[inline]
            fn write_le(self, out: &mut Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn read_le(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$t>()];
                buf.copy_from_slice(bytes);
                <$t>::from_le_bytes(buf)
            }

            fn view(data: &PixelData) -> Option<&[Self]> {
                match data {
                    PixelData::$variant(v) => Some(v.as_slice()),
                    _ => None,
                }
            }

            fn wrap(values: Vec<Self>) -> PixelData {
                PixelData::$variant(values)
            }
        }
    };
}

impl_element!(u8, U8, |v, mode| match mode {
    Narrowing::Round => v.round() as u8,
    Narrowing::Truncate => v as u8,
});
impl_element!(u16, U16, |v, mode| match mode {
    Narrowing::Round => v.round() as u16,
    Narrowing::Truncate => v as u16,
});
impl_element!(u32, U32, |v, mode| match mode {
    Narrowing::Round => v.round() as u32,
    Narrowing::Truncate => v as u32,
});
impl_element!(i16, I16, |v, mode| match mode {
    Narrowing::Round => v.round() as i16,
    Narrowing::Truncate => v as i16,
});
impl_element!(i32, I32, |v, mode| match mode {
    Narrowing::Round => v.round() as i32,
    Narrowing::Truncate => v as i32,
});
impl_element!(f32, F32, |v, mode| v as f32);
impl_element!(f64, F64, |v, mode| v);

/// Typed pixel storage, row-major with no padding
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

/// Run `$body` with `$v` bound to the inner vector of any variant.
macro_rules! with_data {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            PixelData::U8($v) => $body,
            PixelData::U16($v) => $body,
            PixelData::U32($v) => $body,
            PixelData::I16($v) => $body,
            PixelData::I32($v) => $body,
            PixelData::F32($v) => $body,
            PixelData::F64($v) => $body,
        }
    };
}

/// Like `with_data!`, but rewraps the resulting vector in the same variant.
macro_rules! map_data {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            PixelData::U8($v) => PixelData::U8($body),
            PixelData::U16($v) => PixelData::U16($body),
            PixelData::U32($v) => PixelData::U32($body),
            PixelData::I16($v) => PixelData::I16($body),
            PixelData::I32($v) => PixelData::I32($body),
            PixelData::F32($v) => PixelData::F32($body),
            PixelData::F64($v) => PixelData::F64($body),
        }
    };
}

fn narrow_all<T: Element>(values: &[f64], mode: Narrowing) -> Vec<T> {
    values.iter().map(|&v| T::from_f64(v, mode)).collect()
}

fn decode_all<T: Element>(bytes: &[u8]) -> Vec<T> {
    bytes
        .chunks_exact(T::ELEM_TYPE.size_bytes())
        .map(T::read_le)
        .collect()
}

impl PixelData {
    /// Zero-filled storage of `len` elements.
    pub fn zeros(elem_type: ElemType, len: usize) -> Self {
        match elem_type {
            ElemType::U8 => PixelData::U8(vec![0; len]),
            ElemType::U16 => PixelData::U16(vec![0; len]),
            ElemType::U32 => PixelData::U32(vec![0; len]),
            ElemType::I16 => PixelData::I16(vec![0; len]),
            ElemType::I32 => PixelData::I32(vec![0; len]),
            ElemType::F32 => PixelData::F32(vec![0.0; len]),
            ElemType::F64 => PixelData::F64(vec![0.0; len]),
        }
    }

    /// Narrow `f64` values into storage of the given type.
    pub fn from_f64_values(elem_type: ElemType, values: &[f64], mode: Narrowing) -> Self {
        match elem_type {
            ElemType::U8 => PixelData::U8(narrow_all(values, mode)),
            ElemType::U16 => PixelData::U16(narrow_all(values, mode)),
            ElemType::U32 => PixelData::U32(narrow_all(values, mode)),
            ElemType::I16 => PixelData::I16(narrow_all(values, mode)),
            ElemType::I32 => PixelData::I32(narrow_all(values, mode)),
            ElemType::F32 => PixelData::F32(narrow_all(values, mode)),
            ElemType::F64 => PixelData::F64(values.to_vec()),
        }
    }

    /// Decode little-endian bytes.
    ///
    /// Returns `None` unless `bytes.len()` is a multiple of the element size.
    pub fn from_le_bytes(elem_type: ElemType, bytes: &[u8]) -> Option<Self> {
        if bytes.len() % elem_type.size_bytes() != 0 {
            return None;
        }
        let data = match elem_type {
            ElemType::U8 => PixelData::U8(bytes.to_vec()),
            ElemType::U16 => PixelData::U16(decode_all(bytes)),
            ElemType::U32 => PixelData::U32(decode_all(bytes)),
            ElemType::I16 => PixelData::I16(decode_all(bytes)),
            ElemType::I32 => PixelData::I32(decode_all(bytes)),
            ElemType::F32 => PixelData::F32(decode_all(bytes)),
            ElemType::F64 => PixelData::F64(decode_all(bytes)),
        };
        Some(data)
    }

    /// Runtime element type tag.
    pub fn elem_type(&self) -> ElemType {
        match self {
            PixelData::U8(_) => ElemType::U8,
            PixelData::U16(_) => ElemType::U16,
            PixelData::U32(_) => ElemType::U32,
            PixelData::I16(_) => ElemType::I16,
            PixelData::I32(_) => ElemType::I32,
            PixelData::F32(_) => ElemType::F32,
            PixelData::F64(_) => ElemType::F64,
        }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        with_data!(self, v => v.len())
    }

    /// Whether storage is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at flat index `idx`, widened to `f64`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn get_f64(&self, idx: usize) -> f64 {
        with_data!(self, v => v[idx].to_f64())
    }

    /// Store `value` at flat index `idx`, narrowing to the element type.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn set_f64(&mut self, idx: usize, value: f64, mode: Narrowing) {
        with_data!(self, v => v[idx] = Element::from_f64(value, mode))
    }

    /// All values widened to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        with_data!(self, v => v.iter().map(|&x| x.to_f64()).collect())
    }

    /// Little-endian encoding of every element, in storage order.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() * self.elem_type().size_bytes());
        with_data!(self, v => v.iter().for_each(|&x| x.write_le(&mut out)));
        out
    }

    /// New storage whose element `k` is `self[source(k)]`, for `k < len`.
    pub(crate) fn gather(&self, len: usize, source: impl Fn(usize) -> usize) -> Self {
        map_data!(self, v => (0..len).map(|k| v[source(k)]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bytes() {
        assert_eq!(ElemType::U8.size_bytes(), 1);
        assert_eq!(ElemType::I16.size_bytes(), 2);
        assert_eq!(ElemType::F32.size_bytes(), 4);
        assert_eq!(ElemType::F64.size_bytes(), 8);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("uint16".parse::<ElemType>().unwrap(), ElemType::U16);
        assert_eq!("F64".parse::<ElemType>().unwrap(), ElemType::F64);
        assert!("complex64".parse::<ElemType>().is_err());
        for t in ElemType::ALL {
            assert_eq!(t.name().parse::<ElemType>().unwrap(), t);
        }
    }

    #[test]
    fn test_narrow_round_and_truncate() {
        assert_eq!(ElemType::U8.narrow(20.236, Narrowing::Round), 20.0);
        assert_eq!(ElemType::U8.narrow(99.9999999, Narrowing::Round), 100.0);
        assert_eq!(ElemType::U8.narrow(99.9999999, Narrowing::Truncate), 99.0);
        assert_eq!(ElemType::I16.narrow(-2.7, Narrowing::Truncate), -2.0);
        assert_eq!(ElemType::I16.narrow(-2.7, Narrowing::Round), -3.0);
    }

    #[test]
    fn test_narrow_saturates() {
        assert_eq!(ElemType::U8.narrow(300.0, Narrowing::Round), 255.0);
        assert_eq!(ElemType::U8.narrow(-5.0, Narrowing::Round), 0.0);
        assert_eq!(ElemType::I16.narrow(1e9, Narrowing::Truncate), i16::MAX as f64);
        assert_eq!(ElemType::U16.narrow(f64::NAN, Narrowing::Round), 0.0);
    }

    #[test]
    fn test_float_types_keep_fraction() {
        assert_eq!(ElemType::F64.narrow(0.125, Narrowing::Truncate), 0.125);
        assert_eq!(ElemType::F32.narrow(0.5, Narrowing::Truncate), 0.5);
    }

    #[test]
    fn test_le_bytes_decode() {
        let bytes = [0x01, 0x00, 0x02, 0x00, 0xff, 0xff];
        let data = PixelData::from_le_bytes(ElemType::U16, &bytes).unwrap();
        assert_eq!(data, PixelData::U16(vec![1, 2, 0xffff]));
        let data = PixelData::from_le_bytes(ElemType::I16, &bytes).unwrap();
        assert_eq!(data, PixelData::I16(vec![1, 2, -1]));
        assert!(PixelData::from_le_bytes(ElemType::U32, &bytes).is_none());
    }

    #[test]
    fn test_le_bytes_encode() {
        let data = PixelData::I32(vec![-2, 258]);
        assert_eq!(
            data.to_le_bytes(),
            vec![0xfe, 0xff, 0xff, 0xff, 0x02, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn test_typed_view() {
        let data = PixelData::U8(vec![1, 2, 3]);
        assert_eq!(u8::view(&data), Some(&[1u8, 2, 3][..]));
        assert!(u16::view(&data).is_none());
    }

    #[test]
    fn test_gather_reverses() {
        let data = PixelData::F32(vec![1.0, 2.0, 3.0]);
        let rev = data.gather(3, |k| 2 - k);
        assert_eq!(rev, PixelData::F32(vec![3.0, 2.0, 1.0]));
    }
}
