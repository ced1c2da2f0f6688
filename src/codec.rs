//! # Little-Endian Primitive Codec
//!
//! Pure conversions between exact-width byte spans and primitive values.
//! Every multi-byte primitive is little-endian on the wire regardless of
//! host byte order. `from_le_bytes`/`to_le_bytes` are the safe unaligned
//! load/store primitives here; no pointer reinterpretation is involved.
//!
//! Floats travel as their IEEE 754 bit patterns, so NaN payloads survive a
//! round trip. Booleans are one byte: any nonzero value decodes to `true`,
//! `true` encodes as `1`.

/// Copies an exact-width array out of a span already validated by a cursor.
///
/// Panics if `bytes.len() != N`. Callers obtain `bytes` from a successful
/// `Cursor::advance` for the same count, which guarantees the width.
#[inline]
pub(crate) fn to_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

#[inline]
pub fn decode_bool(byte: u8) -> bool {
    byte != 0
}

#[inline]
pub fn encode_bool(value: bool) -> u8 {
    value as u8
}

#[inline]
pub fn decode_u16(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

#[inline]
pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

#[inline]
pub fn decode_i16(bytes: [u8; 2]) -> i16 {
    i16::from_le_bytes(bytes)
}

#[inline]
pub fn encode_i16(value: i16) -> [u8; 2] {
    value.to_le_bytes()
}

#[inline]
pub fn decode_u32(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

#[inline]
pub fn encode_u32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

#[inline]
pub fn decode_i32(bytes: [u8; 4]) -> i32 {
    i32::from_le_bytes(bytes)
}

#[inline]
pub fn encode_i32(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

#[inline]
pub fn decode_u64(bytes: [u8; 8]) -> u64 {
    u64::from_le_bytes(bytes)
}

#[inline]
pub fn encode_u64(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

#[inline]
pub fn decode_i64(bytes: [u8; 8]) -> i64 {
    i64::from_le_bytes(bytes)
}

#[inline]
pub fn encode_i64(value: i64) -> [u8; 8] {
    value.to_le_bytes()
}

#[inline]
pub fn decode_f32(bytes: [u8; 4]) -> f32 {
    f32::from_le_bytes(bytes)
}

#[inline]
pub fn encode_f32(value: f32) -> [u8; 4] {
    value.to_le_bytes()
}

#[inline]
pub fn decode_f64(bytes: [u8; 8]) -> f64 {
    f64::from_le_bytes(bytes)
}

#[inline]
pub fn encode_f64(value: f64) -> [u8; 8] {
    value.to_le_bytes()
}
