//! # Writer Contract
//!
//! [`BufferWrite`] mirrors the reader contract: a variant supplies the
//! window accessors and one slice-committing primitive, and every
//! fixed-width primitive write is a default method on top of
//! [`write_bytes`](BufferWrite::write_bytes). Rust slices subsume the
//! byte-array, `(array, offset, length)`, and span flavors of raw writes,
//! so there is a single raw entry point.
//!
//! Variants:
//!
//! - [`BytesWriter`] — borrowed mutable contiguous slice, with an optional
//!   window
//! - [`StreamWriter`](crate::writer::StreamWriter) — pass-through adapter
//!   over `io::Write + io::Seek`

use crate::codec;
use crate::decimal::Decimal;
use crate::error::Result;
use crate::window::{Cursor, Window};

mod stream;

pub use stream::StreamWriter;

/// Writer over a windowed byte destination.
///
/// All multi-byte values are little-endian on the wire. Every successful
/// fixed-width write advances the position by exactly the width of the
/// type; a failed write pins the position at the window length and commits
/// nothing.
pub trait BufferWrite {
    /// Start of the writable window within the backing store.
    fn offset(&self) -> usize;

    /// Usable extent of the window.
    fn length(&self) -> usize;

    /// Current position, relative to the window start.
    fn position(&self) -> usize;

    /// Moves the position to `position` within `[0, length]`.
    ///
    /// Repositioning backwards does not shrink
    /// [`written_length`](BufferWrite::written_length).
    fn set_position(&mut self, position: usize) -> Result<()>;

    /// Bytes left before the end of the window.
    fn remaining(&self) -> usize {
        self.length() - self.position()
    }

    /// High-water mark of bytes committed since construction or reset.
    fn written_length(&self) -> usize;

    /// Copies `bytes` at the current position and advances past them.
    ///
    /// An empty slice is a no-op.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_u8(value as u8)
    }

    /// `true` as `1`, `false` as `0`.
    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(codec::encode_bool(value))
    }

    fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&codec::encode_u16(value))
    }

    fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_bytes(&codec::encode_i16(value))
    }

    fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&codec::encode_u32(value))
    }

    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_bytes(&codec::encode_i32(value))
    }

    fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_bytes(&codec::encode_u64(value))
    }

    fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_bytes(&codec::encode_i64(value))
    }

    fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_bytes(&codec::encode_f32(value))
    }

    fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_bytes(&codec::encode_f64(value))
    }

    /// Sixteen bytes: the four little-endian 32-bit component words.
    fn write_decimal(&mut self, value: Decimal) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }
}

/// Writer over a borrowed mutable byte slice.
///
/// The exclusive borrow guarantees nothing else touches the bytes while
/// the writer exists. [`written`](BytesWriter::written) exposes the
/// committed prefix without copying.
#[derive(Debug)]
pub struct BytesWriter<'a> {
    data: &'a mut [u8],
    cursor: Cursor,
    written: usize,
}

impl<'a> BytesWriter<'a> {
    /// Writer over an entire slice.
    pub fn new(data: &'a mut [u8]) -> Self {
        let window = Window::full(data.len());
        Self {
            data,
            cursor: Cursor::new(window),
            written: 0,
        }
    }

    /// Writer over the `[offset, offset + length)` sub-window of `data`.
    pub fn with_window(data: &'a mut [u8], offset: usize, length: usize) -> Result<Self> {
        let window = Window::new(offset, length, data.len())?;
        Ok(Self {
            data,
            cursor: Cursor::new(window),
            written: 0,
        })
    }

    /// The committed prefix of the window.
    pub fn written(&self) -> &[u8] {
        let start = self.cursor.offset();
        &self.data[start..start + self.written]
    }

    /// Copies the committed prefix into an owned buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.written().to_vec()
    }

    /// Rewinds and clears the high-water mark, reusing the buffer.
    pub fn reset(&mut self) {
        self.cursor.rewind();
        self.written = 0;
    }
}

impl BufferWrite for BytesWriter<'_> {
    fn offset(&self) -> usize {
        self.cursor.offset()
    }

    fn length(&self) -> usize {
        self.cursor.length()
    }

    fn position(&self) -> usize {
        self.cursor.position()
    }

    fn set_position(&mut self, position: usize) -> Result<()> {
        self.cursor.set_position(position)
    }

    fn written_length(&self) -> usize {
        self.written
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        let start = self.cursor.advance(bytes.len())?;
        self.data[start..start + bytes.len()].copy_from_slice(bytes);
        self.written = self.written.max(self.cursor.position());
        Ok(())
    }
}
