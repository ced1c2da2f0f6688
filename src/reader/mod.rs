//! # Reader Contract
//!
//! [`BufferRead`] is the capability contract shared by every reader
//! variant. A variant supplies the window accessors and one span
//! materialization primitive; every fixed-width primitive read is a default
//! method on top of [`read_span`](BufferRead::read_span), so the decoding
//! logic is written once.
//!
//! Variants:
//!
//! - [`BytesReader`] — borrowed contiguous slice (covers whole arrays,
//!   array segments, and read-only memory; a segment is just a window)
//! - [`SequenceReader`] — ordered disjoint chunks, zero-copy within a
//!   chunk, forced copy across a boundary
//! - [`StreamReader`] — pass-through adapter over `io::Read + io::Seek`;
//!   the stream owns its own cursor

use std::borrow::Cow;

use crate::codec;
use crate::decimal::Decimal;
use crate::error::Result;

mod bytes;
mod sequence;
mod stream;

pub use bytes::BytesReader;
pub use sequence::SequenceReader;
pub use stream::StreamReader;

/// Reader over a windowed byte source.
///
/// All multi-byte values are little-endian on the wire. Every successful
/// fixed-width read advances the position by exactly the width of the type;
/// a failed read pins the position at the window length.
pub trait BufferRead {
    /// Start of the readable window within the backing store.
    fn offset(&self) -> usize;

    /// Usable extent of the window.
    fn length(&self) -> usize;

    /// Current position, relative to the window start.
    fn position(&self) -> usize;

    /// Moves the position to `position` within `[0, length]`.
    fn set_position(&mut self, position: usize) -> Result<()>;

    /// Bytes left before end-of-data.
    fn remaining(&self) -> usize {
        self.length() - self.position()
    }

    /// Materializes `count` validated bytes at the current position and
    /// advances past them.
    ///
    /// Borrowed where the backing store is contiguous, copied where it is
    /// not. A zero count yields an empty span, never an error: "nothing
    /// requested" is distinct from "not enough available".
    fn read_span(&mut self, count: usize) -> Result<Cow<'_, [u8]>>;

    /// Copies up to `buf.len()` bytes into `buf`, returning how many were
    /// copied. Stops short at end-of-data instead of failing.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Reads `count` bytes into a freshly allocated buffer.
    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        Ok(self.read_span(count)?.into_owned())
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_span(1)?[0])
    }

    fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// One byte; any nonzero value is `true`.
    fn read_bool(&mut self) -> Result<bool> {
        Ok(codec::decode_bool(self.read_u8()?))
    }

    fn read_u16(&mut self) -> Result<u16> {
        let span = self.read_span(2)?;
        Ok(codec::decode_u16(codec::to_array(&span)))
    }

    fn read_i16(&mut self) -> Result<i16> {
        let span = self.read_span(2)?;
        Ok(codec::decode_i16(codec::to_array(&span)))
    }

    fn read_u32(&mut self) -> Result<u32> {
        let span = self.read_span(4)?;
        Ok(codec::decode_u32(codec::to_array(&span)))
    }

    fn read_i32(&mut self) -> Result<i32> {
        let span = self.read_span(4)?;
        Ok(codec::decode_i32(codec::to_array(&span)))
    }

    fn read_u64(&mut self) -> Result<u64> {
        let span = self.read_span(8)?;
        Ok(codec::decode_u64(codec::to_array(&span)))
    }

    fn read_i64(&mut self) -> Result<i64> {
        let span = self.read_span(8)?;
        Ok(codec::decode_i64(codec::to_array(&span)))
    }

    fn read_f32(&mut self) -> Result<f32> {
        let span = self.read_span(4)?;
        Ok(codec::decode_f32(codec::to_array(&span)))
    }

    fn read_f64(&mut self) -> Result<f64> {
        let span = self.read_span(8)?;
        Ok(codec::decode_f64(codec::to_array(&span)))
    }

    /// Sixteen bytes as four little-endian 32-bit words (lo, mid, hi,
    /// flags). An invalid bit pattern fails with
    /// [`Error::MalformedDecimal`](crate::Error::MalformedDecimal); the
    /// position still advances past the 16 bytes.
    fn read_decimal(&mut self) -> Result<Decimal> {
        let span = self.read_span(Decimal::WIDTH)?;
        let value = Decimal::from_le_bytes(codec::to_array(&span))?;
        Ok(value)
    }
}
