//! # BytesReader
//!
//! Reader over a borrowed contiguous byte slice. One type covers whole
//! arrays, array segments, and read-only memory blocks: a Rust slice is
//! already a borrowed view, and a segment is a window over it. The borrow
//! bounds the reader's lifetime; the caller must not mutate the bytes while
//! the reader exists, which the borrow checker enforces.

use std::borrow::Cow;

use crate::error::Result;
use crate::reader::BufferRead;
use crate::window::{Cursor, Window};

#[derive(Debug, Clone)]
pub struct BytesReader<'a> {
    data: &'a [u8],
    cursor: Cursor,
}

impl<'a> BytesReader<'a> {
    /// Reader over an entire slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            cursor: Cursor::new(Window::full(data.len())),
        }
    }

    /// Reader over the `[offset, offset + length)` sub-window of `data`.
    pub fn with_window(data: &'a [u8], offset: usize, length: usize) -> Result<Self> {
        let window = Window::new(offset, length, data.len())?;
        Ok(Self {
            data,
            cursor: Cursor::new(window),
        })
    }

    /// Points the reader at a new slice, reusing the instance.
    pub fn reset(&mut self, data: &'a [u8]) {
        self.data = data;
        self.cursor.reset(Window::full(data.len()));
    }

    /// Points the reader at a sub-window of a new slice.
    pub fn reset_window(&mut self, data: &'a [u8], offset: usize, length: usize) -> Result<()> {
        let window = Window::new(offset, length, data.len())?;
        self.data = data;
        self.cursor.reset(window);
        Ok(())
    }

    /// Zero-copy read of `count` bytes.
    ///
    /// The returned slice borrows from the backing store, not from the
    /// reader, so it stays valid while the reader moves on.
    pub fn read_slice(&mut self, count: usize) -> Result<&'a [u8]> {
        if count == 0 {
            return Ok(&[]);
        }
        let start = self.cursor.advance(count)?;
        Ok(&self.data[start..start + count])
    }
}

impl BufferRead for BytesReader<'_> {
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

    fn read_span(&mut self, count: usize) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(self.read_slice(count)?))
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let count = buf.len().min(self.cursor.remaining());
        let span = self.read_slice(count)?;
        buf[..count].copy_from_slice(span);
        Ok(count)
    }
}
