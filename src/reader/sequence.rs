//! # SequenceReader
//!
//! Reader over an ordered sequence of disjoint byte chunks whose lengths
//! sum to the logical length. A request that falls entirely inside one
//! chunk is served as a zero-copy borrow of that chunk; a request that
//! crosses a chunk boundary is copied into a buffer sized exactly to the
//! request. A discontiguous destination is out of scope, so this family
//! has no writer.

use std::borrow::Cow;

use crate::error::Result;
use crate::reader::BufferRead;
use crate::window::{Cursor, Window};

#[derive(Debug, Clone)]
pub struct SequenceReader<'a> {
    chunks: Vec<&'a [u8]>,
    /// Cumulative start of each chunk: chunk `i` covers
    /// `[starts[i], starts[i] + chunks[i].len())` in logical offsets.
    starts: Vec<usize>,
    cursor: Cursor,
}

impl<'a> SequenceReader<'a> {
    /// Reader over `chunks` in order.
    pub fn new<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let chunks: Vec<&[u8]> = chunks.into_iter().collect();
        let mut starts = Vec::with_capacity(chunks.len());
        let mut total = 0usize;
        for chunk in &chunks {
            starts.push(total);
            total += chunk.len();
        }
        Self {
            chunks,
            starts,
            cursor: Cursor::new(Window::full(total)),
        }
    }

    /// Number of backing chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Index of the chunk containing logical offset `at`.
    ///
    /// `at` must be strictly inside the sequence, which `Cursor::advance`
    /// guarantees for every caller.
    fn locate(&self, at: usize) -> usize {
        self.starts.partition_point(|&start| start <= at) - 1
    }

    /// Materializes `count > 0` bytes starting at logical offset `start`.
    fn span_at(&self, start: usize, count: usize) -> Cow<'a, [u8]> {
        let idx = self.locate(start);
        let local = start - self.starts[idx];
        let chunk = self.chunks[idx];
        if local + count <= chunk.len() {
            return Cow::Borrowed(&chunk[local..local + count]);
        }

        // Crosses a chunk boundary: assemble exactly `count` bytes.
        let mut out = Vec::with_capacity(count);
        let mut idx = idx;
        let mut local = local;
        while out.len() < count {
            let chunk = self.chunks[idx];
            let take = (count - out.len()).min(chunk.len() - local);
            out.extend_from_slice(&chunk[local..local + take]);
            idx += 1;
            local = 0;
        }
        Cow::Owned(out)
    }

    /// Zero-copy-where-possible read tied to the backing borrow rather
    /// than to the reader itself.
    pub fn read_chunked(&mut self, count: usize) -> Result<Cow<'a, [u8]>> {
        if count == 0 {
            return Ok(Cow::Borrowed(&[]));
        }
        let start = self.cursor.advance(count)?;
        Ok(self.span_at(start, count))
    }
}

impl BufferRead for SequenceReader<'_> {
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
        self.read_chunked(count)
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let count = buf.len().min(self.cursor.remaining());
        let span = self.read_chunked(count)?;
        buf[..count].copy_from_slice(&span);
        Ok(count)
    }
}
