//! # StreamReader
//!
//! Pass-through adapter exposing the reader contract over any
//! `io::Read + io::Seek` source. The stream owns its own cursor, so the
//! window/cursor model is bypassed entirely: position and length are
//! delegated, cached locally so the accessors stay infallible, and kept in
//! sync by routing every movement through the adapter. Reads pull into an
//! owned buffer in a loop until the request is filled; a source that ends
//! early surfaces `EndOfData`. This is the one variant that may block,
//! inheriting whatever blocking semantics the underlying stream has.

use std::borrow::Cow;
use std::io::{Read, Seek, SeekFrom};

use crate::error::{Error, Result};
use crate::reader::BufferRead;

#[derive(Debug)]
pub struct StreamReader<R> {
    stream: R,
    position: u64,
    length: u64,
}

impl<R: Read + Seek> StreamReader<R> {
    /// Wraps a stream, measuring its length with a seek round trip.
    pub fn new(mut stream: R) -> Result<Self> {
        let position = stream.stream_position()?;
        let length = stream.seek(SeekFrom::End(0))?;
        stream.seek(SeekFrom::Start(position))?;
        Ok(Self {
            stream,
            position,
            length,
        })
    }

    /// Releases the underlying stream.
    pub fn into_inner(self) -> R {
        self.stream
    }

    /// Fills `buf` completely or fails with `EndOfData` once the stream is
    /// exhausted. Bytes consumed before exhaustion stay consumed.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.stream.read(&mut buf[filled..])?;
            if n == 0 {
                return Err(Error::EndOfData {
                    requested: buf.len(),
                    remaining: filled,
                });
            }
            filled += n;
            self.position += n as u64;
        }
        Ok(())
    }
}

impl<R: Read + Seek> BufferRead for StreamReader<R> {
    fn offset(&self) -> usize {
        0
    }

    fn length(&self) -> usize {
        self.length as usize
    }

    fn position(&self) -> usize {
        self.position as usize
    }

    fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.length as usize {
            return Err(Error::PositionOutOfRange {
                position,
                length: self.length as usize,
            });
        }
        self.stream.seek(SeekFrom::Start(position as u64))?;
        self.position = position as u64;
        Ok(())
    }

    fn read_span(&mut self, count: usize) -> Result<Cow<'_, [u8]>> {
        if count == 0 {
            return Ok(Cow::Borrowed(&[]));
        }
        let mut buf = vec![0u8; count];
        self.fill(&mut buf)?;
        Ok(Cow::Owned(buf))
    }

    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.stream.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
            self.position += n as u64;
        }
        Ok(filled)
    }
}
