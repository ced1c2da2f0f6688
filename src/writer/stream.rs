//! # StreamWriter
//!
//! Pass-through adapter exposing the writer contract over any
//! `io::Write + io::Seek` destination. Like the stream reader, the stream
//! owns its own cursor; position, length, and the high-water mark are
//! cached locally and kept in sync by routing every movement through the
//! adapter. A stream destination grows on demand, so writes never hit
//! `EndOfData`; failures here are I/O errors.

use std::io::{Seek, SeekFrom, Write};

use crate::error::{Error, Result};
use crate::writer::BufferWrite;

#[derive(Debug)]
pub struct StreamWriter<W> {
    stream: W,
    position: u64,
    length: u64,
    written: u64,
}

impl<W: Write + Seek> StreamWriter<W> {
    /// Wraps a stream, measuring its length with a seek round trip.
    pub fn new(mut stream: W) -> Result<Self> {
        let position = stream.stream_position()?;
        let length = stream.seek(SeekFrom::End(0))?;
        stream.seek(SeekFrom::Start(position))?;
        Ok(Self {
            stream,
            position,
            length,
            written: 0,
        })
    }

    /// Flushes and releases the underlying stream.
    pub fn into_inner(mut self) -> Result<W> {
        self.stream.flush()?;
        Ok(self.stream)
    }
}

impl<W: Write + Seek> BufferWrite for StreamWriter<W> {
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

    fn written_length(&self) -> usize {
        self.written as usize
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.stream.write_all(bytes)?;
        self.position += bytes.len() as u64;
        self.length = self.length.max(self.position);
        self.written = self.written.max(self.position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_grow_the_stream_and_the_high_water_mark() {
        let inner = std::io::Cursor::new(Vec::new());
        let mut writer = StreamWriter::new(inner).unwrap();
        writer.write_u32(0x0403_0201).unwrap();
        assert_eq!(writer.position(), 4);
        assert_eq!(writer.length(), 4);
        assert_eq!(writer.written_length(), 4);
        let inner = writer.into_inner().unwrap();
        assert_eq!(inner.into_inner(), vec![0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn repositioning_backwards_keeps_the_high_water_mark() {
        let inner = std::io::Cursor::new(Vec::new());
        let mut writer = StreamWriter::new(inner).unwrap();
        writer.write_u64(0).unwrap();
        writer.set_position(0).unwrap();
        writer.write_u16(0xBEEF).unwrap();
        assert_eq!(writer.position(), 2);
        assert_eq!(writer.written_length(), 8);
        assert_eq!(writer.length(), 8);
    }

    #[test]
    fn set_position_past_length_is_rejected() {
        let inner = std::io::Cursor::new(vec![0u8; 4]);
        let mut writer = StreamWriter::new(inner).unwrap();
        assert!(writer.set_position(4).is_ok());
        assert!(matches!(
            writer.set_position(5).unwrap_err(),
            Error::PositionOutOfRange { position: 5, length: 4 }
        ));
    }
}
