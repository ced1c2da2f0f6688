//! # BinBuf - Bounds-Checked Binary Buffers
//!
//! Fast, allocation-minimal readers and writers for fixed-width primitive
//! values over byte buffers that are already materialized in memory, as an
//! alternative to a generic byte-stream abstraction. This crate prioritizes:
//!
//! - **Zero-copy data access**: contiguous reads hand back borrowed slices,
//!   never intermediate buffers
//! - **One bounds check per access**: position validation and advancement
//!   are a single overflow-safe operation
//! - **A canonical wire format**: every multi-byte primitive is
//!   little-endian regardless of host byte order, including the 16-byte
//!   four-word decimal layout
//!
//! ## Quick Start
//!
//! ```
//! use binbuf::{BufferRead, BufferWrite, BytesReader, BytesWriter};
//!
//! let mut buf = [0u8; 1024];
//! let mut writer = BytesWriter::new(&mut buf);
//! writer.write_i32(1024)?;
//! writer.write_i64(1024)?;
//! assert_eq!(writer.position(), 12);
//!
//! let mut reader = BytesReader::new(&buf);
//! assert_eq!(reader.read_i32()?, 1024);
//! assert_eq!(reader.read_i64()?, 1024);
//! # Ok::<(), binbuf::Error>(())
//! ```
//!
//! ## Architecture
//!
//! One shared cursor model, one codec, thin per-storage adapters:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │   BufferRead / BufferWrite  (contracts)     │
//! ├──────────────┬───────────────┬──────────────┤
//! │ BytesReader  │ SequenceReader│ StreamReader │
//! │ BytesWriter  │               │ StreamWriter │
//! ├──────────────┴───────────────┴──────────────┤
//! │     Window + Cursor  (bounds arithmetic)    │
//! ├─────────────────────────────────────────────┤
//! │   codec + decimal  (little-endian wire)     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! A reader or writer owns a [`Window`] (`[offset, offset + length)` within
//! its backing store) and a [`Cursor`] (a relative position in
//! `[0, length]`). Every access validates and advances atomically; a failed
//! access pins the position at end-of-data and surfaces a typed [`Error`].
//! The stream adapters are pass-through shims that delegate the cursor to
//! the underlying `io` stream.
//!
//! ## Windows
//!
//! ```
//! use binbuf::{BufferRead, BytesReader};
//!
//! let data = [0xAA, 0xBB, 0x10, 0x20, 0x30, 0xCC];
//! let mut reader = BytesReader::with_window(&data, 2, 3)?;
//! assert_eq!(reader.remaining(), 3);
//! assert_eq!(reader.read_u16()?, 0x2010);
//! # Ok::<(), binbuf::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous. Each instance owns its cursor
//! exclusively and has no internal locking; shared access requires external
//! serialization or independent instances over read-only-shared bytes. The
//! borrow checker enforces that backing bytes are not mutated behind a live
//! reader.

pub mod codec;
pub mod decimal;
pub mod error;
pub mod reader;
pub mod window;
pub mod writer;

pub use decimal::{Decimal, DecimalError};
pub use error::{Error, Result};
pub use reader::{BufferRead, BytesReader, SequenceReader, StreamReader};
pub use window::{Cursor, Window};
pub use writer::{BufferWrite, BytesWriter, StreamWriter};
