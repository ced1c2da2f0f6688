//! # Error Taxonomy
//!
//! Every failure in this crate is a boundary violation or a malformed input,
//! surfaced immediately as a typed error. Nothing is retried or silently
//! recovered: a failed read or write leaves the cursor pinned at the end of
//! its window, so callers can observe exactly where data ran out and decide
//! to stop.
//!
//! Construction-time errors (`OffsetOutOfRange`, `LengthOutOfRange`,
//! `WindowExceedsBackingStore`) are distinct from the per-call position
//! errors because they describe a misconfigured window, detected once, not
//! an exhausted one.

use thiserror::Error;

use crate::decimal::DecimalError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A position outside `[0, length]` was requested.
    #[error("position {position} is out of range for a window of {length} bytes")]
    PositionOutOfRange { position: usize, length: usize },

    /// A window was constructed with a start offset past the backing store.
    #[error("window offset {offset} exceeds the {backing}-byte backing store")]
    OffsetOutOfRange { offset: usize, backing: usize },

    /// A window was constructed with a length larger than the backing store.
    #[error("window length {length} exceeds the {backing}-byte backing store")]
    LengthOutOfRange { length: usize, backing: usize },

    /// Offset and length are each in range but together overrun the store.
    #[error(
        "window [{offset}, {offset}+{length}) exceeds the {backing}-byte backing store"
    )]
    WindowExceedsBackingStore {
        offset: usize,
        length: usize,
        backing: usize,
    },

    /// The access would advance the cursor past the end of the window.
    ///
    /// The cursor is pinned at the window length before this is returned.
    #[error("end of data: requested {requested} bytes with {remaining} remaining")]
    EndOfData { requested: usize, remaining: usize },

    /// Sixteen bytes were read but do not form a valid decimal bit pattern.
    #[error("malformed decimal: {0}")]
    MalformedDecimal(#[from] DecimalError),

    /// I/O failure propagated from a stream-backed adapter.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
