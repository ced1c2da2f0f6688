//! # Window and Cursor
//!
//! Shared bounds arithmetic for every backing-store variant. A [`Window`] is
//! an immutable `[offset, offset + length)` region of a backing store; a
//! [`Cursor`] tracks the current position inside that window, relative to
//! its start. Every reader and writer funnels its accesses through
//! [`Cursor::advance`], so the overflow-safe boundary check exists in
//! exactly one place instead of once per storage kind.

use crate::error::{Error, Result};

/// Immutable readable/writable region of a backing store.
///
/// Invariant: `offset + length <= backing_store_size`, checked at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    offset: usize,
    length: usize,
}

impl Window {
    /// Window covering an entire `backing`-byte store.
    pub fn full(backing: usize) -> Self {
        Self {
            offset: 0,
            length: backing,
        }
    }

    /// Window over `[offset, offset + length)` of a `backing`-byte store.
    ///
    /// The three failure kinds are distinct so a caller can tell a bad
    /// offset from a bad length from a pair that only overruns jointly.
    pub fn new(offset: usize, length: usize, backing: usize) -> Result<Self> {
        if offset > backing {
            return Err(Error::OffsetOutOfRange { offset, backing });
        }
        if length > backing {
            return Err(Error::LengthOutOfRange { length, backing });
        }
        match offset.checked_add(length) {
            Some(end) if end <= backing => Ok(Self { offset, length }),
            _ => Err(Error::WindowExceedsBackingStore {
                offset,
                length,
                backing,
            }),
        }
    }

    /// Absolute start of the window inside the backing store.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Usable extent from the window start.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Mutable position within a [`Window`].
///
/// The position is always in `[0, length]` and is what callers observe as
/// `position()`; the absolute backing-store index is `offset + position`.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    window: Window,
    position: usize,
}

impl Cursor {
    /// Cursor at the start of `window`.
    pub fn new(window: Window) -> Self {
        Self {
            window,
            position: 0,
        }
    }

    /// Absolute start of the window.
    pub fn offset(&self) -> usize {
        self.window.offset()
    }

    /// Usable extent of the window.
    pub fn length(&self) -> usize {
        self.window.length()
    }

    /// Current position relative to the window start.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the position and the end of the window.
    pub fn remaining(&self) -> usize {
        self.window.length() - self.position
    }

    /// Absolute backing-store index of the current position.
    pub fn absolute(&self) -> usize {
        self.window.offset() + self.position
    }

    /// Moves the position to `position` within `[0, length]`.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.window.length() {
            return Err(Error::PositionOutOfRange {
                position,
                length: self.window.length(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Validates that `count` bytes are available and advances past them.
    ///
    /// Returns the absolute offset at which the caller may access `count`
    /// bytes. The check uses `checked_add`, so a count large enough to wrap
    /// the position is still caught. On failure the position is pinned at
    /// the window length: the cursor lands exactly at end-of-data.
    pub fn advance(&mut self, count: usize) -> Result<usize> {
        let length = self.window.length();
        match self.position.checked_add(count) {
            Some(next) if next <= length => {
                let start = self.window.offset() + self.position;
                self.position = next;
                Ok(start)
            }
            _ => {
                let remaining = self.remaining();
                self.position = length;
                Err(Error::EndOfData {
                    requested: count,
                    remaining,
                })
            }
        }
    }

    /// Rewinds to the window start, keeping the window itself.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Replaces the window and rewinds.
    pub fn reset(&mut self, window: Window) {
        self.window = window;
        self.position = 0;
    }
}
