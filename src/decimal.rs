//! # Decimal
//!
//! 128-bit decimal value in the four-word wire layout used by .NET's
//! `System.Decimal`: a 96-bit unsigned mantissa in three little-endian
//! 32-bit words (lo, mid, hi) followed by a flags word. Flag bits 16-23
//! hold the scale, bit 31 holds the sign, and every other bit is reserved.
//! The represented value is `(-1)^sign * mantissa / 10^scale`.
//!
//! Which of the 2^128 bit patterns are valid is defined here explicitly
//! rather than inherited from platform behavior: all reserved bits must be
//! zero and the scale must not exceed [`Decimal::MAX_SCALE`]. A pattern
//! failing either check decodes to a [`DecimalError`], which readers
//! surface as [`Error::MalformedDecimal`](crate::Error::MalformedDecimal)
//! instead of leaking the lower-level failure.

use std::fmt;

use thiserror::Error;

const SCALE_SHIFT: u32 = 16;
const SCALE_MASK: u32 = 0x00FF_0000;
const SIGN_MASK: u32 = 0x8000_0000;
/// Bits 0-15 and 24-30 of the flags word.
const RESERVED_MASK: u32 = !(SCALE_MASK | SIGN_MASK);

/// A structurally well-formed 16-byte pattern that is not a valid decimal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecimalError {
    #[error("scale {0} exceeds the maximum of 28")]
    ScaleTooLarge(u8),

    #[error("reserved flag bits set: {0:#010x}")]
    ReservedBitsSet(u32),
}

/// A 128-bit decimal in the canonical four-word layout.
///
/// Construction always validates, so every held value is wire-safe: a
/// `Decimal` obtained from any constructor re-encodes to the same 16 bytes
/// it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    lo: u32,
    mid: u32,
    hi: u32,
    flags: u32,
}

impl Decimal {
    /// Wire width in bytes.
    pub const WIDTH: usize = 16;

    /// Largest permitted scale (digits to the right of the decimal point).
    pub const MAX_SCALE: u8 = 28;

    pub const ZERO: Self = Self {
        lo: 0,
        mid: 0,
        hi: 0,
        flags: 0,
    };

    /// Builds a decimal from its mantissa words, sign, and scale.
    pub fn from_parts(
        lo: u32,
        mid: u32,
        hi: u32,
        negative: bool,
        scale: u8,
    ) -> Result<Self, DecimalError> {
        if scale > Self::MAX_SCALE {
            return Err(DecimalError::ScaleTooLarge(scale));
        }
        let mut flags = u32::from(scale) << SCALE_SHIFT;
        if negative {
            flags |= SIGN_MASK;
        }
        Ok(Self { lo, mid, hi, flags })
    }

    /// Validates a raw flags word and assembles a decimal from the four
    /// wire words.
    pub fn from_words(lo: u32, mid: u32, hi: u32, flags: u32) -> Result<Self, DecimalError> {
        if flags & RESERVED_MASK != 0 {
            return Err(DecimalError::ReservedBitsSet(flags));
        }
        let scale = ((flags & SCALE_MASK) >> SCALE_SHIFT) as u8;
        if scale > Self::MAX_SCALE {
            return Err(DecimalError::ScaleTooLarge(scale));
        }
        Ok(Self { lo, mid, hi, flags })
    }

    /// Decodes the 16-byte wire form: four little-endian 32-bit words in
    /// lo, mid, hi, flags order.
    pub fn from_le_bytes(bytes: [u8; 16]) -> Result<Self, DecimalError> {
        let word =
            |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        Self::from_words(word(0), word(4), word(8), word(12))
    }

    /// Encodes to the 16-byte wire form.
    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..4].copy_from_slice(&self.lo.to_le_bytes());
        out[4..8].copy_from_slice(&self.mid.to_le_bytes());
        out[8..12].copy_from_slice(&self.hi.to_le_bytes());
        out[12..16].copy_from_slice(&self.flags.to_le_bytes());
        out
    }

    /// Low 32 bits of the mantissa.
    pub fn lo(&self) -> u32 {
        self.lo
    }

    /// Middle 32 bits of the mantissa.
    pub fn mid(&self) -> u32 {
        self.mid
    }

    /// High 32 bits of the mantissa.
    pub fn hi(&self) -> u32 {
        self.hi
    }

    /// Raw flags word (scale and sign).
    pub fn flags(&self) -> u32 {
        self.flags
    }

    /// The 96-bit unsigned mantissa.
    pub fn mantissa(&self) -> u128 {
        u128::from(self.lo) | u128::from(self.mid) << 32 | u128::from(self.hi) << 64
    }

    /// Number of digits to the right of the decimal point.
    pub fn scale(&self) -> u8 {
        ((self.flags & SCALE_MASK) >> SCALE_SHIFT) as u8
    }

    pub fn is_negative(&self) -> bool {
        self.flags & SIGN_MASK != 0
    }

    pub fn is_zero(&self) -> bool {
        self.lo == 0 && self.mid == 0 && self.hi == 0
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        let magnitude = value.unsigned_abs();
        Self {
            lo: magnitude as u32,
            mid: (magnitude >> 32) as u32,
            hi: 0,
            flags: if value < 0 { SIGN_MASK } else { 0 },
        }
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self {
            lo: value as u32,
            mid: (value >> 32) as u32,
            hi: 0,
            flags: 0,
        }
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() && !self.is_zero() {
            "-"
        } else {
            ""
        };
        let mantissa = self.mantissa();
        let scale = u32::from(self.scale());
        if scale == 0 {
            write!(f, "{sign}{mantissa}")
        } else {
            // 10^28 fits in u128, so the divisor cannot overflow.
            let divisor = 10u128.pow(scale);
            write!(
                f,
                "{sign}{}.{:0width$}",
                mantissa / divisor,
                mantissa % divisor,
                width = scale as usize
            )
        }
    }
}
