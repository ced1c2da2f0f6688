//! Fuzz testing for decimal bit-pattern validation.
//!
//! Feeds arbitrary 16-byte patterns to the decimal decoder. Whatever the
//! validator accepts must re-encode to the identical bytes and format
//! without panicking; everything else must fail with a typed error, never
//! a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use binbuf::Decimal;

fuzz_target!(|bytes: [u8; 16]| {
    match Decimal::from_le_bytes(bytes) {
        Ok(value) => {
            assert_eq!(value.to_le_bytes(), bytes);
            assert!(value.scale() <= Decimal::MAX_SCALE);
            let _ = value.to_string();
        }
        Err(_) => {
            // Rejected patterns must have a reserved bit or oversized scale.
            let flags = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);
            let reserved = flags & !(0x00FF_0000 | 0x8000_0000);
            let scale = (flags >> 16) & 0xFF;
            assert!(reserved != 0 || scale > 28);
        }
    }
});
