//! # Boundary and Error-Path Tests
//!
//! Covers the edge-case policy of the cursor model through the public API:
//! position range checks, end-of-data pinning, window construction
//! failures, the zero-count no-op, and the malformed-decimal path.

use binbuf::{
    BufferRead, BufferWrite, BytesReader, BytesWriter, Error, SequenceReader,
};

mod positions {
    use super::*;

    #[test]
    fn set_position_accepts_every_value_up_to_length() {
        let data = [0u8; 8];
        let mut reader = BytesReader::new(&data);
        for position in 0..=8 {
            reader.set_position(position).unwrap();
            assert_eq!(reader.position(), position);
            assert_eq!(reader.remaining(), 8 - position);
        }
    }

    #[test]
    fn set_position_past_length_fails_and_leaves_position() {
        let data = [0u8; 8];
        let mut reader = BytesReader::new(&data);
        reader.set_position(3).unwrap();
        let err = reader.set_position(9).unwrap_err();
        assert!(matches!(err, Error::PositionOutOfRange { position: 9, length: 8 }));
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn writer_position_is_settable_within_the_window() {
        let mut data = [0u8; 8];
        let mut writer = BytesWriter::new(&mut data);
        writer.set_position(8).unwrap();
        assert!(matches!(
            writer.set_position(9).unwrap_err(),
            Error::PositionOutOfRange { .. }
        ));
    }
}

mod end_of_data {
    use super::*;

    /// A reader positioned at `length` fails a one-byte read with
    /// `EndOfData`.
    #[test]
    fn read_byte_at_length_fails() {
        let data = [1u8, 2, 3];
        let mut reader = BytesReader::new(&data);
        reader.set_position(3).unwrap();
        let err = reader.read_u8().unwrap_err();
        assert!(matches!(err, Error::EndOfData { requested: 1, remaining: 0 }));
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn short_read_pins_position_at_length() {
        let data = [1u8, 2, 3];
        let mut reader = BytesReader::new(&data);
        reader.read_u8().unwrap();
        let err = reader.read_u32().unwrap_err();
        assert!(matches!(err, Error::EndOfData { requested: 4, remaining: 2 }));
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn short_write_pins_position_at_length() {
        let mut data = [0u8; 3];
        let mut writer = BytesWriter::new(&mut data);
        let err = writer.write_u64(1).unwrap_err();
        assert!(matches!(err, Error::EndOfData { requested: 8, remaining: 3 }));
        assert_eq!(writer.position(), 3);
        assert_eq!(writer.written_length(), 0);
    }

    #[test]
    fn reader_recovers_after_end_of_data_by_repositioning() {
        let data = [0xAB, 0xCD];
        let mut reader = BytesReader::new(&data);
        assert!(reader.read_u32().is_err());
        reader.set_position(0).unwrap();
        assert_eq!(reader.read_u16().unwrap(), 0xCDAB);
    }
}

mod windows {
    use super::*;

    /// `offset + length > backing_size` is the joint overrun error,
    /// distinct from the per-parameter range errors.
    #[test]
    fn window_overrun_errors_are_distinct() {
        let data = [0u8; 16];
        assert!(matches!(
            BytesReader::with_window(&data, 17, 0).unwrap_err(),
            Error::OffsetOutOfRange { offset: 17, backing: 16 }
        ));
        assert!(matches!(
            BytesReader::with_window(&data, 0, 17).unwrap_err(),
            Error::LengthOutOfRange { length: 17, backing: 16 }
        ));
        assert!(matches!(
            BytesReader::with_window(&data, 10, 7).unwrap_err(),
            Error::WindowExceedsBackingStore {
                offset: 10,
                length: 7,
                backing: 16
            }
        ));
    }

    #[test]
    fn writer_window_is_validated_the_same_way() {
        let mut data = [0u8; 16];
        assert!(BytesWriter::with_window(&mut data, 8, 8).is_ok());
        assert!(matches!(
            BytesWriter::with_window(&mut data, 8, 9).unwrap_err(),
            Error::WindowExceedsBackingStore { .. }
        ));
    }

    #[test]
    fn positions_are_relative_to_the_window() {
        let data: Vec<u8> = (0..32).collect();
        let mut reader = BytesReader::with_window(&data, 16, 8).unwrap();
        assert_eq!(reader.offset(), 16);
        assert_eq!(reader.length(), 8);
        assert_eq!(reader.read_u8().unwrap(), 16);
        reader.set_position(7).unwrap();
        assert_eq!(reader.read_u8().unwrap(), 23);
    }
}

mod zero_count {
    use super::*;

    /// A zero-length request is "nothing requested": an empty result
    /// rather than an error, even at end-of-data.
    #[test]
    fn zero_count_span_is_empty_not_an_error() {
        let data = [1u8];
        let mut reader = BytesReader::new(&data);
        reader.set_position(1).unwrap();
        assert!(reader.read_span(0).unwrap().is_empty());
        assert!(reader.read_bytes(0).unwrap().is_empty());
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn zero_count_sequence_span_is_empty() {
        let mut reader = SequenceReader::new(std::iter::empty::<&[u8]>());
        assert_eq!(reader.length(), 0);
        assert!(reader.read_span(0).unwrap().is_empty());
        assert!(reader.read_u8().is_err());
    }
}

mod malformed_decimal {
    use super::*;

    /// An alternating `{0,1,0,1,...}` 16-byte pattern is
    /// structurally well formed but not a valid decimal; reading it must
    /// surface `MalformedDecimal`, not a panic or a raw validation error.
    #[test]
    fn alternating_bit_pattern_is_malformed() {
        let mut data = [0u8; 16];
        for (i, byte) in data.iter_mut().enumerate() {
            *byte = (i % 2) as u8;
        }
        let mut reader = BytesReader::new(&data);
        let err = reader.read_decimal().unwrap_err();
        assert!(matches!(err, Error::MalformedDecimal(_)));
        // The 16 bytes were consumed before validation failed.
        assert_eq!(reader.position(), 16);
    }

    #[test]
    fn truncated_decimal_is_end_of_data_not_malformed() {
        let data = [0u8; 10];
        let mut reader = BytesReader::new(&data);
        assert!(matches!(
            reader.read_decimal().unwrap_err(),
            Error::EndOfData { requested: 16, remaining: 10 }
        ));
    }
}
