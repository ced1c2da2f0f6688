//! Fuzz testing for the buffer readers.
//!
//! Drives arbitrary operation sequences against both the contiguous and
//! the chunked reader over arbitrary bytes, checking that no operation
//! panics and that the cursor invariants hold after every call: the
//! position never leaves `[0, length]` and `remaining` always equals
//! `length - position`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use binbuf::{BufferRead, BytesReader, SequenceReader};

#[derive(Debug, Arbitrary)]
struct ReaderInput {
    data: Vec<u8>,
    split: usize,
    ops: Vec<ReaderOp>,
}

#[derive(Debug, Arbitrary, Clone, Copy)]
enum ReaderOp {
    ReadBool,
    ReadU8,
    ReadI8,
    ReadU16,
    ReadI16,
    ReadU32,
    ReadI32,
    ReadU64,
    ReadI64,
    ReadF32,
    ReadF64,
    ReadDecimal,
    ReadBytes(u16),
    ReadSpan(u16),
    ReadInto(u8),
    SetPosition(u16),
}

fn apply(reader: &mut dyn BufferRead, op: ReaderOp) {
    match op {
        ReaderOp::ReadBool => drop(reader.read_bool()),
        ReaderOp::ReadU8 => drop(reader.read_u8()),
        ReaderOp::ReadI8 => drop(reader.read_i8()),
        ReaderOp::ReadU16 => drop(reader.read_u16()),
        ReaderOp::ReadI16 => drop(reader.read_i16()),
        ReaderOp::ReadU32 => drop(reader.read_u32()),
        ReaderOp::ReadI32 => drop(reader.read_i32()),
        ReaderOp::ReadU64 => drop(reader.read_u64()),
        ReaderOp::ReadI64 => drop(reader.read_i64()),
        ReaderOp::ReadF32 => drop(reader.read_f32()),
        ReaderOp::ReadF64 => drop(reader.read_f64()),
        ReaderOp::ReadDecimal => drop(reader.read_decimal()),
        ReaderOp::ReadBytes(count) => drop(reader.read_bytes(count as usize)),
        ReaderOp::ReadSpan(count) => drop(reader.read_span(count as usize)),
        ReaderOp::ReadInto(size) => {
            let mut buf = vec![0u8; size as usize];
            drop(reader.read_into(&mut buf));
        }
        ReaderOp::SetPosition(position) => drop(reader.set_position(position as usize)),
    }
}

fn check_invariants(reader: &dyn BufferRead) {
    assert!(reader.position() <= reader.length());
    assert_eq!(reader.remaining(), reader.length() - reader.position());
}

fuzz_target!(|input: ReaderInput| {
    let mut contiguous = BytesReader::new(&input.data);
    let split = if input.data.is_empty() {
        0
    } else {
        input.split % input.data.len()
    };
    let (front, back) = input.data.split_at(split);
    let mut chunked = SequenceReader::new([front, back]);

    for &op in &input.ops {
        apply(&mut contiguous, op);
        check_invariants(&contiguous);
        apply(&mut chunked, op);
        check_invariants(&chunked);
        // Both variants present the same window, so their cursors agree.
        assert_eq!(contiguous.position(), chunked.position());
    }
});
