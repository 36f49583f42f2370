//! Tag-driven encode/decode over the closed primitive set
//!
//! The record marshaler works generically over heterogeneous field types
//! discovered at the descriptor level; this module is the single chokepoint
//! where a type tag selects the concrete scalar codec. Both matches are
//! exhaustive over closed enums, so adding a primitive type requires
//! extending the tag set, the scalar codec, and these matches together and
//! the compiler enforces it.

use crate::scalar::Scalar;
use crate::types::{ByteOrder, PrimitiveType, PrimitiveValue};
use crate::Result;

/// Decode one tagged value of `kind` from `buf` at `offset` in `order`.
pub fn decode_value(
    kind: PrimitiveType,
    buf: &[u8],
    offset: usize,
    order: ByteOrder,
) -> Result<PrimitiveValue> {
    Ok(match kind {
        PrimitiveType::Int8 => PrimitiveValue::Int8(i8::read_from(buf, offset, order)?),
        PrimitiveType::UInt8 => PrimitiveValue::UInt8(u8::read_from(buf, offset, order)?),
        PrimitiveType::Int16 => PrimitiveValue::Int16(i16::read_from(buf, offset, order)?),
        PrimitiveType::UInt16 => PrimitiveValue::UInt16(u16::read_from(buf, offset, order)?),
        PrimitiveType::Int32 => PrimitiveValue::Int32(i32::read_from(buf, offset, order)?),
        PrimitiveType::UInt32 => PrimitiveValue::UInt32(u32::read_from(buf, offset, order)?),
        PrimitiveType::Int64 => PrimitiveValue::Int64(i64::read_from(buf, offset, order)?),
        PrimitiveType::UInt64 => PrimitiveValue::UInt64(u64::read_from(buf, offset, order)?),
        PrimitiveType::Int128 => PrimitiveValue::Int128(i128::read_from(buf, offset, order)?),
        PrimitiveType::UInt128 => PrimitiveValue::UInt128(u128::read_from(buf, offset, order)?),
        PrimitiveType::Float32 => PrimitiveValue::Float32(f32::read_from(buf, offset, order)?),
        PrimitiveType::Float64 => PrimitiveValue::Float64(f64::read_from(buf, offset, order)?),
        PrimitiveType::Char8 => PrimitiveValue::Char8(u8::read_from(buf, offset, order)?),
    })
}

/// Encode one tagged value into `buf` at `offset` in `order`.
pub fn encode_value(
    value: &PrimitiveValue,
    buf: &mut [u8],
    offset: usize,
    order: ByteOrder,
) -> Result<()> {
    match *value {
        PrimitiveValue::Int8(v) => v.write_to(buf, offset, order),
        PrimitiveValue::UInt8(v) => v.write_to(buf, offset, order),
        PrimitiveValue::Int16(v) => v.write_to(buf, offset, order),
        PrimitiveValue::UInt16(v) => v.write_to(buf, offset, order),
        PrimitiveValue::Int32(v) => v.write_to(buf, offset, order),
        PrimitiveValue::UInt32(v) => v.write_to(buf, offset, order),
        PrimitiveValue::Int64(v) => v.write_to(buf, offset, order),
        PrimitiveValue::UInt64(v) => v.write_to(buf, offset, order),
        PrimitiveValue::Int128(v) => v.write_to(buf, offset, order),
        PrimitiveValue::UInt128(v) => v.write_to(buf, offset, order),
        PrimitiveValue::Float32(v) => v.write_to(buf, offset, order),
        PrimitiveValue::Float64(v) => v.write_to(buf, offset, order),
        PrimitiveValue::Char8(v) => v.write_to(buf, offset, order),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_value_respects_tag_width() {
        let buf = [0x12u8, 0x34, 0x56, 0x78];

        let narrow = decode_value(PrimitiveType::UInt16, &buf, 0, ByteOrder::BigEndian).unwrap();
        assert_eq!(narrow, PrimitiveValue::UInt16(0x1234));

        let wide = decode_value(PrimitiveType::UInt32, &buf, 0, ByteOrder::BigEndian).unwrap();
        assert_eq!(wide, PrimitiveValue::UInt32(0x1234_5678));
    }

    #[test]
    fn test_encode_decode_value_round_trip() {
        let mut buf = [0u8; 16];
        let value = PrimitiveValue::Int128(-1234567890123456789012345678901i128);

        encode_value(&value, &mut buf, 0, ByteOrder::LittleEndian).unwrap();
        let decoded = decode_value(PrimitiveType::Int128, &buf, 0, ByteOrder::LittleEndian).unwrap();

        assert_eq!(decoded, value);
    }

    #[test]
    fn test_char8_is_one_raw_byte() {
        let mut buf = [0u8; 1];
        encode_value(
            &PrimitiveValue::Char8(b'Q'),
            &mut buf,
            0,
            ByteOrder::BigEndian,
        )
        .unwrap();
        assert_eq!(buf, [b'Q']);
    }
}
