//! Whole-record packed encode/decode
//!
//! Iterates a descriptor's fields in declared order, delegating each field to
//! the dispatch layer and advancing a running offset. The output layout is the
//! wire format: consecutive fields, exactly `width` bytes each, no padding, no
//! framing, no in-band order marker. The caller must know the descriptor to
//! decode.

use alloc::vec::Vec;
use bytes::{Bytes, BytesMut};

use crate::dispatch::{decode_value, encode_value};
use crate::error::CodecError;
use crate::types::{ByteOrder, Record, RecordDescriptor};
use crate::Result;

#[cfg(feature = "logging")]
use tracing::debug;

/// Packed size of a record conforming to `descriptor`: the sum of its field
/// widths with zero padding.
pub fn packed_size(descriptor: &RecordDescriptor) -> usize {
    descriptor.packed_size()
}

/// Encode a record into a freshly allocated buffer of exactly
/// [`packed_size`] bytes.
///
/// Fails with [`CodecError::MissingField`] if the record does not supply one
/// value per descriptor field, and with [`CodecError::TypeMismatch`] if a
/// value's tag disagrees with its field's declared type. On error the
/// in-progress buffer is discarded; there is no partial-success mode.
pub fn encode(
    descriptor: &RecordDescriptor,
    record: &Record,
    order: ByteOrder,
) -> Result<Bytes> {
    #[cfg(feature = "logging")]
    debug!(
        "Encoding {} fields ({} bytes, {})",
        descriptor.len(),
        descriptor.packed_size(),
        order
    );

    if record.len() != descriptor.len() {
        return Err(CodecError::MissingField {
            expected: descriptor.len(),
            actual: record.len(),
        });
    }

    let mut buf = BytesMut::zeroed(descriptor.packed_size());

    for (index, (field, value)) in descriptor
        .fields()
        .iter()
        .zip(record.values())
        .enumerate()
    {
        if value.kind() != field.kind {
            return Err(CodecError::TypeMismatch {
                field: field.name.clone(),
                expected: field.kind,
                actual: value.kind(),
            });
        }
        encode_value(value, &mut buf, descriptor.offset_of(index), order)?;
    }

    Ok(buf.freeze())
}

/// Decode a record from the start of `buf`.
pub fn decode(descriptor: &RecordDescriptor, buf: &[u8], order: ByteOrder) -> Result<Record> {
    decode_at(descriptor, buf, 0, order)
}

/// Decode a record from `buf` starting at `start_offset`.
///
/// Reads exactly `packed_size(descriptor)` bytes beginning at `start_offset`;
/// bytes outside that window are ignored. Fails up front with
/// [`CodecError::BufferTooShort`] if the window does not fit, so a partially
/// populated record is never returned.
pub fn decode_at(
    descriptor: &RecordDescriptor,
    buf: &[u8],
    start_offset: usize,
    order: ByteOrder,
) -> Result<Record> {
    #[cfg(feature = "logging")]
    debug!(
        "Decoding {} fields at offset {} ({})",
        descriptor.len(),
        start_offset,
        order
    );

    let expected = start_offset.saturating_add(descriptor.packed_size());
    if expected > buf.len() {
        return Err(CodecError::BufferTooShort {
            expected,
            actual: buf.len(),
        });
    }

    let mut values = Vec::with_capacity(descriptor.len());
    let mut offset = start_offset;
    for field in descriptor.fields() {
        values.push(decode_value(field.kind, buf, offset, order)?);
        offset += field.kind.width();
    }

    Ok(Record::new(values))
}
