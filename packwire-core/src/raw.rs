//! Raw native-layout marshaling (feature `unsafe-marshal`)
//!
//! Copies a value's in-memory bytes directly, with no byte-order conversion
//! and no packing: the layout is whatever the compiler chose for the type,
//! in machine byte order. This is a deliberately separate capability from the
//! portable packed codec; enable it only when both ends share the same
//! architecture and type definition.

use alloc::vec;
use alloc::vec::Vec;
use core::mem;
use core::ptr;

use crate::error::CodecError;
use crate::Result;

/// Marker for types whose raw memory image may be copied to and from byte
/// buffers.
///
/// # Safety
///
/// Implementors must guarantee the type is `#[repr(C, packed)]` (or otherwise
/// free of padding bytes) and contains only plain-old-data fields: no
/// references, pointers, or niches. Reading an arbitrary byte pattern back as
/// the type must be defined behavior for every pattern.
pub unsafe trait RawPacked: Copy {}

/// Copy the raw memory image of `value` into a new byte vector.
pub fn to_bytes<T: RawPacked>(value: &T) -> Vec<u8> {
    let len = mem::size_of::<T>();
    let mut out = vec![0u8; len];
    // Source and destination never overlap: `out` is freshly allocated
    unsafe {
        ptr::copy_nonoverlapping(value as *const T as *const u8, out.as_mut_ptr(), len);
    }
    out
}

/// Reinterpret the front of `buf` as a value of `T`.
///
/// Fails with [`CodecError::BufferTooShort`] if `buf` holds fewer than
/// `size_of::<T>()` bytes.
pub fn from_bytes<T: RawPacked>(buf: &[u8]) -> Result<T> {
    let len = mem::size_of::<T>();
    if buf.len() < len {
        return Err(CodecError::BufferTooShort {
            expected: len,
            actual: buf.len(),
        });
    }
    // Length checked above; read_unaligned tolerates any source alignment
    Ok(unsafe { ptr::read_unaligned(buf.as_ptr() as *const T) })
}
