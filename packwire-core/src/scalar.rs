//! Single-value byte codec
//!
//! Reads and writes one primitive value at a time in a requested byte order.
//! Values are handled through their native in-memory representation; when the
//! requested order differs from machine order the register is passed through
//! the swap primitives in [`crate::endian`]. Floating-point values route
//! through their integer bit patterns so that every multi-byte type uses the
//! same register-swap mechanism.

use bytes::{Bytes, BytesMut};

use crate::endian::{swap128, swap16, swap32, swap64};
use crate::error::CodecError;
use crate::types::ByteOrder;
use crate::Result;

mod sealed {
    pub trait Sealed {}
}

/// A primitive scalar the codec can read and write at any buffer offset.
///
/// Implemented for the fixed-width integers up to 128 bits and for `f32`/`f64`.
/// The set is sealed; the record layer dispatches over it exhaustively.
pub trait Scalar: sealed::Sealed + Copy {
    /// Packed width of the scalar in bytes.
    const WIDTH: usize;

    /// Read a value from `buf` starting at `offset`, interpreting the bytes
    /// in `order`. Fails with [`CodecError::BufferTooShort`] if fewer than
    /// `WIDTH` bytes remain.
    fn read_from(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self>;

    /// Write this value into `buf` at `offset` in `order`. Fails with
    /// [`CodecError::BufferTooShort`] if fewer than `WIDTH` bytes remain.
    fn write_to(self, buf: &mut [u8], offset: usize, order: ByteOrder) -> Result<()>;
}

fn check_bounds(buf_len: usize, offset: usize, width: usize) -> Result<()> {
    let expected = offset.saturating_add(width);
    if expected > buf_len {
        return Err(CodecError::BufferTooShort {
            expected,
            actual: buf_len,
        });
    }
    Ok(())
}

macro_rules! impl_scalar_byte {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const WIDTH: usize = 1;

                fn read_from(buf: &[u8], offset: usize, _order: ByteOrder) -> Result<Self> {
                    check_bounds(buf.len(), offset, 1)?;
                    Ok(buf[offset] as $ty)
                }

                fn write_to(self, buf: &mut [u8], offset: usize, _order: ByteOrder) -> Result<()> {
                    check_bounds(buf.len(), offset, 1)?;
                    buf[offset] = self as u8;
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar_byte!(u8, i8);

macro_rules! impl_scalar_int {
    ($($ty:ty => ($uty:ty, $swap:path)),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                fn read_from(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
                    check_bounds(buf.len(), offset, Self::WIDTH)?;
                    let mut raw = [0u8; core::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&buf[offset..offset + Self::WIDTH]);
                    let native = <$ty>::from_ne_bytes(raw);
                    if order.is_native() {
                        Ok(native)
                    } else {
                        Ok($swap(native as $uty) as $ty)
                    }
                }

                fn write_to(self, buf: &mut [u8], offset: usize, order: ByteOrder) -> Result<()> {
                    check_bounds(buf.len(), offset, Self::WIDTH)?;
                    let converted = if order.is_native() {
                        self
                    } else {
                        $swap(self as $uty) as $ty
                    };
                    buf[offset..offset + Self::WIDTH].copy_from_slice(&converted.to_ne_bytes());
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar_int! {
    u16 => (u16, swap16),
    i16 => (u16, swap16),
    u32 => (u32, swap32),
    i32 => (u32, swap32),
    u64 => (u64, swap64),
    i64 => (u64, swap64),
    u128 => (u128, swap128),
    i128 => (u128, swap128),
}

macro_rules! impl_scalar_float {
    ($($ty:ty => $bits:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                fn read_from(buf: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
                    // Same register-swap path as the integers, via the bit pattern
                    Ok(<$ty>::from_bits(<$bits>::read_from(buf, offset, order)?))
                }

                fn write_to(self, buf: &mut [u8], offset: usize, order: ByteOrder) -> Result<()> {
                    self.to_bits().write_to(buf, offset, order)
                }
            }
        )*
    };
}

impl_scalar_float! {
    f32 => u32,
    f64 => u64,
}

/// Read a single scalar from `buf` at `offset` in the given byte order.
pub fn read<T: Scalar>(buf: &[u8], offset: usize, order: ByteOrder) -> Result<T> {
    T::read_from(buf, offset, order)
}

/// Write a single scalar into a freshly allocated buffer of exactly
/// `T::WIDTH` bytes, in the given byte order.
pub fn write<T: Scalar>(value: T, order: ByteOrder) -> Result<Bytes> {
    let mut buf = BytesMut::zeroed(T::WIDTH);
    value.write_to(&mut buf, 0, order)?;
    Ok(buf.freeze())
}
