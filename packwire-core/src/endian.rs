//! Byte-order swap primitives
//!
//! Each swap reverses the byte order of its register. The wider swaps are built
//! by doubling: a 32-bit swap is two 16-bit swaps with the halves exchanged,
//! and the 64- and 128-bit swaps repeat the same recursion. This keeps the bit
//! manipulation auditable at 16-bit granularity instead of duplicated per width.

/// Reverse the byte order of a 16-bit value.
pub const fn swap16(value: u16) -> u16 {
    (value << 8) | (value >> 8)
}

/// Reverse the byte order of a 32-bit value.
pub const fn swap32(value: u32) -> u32 {
    ((swap16(value as u16) as u32) << 16) | swap16((value >> 16) as u16) as u32
}

/// Reverse the byte order of a 64-bit value.
pub const fn swap64(value: u64) -> u64 {
    ((swap32(value as u32) as u64) << 32) | swap32((value >> 32) as u32) as u64
}

/// Reverse the byte order of a 128-bit value.
pub const fn swap128(value: u128) -> u128 {
    ((swap64(value as u64) as u128) << 64) | swap64((value >> 64) as u64) as u128
}
