//! Fuzzing placeholder for the packwire-core record decoder
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decoder

use packwire_core::{
    marshal::decode_at,
    record_layout,
    types::{ByteOrder, PrimitiveType},
};

pub fn fuzz_decode(data: &[u8]) {
    let descriptor = record_layout! {
        "a": PrimitiveType::Int32,
        "b": PrimitiveType::UInt128,
        "c": PrimitiveType::Float64,
        "d": PrimitiveType::Char8,
    };

    // Try to decode - should never panic, in either order or at any offset
    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let _ = decode_at(&descriptor, data, 0, order);
        let _ = decode_at(&descriptor, data, data.len() / 2, order);
        let _ = decode_at(&descriptor, data, usize::MAX, order);
    }
}

pub fn fuzz_scalar(data: &[u8]) {
    use packwire_core::scalar::read;

    // Reads at every offset - should error cleanly near the end, never panic
    for offset in 0..=data.len() {
        let _ = read::<u16>(data, offset, ByteOrder::BigEndian);
        let _ = read::<u64>(data, offset, ByteOrder::LittleEndian);
        let _ = read::<f64>(data, offset, ByteOrder::BigEndian);
        let _ = read::<u128>(data, offset, ByteOrder::LittleEndian);
    }
}
