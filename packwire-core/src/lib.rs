//! # Packwire Core
//!
//! A typed, byte-order-aware binary codec for fixed-layout records of primitive
//! numeric fields. Records are laid out packed (no inter-field padding) in either
//! little-endian or big-endian order, independent of the host's memory layout.
//!
//! ## Modules
//!
//! - `endian`: Byte-order swap primitives (16/32/64/128-bit)
//! - `scalar`: Single-value read/write in a requested byte order
//! - `types`: Core types (ByteOrder, PrimitiveType, PrimitiveValue, RecordDescriptor, Record)
//! - `dispatch`: Tag-driven encode/decode over the closed primitive set
//! - `marshal`: Whole-record packed encode/decode
//! - `raw`: Opt-in native-layout marshaling (feature `unsafe-marshal`)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod dispatch;
pub mod endian;
pub mod error;
pub mod marshal;
#[cfg(feature = "unsafe-marshal")]
pub mod raw;
pub mod scalar;
pub mod types;

// Re-export commonly used types
pub use error::CodecError;
pub use types::{
    ByteOrder, FieldDescriptor, PrimitiveType, PrimitiveValue, Record, RecordDescriptor,
    RecordLayout,
};

/// Result type alias for Packwire operations
pub type Result<T> = core::result::Result<T, CodecError>;
