//! Error types for Packwire codec operations

use alloc::string::String;

use crate::types::PrimitiveType;

/// Errors that can occur during encode/decode operations
///
/// All of these are caller-input errors reported synchronously at the point
/// of failure; nothing is retried or silently coerced. A truncated read is
/// always an error, never zero-padded.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A type name outside the closed primitive set
    #[cfg_attr(feature = "std", error("Unsupported primitive type: {0}"))]
    UnsupportedType(String),

    /// Insufficient bytes remaining at the given offset for the requested width
    #[cfg_attr(
        feature = "std",
        error("Buffer too short: expected {expected} bytes, got {actual}")
    )]
    BufferTooShort {
        /// The number of bytes the operation needed the buffer to hold.
        expected: usize,
        /// The number of bytes actually available.
        actual: usize,
    },

    /// A value's runtime tag disagrees with its descriptor's declared type
    #[cfg_attr(
        feature = "std",
        error("Type mismatch for field {field}: declared {expected}, got {actual}")
    )]
    TypeMismatch {
        /// Name of the offending field.
        field: String,
        /// The type declared in the descriptor.
        expected: PrimitiveType,
        /// The tag actually carried by the value.
        actual: PrimitiveType,
    },

    /// A record does not supply a value for every descriptor field
    #[cfg_attr(
        feature = "std",
        error("Record/descriptor field count mismatch: descriptor declares {expected} fields, record has {actual} values")
    )]
    MissingField {
        /// The number of fields the descriptor declares.
        expected: usize,
        /// The number of values the record holds.
        actual: usize,
    },

    /// Name lookup miss on a descriptor
    #[cfg_attr(feature = "std", error("No field named {0} in descriptor"))]
    UnknownField(String),
}
