//! Core types for the Packwire codec

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Byte order of a multi-byte value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Least-significant byte first
    LittleEndian,
    /// Most-significant byte first
    BigEndian,
}

impl ByteOrder {
    /// The byte order of the machine this code was compiled for.
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    /// Check whether this order matches the machine's native order.
    pub const fn is_native(self) -> bool {
        (self as u8) == (Self::native() as u8)
    }
}

impl core::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteOrder::LittleEndian => write!(f, "little-endian"),
            ByteOrder::BigEndian => write!(f, "big-endian"),
        }
    }
}

/// The closed set of primitive field types supported by the codec.
///
/// Every tag has a fixed byte width known without inspecting any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Signed 8-bit integer
    #[serde(rename = "i8")]
    Int8,
    /// Unsigned 8-bit integer
    #[serde(rename = "u8")]
    UInt8,
    /// Signed 16-bit integer
    #[serde(rename = "i16")]
    Int16,
    /// Unsigned 16-bit integer
    #[serde(rename = "u16")]
    UInt16,
    /// Signed 32-bit integer
    #[serde(rename = "i32")]
    Int32,
    /// Unsigned 32-bit integer
    #[serde(rename = "u32")]
    UInt32,
    /// Signed 64-bit integer
    #[serde(rename = "i64")]
    Int64,
    /// Unsigned 64-bit integer
    #[serde(rename = "u64")]
    UInt64,
    /// Signed 128-bit integer
    #[serde(rename = "i128")]
    Int128,
    /// Unsigned 128-bit integer
    #[serde(rename = "u128")]
    UInt128,
    /// IEEE 754 single-precision float
    #[serde(rename = "f32")]
    Float32,
    /// IEEE 754 double-precision float
    #[serde(rename = "f64")]
    Float64,
    /// Single-byte character code unit
    #[serde(rename = "char8")]
    Char8,
}

impl PrimitiveType {
    /// Returns the packed width of this type in bytes.
    pub const fn width(self) -> usize {
        match self {
            PrimitiveType::Int8 | PrimitiveType::UInt8 | PrimitiveType::Char8 => 1,
            PrimitiveType::Int16 | PrimitiveType::UInt16 => 2,
            PrimitiveType::Int32 | PrimitiveType::UInt32 | PrimitiveType::Float32 => 4,
            PrimitiveType::Int64 | PrimitiveType::UInt64 | PrimitiveType::Float64 => 8,
            PrimitiveType::Int128 | PrimitiveType::UInt128 => 16,
        }
    }

    /// Returns the lowercase wire name of this type (e.g. `"i32"`).
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveType::Int8 => "i8",
            PrimitiveType::UInt8 => "u8",
            PrimitiveType::Int16 => "i16",
            PrimitiveType::UInt16 => "u16",
            PrimitiveType::Int32 => "i32",
            PrimitiveType::UInt32 => "u32",
            PrimitiveType::Int64 => "i64",
            PrimitiveType::UInt64 => "u64",
            PrimitiveType::Int128 => "i128",
            PrimitiveType::UInt128 => "u128",
            PrimitiveType::Float32 => "f32",
            PrimitiveType::Float64 => "f64",
            PrimitiveType::Char8 => "char8",
        }
    }
}

impl core::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for PrimitiveType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "i8" => Ok(PrimitiveType::Int8),
            "u8" => Ok(PrimitiveType::UInt8),
            "i16" => Ok(PrimitiveType::Int16),
            "u16" => Ok(PrimitiveType::UInt16),
            "i32" => Ok(PrimitiveType::Int32),
            "u32" => Ok(PrimitiveType::UInt32),
            "i64" => Ok(PrimitiveType::Int64),
            "u64" => Ok(PrimitiveType::UInt64),
            "i128" => Ok(PrimitiveType::Int128),
            "u128" => Ok(PrimitiveType::UInt128),
            "f32" => Ok(PrimitiveType::Float32),
            "f64" => Ok(PrimitiveType::Float64),
            "char8" => Ok(PrimitiveType::Char8),
            other => Err(CodecError::UnsupportedType(String::from(other))),
        }
    }
}

/// A single field value tagged with its primitive type.
///
/// One variant per `PrimitiveType`, so dispatch over values is an exhaustive
/// match and an unrecognized tag cannot fall through silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveValue {
    /// Signed 8-bit integer
    Int8(i8),
    /// Unsigned 8-bit integer
    UInt8(u8),
    /// Signed 16-bit integer
    Int16(i16),
    /// Unsigned 16-bit integer
    UInt16(u16),
    /// Signed 32-bit integer
    Int32(i32),
    /// Unsigned 32-bit integer
    UInt32(u32),
    /// Signed 64-bit integer
    Int64(i64),
    /// Unsigned 64-bit integer
    UInt64(u64),
    /// Signed 128-bit integer
    Int128(i128),
    /// Unsigned 128-bit integer
    UInt128(u128),
    /// IEEE 754 single-precision float
    Float32(f32),
    /// IEEE 754 double-precision float
    Float64(f64),
    /// Single-byte character code unit
    Char8(u8),
}

impl PrimitiveValue {
    /// Returns the type tag of this value.
    pub const fn kind(&self) -> PrimitiveType {
        match self {
            PrimitiveValue::Int8(_) => PrimitiveType::Int8,
            PrimitiveValue::UInt8(_) => PrimitiveType::UInt8,
            PrimitiveValue::Int16(_) => PrimitiveType::Int16,
            PrimitiveValue::UInt16(_) => PrimitiveType::UInt16,
            PrimitiveValue::Int32(_) => PrimitiveType::Int32,
            PrimitiveValue::UInt32(_) => PrimitiveType::UInt32,
            PrimitiveValue::Int64(_) => PrimitiveType::Int64,
            PrimitiveValue::UInt64(_) => PrimitiveType::UInt64,
            PrimitiveValue::Int128(_) => PrimitiveType::Int128,
            PrimitiveValue::UInt128(_) => PrimitiveType::UInt128,
            PrimitiveValue::Float32(_) => PrimitiveType::Float32,
            PrimitiveValue::Float64(_) => PrimitiveType::Float64,
            PrimitiveValue::Char8(_) => PrimitiveType::Char8,
        }
    }

    /// Returns the packed width of this value in bytes.
    pub const fn width(&self) -> usize {
        self.kind().width()
    }

    /// Returns the zero value of the given type.
    pub const fn zero(kind: PrimitiveType) -> Self {
        match kind {
            PrimitiveType::Int8 => PrimitiveValue::Int8(0),
            PrimitiveType::UInt8 => PrimitiveValue::UInt8(0),
            PrimitiveType::Int16 => PrimitiveValue::Int16(0),
            PrimitiveType::UInt16 => PrimitiveValue::UInt16(0),
            PrimitiveType::Int32 => PrimitiveValue::Int32(0),
            PrimitiveType::UInt32 => PrimitiveValue::UInt32(0),
            PrimitiveType::Int64 => PrimitiveValue::Int64(0),
            PrimitiveType::UInt64 => PrimitiveValue::UInt64(0),
            PrimitiveType::Int128 => PrimitiveValue::Int128(0),
            PrimitiveType::UInt128 => PrimitiveValue::UInt128(0),
            PrimitiveType::Float32 => PrimitiveValue::Float32(0.0),
            PrimitiveType::Float64 => PrimitiveValue::Float64(0.0),
            PrimitiveType::Char8 => PrimitiveValue::Char8(0),
        }
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for PrimitiveValue {
                fn from(value: $ty) -> Self {
                    PrimitiveValue::$variant(value)
                }
            }
        )*
    };
}

impl_value_from! {
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    i128 => Int128,
    u128 => UInt128,
    f32 => Float32,
    f64 => Float64,
}

/// A named field and its declared primitive type.
///
/// Immutable once constructed; the order of fields within a
/// [`RecordDescriptor`] is significant and caller-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,
    /// Declared primitive type
    #[serde(rename = "type")]
    pub kind: PrimitiveType,
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(name: impl Into<String>, kind: PrimitiveType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Ordered metadata describing a record's packed field layout.
///
/// The packed size and per-field offsets are computed once at construction;
/// a descriptor is pure metadata and can be shared freely across encode and
/// decode calls. The packed layout has zero padding, which deliberately
/// differs from the host's alignment-padded in-memory struct layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FieldDescriptor>", into = "Vec<FieldDescriptor>")]
pub struct RecordDescriptor {
    fields: Vec<FieldDescriptor>,
    offsets: Vec<usize>,
    packed_size: usize,
}

impl RecordDescriptor {
    /// Create a descriptor from an ordered list of fields.
    ///
    /// Field order is preserved exactly as supplied; the codec never reorders.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        let mut offsets = Vec::with_capacity(fields.len());
        let mut packed_size = 0usize;
        for field in &fields {
            offsets.push(packed_size);
            packed_size += field.kind.width();
        }
        Self {
            fields,
            offsets,
            packed_size,
        }
    }

    /// Total packed size in bytes: the sum of all field widths, no padding.
    pub fn packed_size(&self) -> usize {
        self.packed_size
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the descriptor has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The ordered fields.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Byte offset of the field at `index` within the packed layout.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn offset_of(&self, index: usize) -> usize {
        self.offsets[index]
    }

    /// Position of the field with the given name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

impl From<Vec<FieldDescriptor>> for RecordDescriptor {
    fn from(fields: Vec<FieldDescriptor>) -> Self {
        Self::new(fields)
    }
}

impl From<RecordDescriptor> for Vec<FieldDescriptor> {
    fn from(descriptor: RecordDescriptor) -> Self {
        descriptor.fields
    }
}

/// Builder for constructing a [`RecordDescriptor`] field by field.
#[derive(Debug, Default)]
pub struct RecordLayout {
    fields: Vec<FieldDescriptor>,
}

impl RecordLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; declaration order is encoding order.
    pub fn field(mut self, name: impl Into<String>, kind: PrimitiveType) -> Self {
        self.fields.push(FieldDescriptor::new(name, kind));
        self
    }

    /// Build the descriptor.
    pub fn build(self) -> RecordDescriptor {
        RecordDescriptor::new(self.fields)
    }
}

/// Construct a [`RecordDescriptor`] declaratively.
///
/// ```
/// use packwire_core::{record_layout, PrimitiveType};
///
/// let descriptor = record_layout! {
///     "id": PrimitiveType::UInt64,
///     "temperature": PrimitiveType::Float32,
///     "flags": PrimitiveType::UInt8,
/// };
/// assert_eq!(descriptor.packed_size(), 13);
/// ```
#[macro_export]
macro_rules! record_layout {
    ($($name:literal : $kind:expr),* $(,)?) => {{
        let mut layout = $crate::types::RecordLayout::new();
        $(layout = layout.field($name, $kind);)*
        layout.build()
    }};
}

/// An ordered sequence of tagged field values conforming to some descriptor.
///
/// Constructed by the caller before encode; reconstructed fresh by decode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    values: Vec<PrimitiveValue>,
}

impl Record {
    /// Create a record from ordered values.
    pub fn new(values: Vec<PrimitiveValue>) -> Self {
        Self { values }
    }

    /// The ordered field values.
    pub fn values(&self) -> &[PrimitiveValue] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the record has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&PrimitiveValue> {
        self.values.get(index)
    }

    /// Append a value.
    pub fn push(&mut self, value: impl Into<PrimitiveValue>) {
        self.values.push(value.into());
    }

    /// Look up a value by field name through a descriptor.
    pub fn field(
        &self,
        descriptor: &RecordDescriptor,
        name: &str,
    ) -> crate::Result<&PrimitiveValue> {
        let index = descriptor
            .index_of(name)
            .ok_or_else(|| CodecError::UnknownField(String::from(name)))?;
        self.values
            .get(index)
            .ok_or(CodecError::MissingField {
                expected: descriptor.len(),
                actual: self.values.len(),
            })
    }
}

impl From<Vec<PrimitiveValue>> for Record {
    fn from(values: Vec<PrimitiveValue>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<PrimitiveValue> for Record {
    fn from_iter<I: IntoIterator<Item = PrimitiveValue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_widths_are_fixed() {
        assert_eq!(PrimitiveType::Int8.width(), 1);
        assert_eq!(PrimitiveType::UInt8.width(), 1);
        assert_eq!(PrimitiveType::Int16.width(), 2);
        assert_eq!(PrimitiveType::UInt16.width(), 2);
        assert_eq!(PrimitiveType::Int32.width(), 4);
        assert_eq!(PrimitiveType::UInt32.width(), 4);
        assert_eq!(PrimitiveType::Int64.width(), 8);
        assert_eq!(PrimitiveType::UInt64.width(), 8);
        assert_eq!(PrimitiveType::Int128.width(), 16);
        assert_eq!(PrimitiveType::UInt128.width(), 16);
        assert_eq!(PrimitiveType::Float32.width(), 4);
        assert_eq!(PrimitiveType::Float64.width(), 8);
        assert_eq!(PrimitiveType::Char8.width(), 1);
    }

    #[test]
    fn test_native_order_matches_target() {
        #[cfg(target_endian = "little")]
        assert_eq!(ByteOrder::native(), ByteOrder::LittleEndian);
        #[cfg(target_endian = "big")]
        assert_eq!(ByteOrder::native(), ByteOrder::BigEndian);
    }

    #[test]
    fn test_descriptor_offsets_and_packed_size() {
        let descriptor = RecordDescriptor::new(vec![
            FieldDescriptor::new("a", PrimitiveType::Int32),
            FieldDescriptor::new("b", PrimitiveType::Int16),
            FieldDescriptor::new("c", PrimitiveType::UInt8),
        ]);

        assert_eq!(descriptor.packed_size(), 7);
        assert_eq!(descriptor.offset_of(0), 0);
        assert_eq!(descriptor.offset_of(1), 4);
        assert_eq!(descriptor.offset_of(2), 6);
        assert_eq!(descriptor.index_of("b"), Some(1));
        assert_eq!(descriptor.index_of("missing"), None);
    }

    #[test]
    fn test_layout_builder_and_macro_agree() {
        let built = RecordLayout::new()
            .field("x", PrimitiveType::UInt64)
            .field("y", PrimitiveType::Float64)
            .build();

        let declared = record_layout! {
            "x": PrimitiveType::UInt64,
            "y": PrimitiveType::Float64,
        };

        assert_eq!(built, declared);
        assert_eq!(built.packed_size(), 16);
    }

    #[test]
    fn test_type_name_round_trip() {
        for kind in [
            PrimitiveType::Int8,
            PrimitiveType::UInt8,
            PrimitiveType::Int16,
            PrimitiveType::UInt16,
            PrimitiveType::Int32,
            PrimitiveType::UInt32,
            PrimitiveType::Int64,
            PrimitiveType::UInt64,
            PrimitiveType::Int128,
            PrimitiveType::UInt128,
            PrimitiveType::Float32,
            PrimitiveType::Float64,
            PrimitiveType::Char8,
        ] {
            assert_eq!(kind.name().parse::<PrimitiveType>().unwrap(), kind);
        }
        assert!(matches!(
            "string".parse::<PrimitiveType>(),
            Err(CodecError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_zero_value_kind() {
        assert_eq!(
            PrimitiveValue::zero(PrimitiveType::Float64),
            PrimitiveValue::Float64(0.0)
        );
        assert_eq!(
            PrimitiveValue::zero(PrimitiveType::Int128).kind(),
            PrimitiveType::Int128
        );
    }

    #[test]
    fn test_record_field_lookup() {
        let descriptor = record_layout! {
            "a": PrimitiveType::Int32,
            "b": PrimitiveType::UInt8,
        };
        let record = Record::new(vec![PrimitiveValue::Int32(-7), PrimitiveValue::UInt8(3)]);

        assert_eq!(
            record.field(&descriptor, "b").unwrap(),
            &PrimitiveValue::UInt8(3)
        );
        assert!(matches!(
            record.field(&descriptor, "z"),
            Err(CodecError::UnknownField(_))
        ));
    }
}
