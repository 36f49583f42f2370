//! CLI subcommands and shared descriptor/record JSON handling.

pub mod decode;
pub mod encode;
pub mod layout;

use anyhow::{anyhow, bail, Context, Result};
use packwire_core::{ByteOrder, FieldDescriptor, PrimitiveType, PrimitiveValue, Record, RecordDescriptor};
use serde_json::{json, Map, Value};
use std::fs;

/// Map the `--big-endian` flag onto a ByteOrder (little-endian is the default).
pub fn order_from_flag(big_endian: bool) -> ByteOrder {
    if big_endian {
        ByteOrder::BigEndian
    } else {
        ByteOrder::LittleEndian
    }
}

/// Load a record descriptor from a JSON file: an ordered array of
/// `{"name": ..., "type": ...}` entries.
pub fn load_descriptor(path: &str) -> Result<RecordDescriptor> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor file: {}", path))?;

    let descriptor: RecordDescriptor =
        serde_json::from_str(&content).with_context(|| "Failed to parse descriptor JSON")?;

    Ok(descriptor)
}

/// Build a record from a JSON object, taking fields in descriptor order.
///
/// 128-bit integers may be given as decimal strings since JSON numbers only
/// cover the 64-bit range; `char8` accepts a one-character ASCII string or a
/// byte value.
pub fn json_to_record(descriptor: &RecordDescriptor, root: &Value) -> Result<Record> {
    let object = root
        .as_object()
        .ok_or_else(|| anyhow!("Record input must be a JSON object"))?;

    let mut values = Vec::with_capacity(descriptor.len());
    for field in descriptor.fields() {
        let raw = object
            .get(&field.name)
            .ok_or_else(|| anyhow!("Record is missing field '{}'", field.name))?;
        values.push(json_to_value(field, raw)?);
    }

    Ok(Record::new(values))
}

fn json_to_value(field: &FieldDescriptor, raw: &Value) -> Result<PrimitiveValue> {
    let mismatch = || anyhow!("Field '{}' does not fit type {}", field.name, field.kind);

    Ok(match field.kind {
        PrimitiveType::Int8 => PrimitiveValue::Int8(
            raw.as_i64()
                .and_then(|v| i8::try_from(v).ok())
                .ok_or_else(mismatch)?,
        ),
        PrimitiveType::UInt8 => PrimitiveValue::UInt8(
            raw.as_u64()
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(mismatch)?,
        ),
        PrimitiveType::Int16 => PrimitiveValue::Int16(
            raw.as_i64()
                .and_then(|v| i16::try_from(v).ok())
                .ok_or_else(mismatch)?,
        ),
        PrimitiveType::UInt16 => PrimitiveValue::UInt16(
            raw.as_u64()
                .and_then(|v| u16::try_from(v).ok())
                .ok_or_else(mismatch)?,
        ),
        PrimitiveType::Int32 => PrimitiveValue::Int32(
            raw.as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(mismatch)?,
        ),
        PrimitiveType::UInt32 => PrimitiveValue::UInt32(
            raw.as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(mismatch)?,
        ),
        PrimitiveType::Int64 => PrimitiveValue::Int64(raw.as_i64().ok_or_else(mismatch)?),
        PrimitiveType::UInt64 => PrimitiveValue::UInt64(raw.as_u64().ok_or_else(mismatch)?),
        PrimitiveType::Int128 => PrimitiveValue::Int128(match raw {
            Value::String(s) => s.parse::<i128>().ok().ok_or_else(mismatch)?,
            Value::Number(n) => i128::from(n.as_i64().ok_or_else(mismatch)?),
            _ => bail!("Field '{}' must be a number or decimal string", field.name),
        }),
        PrimitiveType::UInt128 => PrimitiveValue::UInt128(match raw {
            Value::String(s) => s.parse::<u128>().ok().ok_or_else(mismatch)?,
            Value::Number(n) => u128::from(n.as_u64().ok_or_else(mismatch)?),
            _ => bail!("Field '{}' must be a number or decimal string", field.name),
        }),
        PrimitiveType::Float32 => {
            let wide = raw.as_f64().ok_or_else(mismatch)?;
            let narrow = wide as f32;
            // Narrowing may round, but a finite value must stay finite
            if narrow.is_infinite() && wide.is_finite() {
                return Err(mismatch());
            }
            PrimitiveValue::Float32(narrow)
        }
        PrimitiveType::Float64 => PrimitiveValue::Float64(raw.as_f64().ok_or_else(mismatch)?),
        PrimitiveType::Char8 => PrimitiveValue::Char8(match raw {
            Value::String(s) if s.len() == 1 && s.is_ascii() => s.as_bytes()[0],
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(mismatch)?,
            _ => bail!(
                "Field '{}' must be a one-character ASCII string or a byte value",
                field.name
            ),
        }),
    })
}

/// Render a decoded record as a JSON object in descriptor field order.
pub fn record_to_json(descriptor: &RecordDescriptor, record: &Record) -> Result<Value> {
    if record.len() != descriptor.len() {
        bail!(
            "Record has {} values but descriptor declares {} fields",
            record.len(),
            descriptor.len()
        );
    }

    let mut object = Map::with_capacity(descriptor.len());
    for (field, value) in descriptor.fields().iter().zip(record.values()) {
        let rendered = match *value {
            PrimitiveValue::Int8(v) => json!(v),
            PrimitiveValue::UInt8(v) => json!(v),
            PrimitiveValue::Int16(v) => json!(v),
            PrimitiveValue::UInt16(v) => json!(v),
            PrimitiveValue::Int32(v) => json!(v),
            PrimitiveValue::UInt32(v) => json!(v),
            PrimitiveValue::Int64(v) => json!(v),
            PrimitiveValue::UInt64(v) => json!(v),
            // JSON numbers top out at 64 bits; 128-bit values travel as strings
            PrimitiveValue::Int128(v) => json!(v.to_string()),
            PrimitiveValue::UInt128(v) => json!(v.to_string()),
            PrimitiveValue::Float32(v) => json!(v),
            PrimitiveValue::Float64(v) => json!(v),
            PrimitiveValue::Char8(v) => {
                if v.is_ascii_graphic() || v == b' ' {
                    json!((v as char).to_string())
                } else {
                    json!(v)
                }
            }
        };
        object.insert(field.name.clone(), rendered);
    }

    Ok(Value::Object(object))
}
