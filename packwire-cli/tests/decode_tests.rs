use std::fs;
use tempfile::tempdir;

use packwire_cli::commands::{decode, encode, order_from_flag};
use serde_json::Value;

fn write_file<P: AsRef<std::path::Path>>(p: P, s: &str) {
    fs::write(p, s.as_bytes()).unwrap();
}

#[test]
fn decode_big_endian_known_bytes() {
    let td = tempdir().unwrap();
    let schema_path = td.path().join("schema.json");
    let in_path = td.path().join("in.bin");
    let out_path = td.path().join("out.json");

    write_file(
        &schema_path,
        r#"[
          {"name": "id", "type": "u16"},
          {"name": "tag", "type": "char8"}
        ]"#,
    );
    fs::write(&in_path, [0xBE, 0xEF, b'!']).unwrap();

    decode::execute(
        schema_path.to_str().unwrap(),
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        0,
        order_from_flag(true),
    )
    .unwrap();

    let decoded: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(decoded["id"], 0xBEEF);
    assert_eq!(decoded["tag"], "!");
}

#[test]
fn decode_at_offset_skips_leading_bytes() {
    let td = tempdir().unwrap();
    let schema_path = td.path().join("schema.json");
    let in_path = td.path().join("in.bin");
    let out_path = td.path().join("out.json");

    write_file(&schema_path, r#"[{"name": "v", "type": "u32"}]"#);
    fs::write(&in_path, [0xAA, 0xAA, 0xAA, 0x78, 0x56, 0x34, 0x12]).unwrap();

    decode::execute(
        schema_path.to_str().unwrap(),
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        3,
        order_from_flag(false),
    )
    .unwrap();

    let decoded: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(decoded["v"], 0x1234_5678);
}

#[test]
fn decode_short_buffer_fails() {
    let td = tempdir().unwrap();
    let schema_path = td.path().join("schema.json");
    let in_path = td.path().join("in.bin");

    write_file(&schema_path, r#"[{"name": "v", "type": "u64"}]"#);
    fs::write(&in_path, [0u8; 4]).unwrap();

    let result = decode::execute(
        schema_path.to_str().unwrap(),
        in_path.to_str().unwrap(),
        None,
        0,
        order_from_flag(false),
    );

    assert!(result.is_err());
}

#[test]
fn encode_then_decode_round_trips_through_files() {
    let td = tempdir().unwrap();
    let schema_path = td.path().join("schema.json");
    let record_path = td.path().join("record.json");
    let bin_path = td.path().join("packed.bin");
    let out_path = td.path().join("decoded.json");

    write_file(
        &schema_path,
        r#"[
          {"name": "sequence", "type": "u64"},
          {"name": "delta", "type": "i128"},
          {"name": "reading", "type": "f64"},
          {"name": "unit", "type": "char8"}
        ]"#,
    );
    write_file(
        &record_path,
        r#"{
          "sequence": 981237,
          "delta": "-170141183460469231731687303715884105728",
          "reading": -2.25,
          "unit": "C"
        }"#,
    );

    encode::execute(
        schema_path.to_str().unwrap(),
        record_path.to_str().unwrap(),
        bin_path.to_str().unwrap(),
        order_from_flag(true),
    )
    .unwrap();

    assert_eq!(fs::read(&bin_path).unwrap().len(), 8 + 16 + 8 + 1);

    decode::execute(
        schema_path.to_str().unwrap(),
        bin_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        0,
        order_from_flag(true),
    )
    .unwrap();

    let decoded: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(decoded["sequence"], 981237);
    assert_eq!(decoded["delta"], "-170141183460469231731687303715884105728");
    assert_eq!(decoded["reading"], -2.25);
    assert_eq!(decoded["unit"], "C");
}
