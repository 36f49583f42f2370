use std::fs;
use tempfile::tempdir;

use packwire_cli::commands::layout;

#[test]
fn layout_accepts_valid_descriptor() {
    let td = tempdir().unwrap();
    let schema_path = td.path().join("schema.json");

    fs::write(
        &schema_path,
        r#"[
          {"name": "a", "type": "i32"},
          {"name": "b", "type": "i16"},
          {"name": "c", "type": "u8"}
        ]"#,
    )
    .unwrap();

    layout::execute(schema_path.to_str().unwrap()).unwrap();
}

#[test]
fn layout_rejects_unknown_type_name() {
    let td = tempdir().unwrap();
    let schema_path = td.path().join("schema.json");

    fs::write(
        &schema_path,
        r#"[{"name": "s", "type": "string"}]"#,
    )
    .unwrap();

    let result = layout::execute(schema_path.to_str().unwrap());
    assert!(result.is_err());
}

#[test]
fn layout_rejects_missing_file() {
    let result = layout::execute("/nonexistent/schema.json");
    assert!(result.is_err());
}
