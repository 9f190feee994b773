#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use formorder_core::errors::FormOrderError;
use formorder_core::layout_file::{
    parse_descriptors_file, parse_descriptors_json, parse_layout_file, parse_layout_str,
    BaseSource,
};
use formorder_core::ops::rearrange;
use formorder_core::{CanonicalOrder, FieldKey, Placement};
use tempfile::TempDir;

const INLINE_LAYOUT: &str = r#"
schema_version: 0
field_type: simpletextfield
placement: anchor
order:
  - validate.required
  - errorLabel
base:
  - key: errorLabel
    type: textfield
    label: Error Label
  - key: unique
    type: checkbox
  - key: validate.required
    type: checkbox
    input: true
"#;

#[test]
fn test_inline_layout_builds() {
    let file = parse_layout_str(INLINE_LAYOUT).unwrap();
    assert_eq!(file.placement, Placement::Anchor);
    assert!(matches!(file.base, BaseSource::Inline(ref d) if d.len() == 3));

    let layout = file.build().unwrap();
    assert_eq!(layout.field_type(), "simpletextfield");
    assert_eq!(
        layout.keys(),
        vec!["validate.required", "unique", "errorLabel"]
    );
    assert_eq!(
        layout.get("validate.required").and_then(|d| d.attr("input")),
        Some(&serde_json::json!(true))
    );
}

#[test]
fn test_builtin_base_is_default() {
    let file = parse_layout_str(
        "schema_version: 0\nfield_type: simpleemailadvanced\norder: [kickbox]\n",
    )
    .unwrap();
    let layout = file.build().unwrap();
    assert_eq!(layout.keys()[0], "kickbox");
    assert_eq!(layout.keys()[1], "validate.required");
}

#[test]
fn test_unsupported_schema_version() {
    let err = parse_layout_str("schema_version: 1\nfield_type: x\n").unwrap_err();
    assert_eq!(err, FormOrderError::UnsupportedSchemaVersion { version: 1 });
}

#[test]
fn test_blank_field_type_rejected() {
    let err = parse_layout_str("schema_version: 0\nfield_type: '  '\n").unwrap_err();
    assert!(matches!(err, FormOrderError::InvalidLayout { .. }));
}

#[test]
fn test_unknown_named_base_rejected() {
    let err =
        parse_layout_str("schema_version: 0\nfield_type: x\nbase: textfield\n").unwrap_err();
    match err {
        FormOrderError::InvalidLayout { reason } => assert!(reason.contains("textfield")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_duplicate_order_key_in_file() {
    let err = parse_layout_str("schema_version: 0\nfield_type: x\norder: [a, b, a]\n")
        .unwrap_err();
    assert_eq!(
        err,
        FormOrderError::DuplicateOrderKey {
            key: FieldKey::from("a")
        }
    );
}

#[test]
fn test_duplicate_inline_base_key_in_file() {
    let err = parse_layout_str(
        "schema_version: 0\nfield_type: x\nbase:\n  - key: a\n  - key: a\n",
    )
    .unwrap_err();
    assert!(matches!(err, FormOrderError::DuplicateBaseKey { .. }));
}

#[test]
fn test_malformed_yaml() {
    let err = parse_layout_str("schema_version: [\n").unwrap_err();
    assert!(matches!(err, FormOrderError::Parse { .. }));
}

#[test]
fn test_layout_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.yaml");
    fs::write(&path, INLINE_LAYOUT).unwrap();

    let file = parse_layout_file(&path).unwrap();
    assert_eq!(file.field_type, "simpletextfield");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = parse_layout_file(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, FormOrderError::Io { .. }));
}

#[test]
fn test_descriptor_json_round_trips_unknown_attributes() {
    let json = r#"[
        {"key": "validateOn", "type": "select", "dataSrc": "values"},
        {"key": "kickbox", "type": "panel", "components": [{"key": "kickbox.enabled"}]}
    ]"#;

    let descriptors = parse_descriptors_json(json).unwrap();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(
        descriptors[0].attr("dataSrc"),
        Some(&serde_json::json!("values"))
    );
    assert_eq!(descriptors[1].components()[0]["key"], "kickbox.enabled");
}

#[test]
fn test_descriptor_json_round_trips_through_rearrange() {
    let json = r#"[
        {"key": "panel", "type": "panel", "components": []},
        {"key": "html", "type": null, "label": null},
        {"key": "a", "label": 5},
        {"key": "columns", "components": [{"width": 6, "components": [{"key": "inner"}]}]}
    ]"#;
    let input: serde_json::Value = serde_json::from_str(json).unwrap();

    let descriptors = parse_descriptors_json(json).unwrap();
    assert_eq!(descriptors[2].label(), None);
    assert_eq!(descriptors[2].attr("label"), Some(&serde_json::json!(5)));

    let order = CanonicalOrder::new(["columns", "a", "html", "panel"]).unwrap();
    let reversed = rearrange(&order, &descriptors).unwrap();
    let original = CanonicalOrder::new(["panel", "html", "a", "columns"]).unwrap();
    let restored = rearrange(&original, &reversed).unwrap();

    assert_eq!(serde_json::to_value(&restored).unwrap(), input);
    assert_eq!(serde_json::to_value(&reversed[0]).unwrap(), input[3]);
}

#[test]
fn test_descriptor_json_duplicate_key() {
    let err = parse_descriptors_json(r#"[{"key": "a"}, {"key": "a"}]"#).unwrap_err();
    assert!(matches!(err, FormOrderError::DuplicateBaseKey { .. }));
}

#[test]
fn test_descriptor_file_requires_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("base.json");
    fs::write(&path, r#"[{"type": "checkbox"}]"#).unwrap();

    let err = parse_descriptors_file(&path).unwrap_err();
    assert!(matches!(err, FormOrderError::Parse { .. }));
}
