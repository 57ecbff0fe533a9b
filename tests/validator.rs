mod common;

use figment_mcp::model::{ComponentKind, DEFAULT_FONT_SIZE_BASE, DEFAULT_VERSION};
use figment_mcp::validate::{is_hex_color, validate};
use serde_json::{json, Value};

fn with(mut doc: Value, pointer: &str, value: Value) -> Value {
    *doc.pointer_mut(pointer).unwrap() = value;
    doc
}

fn without(mut doc: Value, parent: &str, key: &str) -> Value {
    doc.pointer_mut(parent)
        .unwrap()
        .as_object_mut()
        .unwrap()
        .remove(key);
    doc
}

#[test]
fn accepts_full_document() {
    let context = validate(&common::acme_json()).unwrap();

    assert_eq!(context.name, "Acme");
    assert_eq!(context.version, "2.1.0");
    assert_eq!(context.colors.accent.as_deref(), Some("#778899"));
    assert_eq!(context.typography.font_family.mono.as_deref(), Some("JetBrains Mono"));
    let button = context.components.as_ref().unwrap().pattern(ComponentKind::Button);
    assert!(button.is_some());
}

#[test]
fn fills_documented_defaults() {
    let context = validate(&common::minimal_json()).unwrap();

    assert_eq!(context.version, DEFAULT_VERSION);
    assert_eq!(context.typography.font_size.base, DEFAULT_FONT_SIZE_BASE);
    assert_eq!(context.spacing.base.as_u64(), Some(8));
    let scale: Vec<u64> = context
        .spacing
        .scale
        .iter()
        .map(|n| n.as_u64().unwrap())
        .collect();
    assert_eq!(scale, vec![4, 8, 12, 16, 20, 24, 32, 40, 48, 64, 80, 96]);
    assert!(context.components.is_none());
    assert!(context.metadata.is_none());
}

#[test]
fn rejects_missing_primary() {
    let doc = without(common::minimal_json(), "/colors", "primary");
    let err = validate(&doc).unwrap_err();

    assert!(err.names("colors.primary"), "violations: {err}");
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["#12345", "112233", "#GGGGGG", "#1122334", "red"] {
        let doc = with(common::minimal_json(), "/colors/secondary", json!(bad));
        let err = validate(&doc).unwrap_err();
        assert!(err.names("colors.secondary"), "{bad} should be rejected");
    }
}

#[test]
fn hex_pattern_is_case_insensitive() {
    assert!(is_hex_color("#abcdef"));
    assert!(is_hex_color("#ABCDEF"));
    assert!(!is_hex_color("#abc"));
    assert!(!is_hex_color(" #abcdef"));
}

#[test]
fn reports_every_violation() {
    let doc = with(common::minimal_json(), "/colors/primary", json!("blue"));
    let doc = without(doc, "/typography/fontFamily", "heading");
    let doc = with(doc, "/name", json!(42));

    let err = validate(&doc).unwrap_err();

    assert!(err.names("colors.primary"));
    assert!(err.names("typography.fontFamily.heading"));
    assert!(err.names("name"));
    assert_eq!(err.violations.len(), 3);
}

#[test]
fn rejects_empty_spacing_scale() {
    let mut doc = common::minimal_json();
    doc["spacing"] = json!({ "base": 8, "scale": [] });
    let err = validate(&doc).unwrap_err();

    assert!(err.names("spacing.scale"));
}

#[test]
fn addresses_scale_entries_by_index() {
    let mut doc = common::minimal_json();
    doc["spacing"] = json!({ "base": 8, "scale": [4, -2, "x"] });
    let err = validate(&doc).unwrap_err();

    assert!(err.names("spacing.scale[1]"));
    assert!(err.names("spacing.scale[2]"));
    assert!(!err.names("spacing.scale[0]"));
}

#[test]
fn rejects_unknown_component_variant() {
    let mut doc = common::acme_json();
    doc["components"]["button"]["variants"]["danger"] = json!({ "background": "#FF0000" });

    let err = validate(&doc).unwrap_err();
    assert!(err.names("components.button.variants.danger"), "violations: {err}");
}

#[test]
fn rejects_unknown_component_type() {
    let mut doc = common::acme_json();
    doc["components"]["modal"] = json!({ "base": { "padding": "24px" } });

    let err = validate(&doc).unwrap_err();
    assert!(err.names("components.modal"));
}

#[test]
fn rejects_unknown_input_state() {
    let mut doc = common::acme_json();
    doc["components"]["input"]["states"]["hover"] = json!({ "border": "none" });

    let err = validate(&doc).unwrap_err();
    assert!(err.names("components.input.states.hover"));
}

#[test]
fn rejects_non_string_style_values() {
    let mut doc = common::acme_json();
    doc["components"]["button"]["base"]["padding"] = json!(8);

    let err = validate(&doc).unwrap_err();
    assert!(err.names("components.button.base.padding"));
}

#[test]
fn rejects_unknown_neutral_step() {
    let mut doc = common::minimal_json();
    doc["colors"]["neutral"] = json!({ "150": "#EEEEEE", "500": "#777777" });

    let err = validate(&doc).unwrap_err();
    assert!(err.names("colors.neutral.150"));
    assert!(!err.names("colors.neutral.500"));
}

#[test]
fn rejects_out_of_range_font_weight() {
    let mut doc = common::minimal_json();
    doc["typography"]["fontWeight"] = json!({ "normal": 0, "bold": 700 });

    let err = validate(&doc).unwrap_err();
    assert!(err.names("typography.fontWeight.normal"));
}

#[test]
fn rejects_bad_metadata_timestamp() {
    let mut doc = common::minimal_json();
    doc["metadata"] = json!({ "createdAt": "yesterday", "updatedAt": "2024-05-01T10:00:00.000Z" });

    let err = validate(&doc).unwrap_err();
    assert!(err.names("metadata.createdAt"));
    assert!(!err.names("metadata.updatedAt"));
}

#[test]
fn ignores_unknown_top_level_keys() {
    let mut doc = common::minimal_json();
    doc["theme"] = json!("dark");

    assert!(validate(&doc).is_ok());
}

#[test]
fn rejects_non_object_root() {
    let err = validate(&json!(["not", "a", "context"])).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert!(err.names(""));
}

#[test]
fn validated_context_revalidates_unchanged() {
    let context = common::acme();
    let reserialized = serde_json::to_value(&context).unwrap();

    assert_eq!(validate(&reserialized).unwrap(), context);
}
