mod common;

use figment_mcp::error::PersistenceError;
use figment_mcp::store::ContextStore;
use figment_mcp::submission::{apply_submission, SUBMITTED_BRAND_NAME};
use serde_json::json;

fn editor_body() -> serde_json::Value {
    json!({
        "colors": { "primary": "#0EA5E9", "secondary": "#334155", "accent": "#F59E0B" },
        "typography": {
            "heading": "Poppins",
            "body": "Inter",
            "headingWeight": 700,
            "bodyWeight": 400,
            "headingLineHeight": 1.2,
            "bodyLineHeight": 1.6
        },
        "componentStyles": {
            "button": {
                "base": { "padding": "10px 20px" },
                "variants": { "ghost": { "background": "transparent" } }
            }
        }
    })
}

#[test]
fn submission_is_reshaped_and_saved() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::context_path(tmp.path());
    let mut store = ContextStore::new(&path);

    let saved = apply_submission(&mut store, &editor_body()).unwrap().clone();

    assert_eq!(saved.name, SUBMITTED_BRAND_NAME);
    assert_eq!(saved.version, "1.0.0");
    assert_eq!(saved.colors.accent.as_deref(), Some("#F59E0B"));
    assert_eq!(saved.typography.font_family.heading, "Poppins");
    assert_eq!(saved.typography.font_size.base, "16px");
    let weights = saved.typography.font_weight.as_ref().unwrap();
    assert_eq!((weights.normal, weights.bold), (Some(400), Some(700)));
    let heights = saved.typography.line_height.as_ref().unwrap();
    assert_eq!(heights.tight.as_ref().and_then(|n| n.as_f64()), Some(1.2));
    assert_eq!(heights.normal.as_ref().and_then(|n| n.as_f64()), Some(1.6));
    assert_eq!(saved.spacing.scale.len(), 12);
    assert!(saved.metadata.is_some());

    let mut reread = ContextStore::new(&path);
    assert_eq!(reread.load(), Some(saved));
}

#[test]
fn optional_editor_fields_may_be_absent() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = ContextStore::new(common::context_path(tmp.path()));
    let body = json!({
        "colors": { "primary": "#0EA5E9", "secondary": "#334155" },
        "typography": { "heading": "Poppins", "body": "Inter", "bodyWeight": null }
    });

    let saved = apply_submission(&mut store, &body).unwrap();

    assert!(saved.components.is_none());
    assert_eq!(saved.typography.font_weight.as_ref().and_then(|w| w.normal), None);
}

#[test]
fn invalid_submission_reports_violations_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let path = common::context_path(tmp.path());
    let mut store = ContextStore::new(&path);
    let mut body = editor_body();
    body["colors"]["primary"] = json!("sky blue");
    body["componentStyles"]["button"]["variants"]["danger"] = json!({ "color": "#FF0000" });

    let err = apply_submission(&mut store, &body).unwrap_err();

    match err {
        PersistenceError::Invalid(schema) => {
            assert!(schema.names("colors.primary"));
            assert!(schema.names("components.button.variants.danger"));
        }
        other => panic!("expected schema violations, got {other:?}"),
    }
    assert!(!path.exists());
    assert!(store.current().is_none());
}

#[test]
fn submission_without_typography_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = ContextStore::new(common::context_path(tmp.path()));

    let body = json!({ "colors": { "primary": "#000000", "secondary": "#111111" } });
    let err = apply_submission(&mut store, &body).unwrap_err();

    match err {
        PersistenceError::Invalid(schema) => {
            assert!(schema.names("typography.fontFamily.heading"));
            assert!(schema.names("typography.fontFamily.body"));
        }
        other => panic!("expected schema violations, got {other:?}"),
    }
}
