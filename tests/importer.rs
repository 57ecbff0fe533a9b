mod common;

use std::fs;

use figment_mcp::error::ImportError;
use figment_mcp::import::{
    import_markdown, import_markdown_file, parse_design_tokens, PartialBrandContext,
    PartialColors, DEFAULT_BRAND_NAME, DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY, DEFAULT_SECONDARY,
};
use figment_mcp::validate::validate;
use serde_json::json;

// ---------------------------------------------------------------------------
// Markdown
// ---------------------------------------------------------------------------

#[test]
fn first_three_colors_become_primary_secondary_accent() {
    let text = "# Brand\n\nPrimary is #3B82F6.\nSecondary is #64748B.\nText uses #111827.\nAlso #FFFFFF.\n";

    let partial = import_markdown(text);

    assert_eq!(
        partial.colors,
        Some(PartialColors {
            primary: Some("#3B82F6".into()),
            secondary: Some("#64748B".into()),
            accent: Some("#111827".into()),
        })
    );
}

#[test]
fn single_color_doubles_as_secondary() {
    let partial = import_markdown("Our color: #0EA5E9");
    let colors = partial.colors.unwrap();

    assert_eq!(colors.primary.as_deref(), Some("#0EA5E9"));
    assert_eq!(colors.secondary.as_deref(), Some("#0EA5E9"));
    assert_eq!(colors.accent, None);
}

#[test]
fn no_matches_yields_empty_partial() {
    let partial = import_markdown("Just prose, nothing to extract.");

    assert_eq!(partial, PartialBrandContext::default());
}

#[test]
fn distinct_font_families_in_order() {
    let text = "\
```css
h1 { font-family: Poppins, sans-serif; }
p { font-family: Inter; }
.lead { Font Family: Poppins; }
code { fontfamily: Fira Code; }
```";

    let typography = import_markdown(text).typography.unwrap();

    assert_eq!(typography.heading.as_deref(), Some("Poppins"));
    assert_eq!(typography.body.as_deref(), Some("Inter"));
    assert_eq!(typography.mono.as_deref(), Some("Fira Code"));
}

#[test]
fn single_font_doubles_as_body() {
    let typography = import_markdown("font-family: Roboto").typography.unwrap();

    assert_eq!(typography.heading.as_deref(), Some("Roboto"));
    assert_eq!(typography.body.as_deref(), Some("Roboto"));
    assert_eq!(typography.mono, None);
}

#[test]
fn front_matter_supplies_metadata_and_is_not_scanned() {
    let text = "---\nname: Northwind\nversion: 3.0.0\nauthor: Brand Studio\nprimary: \"#FF0000\"\n---\nBody color #00FF00\n";

    let partial = import_markdown(text);

    assert_eq!(partial.name.as_deref(), Some("Northwind"));
    assert_eq!(partial.version.as_deref(), Some("3.0.0"));
    assert_eq!(partial.author.as_deref(), Some("Brand Studio"));
    assert_eq!(partial.colors.unwrap().primary.as_deref(), Some("#00FF00"));
}

#[test]
fn malformed_front_matter_is_ignored() {
    let text = "---\nname: [unclosed\n---\nColor #123456\n";

    let partial = import_markdown(text);

    assert_eq!(partial.name, None);
    assert_eq!(partial.colors.unwrap().primary.as_deref(), Some("#123456"));
}

#[test]
fn markdown_file_name_falls_back_to_stem() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("northwind-guide.md");
    fs::write(&path, "Primary #0EA5E9\nfont-family: Inter").unwrap();

    let partial = import_markdown_file(&path).unwrap();

    assert_eq!(partial.name.as_deref(), Some("northwind-guide"));
}

#[test]
fn non_markdown_file_is_unsupported() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("guide.pdf");
    fs::write(&path, "%PDF").unwrap();

    let err = import_markdown_file(&path).unwrap_err();

    assert!(matches!(err, ImportError::UnsupportedFormat(ref ext) if ext == ".pdf"));
}

#[test]
fn missing_markdown_file_is_a_read_error() {
    let tmp = tempfile::tempdir().unwrap();

    let err = import_markdown_file(&tmp.path().join("absent.md")).unwrap_err();

    assert!(matches!(err, ImportError::Read { .. }));
}

// ---------------------------------------------------------------------------
// Completion with defaults
// ---------------------------------------------------------------------------

#[test]
fn empty_partial_completes_to_starter_brand() {
    let context = PartialBrandContext::default().complete_with_defaults();

    assert_eq!(context.name, DEFAULT_BRAND_NAME);
    assert_eq!(context.colors.primary, DEFAULT_PRIMARY);
    assert_eq!(context.colors.secondary, DEFAULT_SECONDARY);
    assert_eq!(context.typography.font_family.heading, DEFAULT_FONT_FAMILY);
    assert_eq!(context.typography.font_family.body, DEFAULT_FONT_FAMILY);
    assert!(context.metadata.is_none());

    let raw = serde_json::to_value(&context).unwrap();
    assert!(validate(&raw).is_ok());
}

#[test]
fn imported_partial_completes_to_valid_context() {
    let text = "---\nauthor: Brand Studio\n---\n#3B82F6 #64748B #111827\nfont-family: Poppins\nfont-family: Inter\n";

    let context = import_markdown(text).complete_with_defaults();

    assert_eq!(context.colors.accent.as_deref(), Some("#111827"));
    assert_eq!(context.typography.font_family.body, "Inter");
    assert_eq!(
        context.metadata.as_ref().and_then(|m| m.author.as_deref()),
        Some("Brand Studio")
    );
    let raw = serde_json::to_value(&context).unwrap();
    assert!(validate(&raw).is_ok());
}

#[test]
fn completed_import_saves_through_store() {
    let tmp = tempfile::tempdir().unwrap();
    let mut store = figment_mcp::store::ContextStore::new(common::context_path(tmp.path()));

    let partial = import_markdown("Brand blue #1D4ED8, slate #334155");
    let saved = store.save(partial.complete_with_defaults()).unwrap();

    assert_eq!(saved.colors.primary, "#1D4ED8");
    assert_eq!(saved.colors.secondary, "#334155");
}

// ---------------------------------------------------------------------------
// Design tokens
// ---------------------------------------------------------------------------

#[test]
fn design_tokens_map_colors_fonts_and_weights() {
    let tokens = json!({
        "palette": { "blue": { "600": { "value": "#2563EB" } } },
        "colors": {
            "primary": { "value": "{palette.blue.600}" },
            "secondary": { "value": "#475569" }
        },
        "typography": {
            "font": {
                "family": {
                    "heading": { "value": "Poppins" },
                    "base": { "value": "Inter" }
                },
                "weight": {
                    "regular": { "value": 400 },
                    "bold": { "value": "700" }
                }
            }
        }
    });

    let partial = parse_design_tokens(&tokens);

    let colors = partial.colors.unwrap();
    assert_eq!(colors.primary.as_deref(), Some("#2563EB"));
    assert_eq!(colors.secondary.as_deref(), Some("#475569"));
    assert_eq!(colors.accent, None);

    let typography = partial.typography.unwrap();
    assert_eq!(typography.heading.as_deref(), Some("Poppins"));
    assert_eq!(typography.body.as_deref(), Some("Inter"));
    let weights = typography.font_weight.unwrap();
    assert_eq!(weights.normal, Some(400));
    assert_eq!(weights.bold, Some(700));
}

#[test]
fn dangling_and_cyclic_aliases_stay_literal() {
    let tokens = json!({
        "loop": { "a": { "value": "{loop.b}" }, "b": { "value": "{loop.a}" } },
        "colors": {
            "primary": { "value": "{missing.token}" },
            "secondary": { "value": "{loop.a}" }
        }
    });

    let colors = parse_design_tokens(&tokens).colors.unwrap();

    assert_eq!(colors.primary.as_deref(), Some("{missing.token}"));
    assert!(colors.secondary.unwrap().starts_with("{loop."));
}

#[test]
fn unrelated_token_document_is_empty() {
    let partial = parse_design_tokens(&json!({ "motion": { "fast": { "value": "100ms" } } }));

    assert_eq!(partial, PartialBrandContext::default());
}
