mod common;

use figment_mcp::model::{ComponentKind, ComponentPatterns, StyleMap};
use figment_mcp::style::{
    render_css_variables, render_guidelines, resolve_component_style, NO_CONTEXT_GUIDELINES,
};
use serde_json::Number;

fn patterns() -> ComponentPatterns {
    common::acme().components.unwrap()
}

fn styles(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// resolve_component_style
// ---------------------------------------------------------------------------

#[test]
fn variant_overrides_base_keys() {
    let resolved = resolve_component_style(&patterns(), ComponentKind::Button, "outline");

    let expected = styles(&[
        ("padding", "7px 15px"),
        ("border-radius", "6px"),
        ("border", "1px solid #112233"),
    ]);
    assert_eq!(resolved, expected);
    let keys: Vec<&str> = resolved.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["padding", "border-radius", "border"]);
}

#[test]
fn input_states_act_as_variants() {
    let resolved = resolve_component_style(&patterns(), ComponentKind::Input, "focus");

    assert_eq!(resolved, styles(&[("border", "1px solid #112233")]));
}

#[test]
fn unknown_variant_resolves_to_base() {
    let resolved = resolve_component_style(&patterns(), ComponentKind::Button, "ghost");

    assert_eq!(
        resolved,
        styles(&[("padding", "8px 16px"), ("border-radius", "6px")])
    );
}

#[test]
fn unconfigured_component_resolves_empty() {
    assert!(resolve_component_style(&patterns(), ComponentKind::Card, "default").is_empty());
    assert!(resolve_component_style(&patterns(), ComponentKind::Modal, "default").is_empty());
}

// ---------------------------------------------------------------------------
// render_css_variables
// ---------------------------------------------------------------------------

#[test]
fn css_variables_golden() {
    let expected = "\
:root {
  /* Brand Colors */
  --color-primary: #112233;
  --color-secondary: #445566;
  --color-accent: #778899;
  --color-success: #22C55E;
  /* Neutral Colors */
  --color-neutral-50: #F9FAFB;
  --color-neutral-900: #111827;
  /* Typography */
  --font-heading: Poppins, sans-serif;
  --font-body: Inter, sans-serif;
  --font-mono: JetBrains Mono;
  --font-size-sm: 14px;
  --font-size-base: 16px;
  --font-size-lg: 18px;
  /* Spacing */
  --spacing-base: 4px;
  --spacing-0: 0px;
  --spacing-1: 4px;
  --spacing-2: 8px;
}";

    assert_eq!(render_css_variables(&common::acme()), expected);
}

#[test]
fn css_variables_omit_absent_sections() {
    let css = render_css_variables(&common::minimal());

    assert!(!css.contains("--color-accent"));
    assert!(!css.contains("Neutral"));
    assert!(!css.contains("--font-mono"));
    assert!(css.contains("--font-size-base: 16px;"));
    assert!(css.contains("--spacing-11: 96px;"));
    assert!(css.ends_with('}'));
}

#[test]
fn spacing_variables_are_indexed_by_position() {
    let mut context = common::minimal();
    context.spacing.scale = vec![Number::from(10u64), Number::from(2u64)];

    let css = render_css_variables(&context);

    assert!(css.contains("--spacing-0: 10px;"));
    assert!(css.contains("--spacing-1: 2px;"));
    assert!(!css.contains("--spacing-10"));
}

// ---------------------------------------------------------------------------
// render_guidelines
// ---------------------------------------------------------------------------

#[test]
fn guidelines_without_context_is_sentinel() {
    assert_eq!(render_guidelines(None), NO_CONTEXT_GUIDELINES);
}

#[test]
fn guidelines_describe_configured_patterns() {
    let text = render_guidelines(Some(&common::acme()));

    assert!(text.starts_with("# Brand Guidelines for Code Generation"));
    assert!(text.contains("Brand: Acme\nVersion: 2.1.0"));
    assert!(text.contains("Accent: #778899"));
    assert!(text.contains("Code/mono: JetBrains Mono"));
    assert!(text.contains("### Buttons\nBase: padding: 8px 16px, border-radius: 6px"));
    assert!(text.contains("Outline: border: 1px solid #112233, padding: 7px 15px"));
    assert!(text.contains("### Form Inputs"));
    assert!(text.contains("Focus: border: 1px solid #112233"));
    assert!(!text.contains("### Cards"));
    assert!(text.ends_with("5. Ensure accessibility standards are met"));
}

#[test]
fn guidelines_skip_patterns_section_when_unconfigured() {
    let text = render_guidelines(Some(&common::minimal()));

    assert!(!text.contains("## Component Patterns"));
    assert!(!text.contains("Accent:"));
    assert!(text.contains("Headings: Georgia\nBody text: Arial"));
}
