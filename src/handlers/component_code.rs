use crate::model::{BrandContext, ComponentKind, StyleMap};
use crate::protocol::{ComponentCodeParams, ToolOutcome};
use crate::style::resolve_component_style;

const NOT_CONFIGURED: &str =
    "Cannot generate component code - no brand context available. Run `figment init`.";

const DEFAULT_BUTTON_VARIANT: &str = "primary";
const DEFAULT_FONT_WEIGHT: u32 = 400;
const DEFAULT_LINE_HEIGHT: &str = "1.5";

/// Handle a `generate_component_code` tool call.
///
/// Only `button` for `react` is implemented; other combinations answer with
/// a "not yet supported" comment.
pub async fn handle(params: ComponentCodeParams, context: Option<&BrandContext>) -> ToolOutcome {
    let Some(context) = context else {
        return ToolOutcome::not_configured(NOT_CONFIGURED);
    };

    if params.framework != "react" {
        return ToolOutcome::text(format!(
            "// Framework \"{}\" not yet supported",
            params.framework
        ));
    }

    match ComponentKind::parse(&params.component) {
        Some(ComponentKind::Button) => {
            let variant = params
                .props
                .get("variant")
                .and_then(|v| v.as_str())
                .unwrap_or(DEFAULT_BUTTON_VARIANT);
            ToolOutcome::text(react_button(context, variant))
        }
        _ => ToolOutcome::text(format!(
            "// Component type \"{}\" not yet supported",
            params.component
        )),
    }
}

fn react_button(context: &BrandContext, variant: &str) -> String {
    let styles = context
        .components
        .as_ref()
        .map(|patterns| resolve_component_style(patterns, ComponentKind::Button, variant))
        .unwrap_or_default();

    let style_lines = inline_style(&styles, context).join("\n        ");
    let variant = quote(variant);

    format!(
        r#"import React from 'react';

interface ButtonProps {{
  children: React.ReactNode;
  onClick?: () => void;
  variant?: 'primary' | 'secondary' | 'outline' | 'ghost';
  disabled?: boolean;
}}

export const Button: React.FC<ButtonProps> = ({{
  children,
  onClick,
  variant = {variant},
  disabled = false
}}) => {{
  return (
    <button
      style={{{{
        {style_lines}
      }}}}
      onClick={{onClick}}
      disabled={{disabled}}
    >
      {{children}}
    </button>
  );
}};"#
    )
}

/// Resolved styles as React inline-style entries, followed by the brand
/// typography unless the pattern already sets it.
fn inline_style(styles: &StyleMap, context: &BrandContext) -> Vec<String> {
    let mut entries: Vec<(String, String)> = styles
        .iter()
        .map(|(property, value)| (camel_case(property), quote(value)))
        .collect();

    let typography = &context.typography;
    let weight = typography
        .font_weight
        .as_ref()
        .and_then(|w| w.normal)
        .unwrap_or(DEFAULT_FONT_WEIGHT);
    let line_height = typography
        .line_height
        .as_ref()
        .and_then(|l| l.normal.as_ref())
        .map(ToString::to_string)
        .unwrap_or_else(|| DEFAULT_LINE_HEIGHT.to_string());

    let brand_typography = [
        ("fontFamily", quote(&typography.font_family.body)),
        ("fontWeight", weight.to_string()),
        ("lineHeight", line_height),
    ];
    for (key, value) in brand_typography {
        if !entries.iter().any(|(existing, _)| existing == key) {
            entries.push((key.to_string(), value));
        }
    }

    entries
        .into_iter()
        .map(|(key, value)| format!("{key}: {value},"))
        .collect()
}

/// `border-radius` → `borderRadius`, `-webkit-transition` → `WebkitTransition`.
fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper_next = false;
    for ch in property.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Single-quoted JavaScript string literal.
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
