//! Style resolution and derived artifacts: merged component styles, CSS
//! custom properties and the guideline document served to AI clients.

use indexmap::IndexMap;

use crate::model::{BrandContext, ComponentKind, ComponentPatterns, Pattern, StyleMap};

pub const NO_CONTEXT_GUIDELINES: &str = "No brand context available.";

/// `base` merged with the named variant (or input state). Override keys win.
///
/// An unconfigured component resolves to an empty map; an unknown variant
/// resolves to `base` unchanged.
pub fn resolve_component_style(
    patterns: &ComponentPatterns,
    component: ComponentKind,
    variant: &str,
) -> StyleMap {
    match patterns.pattern(component) {
        Some(pattern) => merge(pattern.base(), pattern.overrides().get(variant)),
        None => StyleMap::new(),
    }
}

fn merge(base: &StyleMap, overrides: Option<&StyleMap>) -> StyleMap {
    let mut merged = base.clone();
    if let Some(overrides) = overrides {
        for (property, value) in overrides {
            merged.insert(property.clone(), value.clone());
        }
    }
    merged
}

/// Render a `:root { }` block of CSS custom properties.
///
/// Output order is fixed: brand colors, semantic colors, neutral scale,
/// font families, font sizes, spacing base, then one `--spacing-{index}`
/// per scale entry. Sections with nothing configured are left out.
pub fn render_css_variables(context: &BrandContext) -> String {
    let colors = &context.colors;
    let typography = &context.typography;
    let mut css = vec![":root {".to_string()];

    css.push("  /* Brand Colors */".into());
    css.push(format!("  --color-primary: {};", colors.primary));
    css.push(format!("  --color-secondary: {};", colors.secondary));
    if let Some(accent) = &colors.accent {
        css.push(format!("  --color-accent: {accent};"));
    }
    for (name, value) in colors.semantic() {
        css.push(format!("  --color-{name}: {value};"));
    }

    let neutral = colors
        .neutral
        .as_ref()
        .map(|n| n.entries())
        .unwrap_or_default();
    if !neutral.is_empty() {
        css.push("  /* Neutral Colors */".into());
        for (step, value) in neutral {
            css.push(format!("  --color-neutral-{step}: {value};"));
        }
    }

    css.push("  /* Typography */".into());
    css.push(format!("  --font-heading: {};", typography.font_family.heading));
    css.push(format!("  --font-body: {};", typography.font_family.body));
    if let Some(mono) = &typography.font_family.mono {
        css.push(format!("  --font-mono: {mono};"));
    }
    for (key, value) in typography.font_size.entries() {
        css.push(format!("  --font-size-{key}: {value};"));
    }

    css.push("  /* Spacing */".into());
    css.push(format!("  --spacing-base: {}px;", context.spacing.base));
    for (index, value) in context.spacing.scale.iter().enumerate() {
        css.push(format!("  --spacing-{index}: {value}px;"));
    }

    css.push("}".into());
    css.join("\n")
}

/// Render the human-readable guideline document, or the "no context"
/// sentinel when nothing is loaded.
pub fn render_guidelines(context: Option<&BrandContext>) -> String {
    let Some(context) = context else {
        return NO_CONTEXT_GUIDELINES.to_string();
    };

    let colors = &context.colors;
    let family = &context.typography.font_family;
    let mut lines = vec![
        "# Brand Guidelines for Code Generation".to_string(),
        String::new(),
        format!("Brand: {}", context.name),
        format!("Version: {}", context.version),
        String::new(),
    ];

    lines.push("## Colors".into());
    lines.push(format!("Primary: {}", colors.primary));
    lines.push(format!("Secondary: {}", colors.secondary));
    if let Some(accent) = &colors.accent {
        lines.push(format!("Accent: {accent}"));
    }
    lines.push(String::new());
    lines.push("Use these colors for:".into());
    lines.push("- Primary: Main CTAs, links, focus states".into());
    lines.push("- Secondary: Supporting elements, borders".into());
    if colors.accent.is_some() {
        lines.push("- Accent: Highlights, badges, notifications".into());
    }
    lines.push(String::new());

    lines.push("## Typography".into());
    lines.push(format!("Headings: {}", family.heading));
    lines.push(format!("Body text: {}", family.body));
    if let Some(mono) = &family.mono {
        lines.push(format!("Code/mono: {mono}"));
    }
    lines.push(String::new());

    if let Some(patterns) = &context.components {
        let sections = [
            (ComponentKind::Button, "Buttons"),
            (ComponentKind::Input, "Form Inputs"),
            (ComponentKind::Card, "Cards"),
        ];
        let configured: Vec<_> = sections
            .into_iter()
            .filter_map(|(kind, title)| patterns.pattern(kind).map(|p| (title, p)))
            .collect();

        if !configured.is_empty() {
            lines.push("## Component Patterns".into());
            for (title, pattern) in configured {
                lines.push(format!("### {title}"));
                push_pattern(&mut lines, pattern);
                lines.push(String::new());
            }
        }
    }

    lines.push("## Instructions for AI".into());
    lines.push("When generating code:".into());
    lines.push("1. Always use the specified brand colors".into());
    lines.push("2. Apply the correct typography for headings and body text".into());
    lines.push("3. Follow component patterns when creating UI elements".into());
    lines.push("4. Maintain consistent spacing using the defined scale".into());
    lines.push("5. Ensure accessibility standards are met".into());

    lines.join("\n")
}

fn push_pattern(lines: &mut Vec<String>, pattern: Pattern<'_>) {
    if !pattern.base().is_empty() {
        lines.push(format!("Base: {}", style_line(pattern.base())));
    }
    push_overrides(lines, pattern.overrides());
}

fn push_overrides(lines: &mut Vec<String>, overrides: &IndexMap<String, StyleMap>) {
    for (name, styles) in overrides {
        if styles.is_empty() {
            continue;
        }
        lines.push(format!("{}: {}", capitalize(name), style_line(styles)));
    }
}

fn style_line(styles: &StyleMap) -> String {
    styles
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
