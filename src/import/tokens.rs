//! Design-token document adapter.
//!
//! Maps the subset of a token export that has a brand context counterpart:
//!
//! | token path | field |
//! |---|---|
//! | `colors.{primary,secondary,accent}.value` | `colors.*` |
//! | `typography.font.family.heading.value` | `fontFamily.heading` |
//! | `typography.font.family.base.value` | `fontFamily.body` |
//! | `typography.font.weight.{bold,regular}.value` | `fontWeight.{bold,normal}` |
//!
//! Values of the form `{group.token}` are aliases and are resolved against
//! the same document. Component styles are not mapped.

use serde_json::Value;

use super::{PartialBrandContext, PartialColors, PartialTypography};
use crate::model::FontWeights;

const MAX_ALIAS_DEPTH: usize = 16;

pub fn parse_design_tokens(tokens: &Value) -> PartialBrandContext {
    PartialBrandContext {
        colors: colors_from(tokens),
        typography: typography_from(tokens),
        ..PartialBrandContext::default()
    }
}

fn colors_from(tokens: &Value) -> Option<PartialColors> {
    let group = tokens.get("colors")?;
    let color = |key: &str| token_string(group.get(key)?, tokens);

    let colors = PartialColors {
        primary: color("primary"),
        secondary: color("secondary"),
        accent: color("accent"),
    };
    (colors != PartialColors::default()).then_some(colors)
}

fn typography_from(tokens: &Value) -> Option<PartialTypography> {
    let font = tokens.get("typography")?.get("font")?;

    let family = font.get("family");
    let family_token = |key: &str| token_string(family?.get(key)?, tokens);

    let weight = font.get("weight");
    let weight_token = |key: &str| token_weight(weight?.get(key)?, tokens);

    let weights = FontWeights {
        normal: weight_token("regular"),
        bold: weight_token("bold"),
        ..FontWeights::default()
    };

    let typography = PartialTypography {
        heading: family_token("heading"),
        body: family_token("base"),
        mono: None,
        font_weight: (weights != FontWeights::default()).then_some(weights),
    };
    (typography != PartialTypography::default()).then_some(typography)
}

fn token_string(token: &Value, tokens: &Value) -> Option<String> {
    match token.get("value")? {
        Value::String(s) => Some(resolve_alias(s, tokens, 0)),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn token_weight(token: &Value, tokens: &Value) -> Option<u32> {
    match token.get("value")? {
        Value::Number(n) => n.as_u64().and_then(|w| u32::try_from(w).ok()),
        Value::String(s) => parse_leading_int(&resolve_alias(s, tokens, 0)),
        _ => None,
    }
}

/// Leading decimal digits, so `"700"` and `"700 Bold"` both give 700.
fn parse_leading_int(value: &str) -> Option<u32> {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Follow `{a.b.c}` references. Dangling references, references to groups
/// without a `value`, and chains deeper than [`MAX_ALIAS_DEPTH`] resolve to
/// the original string.
fn resolve_alias(value: &str, tokens: &Value, depth: usize) -> String {
    let Some(path) = value.strip_prefix('{').and_then(|v| v.strip_suffix('}')) else {
        return value.to_string();
    };
    if depth >= MAX_ALIAS_DEPTH {
        return value.to_string();
    }

    let target = path
        .split('.')
        .try_fold(tokens, |node, key| node.get(key));

    match target.and_then(|node| node.get("value")) {
        Some(Value::String(next)) => resolve_alias(next, tokens, depth + 1),
        Some(Value::Number(n)) => n.to_string(),
        _ => value.to_string(),
    }
}
