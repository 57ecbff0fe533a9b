//! Markdown brand guide import.
//!
//! This is a heuristic, not a layout parser. The ordering rule is the whole
//! contract: the first, second and third hex colors found in the body become
//! primary, secondary and accent; the first, second and third distinct
//! `font-family:` values become heading, body and mono.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use super::{PartialBrandContext, PartialColors, PartialTypography};
use crate::error::ImportError;

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("hex color pattern is valid"))
}

fn font_family_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)font[-\s]?family\s*:\s*([^;\n,]+)").expect("font family pattern is valid")
    })
}

/// Extract a partial brand context from markdown text. Never fails; finds
/// fewer fields when there are fewer matches.
pub fn import_markdown(text: &str) -> PartialBrandContext {
    let (front_matter, body) = split_front_matter(text);

    let mut partial = PartialBrandContext {
        colors: colors_from(body),
        typography: typography_from(body),
        ..PartialBrandContext::default()
    };

    if let Some(yaml) = front_matter {
        apply_front_matter(&mut partial, yaml);
    }

    partial
}

/// Import a `.md` file. The brand name falls back to the file stem when the
/// front matter does not provide one.
pub fn import_markdown_file(path: &Path) -> Result<PartialBrandContext, ImportError> {
    let is_markdown = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false);
    if !is_markdown {
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_else(|| "(none)".to_string());
        return Err(ImportError::UnsupportedFormat(ext));
    }

    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut partial = import_markdown(&text);
    if partial.name.is_none() {
        partial.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
    }
    Ok(partial)
}

/// Split a leading `---` delimited block from the body. Without a closing
/// delimiter the whole text is body.
fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text
        .strip_prefix("---\r\n")
        .or_else(|| text.strip_prefix("---\n"))
    else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let front = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(front), body);
        }
        offset += line.len();
    }

    (None, text)
}

fn apply_front_matter(partial: &mut PartialBrandContext, yaml: &str) {
    if yaml.trim().is_empty() {
        return;
    }

    let data: serde_yaml::Value = match serde_yaml::from_str(yaml) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "Ignoring malformed front matter in brand guide");
            return;
        }
    };

    let field = |key: &str| data.get(key).and_then(scalar_to_string);
    partial.name = field("name");
    partial.version = field("version");
    partial.author = field("author");
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn colors_from(body: &str) -> Option<PartialColors> {
    let found: Vec<&str> = hex_color_regex()
        .find_iter(body)
        .map(|m| m.as_str())
        .collect();

    let primary = *found.first()?;
    Some(PartialColors {
        primary: Some(primary.to_string()),
        secondary: Some(found.get(1).copied().unwrap_or(primary).to_string()),
        accent: found.get(2).map(|c| c.to_string()),
    })
}

fn typography_from(body: &str) -> Option<PartialTypography> {
    let mut fonts: Vec<String> = Vec::new();
    for captures in font_family_regex().captures_iter(body) {
        let value = captures[1].trim();
        if !value.is_empty() && !fonts.iter().any(|f| f == value) {
            fonts.push(value.to_string());
        }
    }

    let heading = fonts.first()?.clone();
    Some(PartialTypography {
        body: Some(fonts.get(1).cloned().unwrap_or_else(|| heading.clone())),
        mono: fonts.get(2).cloned(),
        heading: Some(heading),
        font_weight: None,
    })
}
