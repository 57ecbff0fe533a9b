//! Schema validation for raw brand context documents.
//!
//! [`validate`] walks the untyped JSON once, collecting every violation with
//! its field path, and only then decodes into [`BrandContext`] so that serde
//! fills the documented defaults (`version`, `spacing`, `fontSize.base`).

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{FieldViolation, SchemaError};
use crate::model::{
    BrandContext, FontSizes, NeutralScale, BUTTON_VARIANTS, CARD_VARIANTS, INPUT_STATES,
};

pub const HEX_COLOR_PATTERN: &str = "^#[0-9A-Fa-f]{6}$";

const MAX_FONT_WEIGHT: u64 = 1000;

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HEX_COLOR_PATTERN).expect("hex color pattern is valid"))
}

/// True if `value` is a six-digit `#RRGGBB` color.
pub fn is_hex_color(value: &str) -> bool {
    hex_color_regex().is_match(value)
}

/// Validate an untrusted document and produce a brand context with defaults
/// applied. Pure: never touches storage.
pub fn validate(raw: &Value) -> Result<BrandContext, SchemaError> {
    let mut walker = Walker::default();
    walker.document(raw);

    if !walker.violations.is_empty() {
        return Err(SchemaError::new(walker.violations));
    }

    serde_json::from_value(raw.clone()).map_err(|e| SchemaError::single("", e.to_string()))
}

#[derive(Default)]
struct Walker {
    violations: Vec<FieldViolation>,
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

impl Walker {
    fn fail(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation::new(path, message));
    }

    fn document(&mut self, raw: &Value) {
        let Some(root) = raw.as_object() else {
            self.fail("", "must be a JSON object");
            return;
        };

        self.string(root, "", "name", true);
        self.string(root, "", "version", false);

        if let Some(colors) = self.object(root, "", "colors", true) {
            self.colors(colors, "colors");
        }
        if let Some(typography) = self.object(root, "", "typography", true) {
            self.typography(typography, "typography");
        }
        if let Some(spacing) = self.object(root, "", "spacing", false) {
            self.spacing(spacing, "spacing");
        }
        if let Some(components) = self.object(root, "", "components", false) {
            self.components(components, "components");
        }
        self.string(root, "", "customCSS", false);
        if let Some(metadata) = self.object(root, "", "metadata", false) {
            self.metadata(metadata, "metadata");
        }
    }

    fn colors(&mut self, colors: &Map<String, Value>, path: &str) {
        for key in ["primary", "secondary"] {
            self.hex(colors, path, key, true);
        }
        for key in ["accent", "success", "warning", "error"] {
            self.hex(colors, path, key, false);
        }

        let Some(neutral) = self.object(colors, path, "neutral", false) else {
            return;
        };
        let neutral_path = join(path, "neutral");
        for key in neutral.keys() {
            let known = key
                .parse::<u16>()
                .map(|step| NeutralScale::STEPS.contains(&step))
                .unwrap_or(false);
            if !known {
                self.fail(
                    join(&neutral_path, key),
                    "unknown neutral step (expected 50, 100 ... 900)",
                );
                continue;
            }
            self.hex(neutral, &neutral_path, key, false);
        }
    }

    fn typography(&mut self, typography: &Map<String, Value>, path: &str) {
        if let Some(family) = self.object(typography, path, "fontFamily", true) {
            let family_path = join(path, "fontFamily");
            self.string(family, &family_path, "heading", true);
            self.string(family, &family_path, "body", true);
            self.string(family, &family_path, "mono", false);
        }

        if let Some(sizes) = self.object(typography, path, "fontSize", false) {
            let size_path = join(path, "fontSize");
            for key in sizes.keys() {
                if FontSizes::KEYS.contains(&key.as_str()) {
                    self.string(sizes, &size_path, key, false);
                } else {
                    self.fail(join(&size_path, key), "unknown font size");
                }
            }
        }

        if let Some(weights) = self.object(typography, path, "fontWeight", false) {
            let weight_path = join(path, "fontWeight");
            for (key, value) in weights {
                let field = join(&weight_path, key);
                if !["normal", "medium", "semibold", "bold"].contains(&key.as_str()) {
                    self.fail(field, "unknown font weight");
                    continue;
                }
                match value.as_u64() {
                    Some(weight) if (1..=MAX_FONT_WEIGHT).contains(&weight) => {}
                    Some(_) => self.fail(field, "must be between 1 and 1000"),
                    None => self.fail(field, "must be an integer"),
                }
            }
        }

        if let Some(heights) = self.object(typography, path, "lineHeight", false) {
            let height_path = join(path, "lineHeight");
            for (key, value) in heights {
                let field = join(&height_path, key);
                if !["tight", "normal", "relaxed"].contains(&key.as_str()) {
                    self.fail(field, "unknown line height");
                    continue;
                }
                match value.as_f64() {
                    Some(height) if height > 0.0 => {}
                    Some(_) => self.fail(field, "must be greater than 0"),
                    None => self.fail(field, "must be a number"),
                }
            }
        }
    }

    fn spacing(&mut self, spacing: &Map<String, Value>, path: &str) {
        if let Some(base) = spacing.get("base") {
            match base.as_f64() {
                Some(b) if b > 0.0 => {}
                Some(_) => self.fail(join(path, "base"), "must be greater than 0"),
                None => self.fail(join(path, "base"), "must be a number"),
            }
        }

        let Some(scale) = spacing.get("scale") else {
            return;
        };
        let scale_path = join(path, "scale");
        let Some(steps) = scale.as_array() else {
            self.fail(scale_path, "must be an array of numbers");
            return;
        };
        if steps.is_empty() {
            self.fail(scale_path, "must not be empty");
            return;
        }
        for (index, step) in steps.iter().enumerate() {
            match step.as_f64() {
                Some(s) if s >= 0.0 => {}
                Some(_) => self.fail(format!("{scale_path}[{index}]"), "must not be negative"),
                None => self.fail(format!("{scale_path}[{index}]"), "must be a number"),
            }
        }
    }

    fn components(&mut self, components: &Map<String, Value>, path: &str) {
        for key in components.keys() {
            let (overrides_key, allowed): (&str, &[&str]) = match key.as_str() {
                "button" => ("variants", BUTTON_VARIANTS.as_slice()),
                "input" => ("states", INPUT_STATES.as_slice()),
                "card" => ("variants", CARD_VARIANTS.as_slice()),
                _ => {
                    self.fail(join(path, key), "unknown component type");
                    continue;
                }
            };
            let Some(pattern) = self.object(components, path, key, false) else {
                continue;
            };
            let pattern_path = join(path, key);

            if let Some(base) = self.object(pattern, &pattern_path, "base", false) {
                self.style_map(base, &join(&pattern_path, "base"));
            }

            let Some(overrides) = self.object(pattern, &pattern_path, overrides_key, false) else {
                continue;
            };
            let overrides_path = join(&pattern_path, overrides_key);
            for name in overrides.keys() {
                if !allowed.contains(&name.as_str()) {
                    self.fail(
                        join(&overrides_path, name),
                        format!("must be one of: {}", allowed.join(", ")),
                    );
                    continue;
                }
                if let Some(styles) = self.object(overrides, &overrides_path, name, false) {
                    self.style_map(styles, &join(&overrides_path, name));
                }
            }
        }
    }

    fn style_map(&mut self, styles: &Map<String, Value>, path: &str) {
        for (property, value) in styles {
            if !value.is_string() {
                self.fail(join(path, property), "must be a string");
            }
        }
    }

    fn metadata(&mut self, metadata: &Map<String, Value>, path: &str) {
        for key in ["createdAt", "updatedAt"] {
            if let Some(stamp) = self.string(metadata, path, key, true) {
                if chrono::DateTime::parse_from_rfc3339(stamp).is_err() {
                    self.fail(join(path, key), "must be an ISO-8601 timestamp");
                }
            }
        }
        self.string(metadata, path, "author", false);
    }

    fn object<'a>(
        &mut self,
        parent: &'a Map<String, Value>,
        path: &str,
        key: &str,
        required: bool,
    ) -> Option<&'a Map<String, Value>> {
        match parent.get(key) {
            None if required => {
                self.fail(join(path, key), "is required");
                None
            }
            None => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                self.fail(join(path, key), "must be an object");
                None
            }
        }
    }

    fn string<'a>(
        &mut self,
        parent: &'a Map<String, Value>,
        path: &str,
        key: &str,
        required: bool,
    ) -> Option<&'a str> {
        match parent.get(key) {
            None if required => {
                self.fail(join(path, key), "is required");
                None
            }
            None => None,
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => {
                self.fail(join(path, key), "must be a string");
                None
            }
        }
    }

    fn hex(&mut self, parent: &Map<String, Value>, path: &str, key: &str, required: bool) {
        if let Some(color) = self.string(parent, path, key, required) {
            if !is_hex_color(color) {
                self.fail(join(path, key), "must match hex pattern");
            }
        }
    }
}
