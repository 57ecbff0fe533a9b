//! Brand context data model.
//!
//! Field names follow the persisted JSON layout (`fontFamily`, `customCSS`,
//! `createdAt`, ...). Construct values through [`crate::validate::validate`]
//! when the input is untrusted; the types themselves do not enforce the
//! hex-color or non-empty-scale invariants.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_FONT_SIZE_BASE: &str = "16px";
pub const DEFAULT_SPACING_BASE: u64 = 8;
pub const DEFAULT_SPACING_SCALE: [u64; 12] = [4, 8, 12, 16, 20, 24, 32, 40, 48, 64, 80, 96];

/// CSS property name → value.
pub type StyleMap = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandContext {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub colors: Colors,
    pub typography: Typography,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentPatterns>,
    #[serde(rename = "customCSS", default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral: Option<NeutralScale>,
}

impl Colors {
    /// Brand colors in priority order: primary, secondary, then accent if set.
    pub fn brand(&self) -> Vec<&str> {
        let mut colors = vec![self.primary.as_str(), self.secondary.as_str()];
        if let Some(accent) = &self.accent {
            colors.push(accent.as_str());
        }
        colors
    }

    /// Semantic colors that are set, as `(name, value)`.
    pub fn semantic(&self) -> Vec<(&'static str, &str)> {
        [
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

/// Ten-step neutral scale, keyed `50`, `100` ... `900` on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeutralScale {
    #[serde(rename = "50", default, skip_serializing_if = "Option::is_none")]
    pub n50: Option<String>,
    #[serde(rename = "100", default, skip_serializing_if = "Option::is_none")]
    pub n100: Option<String>,
    #[serde(rename = "200", default, skip_serializing_if = "Option::is_none")]
    pub n200: Option<String>,
    #[serde(rename = "300", default, skip_serializing_if = "Option::is_none")]
    pub n300: Option<String>,
    #[serde(rename = "400", default, skip_serializing_if = "Option::is_none")]
    pub n400: Option<String>,
    #[serde(rename = "500", default, skip_serializing_if = "Option::is_none")]
    pub n500: Option<String>,
    #[serde(rename = "600", default, skip_serializing_if = "Option::is_none")]
    pub n600: Option<String>,
    #[serde(rename = "700", default, skip_serializing_if = "Option::is_none")]
    pub n700: Option<String>,
    #[serde(rename = "800", default, skip_serializing_if = "Option::is_none")]
    pub n800: Option<String>,
    #[serde(rename = "900", default, skip_serializing_if = "Option::is_none")]
    pub n900: Option<String>,
}

impl NeutralScale {
    pub const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

    /// Configured steps, ascending by scale key.
    pub fn entries(&self) -> Vec<(u16, &str)> {
        [
            (50, &self.n50),
            (100, &self.n100),
            (200, &self.n200),
            (300, &self.n300),
            (400, &self.n400),
            (500, &self.n500),
            (600, &self.n600),
            (700, &self.n700),
            (800, &self.n800),
            (900, &self.n900),
        ]
        .into_iter()
        .filter_map(|(step, value)| value.as_deref().map(|v| (step, v)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: FontFamily,
    #[serde(default)]
    pub font_size: FontSizes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<LineHeights>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    pub heading: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mono: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<String>,
    #[serde(default = "default_font_size_base")]
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<String>,
    #[serde(rename = "2xl", default, skip_serializing_if = "Option::is_none")]
    pub xl2: Option<String>,
    #[serde(rename = "3xl", default, skip_serializing_if = "Option::is_none")]
    pub xl3: Option<String>,
    #[serde(rename = "4xl", default, skip_serializing_if = "Option::is_none")]
    pub xl4: Option<String>,
}

fn default_font_size_base() -> String {
    DEFAULT_FONT_SIZE_BASE.to_string()
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            xs: None,
            sm: None,
            base: default_font_size_base(),
            lg: None,
            xl: None,
            xl2: None,
            xl3: None,
            xl4: None,
        }
    }
}

impl FontSizes {
    pub const KEYS: [&'static str; 8] = ["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl"];

    /// Configured sizes in declaration order, `base` always included.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("xs", self.xs.as_deref()),
            ("sm", self.sm.as_deref()),
            ("base", Some(self.base.as_str())),
            ("lg", self.lg.as_deref()),
            ("xl", self.xl.as_deref()),
            ("2xl", self.xl2.as_deref()),
            ("3xl", self.xl3.as_deref()),
            ("4xl", self.xl4.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semibold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tight: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relaxed: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    #[serde(default = "default_spacing_base")]
    pub base: Number,
    #[serde(default = "default_spacing_scale")]
    pub scale: Vec<Number>,
}

fn default_spacing_base() -> Number {
    Number::from(DEFAULT_SPACING_BASE)
}

fn default_spacing_scale() -> Vec<Number> {
    DEFAULT_SPACING_SCALE.iter().copied().map(Number::from).collect()
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            base: default_spacing_base(),
            scale: default_spacing_scale(),
        }
    }
}

/// The component types a caller may ask about. `Modal` is accepted by the
/// tool surface but has no stored pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Button,
    Input,
    Card,
    Modal,
}

impl ComponentKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "button" => Some(Self::Button),
            "input" => Some(Self::Input),
            "card" => Some(Self::Card),
            "modal" => Some(Self::Modal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Card => "card",
            Self::Modal => "modal",
        }
    }
}

pub const BUTTON_VARIANTS: [&str; 4] = ["primary", "secondary", "outline", "ghost"];
pub const INPUT_STATES: [&str; 3] = ["default", "focus", "error"];
pub const CARD_VARIANTS: [&str; 2] = ["default", "elevated"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPatterns {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<InputPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardPattern>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonPattern {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub base: StyleMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variants: IndexMap<String, StyleMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPattern {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub base: StyleMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub states: IndexMap<String, StyleMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPattern {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub base: StyleMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variants: IndexMap<String, StyleMap>,
}

/// A configured component pattern, tagged by component type.
#[derive(Debug, Clone, Copy)]
pub enum Pattern<'a> {
    Button(&'a ButtonPattern),
    Input(&'a InputPattern),
    Card(&'a CardPattern),
}

impl<'a> Pattern<'a> {
    pub fn base(&self) -> &'a StyleMap {
        match self {
            Self::Button(p) => &p.base,
            Self::Input(p) => &p.base,
            Self::Card(p) => &p.base,
        }
    }

    /// Variant overrides for buttons and cards, state overrides for inputs.
    pub fn overrides(&self) -> &'a IndexMap<String, StyleMap> {
        match self {
            Self::Button(p) => &p.variants,
            Self::Input(p) => &p.states,
            Self::Card(p) => &p.variants,
        }
    }
}

impl ComponentPatterns {
    pub fn pattern(&self, kind: ComponentKind) -> Option<Pattern<'_>> {
        match kind {
            ComponentKind::Button => self.button.as_ref().map(Pattern::Button),
            ComponentKind::Input => self.input.as_ref().map(Pattern::Input),
            ComponentKind::Card => self.card.as_ref().map(Pattern::Card),
            ComponentKind::Modal => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}
