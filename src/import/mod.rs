//! Best-effort extraction of brand context fragments from foreign sources.
//!
//! Importers never produce a [`BrandContext`] directly. They return a
//! [`PartialBrandContext`] which must be completed and then pass
//! [`crate::validate::validate`] (via [`crate::store::ContextStore::save`])
//! before it is persisted.

pub mod markdown;
pub mod tokens;

use serde::Serialize;

use crate::model::{
    BrandContext, Colors, FontFamily, FontSizes, FontWeights, Metadata, Spacing, Typography,
    DEFAULT_VERSION,
};
use crate::store::now_timestamp;

pub use markdown::{import_markdown, import_markdown_file};
pub use tokens::parse_design_tokens;

pub const DEFAULT_BRAND_NAME: &str = "My Brand";
pub const DEFAULT_PRIMARY: &str = "#3B82F6";
pub const DEFAULT_SECONDARY: &str = "#64748B";
pub const DEFAULT_FONT_FAMILY: &str = "Inter, sans-serif";

/// Whatever an importer managed to extract. Any section may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialBrandContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<PartialColors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<PartialTypography>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartialColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTypography {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeights>,
}

impl PartialBrandContext {
    /// Fill every gap with the starter brand values.
    ///
    /// The result is not validated here; extracted colors may still be
    /// malformed and will be rejected by `save`.
    pub fn complete_with_defaults(self) -> BrandContext {
        let colors = self.colors.unwrap_or_default();
        let typography = self.typography.unwrap_or_default();

        let metadata = self.author.map(|author| {
            let now = now_timestamp();
            Metadata {
                created_at: now.clone(),
                updated_at: now,
                author: Some(author),
            }
        });

        BrandContext {
            name: self.name.unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string()),
            version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            colors: Colors {
                primary: colors.primary.unwrap_or_else(|| DEFAULT_PRIMARY.to_string()),
                secondary: colors
                    .secondary
                    .unwrap_or_else(|| DEFAULT_SECONDARY.to_string()),
                accent: colors.accent,
                success: None,
                warning: None,
                error: None,
                neutral: None,
            },
            typography: Typography {
                font_family: FontFamily {
                    heading: typography
                        .heading
                        .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
                    body: typography
                        .body
                        .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
                    mono: typography.mono,
                },
                font_size: FontSizes::default(),
                font_weight: typography.font_weight,
                line_height: None,
            },
            spacing: Spacing::default(),
            components: None,
            custom_css: None,
            metadata,
        }
    }
}
